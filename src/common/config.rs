// src/common/config.rs
//! Runtime configuration read from the environment (and `.env`)

use std::env;

const DEFAULT_CORS_ORIGINS: &str = "http://localhost:3000,http://localhost:5173";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub port: u16,
    pub cors_origins: Vec<String>,
    pub reset_db: bool,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let database_url =
            lookup("DATABASE_URL").unwrap_or_else(|| "sqlite://vetsoft.db".to_string());

        let port = lookup("PORT")
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(8080);

        let cors_origins = lookup("CORS_ORIGINS")
            .unwrap_or_else(|| DEFAULT_CORS_ORIGINS.to_string())
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();

        let reset_db = lookup("RESET_DB")
            .map(|v| v.to_lowercase() == "true")
            .unwrap_or(false);

        Self {
            database_url,
            port,
            cors_origins,
            reset_db,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_lookup(|_| None);

        assert_eq!(config.database_url, "sqlite://vetsoft.db");
        assert_eq!(config.port, 8080);
        assert_eq!(config.cors_origins.len(), 2);
        assert!(!config.reset_db);
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("DATABASE_URL", "sqlite://data/clinic.db"),
            ("PORT", "9000"),
            ("CORS_ORIGINS", "https://vetsoft.com, ,http://localhost:8000"),
            ("RESET_DB", "TRUE"),
        ]);
        let config = AppConfig::from_lookup(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.database_url, "sqlite://data/clinic.db");
        assert_eq!(config.port, 9000);
        assert_eq!(
            config.cors_origins,
            vec!["https://vetsoft.com", "http://localhost:8000"]
        );
        assert!(config.reset_db);
    }

    #[test]
    fn test_invalid_port_falls_back() {
        let config = AppConfig::from_lookup(|key| (key == "PORT").then(|| "http".to_string()));
        assert_eq!(config.port, 8080);
    }
}
