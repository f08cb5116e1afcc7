// Application state shared across all modules

use sqlx::SqlitePool;

/// Application state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
}
