// Common module - shared types and utilities across all modules

pub mod config;
pub mod error;
pub mod fields;
pub mod form_data;
pub mod helpers;
pub mod migrations;
pub mod responses;
pub mod state;
pub mod validation;

// Re-export commonly used types for convenience
pub use config::AppConfig;
pub use error::ApiError;
pub use form_data::{object_to_form_data, FormData};
pub use helpers::{safe_email_log, safe_phone_log};
pub use responses::MessageResponse;
pub use state::AppState;
pub use validation::{FieldErrors, ValidationResult, Validator};

/// Shared state handed to every handler
pub type SharedState = std::sync::Arc<tokio::sync::RwLock<AppState>>;
