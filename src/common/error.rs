// Error handling types for the API

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use std::fmt;
use tracing::error;

use super::validation::{FieldErrors, ValidationResult};

/// API error types
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    NotFound(String),
    InternalServer(String),
    DatabaseError(sqlx::Error),
    /// Rejected form: nothing was written
    ValidationError(FieldErrors),
}

impl ApiError {
    /// Field errors of a rejected save or update, if this is one
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            ApiError::ValidationError(errors) => Some(errors),
            _ => None,
        }
    }
}

/// True when SQLite refused a write because a referenced row is gone
pub fn is_missing_reference(error: &sqlx::Error) -> bool {
    matches!(error, sqlx::Error::Database(e) if e.is_foreign_key_violation())
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::BadRequest(msg) => write!(f, "Bad Request: {}", msg),
            ApiError::NotFound(msg) => write!(f, "Not Found: {}", msg),
            ApiError::InternalServer(msg) => write!(f, "Internal Server Error: {}", msg),
            ApiError::DatabaseError(e) => write!(f, "Database Error: {}", e),
            ApiError::ValidationError(errors) => {
                let fields: Vec<String> = errors
                    .iter()
                    .map(|(field, message)| format!("{}: {}", field, message))
                    .collect();
                write!(f, "Validation Error: {}", fields.join(", "))
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// JSON error response structure
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<FieldErrors>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error_message, code, fields) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg, "BAD_REQUEST", None),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg, "NOT_FOUND", None),
            ApiError::InternalServer(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                msg,
                "INTERNAL_SERVER_ERROR",
                None,
            ),
            ApiError::DatabaseError(e) => {
                error!(error = %e, "Database error occurred");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Database operation failed".to_string(),
                    "DATABASE_ERROR",
                    None,
                )
            }
            ApiError::ValidationError(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "Some fields are invalid".to_string(),
                "VALIDATION_ERROR",
                Some(errors),
            ),
        };

        let error_response = ErrorResponse {
            error: error_message,
            code: code.to_string(),
            fields,
        };

        (status, Json(error_response)).into_response()
    }
}

/// Helper function to convert ValidationResult to ApiError
impl From<ValidationResult> for ApiError {
    fn from(result: ValidationResult) -> Self {
        if result.is_valid {
            ApiError::InternalServer(
                "Validation result was valid but converted to error".to_string(),
            )
        } else {
            ApiError::ValidationError(result.field_errors())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_result_converts_to_field_errors() {
        let mut result = ValidationResult::new();
        result.add_error("dose", "La dosis debe estar entre 1 y 10.");

        let error = ApiError::from(result);
        let fields = error.field_errors().expect("validation error");
        assert_eq!(fields["dose"], "La dosis debe estar entre 1 y 10.");
    }

    #[test]
    fn test_validation_error_status() {
        let mut errors = FieldErrors::new();
        errors.insert("name".to_string(), "Por favor ingrese un nombre".to_string());

        let response = ApiError::ValidationError(errors).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_foreign_key_refusal_is_a_missing_reference() {
        let pool = crate::common::migrations::setup_test_db().await;

        let error = sqlx::query(
            "INSERT INTO pets (name, breed, birthday, client_id) VALUES ('Rex', 'Labrador', '2020-01-15', 999)",
        )
        .execute(&pool)
        .await
        .unwrap_err();
        assert!(is_missing_reference(&error));

        let error = sqlx::query("SELECT * FROM no_such_table")
            .execute(&pool)
            .await
            .unwrap_err();
        assert!(!is_missing_reference(&error));
    }

    #[test]
    fn test_not_found_status() {
        let response = ApiError::NotFound("Client not found".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
