//! Custom error types and handling
//!
//! This module defines the application's error types and implements
//! conversion to HTTP responses for the Axum framework. The response bodies
//! follow the catalog's envelope conventions (`status`/`message` pairs and
//! per-field `errors` maps) rather than a generic error object.

use std::collections::BTreeMap;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::constants::{messages, status};

/// Field name to list of messages, as returned in `{"errors": {...}}`
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Authentication errors
    #[error("Must provide valid API key")]
    Unauthorized,

    // Validation errors
    #[error("Validation failed for {} field(s)", .0.len())]
    Validation(FieldErrors),

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    // Resource errors
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Already exists: {0}")]
    AlreadyExists(String),

    // Database errors
    #[error("Database error: {0}")]
    Database(String),

    #[error("Could not allocate a unique identifier")]
    IdentifierExhausted,

    // Internal errors
    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// `{"status": ..., "message": ...}` body
#[derive(Debug, Serialize)]
pub struct StatusBody {
    pub status: &'static str,
    pub message: String,
}

/// `{"errors": {...}}` body
#[derive(Debug, Serialize)]
pub struct ErrorsBody {
    pub errors: FieldErrors,
}

impl AppError {
    /// Single field validation failure
    pub fn field(field: &str, message: &str) -> Self {
        let mut errors = FieldErrors::new();
        errors.insert(field.to_string(), vec![message.to_string()]);
        Self::Validation(errors)
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Validation(_) | Self::InvalidBody(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::AlreadyExists(_) => StatusCode::CONFLICT,
            Self::Database(_)
            | Self::IdentifierExhausted
            | Self::Internal(_)
            | Self::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status_code = self.status_code();

        match self {
            AppError::Unauthorized => (
                status_code,
                Json(StatusBody {
                    status: status::FAIL,
                    message: messages::INVALID_API_KEY.to_string(),
                }),
            )
                .into_response(),
            AppError::Validation(errors) => (status_code, Json(ErrorsBody { errors })).into_response(),
            AppError::InvalidBody(reason) => {
                let mut errors = FieldErrors::new();
                errors.insert("body".to_string(), vec![reason]);
                (status_code, Json(ErrorsBody { errors })).into_response()
            }
            AppError::NotFound(message) => (
                status_code,
                Json(StatusBody {
                    status: status::NOT_FOUND,
                    message,
                }),
            )
                .into_response(),
            AppError::AlreadyExists(constraint) => {
                tracing::warn!(constraint = %constraint, "Unique violation not resolved to a record");
                (
                    status_code,
                    Json(StatusBody {
                        status: status::DUPLICATE,
                        message: messages::CONFLICT.to_string(),
                    }),
                )
                    .into_response()
            }
            other => {
                // Log internal errors but don't expose details to clients
                match &other {
                    AppError::Internal(e) => tracing::error!("Internal error: {:?}", e),
                    AppError::Database(e) => tracing::error!("Database error: {}", e),
                    e => tracing::error!("{}", e),
                }

                (
                    status_code,
                    Json(StatusBody {
                        status: status::ERROR,
                        message: "An internal error occurred".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => AppError::NotFound("Resource not found".to_string()),
            sqlx::Error::Database(db_err) => {
                if db_err.is_unique_violation() {
                    AppError::AlreadyExists(
                        db_err.constraint().unwrap_or("unique constraint").to_string(),
                    )
                } else {
                    AppError::Database(db_err.to_string())
                }
            }
            _ => AppError::Database(err.to_string()),
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        let mut errors = FieldErrors::new();

        for (field, field_errors) in err.field_errors() {
            let messages = field_errors
                .iter()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string())
                })
                .collect();
            errors.insert(field.to_string(), messages);
        }

        AppError::Validation(errors)
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidBody(rejection.body_text())
    }
}

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Contact {
        #[validate(required(message = "This field is required."))]
        name: Option<String>,
        #[validate(url(message = "Must be a valid URL."))]
        link: Option<String>,
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(AppError::Unauthorized.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            AppError::field("year", messages::MIN_YEAR).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::NotFound("missing".to_string()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::IdentifierExhausted.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_validation_errors_keep_messages_per_field() {
        let contact = Contact {
            name: None,
            link: Some("not a url".to_string()),
        };

        let AppError::Validation(errors) = AppError::from(contact.validate().unwrap_err()) else {
            panic!("expected a validation error");
        };

        assert_eq!(errors["name"], vec![messages::REQUIRED.to_string()]);
        assert_eq!(errors["link"], vec![messages::INVALID_URL.to_string()]);
    }

    #[tokio::test]
    async fn test_conflict_hides_constraint_name() {
        let response = AppError::AlreadyExists("participants_pkey".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], status::DUPLICATE);
        assert_eq!(body["message"], messages::CONFLICT);
    }
}
