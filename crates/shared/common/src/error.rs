//! Unified error handling.
//!
//! One error type flows from the store up to the HTTP surfaces. Each variant
//! is an outcome callers branch on; [`IntoResponse`] maps it to a status code
//! and the `{message, error?, errors?}` body.

use std::collections::BTreeMap;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Message used for every unexpected failure
pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred";

/// Message used for field validation failures
pub const VALIDATION_ERROR_MESSAGE: &str = "One or more validation errors occurred";

/// Application error types.
#[derive(Error, Debug)]
pub enum AppError {
    // Store outcomes
    #[error("User with code {0} not found")]
    UserNotFound(String),

    #[error("User with this Code already exists")]
    DuplicateCode(String),

    #[error("User with this Email already exists")]
    DuplicateEmail(String),

    // Request errors
    #[error("User code does not match")]
    CodeMismatch { path: String, body: String },

    #[error("{}", VALIDATION_ERROR_MESSAGE)]
    Validation(Vec<FieldError>),

    #[error("Invalid input: {0}")]
    BadRequest(String),

    // External service errors
    #[cfg(feature = "database")]
    #[error("Database error")]
    Database(#[from] sea_orm::DbErr),

    // Internal
    #[error("Internal server error")]
    Internal(String),
}

/// A validation message attached to one input field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Error response body for HTTP
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ErrorBody {
    /// Human readable summary
    pub message: String,
    /// Underlying failure detail (unexpected errors only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Per-field validation messages
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<BTreeMap<String, Vec<String>>>,
}

impl AppError {
    /// Get HTTP status code
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::UserNotFound(_) => StatusCode::NOT_FOUND,
            AppError::DuplicateCode(_)
            | AppError::DuplicateEmail(_)
            | AppError::CodeMismatch { .. }
            | AppError::Validation(_)
            | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Whether the failure is the caller's fault rather than ours
    pub fn is_client_error(&self) -> bool {
        self.status().is_client_error()
    }

    /// Per-field messages, if this is a validation failure
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            AppError::Validation(errors) => errors,
            _ => &[],
        }
    }

    /// Get user-facing message (hides internal details)
    pub fn user_message(&self) -> String {
        match self {
            #[cfg(feature = "database")]
            AppError::Database(_) => UNEXPECTED_ERROR_MESSAGE.to_string(),
            AppError::Internal(_) => UNEXPECTED_ERROR_MESSAGE.to_string(),
            _ => self.to_string(),
        }
    }

    /// Build the response body, logging anything unexpected
    pub fn body(&self) -> ErrorBody {
        let error = match self {
            #[cfg(feature = "database")]
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                Some(e.to_string())
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                Some(msg.clone())
            }
            _ => None,
        };

        let errors = match self {
            AppError::Validation(field_errors) => {
                let mut grouped: BTreeMap<String, Vec<String>> = BTreeMap::new();
                for fe in field_errors {
                    grouped
                        .entry(fe.field.clone())
                        .or_default()
                        .push(fe.message.clone());
                }
                Some(grouped)
            }
            _ => None,
        };

        ErrorBody {
            message: self.user_message(),
            error,
            errors,
        }
    }
}

// =============================================================================
// HTTP Response (Axum)
// =============================================================================

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status(), Json(self.body())).into_response()
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Extension trait for Option -> AppError conversion
pub trait OptionExt<T> {
    fn ok_or_not_found(self, code: &str) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self, code: &str) -> AppResult<T> {
        self.ok_or_else(|| AppError::UserNotFound(code.to_string()))
    }
}

/// Convenience constructors
impl AppError {
    pub fn validation(errors: Vec<FieldError>) -> Self {
        AppError::Validation(errors)
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        AppError::BadRequest(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}
