//! Error types for the lending library core

use serde::Serialize;
use thiserror::Error;

/// Validation error codes, ascending precedence per field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// A required field is absent from the request.
    Missing,
    /// A present field fails its primitive type predicate.
    BadType,
    /// A typed field violates a business-rule predicate.
    BadReq,
}

/// Main application error type.
///
/// Every failure carries the offending field name: it qualifies the error
/// code and doubles as a widget hint for callers that want to highlight
/// the corresponding form input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    #[error("missing required field '{widget}'")]
    Missing { widget: String },

    #[error("field '{widget}' has the wrong type")]
    BadType { widget: String },

    #[error("bad value for field '{widget}': {message}")]
    BadReq { widget: String, message: String },
}

impl AppError {
    pub fn missing(widget: &str) -> Self {
        AppError::Missing { widget: widget.to_string() }
    }

    pub fn bad_type(widget: &str) -> Self {
        AppError::BadType { widget: widget.to_string() }
    }

    pub fn bad_req(widget: &str, message: impl Into<String>) -> Self {
        AppError::BadReq { widget: widget.to_string(), message: message.into() }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Missing { .. } => ErrorCode::Missing,
            AppError::BadType { .. } => ErrorCode::BadType,
            AppError::BadReq { .. } => ErrorCode::BadReq,
        }
    }

    /// Name of the offending request field.
    pub fn widget(&self) -> &str {
        match self {
            AppError::Missing { widget }
            | AppError::BadType { widget }
            | AppError::BadReq { widget, .. } => widget,
        }
    }
}

/// Error response body for hosting layers (HTTP handler, CLI, ...).
#[derive(Serialize)]
pub struct ErrorResponse {
    pub code: ErrorCode,
    pub error: String,
    pub widget: String,
    pub message: String,
}

impl From<&AppError> for ErrorResponse {
    fn from(err: &AppError) -> Self {
        ErrorResponse {
            code: err.code(),
            error: format!("{:?}", err.code()),
            widget: err.widget().to_string(),
            message: err.to_string(),
        }
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
