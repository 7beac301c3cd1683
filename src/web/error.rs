//! API error handling.

use std::time::Duration;

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// API error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Malformed request body (400).
    BadRequest,
    /// Field-level validation failure (400).
    ValidationError,
    /// Too many requests from one client (429).
    RateLimited,
    /// Internal server error (500).
    InternalError,
}

impl ErrorCode {
    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ErrorCode::BadRequest => StatusCode::BAD_REQUEST,
            ErrorCode::ValidationError => StatusCode::BAD_REQUEST,
            ErrorCode::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// One failed field in a validation error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Human-readable message.
    pub msg: String,
    /// Name of the offending field.
    pub param: String,
    /// Where the field was read from.
    pub location: String,
}

impl FieldError {
    /// Create an error for a field of the JSON body.
    pub fn body(param: impl Into<String>, msg: impl Into<String>) -> Self {
        Self {
            msg: msg.into(),
            param: param.into(),
            location: "body".to_string(),
        }
    }
}

/// Body of a 400 validation response.
#[derive(Debug, Serialize)]
pub struct ValidationBody {
    pub errors: Vec<FieldError>,
}

/// Body of 400 (malformed request) and 500 responses.
#[derive(Debug, Serialize)]
pub struct MessageBody {
    pub message: String,
    pub error: String,
}

/// API error type.
#[derive(Debug)]
pub struct ApiError {
    code: ErrorCode,
    message: String,
    detail: Option<String>,
    errors: Vec<FieldError>,
    retry_after: Option<Duration>,
}

impl ApiError {
    /// Create a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            detail: None,
            errors: Vec::new(),
            retry_after: None,
        }
    }

    /// Attach the underlying error detail.
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Create a bad request error.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::BadRequest, message)
    }

    /// Create a validation error with per-field details.
    pub fn validation(errors: Vec<FieldError>) -> Self {
        Self {
            errors,
            ..Self::new(ErrorCode::ValidationError, "Validation failed")
        }
    }

    /// Create a rate limit error with a plain-text message.
    pub fn rate_limited(message: impl Into<String>, retry_after: Duration) -> Self {
        Self {
            retry_after: Some(retry_after),
            ..Self::new(ErrorCode::RateLimited, message)
        }
    }

    /// Create an internal server error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// Error code of this error.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Field errors (empty unless this is a validation error).
    pub fn field_errors(&self) -> &[FieldError] {
        &self.errors
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.code.status_code();
        match self.code {
            ErrorCode::ValidationError => {
                (status, Json(ValidationBody { errors: self.errors })).into_response()
            }
            ErrorCode::RateLimited => {
                // Round up so clients never retry early.
                let secs = self
                    .retry_after
                    .map(|d| d.as_secs() + u64::from(d.subsec_nanos() > 0))
                    .unwrap_or(0);
                (status, [(header::RETRY_AFTER, secs.to_string())], self.message).into_response()
            }
            ErrorCode::BadRequest | ErrorCode::InternalError => {
                let body = MessageBody {
                    error: self.detail.unwrap_or_else(|| self.message.clone()),
                    message: self.message,
                };
                (status, Json(body)).into_response()
            }
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}
