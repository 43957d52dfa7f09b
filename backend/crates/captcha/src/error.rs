//! CAPTCHA Error Types
//!
//! This module provides CAPTCHA-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.
//!
//! A negative verdict is not an error; these variants only cover failing
//! to obtain a verdict at all.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use serde_json::json;
use thiserror::Error;

/// CAPTCHA-specific result type alias
pub type CaptchaResult<T> = Result<T, CaptchaError>;

/// CAPTCHA-specific error variants
#[derive(Debug, Error)]
pub enum CaptchaError {
    /// The verification endpoint could not be reached
    #[error("CAPTCHA verification request failed: {0}")]
    Transport(String),

    /// The endpoint answered, but not with a siteverify document
    #[error("CAPTCHA verification response was invalid: {0}")]
    InvalidResponse(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CaptchaError {
    /// Get the HTTP status code for this error
    ///
    /// An upstream failure answers 200; the registration form reads the
    /// `error` key rather than the status.
    pub fn status_code(&self) -> StatusCode {
        match self {
            CaptchaError::Transport(_) | CaptchaError::InvalidResponse(_) => StatusCode::OK,
            CaptchaError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            CaptchaError::Transport(_) | CaptchaError::InvalidResponse(_) => ErrorKind::BadGateway,
            CaptchaError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            CaptchaError::Transport(msg) | CaptchaError::InvalidResponse(msg) => {
                tracing::error!(error = %msg, "CAPTCHA verification failed");
            }
            CaptchaError::Internal(msg) => {
                tracing::error!(message = %msg, "CAPTCHA internal error");
            }
        }
    }
}

impl From<CaptchaError> for AppError {
    fn from(err: CaptchaError) -> Self {
        let kind = err.kind();
        let message = err.to_string();
        AppError::new(kind, message)
    }
}

impl From<reqwest::Error> for CaptchaError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            CaptchaError::InvalidResponse(err.to_string())
        } else {
            CaptchaError::Transport(err.to_string())
        }
    }
}

impl IntoResponse for CaptchaError {
    fn into_response(self) -> Response {
        self.log();
        let status = self.status_code();
        // Registration form clients expect `{"error": ...}`, not a problem document
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
