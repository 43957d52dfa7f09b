//! Auth Error Types
//!
//! Auth-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::mail::MailError;
use thiserror::Error;

use crate::domain::value_object::challenge_token::ChallengeTokenError;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Submitted address failed validation
    #[error("Invalid email address: {0}")]
    InvalidEmail(String),

    /// The verification code could not be mailed
    #[error("Failed to send email: {0}")]
    MailDelivery(#[from] MailError),

    /// Code did not match any step in the verification window
    #[error("Invalid two-factor authentication code")]
    InvalidTwoFactorCode,

    /// Code matched, but outside the accepted drift
    #[error("Two-factor code matched {delta} step(s) away from the current window")]
    TwoFactorDrift { delta: i64 },

    /// Hidden fields were altered, or the challenge is too old
    #[error("Challenge rejected: {0}")]
    ChallengeRejected(#[from] ChallengeTokenError),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// True for outcomes that re-render the MFA form instead of failing the request
    pub fn is_verification_failure(&self) -> bool {
        matches!(
            self,
            AuthError::InvalidTwoFactorCode
                | AuthError::TwoFactorDrift { .. }
                | AuthError::ChallengeRejected(_)
        )
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::InvalidEmail(_) => StatusCode::BAD_REQUEST,
            AuthError::MailDelivery(_) => StatusCode::BAD_GATEWAY,
            AuthError::InvalidTwoFactorCode
            | AuthError::TwoFactorDrift { .. }
            | AuthError::ChallengeRejected(_) => StatusCode::UNAUTHORIZED,
            AuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::InvalidEmail(_) => ErrorKind::BadRequest,
            AuthError::MailDelivery(_) => ErrorKind::BadGateway,
            AuthError::InvalidTwoFactorCode
            | AuthError::TwoFactorDrift { .. }
            | AuthError::ChallengeRejected(_) => ErrorKind::Unauthorized,
            AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    pub(crate) fn log(&self) {
        match self {
            AuthError::MailDelivery(e) => {
                tracing::error!(error = %e, "Error sending verification email");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::ChallengeRejected(e) => {
                tracing::warn!(reason = %e, "MFA challenge token rejected");
            }
            AuthError::TwoFactorDrift { delta } => {
                tracing::info!(delta, "MFA code outside the accepted window");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}
