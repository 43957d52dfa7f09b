//! CAPTCHA (bot mitigation) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Siteverify response model, verifier trait
//! - `application/` - Registration use case, configuration
//! - `infra/` - reCAPTCHA HTTP client
//! - `presentation/` - HTTP handler, form DTO, router
//!
//! ## Security Model
//! - The client token is checked server-side against the siteverify endpoint
//!   with the secret key; the client never sees the secret
//! - The risk score is logged for observability only, there is no threshold

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::CaptchaConfig;
pub use domain::verifier::{CaptchaVerifier, SiteVerifyResponse};
pub use error::{CaptchaError, CaptchaResult};
pub use infra::recaptcha::RecaptchaVerifier;
pub use presentation::router::{captcha_router, captcha_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

#[cfg(test)]
mod tests;
