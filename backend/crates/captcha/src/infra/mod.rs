//! Infrastructure Layer
//!
//! External service integrations.

pub mod recaptcha;

pub use recaptcha::RecaptchaVerifier;
