//! Domain Layer
//!
//! The siteverify response model and the verifier seam.

pub mod verifier;

pub use verifier::{CaptchaVerifier, SiteVerifyResponse};
