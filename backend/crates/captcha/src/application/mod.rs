//! Application Layer
//!
//! Use cases and application services.

pub mod config;
pub mod verify_registration;

// Re-exports
pub use config::CaptchaConfig;
pub use verify_registration::{
    RegistrationOutcome, VerifyRegistrationInput, VerifyRegistrationUseCase,
};
