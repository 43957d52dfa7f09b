//! Application Layer
//!
//! Use cases and application services.

pub mod config;
pub mod issue_challenge;
pub mod verify_code;

// Re-exports
pub use config::AuthConfig;
pub use issue_challenge::{IssueChallengeInput, IssueChallengeOutput, IssueChallengeUseCase};
pub use verify_code::{VerifyCodeInput, VerifyCodeOutput, VerifyCodeUseCase};
