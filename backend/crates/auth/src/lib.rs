//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Value objects, the TOTP provider seam, pure services
//! - `application/` - Use cases (issue challenge, verify code)
//! - `infra/` - TOTP provider backed by `totp-rs`
//! - `presentation/` - HTTP handlers, form DTOs, router
//!
//! ## Flow
//! 1. `POST /login` generates a fresh TOTP secret for the address, mails the
//!    current code, and renders the MFA form with the secret, a QR enrollment
//!    image and a signed challenge token in hidden fields.
//! 2. `POST /auth` checks the challenge token, then the submitted code.
//!
//! ## Security Model
//! - The server keeps no state; the challenge token (HMAC-SHA256 over
//!   email, secret and QR URL plus an issue timestamp) makes the echoed
//!   hidden fields tamper-evident and bounds their lifetime
//! - Only codes from the current 30 s window are accepted by default

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use domain::totp::{GeneratedSecret, TotpProvider};
pub use error::{AuthError, AuthResult};
pub use infra::totp::RfcTotpProvider;
pub use presentation::handlers::AuthAppState;
pub use presentation::router::{auth_router, auth_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
