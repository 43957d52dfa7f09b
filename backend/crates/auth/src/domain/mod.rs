//! Domain Layer
//!
//! Value objects, the TOTP provider seam and QR URL construction.

pub mod qr;
pub mod totp;
pub mod value_object;

// Re-exports
pub use totp::{GeneratedSecret, TotpProvider};
pub use value_object::{
    challenge_token::{ChallengeBinding, ChallengeToken, ChallengeTokenError},
    email::Email,
    totp_secret::TotpSecret,
};
