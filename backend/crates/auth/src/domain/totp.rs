//! TOTP Provider Trait
//!
//! Secret generation, code derivation and windowed verification.
//! The infra layer implements this with `totp-rs`.

use crate::domain::value_object::totp_secret::TotpSecret;
use crate::error::AuthResult;

/// Output of a single generation call; `uri` embeds `secret`
#[derive(Debug, Clone)]
pub struct GeneratedSecret {
    pub secret: TotpSecret,
    /// `otpauth://totp/...` enrollment URI
    pub uri: String,
}

/// TOTP operations used by the MFA flow
pub trait TotpProvider: Send + Sync {
    /// Fresh random secret labelled with `issuer` and `account`
    fn generate_secret(&self, issuer: &str, account: &str) -> AuthResult<GeneratedSecret>;

    /// Code for the current time step
    fn generate_token(&self, secret: &TotpSecret) -> AuthResult<String>;

    /// Step drift of the matching code within the provider's window, `None` on no match
    fn verify_token(&self, secret: &TotpSecret, code: &str) -> AuthResult<Option<i64>>;
}
