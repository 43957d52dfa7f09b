//! TOTP Secret Value Object
//!
//! Base32 shared secret as it travels through the MFA form.

use crate::error::{AuthError, AuthResult};
use totp_rs::Secret;

/// Base32-encoded TOTP shared secret
#[derive(Clone, PartialEq, Eq)]
pub struct TotpSecret {
    secret_base32: String,
}

impl TotpSecret {
    /// Accept a base32 string that decodes to at least one byte
    pub fn from_base32(secret: impl Into<String>) -> AuthResult<Self> {
        let secret_base32 = secret.into();
        let bytes = Secret::Encoded(secret_base32.clone())
            .to_bytes()
            .map_err(|e| AuthError::Internal(format!("Invalid TOTP secret: {:?}", e)))?;
        if bytes.is_empty() {
            return Err(AuthError::Internal("Invalid TOTP secret: empty".into()));
        }

        Ok(Self { secret_base32 })
    }

    pub fn as_base32(&self) -> &str {
        &self.secret_base32
    }

    /// Raw key bytes
    pub fn to_bytes(&self) -> AuthResult<Vec<u8>> {
        Secret::Encoded(self.secret_base32.clone())
            .to_bytes()
            .map_err(|e| AuthError::Internal(format!("Invalid TOTP secret: {:?}", e)))
    }
}

impl std::fmt::Debug for TotpSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("TotpSecret(..)")
    }
}
