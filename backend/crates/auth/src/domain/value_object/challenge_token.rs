//! Challenge Token Value Object
//!
//! The MFA form carries the email, the generated secret and the QR URL back
//! to the server in hidden fields. The challenge token signs those three
//! values together with the issue time so `/auth` can detect substitution
//! and stale forms without any server-side store.
//!
//! Wire format: `base64(issued_at_ms[8, big-endian] || tag[32])` where
//! `tag = HMAC-SHA256(key, issued_at_ms || len||email || len||secret || len||qr_url)`
//! and every `len` is a big-endian u32.

use platform::crypto::{HMAC_TAG_LEN, from_base64, hmac_sha256, to_base64, verify_hmac_sha256};
use thiserror::Error;

const ISSUED_AT_LEN: usize = 8;
const TOKEN_LEN: usize = ISSUED_AT_LEN + HMAC_TAG_LEN;

/// Tolerated clock disagreement for tokens stamped slightly in the future
const FUTURE_SKEW_MS: i64 = 5_000;

/// Challenge token verification failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChallengeTokenError {
    #[error("challenge token is missing or malformed")]
    Malformed,

    #[error("challenge token does not match the submitted fields")]
    SignatureMismatch,

    #[error("challenge token has expired")]
    Expired,

    #[error("challenge token is not valid yet")]
    NotYetValid,
}

/// The values a challenge token vouches for
#[derive(Debug, Clone, Copy)]
pub struct ChallengeBinding<'a> {
    pub email: &'a str,
    pub secret: &'a str,
    pub qr_url: &'a str,
}

impl ChallengeBinding<'_> {
    fn sign(&self, key: &[u8; 32], issued_at_ms: i64) -> [u8; HMAC_TAG_LEN] {
        let issued_at = issued_at_ms.to_be_bytes();
        let email_len = field_len(self.email);
        let secret_len = field_len(self.secret);
        let qr_len = field_len(self.qr_url);
        hmac_sha256(
            key,
            &[
                &issued_at,
                &email_len,
                self.email.as_bytes(),
                &secret_len,
                self.secret.as_bytes(),
                &qr_len,
                self.qr_url.as_bytes(),
            ],
        )
    }

    fn verify(&self, key: &[u8; 32], issued_at_ms: i64, tag: &[u8]) -> bool {
        let issued_at = issued_at_ms.to_be_bytes();
        let email_len = field_len(self.email);
        let secret_len = field_len(self.secret);
        let qr_len = field_len(self.qr_url);
        verify_hmac_sha256(
            key,
            &[
                &issued_at,
                &email_len,
                self.email.as_bytes(),
                &secret_len,
                self.secret.as_bytes(),
                &qr_len,
                self.qr_url.as_bytes(),
            ],
            tag,
        )
    }
}

fn field_len(field: &str) -> [u8; 4] {
    u32::try_from(field.len()).unwrap_or(u32::MAX).to_be_bytes()
}

/// Signed, timestamped binding of the MFA form fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChallengeToken(String);

impl ChallengeToken {
    /// Sign `binding` as issued at `issued_at_ms` (unix milliseconds)
    pub fn issue(key: &[u8; 32], binding: ChallengeBinding<'_>, issued_at_ms: i64) -> Self {
        let tag = binding.sign(key, issued_at_ms);
        let mut raw = Vec::with_capacity(TOKEN_LEN);
        raw.extend_from_slice(&issued_at_ms.to_be_bytes());
        raw.extend_from_slice(&tag);
        Self(to_base64(&raw))
    }

    /// Check `token` against the submitted fields and the validity window.
    ///
    /// The signature is checked before the timestamp, so an expired token
    /// is only reported as such when it is otherwise genuine.
    pub fn verify(
        key: &[u8; 32],
        token: &str,
        binding: ChallengeBinding<'_>,
        now_ms: i64,
        ttl_ms: i64,
    ) -> Result<(), ChallengeTokenError> {
        let raw = from_base64(token.trim()).map_err(|_| ChallengeTokenError::Malformed)?;
        if raw.len() != TOKEN_LEN {
            return Err(ChallengeTokenError::Malformed);
        }

        let (issued_at, tag) = raw.split_at(ISSUED_AT_LEN);
        let mut issued_at_bytes = [0u8; ISSUED_AT_LEN];
        issued_at_bytes.copy_from_slice(issued_at);
        let issued_at_ms = i64::from_be_bytes(issued_at_bytes);

        if !binding.verify(key, issued_at_ms, tag) {
            return Err(ChallengeTokenError::SignatureMismatch);
        }

        if issued_at_ms > now_ms.saturating_add(FUTURE_SKEW_MS) {
            return Err(ChallengeTokenError::NotYetValid);
        }
        if now_ms.saturating_sub(issued_at_ms) > ttl_ms {
            return Err(ChallengeTokenError::Expired);
        }

        Ok(())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}
