//! RFC 6238 TOTP Provider
//!
//! `totp-rs` backed implementation of [`TotpProvider`]: SHA-1, 6 digits,
//! 30 second steps, Google Authenticator compatible enrollment URIs.

use chrono::Utc;
use platform::crypto::constant_time_eq;
use totp_rs::{Algorithm, Secret, TOTP};

use crate::domain::totp::{GeneratedSecret, TotpProvider};
use crate::domain::value_object::totp_secret::TotpSecret;
use crate::error::{AuthError, AuthResult};

/// TOTP configuration constants
const TOTP_DIGITS: usize = 6;
const TOTP_STEP: u64 = 30;
/// Steps checked on either side of the current one
const TOTP_WINDOW: i64 = 4;

/// Default provider
#[derive(Debug, Clone, Copy)]
pub struct RfcTotpProvider {
    digits: usize,
    step: u64,
    window: i64,
}

impl Default for RfcTotpProvider {
    fn default() -> Self {
        Self {
            digits: TOTP_DIGITS,
            step: TOTP_STEP,
            window: TOTP_WINDOW,
        }
    }
}

impl RfcTotpProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the number of steps searched on either side of now
    pub fn with_window(mut self, window: i64) -> Self {
        self.window = window.max(0);
        self
    }

    /// Secrets arriving from the form are not length-checked here; a short
    /// secret simply yields codes nobody can match.
    fn totp(&self, key: Vec<u8>) -> TOTP {
        TOTP::new_unchecked(
            Algorithm::SHA1,
            self.digits,
            0, // drift is searched by `verify_token_at`
            self.step,
            key,
            None,
            String::new(),
        )
    }

    /// Code for the step containing `unix_secs`
    pub fn generate_token_at(&self, secret: &TotpSecret, unix_secs: u64) -> AuthResult<String> {
        Ok(self.totp(secret.to_bytes()?).generate(unix_secs))
    }

    /// Drift of the step whose code equals `code`, nearest steps first
    pub fn verify_token_at(
        &self,
        secret: &TotpSecret,
        code: &str,
        unix_secs: u64,
    ) -> AuthResult<Option<i64>> {
        let code = code.trim();
        if code.len() != self.digits || !code.bytes().all(|b| b.is_ascii_digit()) {
            return Ok(None);
        }

        let totp = self.totp(secret.to_bytes()?);
        let step = self.step as i64;
        let now = i64::try_from(unix_secs).unwrap_or(i64::MAX);

        let deltas = std::iter::once(0).chain((1..=self.window).flat_map(|d| [-d, d]));
        for delta in deltas {
            let Some(at) = now.checked_add(delta * step).filter(|t| *t >= 0) else {
                continue;
            };
            let candidate = totp.generate(at as u64);
            if constant_time_eq(candidate.as_bytes(), code.as_bytes()) {
                return Ok(Some(delta));
            }
        }

        Ok(None)
    }

    fn now_secs() -> u64 {
        u64::try_from(Utc::now().timestamp()).unwrap_or(0)
    }
}

impl TotpProvider for RfcTotpProvider {
    fn generate_secret(&self, issuer: &str, account: &str) -> AuthResult<GeneratedSecret> {
        let key = Secret::generate_secret()
            .to_bytes()
            .map_err(|e| AuthError::Internal(format!("Failed to generate TOTP secret: {:?}", e)))?;

        let totp = TOTP::new(
            Algorithm::SHA1,
            self.digits,
            0,
            self.step,
            key,
            Some(issuer.to_string()),
            account.to_string(),
        )
        .map_err(|e| AuthError::Internal(format!("Failed to create TOTP: {:?}", e)))?;

        let secret = TotpSecret::from_base32(totp.get_secret_base32())?;
        Ok(GeneratedSecret {
            secret,
            uri: totp.get_url(),
        })
    }

    fn generate_token(&self, secret: &TotpSecret) -> AuthResult<String> {
        self.generate_token_at(secret, Self::now_secs())
    }

    fn verify_token(&self, secret: &TotpSecret, code: &str) -> AuthResult<Option<i64>> {
        self.verify_token_at(secret, code, Self::now_secs())
    }
}
