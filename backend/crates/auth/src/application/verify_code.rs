//! Verify Code Use Case
//!
//! Checks the challenge token, then the submitted code against the echoed secret.

use std::sync::Arc;

use chrono::Utc;

use crate::application::config::AuthConfig;
use crate::domain::totp::TotpProvider;
use crate::domain::value_object::{
    challenge_token::{ChallengeBinding, ChallengeToken, ChallengeTokenError},
    totp_secret::TotpSecret,
};
use crate::error::{AuthError, AuthResult};

/// Verify code input, straight from the MFA form
pub struct VerifyCodeInput {
    pub email: String,
    pub secret: String,
    pub code: String,
    pub qr_url: String,
    pub challenge: String,
}

/// Verify code output
#[derive(Debug, Clone)]
pub struct VerifyCodeOutput {
    pub email: String,
    /// Step drift of the matching code
    pub delta: i64,
}

/// Verify code use case
pub struct VerifyCodeUseCase<T>
where
    T: TotpProvider,
{
    totp: Arc<T>,
    config: Arc<AuthConfig>,
}

impl<T> VerifyCodeUseCase<T>
where
    T: TotpProvider,
{
    pub fn new(totp: Arc<T>, config: Arc<AuthConfig>) -> Self {
        Self { totp, config }
    }

    pub fn execute(&self, input: VerifyCodeInput) -> AuthResult<VerifyCodeOutput> {
        self.execute_at(input, Utc::now().timestamp_millis())
    }

    /// Verify as of `now_ms` (unix milliseconds) for the challenge TTL
    pub fn execute_at(&self, input: VerifyCodeInput, now_ms: i64) -> AuthResult<VerifyCodeOutput> {
        ChallengeToken::verify(
            &self.config.challenge_secret,
            &input.challenge,
            ChallengeBinding {
                email: &input.email,
                secret: &input.secret,
                qr_url: &input.qr_url,
            },
            now_ms,
            self.config.challenge_ttl_ms(),
        )?;

        // The token vouches for the secret; a bad one here means we issued it
        let secret = TotpSecret::from_base32(input.secret.as_str())
            .map_err(|_| AuthError::ChallengeRejected(ChallengeTokenError::Malformed))?;

        let delta = self
            .totp
            .verify_token(&secret, &input.code)?
            .ok_or(AuthError::InvalidTwoFactorCode)?;

        if !self.config.accepts_drift(delta) {
            return Err(AuthError::TwoFactorDrift { delta });
        }

        tracing::info!(delta, "MFA code accepted");

        Ok(VerifyCodeOutput {
            email: input.email,
            delta,
        })
    }
}
