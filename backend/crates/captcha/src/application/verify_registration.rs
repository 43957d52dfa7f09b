//! Verify Registration Use Case
//!
//! Gates registration on the provider's verdict for the submitted token.

use std::sync::Arc;

use crate::domain::verifier::CaptchaVerifier;
use crate::error::CaptchaResult;

/// Verify registration input
pub struct VerifyRegistrationInput {
    /// Client token from the `g-recaptcha-response` field
    pub token: String,
    pub email: String,
}

/// Provider verdict on a registration attempt
#[derive(Debug, Clone, PartialEq)]
pub enum RegistrationOutcome {
    Accepted { email: String },
    Rejected,
}

/// Verify registration use case
pub struct VerifyRegistrationUseCase<V>
where
    V: CaptchaVerifier,
{
    verifier: Arc<V>,
}

impl<V> VerifyRegistrationUseCase<V>
where
    V: CaptchaVerifier,
{
    pub fn new(verifier: Arc<V>) -> Self {
        Self { verifier }
    }

    pub async fn execute(&self, input: VerifyRegistrationInput) -> CaptchaResult<RegistrationOutcome> {
        let verdict = self.verifier.verify(&input.token).await?;

        // Observability only; no score threshold is applied
        tracing::info!(
            success = verdict.success,
            score = ?verdict.score,
            action = ?verdict.action,
            error_codes = ?verdict.error_codes,
            "CAPTCHA verdict"
        );

        if verdict.success {
            Ok(RegistrationOutcome::Accepted { email: input.email })
        } else {
            Ok(RegistrationOutcome::Rejected)
        }
    }
}
