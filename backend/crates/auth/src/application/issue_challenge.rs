//! Issue Challenge Use Case
//!
//! Generates a fresh TOTP secret for the address, mails the current code,
//! and returns everything the MFA form needs.

use std::sync::Arc;

use chrono::Utc;
use platform::mail::{MailMessage, MailSender};

use crate::application::config::AuthConfig;
use crate::domain::qr::qr_image_url;
use crate::domain::totp::TotpProvider;
use crate::domain::value_object::{
    challenge_token::{ChallengeBinding, ChallengeToken},
    email::Email,
};
use crate::error::AuthResult;

/// Issue challenge input
pub struct IssueChallengeInput {
    /// Address as typed into the login form
    pub email: String,
}

/// Issue challenge output
#[derive(Debug, Clone)]
pub struct IssueChallengeOutput {
    /// Normalised address
    pub email: Email,
    /// Base32 secret
    pub secret: String,
    /// otpauth:// enrollment URI
    pub enrollment_uri: String,
    /// QR image URL embedding the enrollment URI
    pub qr_url: String,
    /// Signed binding of email, secret and QR URL
    pub challenge: ChallengeToken,
}

/// Issue challenge use case
pub struct IssueChallengeUseCase<M, T>
where
    M: MailSender,
    T: TotpProvider,
{
    mailer: Arc<M>,
    totp: Arc<T>,
    config: Arc<AuthConfig>,
}

impl<M, T> IssueChallengeUseCase<M, T>
where
    M: MailSender,
    T: TotpProvider,
{
    pub fn new(mailer: Arc<M>, totp: Arc<T>, config: Arc<AuthConfig>) -> Self {
        Self {
            mailer,
            totp,
            config,
        }
    }

    pub async fn execute(&self, input: IssueChallengeInput) -> AuthResult<IssueChallengeOutput> {
        let email = Email::new(&input.email)?;

        // Secret and enrollment URI come from the same generation call
        let generated = self
            .totp
            .generate_secret(&self.config.app_label, email.as_str())?;
        let code = self.totp.generate_token(&generated.secret)?;
        let qr_url = qr_image_url(
            &self.config.qr_service_url,
            self.config.qr_size_px,
            &generated.uri,
        )?;

        let message = MailMessage {
            from: self.config.mail_from.clone(),
            to: email.as_str().to_string(),
            subject: self.config.mail_subject(),
            body: self.config.mail_body(&code),
        };
        let receipt = self.mailer.send(&message).await?;

        tracing::info!(
            email_domain = %email.domain(),
            response = %receipt.response,
            "Verification code sent"
        );

        let secret = generated.secret.as_base32().to_string();
        let challenge = ChallengeToken::issue(
            &self.config.challenge_secret,
            ChallengeBinding {
                email: email.as_str(),
                secret: &secret,
                qr_url: &qr_url,
            },
            Utc::now().timestamp_millis(),
        );

        Ok(IssueChallengeOutput {
            email,
            secret,
            enrollment_uri: generated.uri,
            qr_url,
            challenge,
        })
    }
}
