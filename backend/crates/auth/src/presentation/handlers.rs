//! HTTP Handlers
//!
//! Both handlers answer with a rendered page. Expected failures (bad
//! address, undeliverable mail, wrong code) become a form error on the
//! page; anything else is an `AuthError` response.

use axum::extract::State;
use axum::response::Html;
use std::sync::Arc;

use pages::{MfaFields, SharedRenderer, ViewModel};
use platform::extract::FormOrJson;
use platform::mail::MailSender;

use crate::application::config::AuthConfig;
use crate::application::{
    IssueChallengeInput, IssueChallengeUseCase, VerifyCodeInput, VerifyCodeUseCase,
};
use crate::domain::totp::TotpProvider;
use crate::error::{AuthError, AuthResult};
use crate::presentation::dto::{AuthForm, LoginForm};

const INVALID_EMAIL: &str = "Invalid email address.";
const MAIL_FAILED: &str = "Failed to send email.";
const INVALID_TOKEN: &str = "Invalid MFA token.";

/// Shared state for auth handlers
pub struct AuthAppState<M, T>
where
    M: MailSender + Send + Sync + 'static,
    T: TotpProvider + 'static,
{
    pub mailer: Arc<M>,
    pub totp: Arc<T>,
    pub config: Arc<AuthConfig>,
    pub renderer: SharedRenderer,
}

impl<M, T> Clone for AuthAppState<M, T>
where
    M: MailSender + Send + Sync + 'static,
    T: TotpProvider + 'static,
{
    fn clone(&self) -> Self {
        Self {
            mailer: self.mailer.clone(),
            totp: self.totp.clone(),
            config: self.config.clone(),
            renderer: self.renderer.clone(),
        }
    }
}

// ============================================================================
// Login initiation
// ============================================================================

/// POST /login
pub async fn start_login<M, T>(
    State(state): State<AuthAppState<M, T>>,
    FormOrJson(form): FormOrJson<LoginForm>,
) -> AuthResult<Html<String>>
where
    M: MailSender + Send + Sync + 'static,
    T: TotpProvider + 'static,
{
    let use_case = IssueChallengeUseCase::new(
        state.mailer.clone(),
        state.totp.clone(),
        state.config.clone(),
    );

    let input = IssueChallengeInput {
        email: form.input_email,
    };

    let view = match use_case.execute(input).await {
        Ok(output) => ViewModel::auth_challenge(
            output.email.as_str(),
            MfaFields {
                secret: output.secret,
                qr_url: output.qr_url,
                challenge: output.challenge.into_inner(),
            },
        ),
        Err(e @ AuthError::InvalidEmail(_)) => {
            e.log();
            ViewModel::login(Some(INVALID_EMAIL.to_string()))
        }
        Err(e @ AuthError::MailDelivery(_)) => {
            e.log();
            ViewModel::login(Some(MAIL_FAILED.to_string()))
        }
        Err(e) => return Err(e),
    };

    Ok(state.renderer.render(&view))
}

// ============================================================================
// MFA verification
// ============================================================================

/// POST /auth
pub async fn verify_code<M, T>(
    State(state): State<AuthAppState<M, T>>,
    FormOrJson(form): FormOrJson<AuthForm>,
) -> AuthResult<Html<String>>
where
    M: MailSender + Send + Sync + 'static,
    T: TotpProvider + 'static,
{
    let use_case = VerifyCodeUseCase::new(state.totp.clone(), state.config.clone());

    // Echoed unchanged on retry
    let retry = MfaFields {
        secret: form.secret.clone(),
        qr_url: form.qr_code.clone(),
        challenge: form.challenge.clone(),
    };
    let email = form.input_email.clone();

    let input = VerifyCodeInput {
        email: form.input_email,
        secret: form.secret,
        code: form.user_token,
        qr_url: form.qr_code,
        challenge: form.challenge,
    };

    let view = match use_case.execute(input) {
        Ok(output) => ViewModel::home(output.email),
        Err(e) if e.is_verification_failure() => {
            e.log();
            ViewModel::auth_retry(email, retry, INVALID_TOKEN)
        }
        Err(e) => return Err(e),
    };

    Ok(state.renderer.render(&view))
}
