//! HTTP Handlers

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use pages::{SharedRenderer, ViewModel};
use platform::extract::FormOrJson;
use std::sync::Arc;

use crate::application::{RegistrationOutcome, VerifyRegistrationInput, VerifyRegistrationUseCase};
use crate::domain::verifier::CaptchaVerifier;
use crate::error::CaptchaResult;
use crate::presentation::dto::RegisterForm;

/// Plain-text body for a negative verdict
pub const INVALID_CAPTCHA: &str = "Invalid Captcha!";

/// Shared state for CAPTCHA handlers
pub struct CaptchaAppState<V>
where
    V: CaptchaVerifier + Send + Sync + 'static,
{
    pub verifier: Arc<V>,
    pub renderer: SharedRenderer,
}

impl<V> Clone for CaptchaAppState<V>
where
    V: CaptchaVerifier + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            verifier: self.verifier.clone(),
            renderer: self.renderer.clone(),
        }
    }
}

/// POST /register
pub async fn register<V>(
    State(state): State<CaptchaAppState<V>>,
    FormOrJson(form): FormOrJson<RegisterForm>,
) -> CaptchaResult<Response>
where
    V: CaptchaVerifier + Send + Sync + 'static,
{
    let use_case = VerifyRegistrationUseCase::new(state.verifier.clone());

    let input = VerifyRegistrationInput {
        token: form.token,
        email: form.email,
    };

    let response = match use_case.execute(input).await? {
        RegistrationOutcome::Accepted { email } => {
            state.renderer.render(&ViewModel::home(email)).into_response()
        }
        RegistrationOutcome::Rejected => INVALID_CAPTCHA.into_response(),
    };

    Ok(response)
}
