//! CAPTCHA Router

use axum::{Router, routing::post};
use pages::SharedRenderer;
use std::sync::Arc;

use crate::domain::verifier::CaptchaVerifier;
use crate::infra::recaptcha::RecaptchaVerifier;
use crate::presentation::handlers::{self, CaptchaAppState};

/// Create the CAPTCHA router with the reCAPTCHA client
pub fn captcha_router(verifier: RecaptchaVerifier, renderer: SharedRenderer) -> Router {
    captcha_router_generic(verifier, renderer)
}

/// Create a generic CAPTCHA router for any verifier implementation
pub fn captcha_router_generic<V>(verifier: V, renderer: SharedRenderer) -> Router
where
    V: CaptchaVerifier + Send + Sync + 'static,
{
    let state = CaptchaAppState {
        verifier: Arc::new(verifier),
        renderer,
    };

    Router::new()
        .route("/register", post(handlers::register::<V>))
        .with_state(state)
}
