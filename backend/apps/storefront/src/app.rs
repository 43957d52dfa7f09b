//! Router Assembly

use auth::{AuthConfig, TotpProvider, auth_router_generic};
use axum::Router;
use captcha::{CaptchaVerifier, captcha_router_generic};
use pages::{SharedRenderer, pages_router};
use platform::mail::MailSender;
use tower_http::trace::TraceLayer;

/// Merge every route of the storefront and add request tracing
pub fn build_router<M, T, V>(
    mailer: M,
    totp: T,
    verifier: V,
    auth_config: AuthConfig,
    renderer: SharedRenderer,
) -> Router
where
    M: MailSender + Send + Sync + 'static,
    T: TotpProvider + 'static,
    V: CaptchaVerifier + Send + Sync + 'static,
{
    Router::new()
        .merge(pages_router(renderer.clone()))
        .merge(auth_router_generic(mailer, totp, auth_config, renderer.clone()))
        .merge(captcha_router_generic(verifier, renderer))
        .layer(TraceLayer::new_for_http())
}
