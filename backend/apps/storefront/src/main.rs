//! Storefront Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

use auth::{AuthConfig, RfcTotpProvider};
use captcha::{CaptchaConfig, RecaptchaVerifier};
use pages::{HtmlRenderer, SharedRenderer};
use platform::mail::{LogMailSender, SmtpMailSender};
use std::net::SocketAddr;
use std::sync::Arc;
use storefront::app::build_router;
use storefront::config::{ChallengeKeySource, DEFAULT_LOG_FILTER, ServerConfig};
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env()?;

    if config.challenge_key_source == ChallengeKeySource::Ephemeral {
        tracing::warn!("CHALLENGE_SECRET not set, using a random key for this process");
    }

    let app_label = AuthConfig::default().app_label;
    let renderer: SharedRenderer = Arc::new(HtmlRenderer::new(
        app_label,
        config.recaptcha_site_key.clone(),
    ));

    let verifier = RecaptchaVerifier::new(CaptchaConfig::recaptcha(
        config.recaptcha_secret_key.clone(),
    ))?;

    let mut auth_config = AuthConfig {
        challenge_secret: config.challenge_secret,
        ..AuthConfig::default()
    };

    // Build router
    let app = match &config.smtp {
        Some(smtp) => {
            auth_config.mail_from = smtp.username.clone();
            let mailer = SmtpMailSender::relay(&smtp.host, &smtp.username, &smtp.password)?;
            tracing::info!(host = %smtp.host, "Sending verification codes via SMTP");
            build_router(mailer, RfcTotpProvider::new(), verifier, auth_config, renderer)
        }
        None => {
            tracing::warn!("EMAIL_APP_USERNAME/EMAIL_APP_PASSWORD not set, verification mails are logged without their body");
            build_router(
                LogMailSender,
                RfcTotpProvider::new(),
                verifier,
                auth_config,
                renderer,
            )
        }
    };

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
