//! reCAPTCHA siteverify client

use reqwest::Client;

use crate::application::config::CaptchaConfig;
use crate::domain::verifier::{CaptchaVerifier, SiteVerifyResponse};
use crate::error::{CaptchaError, CaptchaResult};

static APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Verifies tokens against Google's siteverify endpoint (or a compatible one)
#[derive(Debug, Clone)]
pub struct RecaptchaVerifier {
    client: Client,
    config: CaptchaConfig,
}

impl RecaptchaVerifier {
    /// Build the shared HTTP client once
    pub fn new(config: CaptchaConfig) -> CaptchaResult<Self> {
        let client = Client::builder()
            .user_agent(APP_USER_AGENT)
            .build()
            .map_err(|e| CaptchaError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }
}

impl CaptchaVerifier for RecaptchaVerifier {
    async fn verify(&self, token: &str) -> CaptchaResult<SiteVerifyResponse> {
        let params = [
            ("secret", self.config.secret_key.as_str()),
            ("response", token),
        ];

        let response = self
            .client
            .post(self.config.verify_url.as_str())
            .form(&params)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(CaptchaError::Transport(format!(
                "siteverify returned status: {}",
                response.status()
            )));
        }

        let verdict: SiteVerifyResponse = response.json().await?;
        Ok(verdict)
    }
}
