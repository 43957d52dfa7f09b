//! Application Configuration
//!
//! Configuration for the CAPTCHA application layer.

/// Google's verification endpoint
pub const RECAPTCHA_VERIFY_URL: &str = "https://www.google.com/recaptcha/api/siteverify";

/// CAPTCHA application configuration
#[derive(Clone)]
pub struct CaptchaConfig {
    /// Server-side secret key
    pub secret_key: String,
    /// Siteverify endpoint
    pub verify_url: String,
}

impl Default for CaptchaConfig {
    fn default() -> Self {
        Self {
            secret_key: String::new(),
            verify_url: RECAPTCHA_VERIFY_URL.to_string(),
        }
    }
}

impl CaptchaConfig {
    /// Config for the Google endpoint with `secret_key`
    pub fn recaptcha(secret_key: impl Into<String>) -> Self {
        Self {
            secret_key: secret_key.into(),
            ..Default::default()
        }
    }
}

impl std::fmt::Debug for CaptchaConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CaptchaConfig")
            .field("secret_key", &"[redacted]")
            .field("verify_url", &self.verify_url)
            .finish()
    }
}
