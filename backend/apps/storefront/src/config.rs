//! Server Configuration
//!
//! Read once at startup from the process environment (after `.env` has been
//! loaded). Invalid values are startup errors.

use anyhow::{Context, Result, anyhow, bail};
use base64::Engine;
use base64::engine::general_purpose;
use std::env;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_SMTP_HOST: &str = "smtp.gmail.com";
pub const DEFAULT_LOG_FILTER: &str =
    "storefront=info,auth=info,captcha=info,pages=info,platform=info,tower_http=info";

/// Authenticated SMTP relay account
#[derive(Clone)]
pub struct SmtpSettings {
    pub host: String,
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for SmtpSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmtpSettings")
            .field("host", &self.host)
            .field("username", &self.username)
            .field("password", &"[redacted]")
            .finish()
    }
}

/// Where the challenge HMAC key came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChallengeKeySource {
    Environment,
    /// Random per process; forms do not survive a restart
    Ephemeral,
}

#[derive(Clone)]
pub struct ServerConfig {
    pub port: u16,
    /// `None` selects the log-only mail sender
    pub smtp: Option<SmtpSettings>,
    pub recaptcha_secret_key: String,
    pub recaptcha_site_key: String,
    pub challenge_secret: [u8; 32],
    pub challenge_key_source: ChallengeKeySource,
}

impl std::fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerConfig")
            .field("port", &self.port)
            .field("smtp", &self.smtp)
            .field("recaptcha_secret_key", &"[redacted]")
            .field("recaptcha_site_key", &self.recaptcha_site_key)
            .field("challenge_secret", &"[redacted]")
            .field("challenge_key_source", &self.challenge_key_source)
            .finish()
    }
}

impl ServerConfig {
    /// Load from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok(), cfg!(debug_assertions))
    }

    /// Load through `lookup`; `allow_ephemeral_key` permits a random challenge key
    /// and a missing SMTP account
    pub fn from_lookup<F>(lookup: F, allow_ephemeral_key: bool) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = match non_empty("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("PORT must be a port number, got {raw:?}"))?,
            None => DEFAULT_PORT,
        };

        let smtp = match (non_empty("EMAIL_APP_USERNAME"), non_empty("EMAIL_APP_PASSWORD")) {
            (Some(username), Some(password)) => Some(SmtpSettings {
                host: non_empty("SMTP_HOST").unwrap_or_else(|| DEFAULT_SMTP_HOST.to_string()),
                username,
                password,
            }),
            (None, None) if allow_ephemeral_key => None,
            (None, None) => bail!("EMAIL_APP_USERNAME and EMAIL_APP_PASSWORD must be set in production"),
            _ => bail!("EMAIL_APP_USERNAME and EMAIL_APP_PASSWORD must be set together"),
        };

        let (challenge_secret, challenge_key_source) = match non_empty("CHALLENGE_SECRET") {
            Some(encoded) => (decode_key(&encoded)?, ChallengeKeySource::Environment),
            None if allow_ephemeral_key => (platform::crypto::random_key(), ChallengeKeySource::Ephemeral),
            None => bail!("CHALLENGE_SECRET must be set in production"),
        };

        Ok(Self {
            port,
            smtp,
            recaptcha_secret_key: lookup("RECAPTCHA_SECRET_KEY").unwrap_or_default(),
            recaptcha_site_key: lookup("RECAPTCHA_SITE_KEY").unwrap_or_default(),
            challenge_secret,
            challenge_key_source,
        })
    }
}

fn decode_key(encoded: &str) -> Result<[u8; 32]> {
    let bytes = general_purpose::STANDARD
        .decode(encoded.trim())
        .context("CHALLENGE_SECRET must be base64")?;
    <[u8; 32]>::try_from(bytes.as_slice())
        .map_err(|_| anyhow!("CHALLENGE_SECRET must decode to 32 bytes, got {}", bytes.len()))
}
