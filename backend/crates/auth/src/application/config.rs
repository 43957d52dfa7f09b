//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::time::Duration;

use platform::crypto::random_key;

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Issuer label in the enrollment URI and in mail subjects
    pub app_label: String,
    /// `From:` address of verification mails
    pub mail_from: String,
    /// Image service that renders the enrollment QR code
    pub qr_service_url: String,
    /// Edge length of the QR image in pixels
    pub qr_size_px: u32,
    /// HMAC key for challenge tokens (32 bytes)
    pub challenge_secret: [u8; 32],
    /// How long an MFA form stays submittable (10 minutes)
    pub challenge_ttl: Duration,
    /// Largest accepted step drift of a matching code (0 = current step only)
    pub accepted_drift_steps: i64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            app_label: "E-Commerce App".to_string(),
            mail_from: "no-reply@storefront.example".to_string(),
            qr_service_url: "https://api.qrserver.com/v1/create-qr-code/".to_string(),
            qr_size_px: 200,
            challenge_secret: [0u8; 32],
            challenge_ttl: Duration::from_secs(10 * 60), // 10 minutes
            accepted_drift_steps: 0,
        }
    }
}

impl AuthConfig {
    /// Create config with a random challenge secret
    pub fn with_random_secret() -> Self {
        Self {
            challenge_secret: random_key(),
            ..Default::default()
        }
    }

    /// Create config for development (random key, log-only sender address)
    pub fn development() -> Self {
        Self {
            mail_from: "dev@storefront.example".to_string(),
            ..Self::with_random_secret()
        }
    }

    /// Get challenge TTL in milliseconds
    pub fn challenge_ttl_ms(&self) -> i64 {
        i64::try_from(self.challenge_ttl.as_millis()).unwrap_or(i64::MAX)
    }

    pub fn mail_subject(&self) -> String {
        format!("{} Verification Code", self.app_label)
    }

    pub fn mail_body(&self, code: &str) -> String {
        format!("Your authentication code is: {}", code)
    }

    /// Whether a code matched `delta` steps away is acceptable
    pub fn accepts_drift(&self, delta: i64) -> bool {
        delta.abs() <= self.accepted_drift_steps.max(0)
    }
}
