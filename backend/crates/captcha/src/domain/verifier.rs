//! CAPTCHA Verifier
//!
//! Server-side verification of a client CAPTCHA token. Implementations
//! talk to a siteverify style endpoint; tests substitute canned verdicts.

use serde::Deserialize;

use crate::error::CaptchaResult;

/// Verdict returned by a siteverify endpoint
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SiteVerifyResponse {
    pub success: bool,
    /// Risk score in `[0.0, 1.0]`, v3 only
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default)]
    pub hostname: Option<String>,
    #[serde(default)]
    pub challenge_ts: Option<String>,
    #[serde(rename = "error-codes", default)]
    pub error_codes: Vec<String>,
}

/// CAPTCHA token verification
#[trait_variant::make(CaptchaVerifier: Send)]
pub trait LocalCaptchaVerifier {
    /// Ask the provider about `token`. One request, no retry.
    async fn verify(&self, token: &str) -> CaptchaResult<SiteVerifyResponse>;
}
