//! Form DTOs (Data Transfer Objects)

use serde::Deserialize;

/// POST /register body
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegisterForm {
    #[serde(rename = "g-recaptcha-response", default)]
    pub token: String,
    #[serde(default)]
    pub email: String,
}
