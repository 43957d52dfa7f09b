//! View Models

use serde::Serialize;

/// Account name shown to visitors that have not signed in
pub const GUEST: &str = "Guest";

/// Which page layout to render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Template {
    Home,
    Login,
    Auth,
    Register,
    Products,
}

/// Hidden fields of the MFA form, echoed back by the browser on submit
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MfaFields {
    /// Base32 shared secret
    pub secret: String,
    /// QR image URL for authenticator enrollment
    pub qr_url: String,
    /// Signed binding of email, secret and QR URL
    pub challenge: String,
}

/// Input to a single render call
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewModel {
    pub template: Template,
    pub page_title: &'static str,
    pub email: Option<String>,
    pub error_message: Option<String>,
    pub mfa: Option<MfaFields>,
}

impl ViewModel {
    fn new(template: Template, page_title: &'static str) -> Self {
        Self {
            template,
            page_title,
            email: None,
            error_message: None,
            mfa: None,
        }
    }

    /// Home page greeting `email`
    pub fn home(email: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
            ..Self::new(Template::Home, "Home")
        }
    }

    /// Home page for an anonymous visitor
    pub fn guest_home() -> Self {
        Self::home(GUEST)
    }

    /// Login form, optionally with an error from a failed attempt
    pub fn login(error: Option<String>) -> Self {
        Self {
            error_message: error,
            ..Self::new(Template::Login, "Login")
        }
    }

    /// First render of the MFA form right after the code was mailed
    pub fn auth_challenge(email: impl Into<String>, mfa: MfaFields) -> Self {
        Self {
            email: Some(email.into()),
            mfa: Some(mfa),
            ..Self::new(Template::Auth, "Login")
        }
    }

    /// MFA form again after a rejected code
    pub fn auth_retry(email: impl Into<String>, mfa: MfaFields, error: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
            mfa: Some(mfa),
            error_message: Some(error.into()),
            ..Self::new(Template::Auth, "Authentication")
        }
    }

    pub fn register() -> Self {
        Self::new(Template::Register, "Register")
    }

    pub fn products() -> Self {
        Self::new(Template::Products, "Products")
    }
}
