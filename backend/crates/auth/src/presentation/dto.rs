//! Form DTOs (Data Transfer Objects)
//!
//! Field names match the HTML form inputs. Missing fields deserialize to
//! empty strings and fail validation downstream.

use serde::Deserialize;

// ============================================================================
// Login
// ============================================================================

/// POST /login body
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginForm {
    #[serde(rename = "inputEmail", default)]
    pub input_email: String,
}

// ============================================================================
// MFA verification
// ============================================================================

/// POST /auth body
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthForm {
    #[serde(rename = "inputEmail", default)]
    pub input_email: String,
    #[serde(default)]
    pub secret: String,
    #[serde(rename = "userToken", default)]
    pub user_token: String,
    #[serde(rename = "qrCode", default)]
    pub qr_code: String,
    #[serde(default)]
    pub challenge: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_form_field_names() {
        let form: AuthForm = serde_json::from_str(
            r#"{"inputEmail":"a@b.co","secret":"S","userToken":"123456","qrCode":"q","challenge":"c"}"#,
        )
        .unwrap();
        assert_eq!(form.input_email, "a@b.co");
        assert_eq!(form.user_token, "123456");
        assert_eq!(form.qr_code, "q");
        assert_eq!(form.challenge, "c");
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let form: AuthForm = serde_json::from_str("{}").unwrap();
        assert!(form.secret.is_empty());
        let login: LoginForm = serde_json::from_str("{}").unwrap();
        assert!(login.input_email.is_empty());
    }
}
