//! Auth Router

use axum::{Router, routing::post};
use std::sync::Arc;

use pages::SharedRenderer;
use platform::mail::MailSender;

use crate::application::config::AuthConfig;
use crate::domain::totp::TotpProvider;
use crate::infra::totp::RfcTotpProvider;
use crate::presentation::handlers::{self, AuthAppState};

/// Create the Auth router with the RFC 6238 TOTP provider
pub fn auth_router<M>(mailer: M, config: AuthConfig, renderer: SharedRenderer) -> Router
where
    M: MailSender + Send + Sync + 'static,
{
    auth_router_generic(mailer, RfcTotpProvider::new(), config, renderer)
}

/// Create a generic Auth router for any mail sender and TOTP provider
pub fn auth_router_generic<M, T>(
    mailer: M,
    totp: T,
    config: AuthConfig,
    renderer: SharedRenderer,
) -> Router
where
    M: MailSender + Send + Sync + 'static,
    T: TotpProvider + 'static,
{
    let state = AuthAppState {
        mailer: Arc::new(mailer),
        totp: Arc::new(totp),
        config: Arc::new(config),
        renderer,
    };

    Router::new()
        .route("/login", post(handlers::start_login::<M, T>))
        .route("/auth", post(handlers::verify_code::<M, T>))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::totp::GeneratedSecret;
    use crate::domain::value_object::totp_secret::TotpSecret;
    use crate::error::AuthResult;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use axum::response::Html;
    use pages::{PageRenderer, ViewModel};
    use platform::mail::{MailError, MailMessage, MailReceipt};
    use serde_json::{Value, json};
    use std::sync::Mutex;
    use tower::ServiceExt;

    const SECRET: &str = "GEZDGNBVGY3TQOJQGEZDGNBVGY3TQOJQ";
    const CODE: &str = "123456";

    /// Exposes the view model instead of markup
    struct JsonRenderer;

    impl PageRenderer for JsonRenderer {
        fn render(&self, view: &ViewModel) -> Html<String> {
            Html(serde_json::to_string(view).unwrap())
        }
    }

    #[derive(Clone, Default)]
    struct RecordingMailer {
        sent: Arc<Mutex<Vec<MailMessage>>>,
    }

    impl MailSender for RecordingMailer {
        async fn send(&self, message: &MailMessage) -> Result<MailReceipt, MailError> {
            self.sent.lock().unwrap().push(message.clone());
            Ok(MailReceipt {
                response: "250 OK".to_string(),
            })
        }
    }

    struct FailingMailer;

    impl MailSender for FailingMailer {
        async fn send(&self, _message: &MailMessage) -> Result<MailReceipt, MailError> {
            Err(MailError::Transport("connection refused".to_string()))
        }
    }

    /// Always issues SECRET; CODE matches now, "654321" matched one step late
    struct FixedTotp;

    impl TotpProvider for FixedTotp {
        fn generate_secret(&self, issuer: &str, account: &str) -> AuthResult<GeneratedSecret> {
            Ok(GeneratedSecret {
                secret: TotpSecret::from_base32(SECRET)?,
                uri: format!("otpauth://totp/{issuer}:{account}?secret={SECRET}&issuer={issuer}"),
            })
        }

        fn generate_token(&self, _secret: &TotpSecret) -> AuthResult<String> {
            Ok(CODE.to_string())
        }

        fn verify_token(&self, _secret: &TotpSecret, code: &str) -> AuthResult<Option<i64>> {
            Ok(match code {
                CODE => Some(0),
                "654321" => Some(-1),
                _ => None,
            })
        }
    }

    fn app<M: MailSender + Send + Sync + 'static>(mailer: M) -> Router {
        auth_router_generic(
            mailer,
            FixedTotp,
            AuthConfig::with_random_secret(),
            Arc::new(JsonRenderer),
        )
    }

    async fn post_form(app: Router, uri: &str, body: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap();
        send(app, request).await
    }

    async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        send(app, request).await
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_login_issues_challenge_and_mails_code() {
        let mailer = RecordingMailer::default();
        let (status, view) = post_form(app(mailer.clone()), "/login", "inputEmail=User%40X.com").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(view["template"], "auth");
        assert_eq!(view["pageTitle"], "Login");
        assert_eq!(view["email"], "User@x.com");
        assert!(view["errorMessage"].is_null());
        assert_eq!(view["mfa"]["secret"], SECRET);
        let qr_url = view["mfa"]["qrUrl"].as_str().unwrap();
        assert!(qr_url.starts_with("https://api.qrserver.com/v1/create-qr-code/?size=200x200&data=otpauth%3A%2F%2Ftotp"));
        assert!(qr_url.contains(SECRET));
        assert!(!view["mfa"]["challenge"].as_str().unwrap().is_empty());

        let sent = mailer.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].to, "User@x.com");
        assert_eq!(sent[0].subject, "E-Commerce App Verification Code");
        assert_eq!(sent[0].body, "Your authentication code is: 123456");
    }

    #[tokio::test]
    async fn test_login_with_invalid_email_sends_nothing() {
        let mailer = RecordingMailer::default();
        let (status, view) = post_form(app(mailer.clone()), "/login", "inputEmail=not-an-address").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(view["template"], "login");
        assert_eq!(view["errorMessage"], "Invalid email address.");
        assert!(view["mfa"].is_null());
        assert!(mailer.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_login_with_missing_field_is_an_invalid_email() {
        let (_, view) = post_form(app(RecordingMailer::default()), "/login", "").await;
        assert_eq!(view["errorMessage"], "Invalid email address.");
    }

    #[tokio::test]
    async fn test_login_mail_failure_renders_login_error() {
        let (status, view) = post_form(app(FailingMailer), "/login", "inputEmail=user%40x.com").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(view["template"], "login");
        assert_eq!(view["errorMessage"], "Failed to send email.");
        assert!(view["mfa"].is_null());
    }

    async fn issue(router: Router) -> Value {
        let (_, view) = post_json(router, "/login", json!({ "inputEmail": "user@x.com" })).await;
        view["mfa"].clone()
    }

    fn auth_body(mfa: &Value, code: &str) -> Value {
        json!({
            "inputEmail": "user@x.com",
            "secret": mfa["secret"],
            "userToken": code,
            "qrCode": mfa["qrUrl"],
            "challenge": mfa["challenge"],
        })
    }

    #[tokio::test]
    async fn test_verify_correct_code_goes_home() {
        let router = app(RecordingMailer::default());
        let mfa = issue(router.clone()).await;

        let (status, view) = post_json(router, "/auth", auth_body(&mfa, CODE)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(view["template"], "home");
        assert_eq!(view["email"], "user@x.com");
    }

    #[tokio::test]
    async fn test_verify_wrong_or_drifted_code_echoes_form() {
        let router = app(RecordingMailer::default());
        let mfa = issue(router.clone()).await;

        for code in ["000000", "654321", ""] {
            let (status, view) = post_json(router.clone(), "/auth", auth_body(&mfa, code)).await;

            assert_eq!(status, StatusCode::OK);
            assert_eq!(view["template"], "auth");
            assert_eq!(view["pageTitle"], "Authentication");
            assert_eq!(view["errorMessage"], "Invalid MFA token.");
            assert_eq!(view["email"], "user@x.com");
            assert_eq!(view["mfa"], mfa);
        }
    }

    #[tokio::test]
    async fn test_verify_rejects_tampered_fields() {
        let router = app(RecordingMailer::default());
        let mfa = issue(router.clone()).await;

        let mut other_email = auth_body(&mfa, CODE);
        other_email["inputEmail"] = json!("victim@x.com");
        let mut other_qr = auth_body(&mfa, CODE);
        other_qr["qrCode"] = json!("https://evil.example/qr.png");
        let mut no_challenge = auth_body(&mfa, CODE);
        no_challenge["challenge"] = json!("");

        for body in [other_email, other_qr, no_challenge] {
            let (_, view) = post_json(router.clone(), "/auth", body).await;
            assert_eq!(view["template"], "auth");
            assert_eq!(view["errorMessage"], "Invalid MFA token.");
        }
    }

    #[tokio::test]
    async fn test_challenge_from_another_server_is_rejected() {
        let mfa = issue(app(RecordingMailer::default())).await;
        // Fresh router, fresh random challenge key
        let (_, view) = post_json(app(RecordingMailer::default()), "/auth", auth_body(&mfa, CODE)).await;
        assert_eq!(view["errorMessage"], "Invalid MFA token.");
    }

    #[tokio::test]
    async fn test_default_router_with_log_sender() {
        let router = auth_router(
            platform::mail::LogMailSender,
            AuthConfig::development(),
            Arc::new(JsonRenderer),
        );
        let (status, view) = post_form(router, "/login", "inputEmail=user%40x.com").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(view["template"], "auth");
        assert_eq!(view["mfa"]["secret"].as_str().unwrap().len(), 32);
    }
}
