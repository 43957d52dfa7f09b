//! Unit tests for the CAPTCHA crate

#[cfg(test)]
mod verdict_tests {
    use crate::domain::verifier::SiteVerifyResponse;

    #[test]
    fn test_full_v3_verdict() {
        let verdict: SiteVerifyResponse = serde_json::from_str(
            r#"{
                "success": true,
                "score": 0.9,
                "action": "register",
                "challenge_ts": "2024-01-01T00:00:00Z",
                "hostname": "shop.example"
            }"#,
        )
        .unwrap();

        assert!(verdict.success);
        assert_eq!(verdict.score, Some(0.9));
        assert_eq!(verdict.hostname.as_deref(), Some("shop.example"));
        assert!(verdict.error_codes.is_empty());
    }

    #[test]
    fn test_minimal_negative_verdict() {
        let verdict: SiteVerifyResponse =
            serde_json::from_str(r#"{"success": false, "error-codes": ["timeout-or-duplicate"]}"#)
                .unwrap();

        assert!(!verdict.success);
        assert_eq!(verdict.score, None);
        assert_eq!(verdict.error_codes, vec!["timeout-or-duplicate".to_string()]);
    }

    #[test]
    fn test_missing_success_is_rejected() {
        assert!(serde_json::from_str::<SiteVerifyResponse>(r#"{"score": 0.1}"#).is_err());
    }
}

#[cfg(test)]
mod error_tests {
    use crate::error::CaptchaError;
    use axum::body::to_bytes;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use kernel::error::{app_error::AppError, kind::ErrorKind};

    #[test]
    fn test_status_codes() {
        assert_eq!(
            CaptchaError::Transport("x".into()).status_code(),
            StatusCode::OK
        );
        assert_eq!(
            CaptchaError::InvalidResponse("x".into()).status_code(),
            StatusCode::OK
        );
        assert_eq!(
            CaptchaError::Internal("x".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_into_app_error() {
        let app: AppError = CaptchaError::Transport("dns".into()).into();
        assert_eq!(app.kind(), ErrorKind::BadGateway);
        assert!(app.message().contains("dns"));
    }

    #[tokio::test]
    async fn test_response_body_has_error_key() {
        let response = CaptchaError::Transport("connection reset".into()).into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert!(json["error"].as_str().unwrap().contains("connection reset"));
    }
}

#[cfg(test)]
pub(crate) mod fakes {
    use crate::domain::verifier::{CaptchaVerifier, SiteVerifyResponse};
    use crate::error::{CaptchaError, CaptchaResult};

    /// Returns a canned verdict, or fails like an unreachable endpoint
    pub struct StubVerifier(pub Option<SiteVerifyResponse>);

    impl StubVerifier {
        pub fn success(score: f64) -> Self {
            Self(Some(SiteVerifyResponse {
                success: true,
                score: Some(score),
                ..Default::default()
            }))
        }

        pub fn failure() -> Self {
            Self(Some(SiteVerifyResponse::default()))
        }

        pub fn unreachable() -> Self {
            Self(None)
        }
    }

    impl CaptchaVerifier for StubVerifier {
        async fn verify(&self, _token: &str) -> CaptchaResult<SiteVerifyResponse> {
            self.0
                .clone()
                .ok_or_else(|| CaptchaError::Transport("connection refused".into()))
        }
    }
}

#[cfg(test)]
mod use_case_tests {
    use super::fakes::StubVerifier;
    use crate::application::{
        RegistrationOutcome, VerifyRegistrationInput, VerifyRegistrationUseCase,
    };
    use crate::error::CaptchaError;
    use std::sync::Arc;

    fn input() -> VerifyRegistrationInput {
        VerifyRegistrationInput {
            token: "client-token".to_string(),
            email: "new@x.com".to_string(),
        }
    }

    #[test]
    fn test_success_accepts_regardless_of_score() {
        for score in [0.9, 0.1] {
            let use_case = VerifyRegistrationUseCase::new(Arc::new(StubVerifier::success(score)));
            let outcome = tokio_test::block_on(use_case.execute(input())).unwrap();
            assert_eq!(
                outcome,
                RegistrationOutcome::Accepted {
                    email: "new@x.com".to_string()
                }
            );
        }
    }

    #[test]
    fn test_failure_rejects() {
        let use_case = VerifyRegistrationUseCase::new(Arc::new(StubVerifier::failure()));
        let outcome = tokio_test::block_on(use_case.execute(input())).unwrap();
        assert_eq!(outcome, RegistrationOutcome::Rejected);
    }

    #[test]
    fn test_transport_failure_propagates() {
        let use_case = VerifyRegistrationUseCase::new(Arc::new(StubVerifier::unreachable()));
        let err = tokio_test::block_on(use_case.execute(input())).unwrap_err();
        assert!(matches!(err, CaptchaError::Transport(_)));
    }
}

#[cfg(test)]
mod router_tests {
    use super::fakes::StubVerifier;
    use crate::presentation::router::captcha_router_generic;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use pages::HtmlRenderer;
    use std::sync::Arc;
    use tower::ServiceExt;

    async fn register(verifier: StubVerifier, body: &str) -> (StatusCode, Option<String>, String) {
        let app = captcha_router_generic(verifier, Arc::new(HtmlRenderer::new("E-Commerce App", "site-key")));
        let request = Request::builder()
            .method("POST")
            .uri("/register")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, content_type, String::from_utf8(body.to_vec()).unwrap())
    }

    const FORM: &str = "g-recaptcha-response=tok&email=new%40x.com";

    #[tokio::test]
    async fn test_success_renders_home_with_email() {
        let (status, content_type, body) = register(StubVerifier::success(0.9), FORM).await;
        assert_eq!(status, StatusCode::OK);
        assert!(content_type.unwrap().starts_with("text/html"));
        assert!(body.contains("Welcome, new@x.com!"));
    }

    #[tokio::test]
    async fn test_failure_is_plain_text() {
        let (status, content_type, body) = register(StubVerifier::failure(), FORM).await;
        assert_eq!(status, StatusCode::OK);
        assert!(content_type.unwrap().starts_with("text/plain"));
        assert_eq!(body, "Invalid Captcha!");
    }

    #[tokio::test]
    async fn test_unreachable_verifier_is_json_error() {
        let (status, content_type, body) = register(StubVerifier::unreachable(), FORM).await;
        assert_eq!(status, StatusCode::OK);
        assert!(content_type.unwrap().starts_with("application/json"));
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert!(json.get("error").is_some());
    }

    #[tokio::test]
    async fn test_recaptcha_router_reports_unreachable_endpoint() {
        use crate::application::config::CaptchaConfig;
        use crate::infra::recaptcha::RecaptchaVerifier;
        use crate::presentation::router::captcha_router;

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let verifier = RecaptchaVerifier::new(CaptchaConfig {
            secret_key: "server-secret".to_string(),
            verify_url: format!("http://{addr}/siteverify"),
        })
        .unwrap();
        let app = captcha_router(verifier, Arc::new(HtmlRenderer::new("E-Commerce App", "site-key")));

        let request = Request::builder()
            .method("POST")
            .uri("/register")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(FORM))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert!(json["error"].as_str().unwrap().contains("request failed"));
    }
}
