use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use tower::ServiceExt;

use orchestra_mail::api::create_router;
use orchestra_mail::config::Config;
use orchestra_mail::error::ProviderError;
use orchestra_mail::mail::{EmailProvider, Mailer, RenderedEmail};
use orchestra_mail::state::AppState;

/// Provider stub that records every message it is handed.
struct StubProvider {
    calls: AtomicUsize,
    sent: Mutex<Vec<RenderedEmail>>,
    reject_with: Option<String>,
}

impl StubProvider {
    fn accepting() -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            sent: Mutex::new(Vec::new()),
            reject_with: None,
        })
    }

    fn rejecting(message: &str) -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            sent: Mutex::new(Vec::new()),
            reject_with: Some(message.to_string()),
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn last_sent(&self) -> RenderedEmail {
        self.sent.lock().unwrap().last().cloned().expect("nothing sent")
    }
}

#[async_trait]
impl EmailProvider for StubProvider {
    async fn send(&self, email: &RenderedEmail) -> Result<String, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.sent.lock().unwrap().push(email.clone());
        match &self.reject_with {
            Some(message) => Err(ProviderError::Rejected {
                status: 401,
                message: message.clone(),
            }),
            None => Ok("msg_123".to_string()),
        }
    }
}

fn test_config(api_key: Option<&str>) -> Config {
    Config::from_lookup(|key| match key {
        "RESEND_API_KEY" => api_key.map(str::to_string),
        _ => None,
    })
    .expect("Should build config")
}

fn app_with(provider: Arc<StubProvider>) -> Router {
    let config = test_config(Some("re_test"));
    let mailer = Mailer::new(provider, config.sender_defaults());
    create_router(AppState::new(mailer))
}

fn unconfigured_app() -> Router {
    let config = test_config(None);
    let mailer = Mailer::from_config(&config);
    create_router(AppState::new(mailer))
}

async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn post_raw(
    app: Router,
    uri: &str,
    content_type: Option<&str>,
    body: &str,
) -> (StatusCode, Value) {
    let mut request = Request::builder().method("POST").uri(uri);
    if let Some(content_type) = content_type {
        request = request.header("content-type", content_type);
    }

    let response = app
        .oneshot(request.body(Body::from(body.to_string())).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).expect("error body should be JSON"))
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_send_email_end_to_end() {
    let provider = StubProvider::accepting();
    let (status, body) = post_json(
        app_with(provider.clone()),
        "/api/v1/actions/send_email",
        json!({
            "to": "client@firm.fr",
            "subject": "Proposition",
            "html_content": "<p>Bonjour</p>"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert!(body["message"].as_str().unwrap().contains("client@firm.fr"));
    assert_eq!(provider.calls(), 1);

    let sent = provider.last_sent();
    assert_eq!(sent.to, vec!["client@firm.fr"]);
    assert_eq!(sent.from, "Alex - OrchestraConnect <alex@orchestraconnect.fr>");
    assert_eq!(sent.reply_to, "alex@orchestraconnect.fr");
    assert_eq!(sent.cc, None);
    let html = sent.html.unwrap();
    assert!(html.contains("<p>Bonjour</p>"));
    assert!(html.contains("alex@orchestraconnect.fr"));
}

#[tokio::test]
async fn test_provider_rejection_is_a_negative_result() {
    let provider = StubProvider::rejecting("bad key");
    let (status, body) = post_json(
        app_with(provider.clone()),
        "/api/v1/actions/send_email",
        json!({
            "to": "client@firm.fr",
            "subject": "Proposition",
            "html_content": "<p>Bonjour</p>"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], false);
    assert!(body["message"].as_str().unwrap().contains("bad key"));
    assert_eq!(provider.calls(), 1);
}

#[tokio::test]
async fn test_missing_content_skips_provider() {
    let provider = StubProvider::accepting();
    let (status, body) = post_json(
        app_with(provider.clone()),
        "/api/v1/actions/send_email",
        json!({ "to": "client@firm.fr", "subject": "Proposition", "cc": "" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], false);
    assert_eq!(provider.calls(), 0);
}

#[tokio::test]
async fn test_unconfigured_service_fails_fast() {
    let (status, body) = post_json(
        unconfigured_app(),
        "/api/v1/actions/send_email",
        json!({
            "to": "client@firm.fr",
            "subject": "Proposition",
            "text_content": "Bonjour"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], false);
    assert!(body["message"].as_str().unwrap().contains("RESEND_API_KEY"));
}

#[tokio::test]
async fn test_unknown_action_is_not_found() {
    let (status, body) = post_json(
        app_with(StubProvider::accepting()),
        "/api/v1/actions/send_fax",
        json!({}),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 404);
}

#[tokio::test]
async fn test_undecodable_params_are_bad_request() {
    let provider = StubProvider::accepting();
    let (status, body) = post_json(
        app_with(provider.clone()),
        "/api/v1/actions/send_email",
        json!({ "subject": "Proposition", "text_content": "Bonjour" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("to"));
    assert_eq!(provider.calls(), 0);
}

#[tokio::test]
async fn test_truncated_body_is_json_bad_request() {
    let provider = StubProvider::accepting();
    let (status, body) = post_raw(
        app_with(provider.clone()),
        "/api/v1/actions/send_email",
        Some("application/json"),
        r#"{"to": "a@x.com", "#,
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 400);
    assert!(body["error"].is_string());
    assert_eq!(provider.calls(), 0);
}

#[tokio::test]
async fn test_missing_content_type_is_json_bad_request() {
    let (status, body) = post_raw(
        app_with(StubProvider::accepting()),
        "/api/v1/actions/send_email",
        None,
        r#"{"to": "a@x.com", "subject": "Hi", "text_content": "Bonjour"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 400);
}

#[tokio::test]
async fn test_whitespace_html_is_sent() {
    let provider = StubProvider::accepting();
    let (_, body) = post_json(
        app_with(provider.clone()),
        "/api/v1/actions/send_email",
        json!({ "to": "client@firm.fr", "subject": "Proposition", "html_content": "   " }),
    )
    .await;

    assert_eq!(body["success"], true);
    assert_eq!(provider.calls(), 1);
}

#[tokio::test]
async fn test_list_actions() {
    let (status, body) = get_json(app_with(StubProvider::accepting()), "/api/v1/actions").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["function"]["name"], "send_email");
}

#[tokio::test]
async fn test_health_reports_provider_state() {
    let (_, configured) = get_json(app_with(StubProvider::accepting()), "/health").await;
    assert_eq!(configured["mail_provider"], "configured");

    let (status, unconfigured) = get_json(unconfigured_app(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(unconfigured["status"], "healthy");
    assert_eq!(unconfigured["mail_provider"], "unconfigured");
}
