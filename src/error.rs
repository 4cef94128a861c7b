use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

/// Errors raised by the HTTP action surface itself.
///
/// Delivery failures never show up here: they are reported inside a
/// successful response as a negative tool result.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
        };

        let body = Json(json!({
            "error": error_message,
            "code": status.as_u16()
        }));

        (status, body).into_response()
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::BadRequest(format!("JSON error: {}", err))
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

/// Failures of a single delivery attempt.
///
/// The display text is the description handed back to the calling agent.
#[derive(Debug, thiserror::Error)]
pub enum MailError {
    /// The provider client was never initialized (missing credential).
    #[error("{0}")]
    Configuration(String),

    /// The request was rejected before reaching the provider.
    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Provider(#[from] ProviderError),
}

/// Faults raised by the email provider call.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("Request to email provider failed: {0}")]
    Transport(String),

    #[error("Email provider rejected the message ({status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("Invalid response from email provider: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        ProviderError::Transport(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
