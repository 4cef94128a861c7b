use axum::{extract::State, routing::get, Json, Router};
use chrono::Utc;
use serde::Serialize;

use crate::state::AppState;

/// Health response structure
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub mail_provider: String,
    pub timestamp: String,
}

/// Health routes
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

/// GET /health - Health check endpoint
///
/// The service stays up without a provider credential, so only the
/// provider field reflects it.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let mail_provider = if state.mailer.is_initialized() {
        "configured"
    } else {
        "unconfigured"
    };

    Json(HealthResponse {
        status: "healthy".to_string(),
        mail_provider: mail_provider.to_string(),
        timestamp: Utc::now().to_rfc3339(),
    })
}
