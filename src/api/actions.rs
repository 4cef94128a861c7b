use axum::{
    extract::{rejection::JsonRejection, Path, State},
    routing::{get, post},
    Json, Router,
};

use crate::error::{AppError, Result};
use crate::state::AppState;
use crate::tools::email::SEND_EMAIL;
use crate::tools::{EmailTool, SendEmailParams, ToolResult};

/// Action routes
pub fn action_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_actions))
        .route("/{name}", post(invoke_action))
}

/// GET /api/v1/actions - Schemas of every callable action
async fn list_actions() -> Json<Vec<serde_json::Value>> {
    Json(vec![EmailTool::spec().to_schema()])
}

/// POST /api/v1/actions/:name - Run one action
///
/// Delivery failures come back as a 200 with `success: false`. Only an
/// unknown action or an unreadable body are HTTP errors, and those are
/// always JSON.
async fn invoke_action(
    State(state): State<AppState>,
    Path(name): Path<String>,
    payload: std::result::Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<Json<ToolResult>> {
    let Json(params) = payload?;

    match name.as_str() {
        SEND_EMAIL => {
            let params: SendEmailParams = serde_json::from_value(params)?;
            let result = state.email_tool.send_email(params).await;
            tracing::info!(action = %name, success = result.success, "Action completed");
            Ok(Json(result))
        }
        _ => Err(AppError::NotFound(format!("Action {} not found", name))),
    }
}
