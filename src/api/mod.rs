//! JSON HTTP API over the drafting pipeline.
//!
//! Routes:
//! - `GET  /health`
//! - `GET  /api/templates` — categories in priority order
//! - `POST /api/classify`  — `{text}` → `{category}`
//! - `POST /api/reply`     — `{text, category?}` → `ProcessedReply`

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use serde::Deserialize;
use tower_http::cors::{Any, CorsLayer};
use tracing::{debug, warn};

use crate::pipeline::ReplyProcessor;
use crate::templates::Category;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub processor: Arc<ReplyProcessor>,
}

/// Build the Axum router with the drafting routes.
pub fn reply_routes(processor: Arc<ReplyProcessor>) -> Router {
    let state = AppState { processor };

    Router::new()
        .route("/health", get(health))
        .route("/api/templates", get(list_templates))
        .route("/api/classify", post(classify))
        .route("/api/reply", post(draft_reply))
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}

// ── Health ──────────────────────────────────────────────────────────────

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "reply-drafter"
    }))
}

// ── Templates ───────────────────────────────────────────────────────────

async fn list_templates(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!(state.processor.templates().summaries()))
}

// ── Drafting ────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct ClassifyRequest {
    text: String,
}

async fn classify(
    State(state): State<AppState>,
    Json(body): Json<ClassifyRequest>,
) -> impl IntoResponse {
    let category = state.processor.classify(&body.text);
    Json(serde_json::json!({ "category": category }))
}

#[derive(Deserialize)]
struct ReplyRequest {
    text: String,
    /// Category label overriding classification.
    #[serde(default)]
    category: Option<String>,
}

async fn draft_reply(
    State(state): State<AppState>,
    Json(body): Json<ReplyRequest>,
) -> impl IntoResponse {
    if body.text.trim().is_empty() {
        debug!("Rejected reply request with blank text");
        return (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({"error": "Email text is empty"})),
        );
    }

    let forced = match body.category.as_deref().map(str::parse::<Category>) {
        None => None,
        Some(Ok(category)) => Some(category),
        Some(Err(e)) => {
            warn!(error = %e, "Rejected reply request with unknown category");
            return (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({"error": e.to_string()})),
            );
        }
    };

    let processed = state.processor.process(&body.text, forced);
    (StatusCode::OK, Json(serde_json::json!(processed)))
}
