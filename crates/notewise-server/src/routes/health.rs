//! Liveness route.

use std::sync::Arc;

use axum::routing::get;
use axum::{Json, Router};
use chrono::SecondsFormat;

use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/health", get(health))
}

/// GET /api/health — liveness and server clock.
async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "time": chrono::Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
    }))
}
