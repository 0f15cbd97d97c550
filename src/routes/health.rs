//! Liveness probe.
//!
//! GET /api/v1/health

use axum::{routing::get, Json, Router};
use serde_json::{json, Value};

pub fn routes() -> Router {
    Router::new().route("/api/v1/health", get(get_health))
}

async fn get_health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
