//! Service info endpoint

use axum::{routing::get, Json, Router};
use serde_json::{json, Value};

use crate::AppState;

/// GET /
///
/// Service identity document for discovery and quick manual checks.
pub async fn service_info() -> Json<Value> {
    Json(json!({
        "service": "RosterRecon Ingest",
        "module": "rrec-ingest",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "reconcile": "POST /reconcile",
            "health": "GET /health",
        }
    }))
}

/// Build service info routes
pub fn info_routes() -> Router<AppState> {
    Router::new().route("/", get(service_info))
}
