//! rrec-ingest library interface
//!
//! Exposes the reconciliation engine, collaborator implementations, and
//! the axum router so integration tests can drive the service in-process.

pub mod api;
pub mod config;
pub mod engine;
pub mod error;
pub mod models;
pub mod services;
pub mod types;

pub use crate::error::{ApiError, ApiResult};

use crate::engine::Reconciler;
use axum::Router;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Reconciliation engine with injected collaborators
    pub reconciler: Arc<Reconciler>,
    /// Service startup timestamp for uptime tracking
    pub startup_time: DateTime<Utc>,
}

impl AppState {
    pub fn new(reconciler: Reconciler) -> Self {
        Self {
            reconciler: Arc::new(reconciler),
            startup_time: Utc::now(),
        }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(api::info_routes())
        .merge(api::health_routes())
        .merge(api::reconcile_routes())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
