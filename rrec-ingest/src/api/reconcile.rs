//! Batch reconciliation endpoint
//!
//! Accepts a scraped roster batch, runs the reconciliation pipeline, and
//! returns the NEW / DUPLICATE / POSSIBLE_MATCH partition with counts and
//! names. The handler is plumbing only; all decision logic lives in
//! `crate::engine`.

use axum::{extract::State, routing::post, Json, Router};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{ApiError, ApiResult};
use crate::models::CandidateRecord;
use crate::AppState;

/// Upper bound on batch size per request
const MAX_BATCH_SIZE: usize = 10_000;

/// Reconcile request body
#[derive(Debug, Deserialize)]
pub struct ReconcileRequest {
    /// Athlete records to reconcile
    pub athletes: Vec<CandidateRecord>,
}

/// Reconcile response body
#[derive(Debug, Serialize)]
pub struct ReconcileResponse {
    pub success: bool,
    /// ISO timestamp of the operation
    pub timestamp: String,
    pub processing_time_ms: u64,

    // Counts
    pub new_count: usize,
    pub duplicate_count: usize,
    pub possible_match_count: usize,
    pub filtered_count: usize,

    // Name lists
    pub new_names: Vec<String>,
    pub duplicate_names: Vec<String>,
    pub possible_match_names: Vec<String>,

    // Metadata
    pub total_input: usize,
    pub engine_version: String,
}

/// POST /reconcile
pub async fn reconcile_batch(
    State(state): State<AppState>,
    Json(request): Json<ReconcileRequest>,
) -> ApiResult<Json<ReconcileResponse>> {
    if request.athletes.is_empty() {
        return Err(ApiError::BadRequest("Athletes list cannot be empty".to_string()));
    }
    if request.athletes.len() > MAX_BATCH_SIZE {
        return Err(ApiError::BadRequest(format!(
            "Athletes list cannot exceed {} records",
            MAX_BATCH_SIZE
        )));
    }

    let request_id = Uuid::new_v4();
    let started = std::time::Instant::now();
    let total_input = request.athletes.len();

    tracing::info!(%request_id, records = total_input, "Processing reconcile batch");

    let report = state.reconciler.reconcile(request.athletes).await?;

    let processing_time_ms = started.elapsed().as_millis() as u64;
    tracing::info!(
        %request_id,
        processing_time_ms,
        new = report.new_records.len(),
        duplicates = report.duplicates.len(),
        possible_matches = report.possible_matches.len(),
        filtered = report.filtered_count,
        "Reconcile batch complete"
    );

    Ok(Json(ReconcileResponse {
        success: true,
        timestamp: Utc::now().to_rfc3339(),
        processing_time_ms,
        new_count: report.new_records.len(),
        duplicate_count: report.duplicates.len(),
        possible_match_count: report.possible_matches.len(),
        filtered_count: report.filtered_count,
        new_names: report.new_records.iter().map(|r| r.name.clone()).collect(),
        duplicate_names: report
            .duplicates
            .iter()
            .map(|d| d.new_record.name.clone())
            .collect(),
        possible_match_names: report
            .possible_matches
            .iter()
            .map(|p| p.new_record.name.clone())
            .collect(),
        total_input,
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
    }))
}

/// Build reconciliation routes
pub fn reconcile_routes() -> Router<AppState> {
    Router::new().route("/reconcile", post(reconcile_batch))
}
