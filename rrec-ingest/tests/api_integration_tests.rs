//! Integration tests for rrec-ingest API endpoints
//!
//! Builds the router in-process with in-memory collaborators and drives
//! it through tower's oneshot service call.

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::util::ServiceExt;

use rrec_ingest::engine::Reconciler;
use rrec_ingest::models::{CorpusRecord, ReviewLogEntry};
use rrec_ingest::services::{CorpusError, ReviewLogError};
use rrec_ingest::types::{CorpusStore, ReviewSink};
use rrec_ingest::AppState;

struct StaticCorpus {
    records: Vec<CorpusRecord>,
}

#[async_trait]
impl CorpusStore for StaticCorpus {
    async fn fetch_all(&self) -> Result<Vec<CorpusRecord>, CorpusError> {
        Ok(self.records.clone())
    }
}

struct NullSink;

#[async_trait]
impl ReviewSink for NullSink {
    async fn record(&self, _entry: &ReviewLogEntry) -> Result<(), ReviewLogError> {
        Ok(())
    }
}

/// Test helper: build the app with a one-record corpus
fn create_test_app() -> axum::Router {
    let corpus = Arc::new(StaticCorpus {
        records: vec![CorpusRecord {
            id: "rec001".to_string(),
            name: "Jane Smith".to_string(),
            college: "State U".to_string(),
            sport: "Soccer".to_string(),
            hometown: "Austin".to_string(),
            year: String::new(),
            position: String::new(),
        }],
    });
    let state = AppState::new(Reconciler::new(corpus, Arc::new(NullSink)));
    rrec_ingest::build_router(state)
}

async fn post_reconcile(app: axum::Router, body: Value) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/reconcile")
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value: Value = serde_json::from_slice(&bytes).unwrap();
    (status, value)
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = create_test_app();

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["module"], "rrec-ingest");
}

#[tokio::test]
async fn test_service_info_endpoint() {
    let app = create_test_app();

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_reconcile_partitions_batch() {
    let app = create_test_app();

    let (status, body) = post_reconcile(
        app,
        json!({
            "athletes": [
                {"name": "Jane Smith", "college": "State U", "sport": "Soccer", "hometown": "Austin"},
                {"name": "Jane Smyth", "college": "State U", "sport": "Soccer"},
                {"name": "Maria Lopez", "college": "Other College", "sport": "Golf"},
                {"name": "Head Coach Smith", "college": "State U", "sport": "Soccer"}
            ]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["total_input"], 4);
    assert_eq!(body["duplicate_count"], 1);
    assert_eq!(body["possible_match_count"], 1);
    assert_eq!(body["new_count"], 1);
    assert_eq!(body["filtered_count"], 1);
    assert_eq!(body["duplicate_names"][0], "Jane Smith");
    assert_eq!(body["possible_match_names"][0], "Jane Smyth");
    assert_eq!(body["new_names"][0], "Maria Lopez");
}

#[tokio::test]
async fn test_missing_required_field_is_filtered_not_rejected() {
    let app = create_test_app();

    let (status, body) = post_reconcile(
        app,
        json!({
            "athletes": [
                {"college": "State U", "sport": "Soccer"}
            ]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK, "malformed record is a validation drop, not an error");
    assert_eq!(body["filtered_count"], 1);
    assert_eq!(body["new_count"], 0);
}

#[tokio::test]
async fn test_empty_batch_rejected() {
    let app = create_test_app();

    let (status, body) = post_reconcile(app, json!({ "athletes": [] })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_oversized_batch_rejected() {
    let app = create_test_app();

    let athletes: Vec<Value> = (0..10_001)
        .map(|i| json!({"name": format!("Athlete {i}"), "college": "X", "sport": "Y"}))
        .collect();
    let (status, _body) = post_reconcile(app, json!({ "athletes": athletes })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}
