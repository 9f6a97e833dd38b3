//! rrec-ingest - Roster Reconciliation Microservice
//!
//! Ingests batches of scraped athlete records over HTTP and reconciles
//! them against the verified corpus, classifying each record as NEW,
//! DUPLICATE, or POSSIBLE_MATCH and queueing ambiguous outcomes for
//! human review.

use anyhow::Result;
use std::sync::Arc;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use rrec_ingest::engine::Reconciler;
use rrec_ingest::services::{AirtableCorpusStore, FileReviewSink};
use rrec_ingest::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting rrec-ingest (Roster Reconciliation) microservice");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    // Resolve configuration (ENV -> TOML -> defaults); corpus credentials
    // are required and fail startup when absent
    let settings = rrec_ingest::config::load_settings()?;
    info!("Corpus table: {}", settings.corpus_table);
    info!("Review log: {}", settings.review_log_path.display());

    // Construct collaborators; credential validation happens here, before
    // any batch is accepted
    let corpus_store = AirtableCorpusStore::new(rrec_ingest::config::corpus_config(&settings))
        .map_err(|e| anyhow::anyhow!("Corpus store init failed: {}", e))?;
    let review_sink = FileReviewSink::new(&settings.review_log_path);

    let reconciler = Reconciler::new(Arc::new(corpus_store), Arc::new(review_sink));
    let state = AppState::new(reconciler);

    // Build router and serve
    let app = rrec_ingest::build_router(state);
    let listener = tokio::net::TcpListener::bind(&settings.bind_address).await?;
    info!("Listening on http://{}", settings.bind_address);
    info!("Health check: http://{}/health", settings.bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}
