//! Collaborator traits for the reconciliation engine
//!
//! The engine never reads environment state or opens connections itself;
//! both external collaborators are injected as capabilities:
//! - `CorpusStore`: run-scoped snapshot of the verified corpus
//! - `ReviewSink`: durable, append-only review queue for ambiguous matches

use crate::models::{CorpusRecord, ReviewLogEntry};
use crate::services::corpus_client::CorpusError;
use crate::services::review_logger::ReviewLogError;
use async_trait::async_trait;

/// Read access to the verified corpus
#[async_trait]
pub trait CorpusStore: Send + Sync {
    /// Fetch the full corpus snapshot for one reconciliation run
    ///
    /// Implementations degrade gracefully on transient transport failures
    /// mid-pagination: log a warning and return whatever was accumulated.
    /// Errors are reserved for conditions that make any fetch impossible.
    async fn fetch_all(&self) -> Result<Vec<CorpusRecord>, CorpusError>;
}

/// Durable destination for the human-review queue
#[async_trait]
pub trait ReviewSink: Send + Sync {
    /// Persist one batch's possible matches
    ///
    /// A failure here aborts the batch: silently losing the review queue
    /// would turn review-worthy records into an untracked gap.
    async fn record(&self, entry: &ReviewLogEntry) -> Result<(), ReviewLogError>;
}
