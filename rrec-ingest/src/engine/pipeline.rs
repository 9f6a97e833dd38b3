//! Batch reconciliation pipeline
//!
//! Orchestrates validation, normalization, classification, and review
//! logging over one batch. Each run is a self-contained, synchronous
//! computation over its own corpus snapshot: parallel runs never share
//! mutable state, and no cross-batch consistency is promised while the
//! corpus is being mutated elsewhere.

use crate::engine::classifier::classify;
use crate::engine::normalizer::normalize_name;
use crate::engine::validator::is_valid;
use crate::models::{
    CandidateRecord, Classification, MatchedPair, PossibleMatch, ReconcileReport, ReviewLogEntry,
};
use crate::types::{CorpusStore, ReviewSink};
use rrec_common::{Error, Result};
use std::sync::Arc;

/// Reconciliation engine over injected collaborators
pub struct Reconciler {
    corpus_store: Arc<dyn CorpusStore>,
    review_sink: Arc<dyn ReviewSink>,
}

impl Reconciler {
    pub fn new(corpus_store: Arc<dyn CorpusStore>, review_sink: Arc<dyn ReviewSink>) -> Self {
        Self {
            corpus_store,
            review_sink,
        }
    }

    /// Reconcile one batch of candidates against the current corpus state
    ///
    /// Invalid records are silently dropped and counted; survivors get
    /// their names normalized in place, then each is classified against
    /// the snapshot fetched once at the start of the run. The three output
    /// lists partition the survivors. The review sink is invoked exactly
    /// once, at the end, when possible matches exist; its failure aborts
    /// the batch.
    pub async fn reconcile(&self, batch: Vec<CandidateRecord>) -> Result<ReconcileReport> {
        let input_count = batch.len();

        let mut survivors: Vec<CandidateRecord> = Vec::with_capacity(batch.len());
        let mut filtered_count = 0usize;
        for mut record in batch {
            if is_valid(&record) {
                record.name = normalize_name(&record.name);
                survivors.push(record);
            } else {
                filtered_count += 1;
            }
        }

        tracing::info!(
            input = input_count,
            filtered = filtered_count,
            surviving = survivors.len(),
            "Validated batch"
        );

        let corpus = self
            .corpus_store
            .fetch_all()
            .await
            .map_err(|e| Error::Internal(format!("Corpus fetch failed: {}", e)))?;

        let mut report = ReconcileReport {
            filtered_count,
            corpus_size: corpus.len(),
            ..Default::default()
        };

        for candidate in survivors {
            let outcome = classify(&candidate, &corpus);
            match outcome.classification {
                Classification::New => report.new_records.push(candidate),
                Classification::Duplicate => {
                    let existing = outcome
                        .best_match
                        .ok_or_else(|| Error::Internal("duplicate outcome without best match".to_string()))?;
                    report.duplicates.push(MatchedPair {
                        new_record: candidate,
                        existing_record: existing,
                        confidence: outcome.confidence,
                    });
                }
                Classification::PossibleMatch => {
                    let existing = outcome
                        .best_match
                        .ok_or_else(|| Error::Internal("possible match outcome without best match".to_string()))?;
                    let comparison = outcome
                        .comparison
                        .ok_or_else(|| Error::Internal("possible match outcome without comparison".to_string()))?;
                    report.possible_matches.push(PossibleMatch {
                        new_record: candidate,
                        existing_record: existing,
                        confidence: outcome.confidence,
                        comparison,
                    });
                }
            }
        }

        if !report.possible_matches.is_empty() {
            let entry = ReviewLogEntry::new(report.possible_matches.clone());
            self.review_sink
                .record(&entry)
                .await
                .map_err(|e| Error::Internal(format!("Review log write failed: {}", e)))?;
        }

        tracing::info!(
            new = report.new_records.len(),
            duplicates = report.duplicates.len(),
            possible_matches = report.possible_matches.len(),
            filtered = report.filtered_count,
            corpus = report.corpus_size,
            "Reconciliation complete"
        );

        Ok(report)
    }
}
