//! Threshold-based classification against the corpus snapshot
//!
//! Scans the snapshot linearly, keeps the first strictly-highest score,
//! and maps it onto NEW / DUPLICATE / POSSIBLE_MATCH. The first-seen
//! tie-break makes the result deterministic for a fixed snapshot order; it
//! is not a semantic guarantee across differently ordered snapshots.

use crate::engine::confidence::{compare, confidence};
use crate::models::{CandidateRecord, Classification, CorpusRecord, MatchOutcome};

/// Scores at or above this are confident duplicates
pub const DUPLICATE_THRESHOLD: f64 = 90.0;
/// Scores at or above this (but below duplicate) need human review
pub const REVIEW_THRESHOLD: f64 = 70.0;

/// Classify one candidate against the full corpus snapshot
///
/// An empty corpus, or a best score of 0, classifies as NEW. NEW outcomes
/// never carry match detail: `best_match` is dropped and confidence is
/// reported as 0 regardless of what was computed.
pub fn classify(candidate: &CandidateRecord, corpus: &[CorpusRecord]) -> MatchOutcome {
    let mut best_match: Option<&CorpusRecord> = None;
    let mut best_score = 0.0_f64;

    for existing in corpus {
        let score = confidence(candidate, existing);
        if score > best_score {
            best_score = score;
            best_match = Some(existing);
        }
    }

    match best_match {
        Some(existing) if best_score >= DUPLICATE_THRESHOLD => MatchOutcome {
            classification: Classification::Duplicate,
            best_match: Some(existing.clone()),
            confidence: best_score,
            comparison: None,
        },
        Some(existing) if best_score >= REVIEW_THRESHOLD => MatchOutcome {
            classification: Classification::PossibleMatch,
            best_match: Some(existing.clone()),
            confidence: best_score,
            comparison: Some(compare(candidate, existing)),
        },
        _ => MatchOutcome {
            classification: Classification::New,
            best_match: None,
            confidence: 0.0,
            comparison: None,
        },
    }
}
