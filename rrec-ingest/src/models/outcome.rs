//! Classification outcome types

use crate::models::{CandidateRecord, CorpusRecord};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Final reconciliation decision for one candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Classification {
    /// No corpus record scored at or above the review threshold
    New,
    /// Confident duplicate of an existing corpus record
    Duplicate,
    /// Ambiguous match requiring human review
    PossibleMatch,
}

impl Classification {
    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::New => "NEW",
            Classification::Duplicate => "DUPLICATE",
            Classification::PossibleMatch => "POSSIBLE_MATCH",
        }
    }
}

/// Per-field comparison breakdown attached to possible matches
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchComparison {
    /// Fuzzy name similarity (0.0-1.0)
    pub name_similarity: f64,
    /// Case-insensitive college equality
    pub college_match: bool,
    /// Case-insensitive sport equality
    pub sport_match: bool,
    /// Fuzzy hometown similarity; 0.0 when either side lacks a hometown
    pub hometown_similarity: f64,
}

/// Result of comparing one candidate against the full corpus snapshot
///
/// Invariant: `best_match` is present exactly when `classification` is not
/// `New`; `comparison` is present only for `PossibleMatch`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchOutcome {
    pub classification: Classification,
    pub best_match: Option<CorpusRecord>,
    /// Weighted confidence in [0,100]; reported as 0 for `New`
    pub confidence: f64,
    pub comparison: Option<MatchComparison>,
}

/// A candidate paired with the corpus record it duplicates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchedPair {
    pub new_record: CandidateRecord,
    pub existing_record: CorpusRecord,
    pub confidence: f64,
}

/// An ambiguous candidate queued for human review
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PossibleMatch {
    pub new_record: CandidateRecord,
    pub existing_record: CorpusRecord,
    pub confidence: f64,
    pub comparison: MatchComparison,
}

/// One batch's worth of possible matches, as persisted to the review log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewLogEntry {
    /// Capture timestamp
    pub timestamp: DateTime<Utc>,
    /// Count of entries in `matches`
    pub total_possible_matches: usize,
    pub matches: Vec<PossibleMatch>,
}

impl ReviewLogEntry {
    /// Bundle a batch's possible matches with a capture timestamp
    pub fn new(matches: Vec<PossibleMatch>) -> Self {
        Self {
            timestamp: Utc::now(),
            total_possible_matches: matches.len(),
            matches,
        }
    }
}

/// Aggregated result of one reconciliation run
///
/// The three lists partition the candidates that survived validation;
/// `filtered_count` accounts for the rest, so
/// `filtered_count + new + duplicates + possible == input length`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ReconcileReport {
    pub new_records: Vec<CandidateRecord>,
    pub duplicates: Vec<MatchedPair>,
    pub possible_matches: Vec<PossibleMatch>,
    /// Records dropped by validation
    pub filtered_count: usize,
    /// Size of the corpus snapshot this batch was reconciled against
    pub corpus_size: usize,
}
