//! Athlete record types
//!
//! `CandidateRecord` is a scraped roster entry arriving in a batch;
//! `CorpusRecord` is a previously verified entry from the corpus store.

use serde::{Deserialize, Serialize};

/// Incoming athlete record awaiting reconciliation
///
/// `name`, `college`, and `sport` are required for a record to survive
/// validation, but they deserialize with empty-string defaults so a
/// malformed submission becomes a counted validation drop rather than a
/// deserialization failure.
///
/// Immutable once accepted into a pipeline run, except for `name`, which
/// the normalizer rewrites in place before scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateRecord {
    /// Athlete's full name
    #[serde(default)]
    pub name: String,
    /// College/university name
    #[serde(default)]
    pub college: String,
    /// Sport name
    #[serde(default)]
    pub sport: String,
    /// Playing position
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    /// Academic year (Freshman, Sophomore, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    /// Hometown
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hometown: Option<String>,
    /// Nationality
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nationality: Option<String>,
    /// Height
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,
    /// High school
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub high_school: Option<String>,
    /// Source roster page URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roster_url: Option<String>,
    /// Image URL or data
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Version of the scraper that produced this record
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parser_version: Option<String>,
}

impl CandidateRecord {
    /// Candidate hometown, trimmed; `None` when absent or blank
    pub fn hometown_trimmed(&self) -> Option<&str> {
        self.hometown
            .as_deref()
            .map(str::trim)
            .filter(|h| !h.is_empty())
    }
}

/// Verified athlete record from the corpus store
///
/// Read-only within a pipeline run; each run holds its own snapshot
/// fetched at batch start.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorpusRecord {
    /// Stable record id assigned by the corpus store
    pub id: String,
    /// Athlete's full name
    #[serde(default)]
    pub name: String,
    /// College/university name
    #[serde(default)]
    pub college: String,
    /// Sport name
    #[serde(default)]
    pub sport: String,
    /// Hometown
    #[serde(default)]
    pub hometown: String,
    /// Academic year
    #[serde(default)]
    pub year: String,
    /// Playing position
    #[serde(default)]
    pub position: String,
}

impl CorpusRecord {
    /// Corpus hometown, trimmed; `None` when absent or blank
    pub fn hometown_trimmed(&self) -> Option<&str> {
        let trimmed = self.hometown.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed)
        }
    }
}
