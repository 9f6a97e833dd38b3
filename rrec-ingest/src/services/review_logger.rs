//! Review queue persistence
//!
//! Appends one JSON document per batch to a local file so ambiguous
//! classification outcomes survive for human adjudication. Write failures
//! propagate: losing the review queue silently would convert
//! review-worthy records into an untracked gap.

use crate::models::ReviewLogEntry;
use crate::types::ReviewSink;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::io::AsyncWriteExt;

/// Review log errors
#[derive(Debug, Error)]
pub enum ReviewLogError {
    #[error("Review log IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Review log serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// File-backed review sink
///
/// Each batch appends one JSON line (`{timestamp, total_possible_matches,
/// matches}`), so every call's full payload remains retrievable afterward.
pub struct FileReviewSink {
    path: PathBuf,
}

impl FileReviewSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ReviewSink for FileReviewSink {
    async fn record(&self, entry: &ReviewLogEntry) -> Result<(), ReviewLogError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let mut line = serde_json::to_string(entry)?;
        line.push('\n');

        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(line.as_bytes()).await?;
        file.flush().await?;

        tracing::info!(
            count = entry.total_possible_matches,
            path = %self.path.display(),
            "Recorded possible matches for review"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CandidateRecord, CorpusRecord, MatchComparison, PossibleMatch};

    fn sample_entry() -> ReviewLogEntry {
        let candidate = CandidateRecord {
            name: "Jane Smyth".to_string(),
            college: "State U".to_string(),
            sport: "Soccer".to_string(),
            position: None,
            year: None,
            hometown: None,
            nationality: None,
            height: None,
            high_school: None,
            roster_url: None,
            image: None,
            parser_version: None,
        };
        let existing = CorpusRecord {
            id: "rec001".to_string(),
            name: "Jane Smith".to_string(),
            college: "State U".to_string(),
            sport: "Soccer".to_string(),
            hometown: "Austin".to_string(),
            year: String::new(),
            position: String::new(),
        };
        ReviewLogEntry::new(vec![PossibleMatch {
            new_record: candidate,
            existing_record: existing,
            confidence: 86.0,
            comparison: MatchComparison {
                name_similarity: 0.9,
                college_match: true,
                sport_match: true,
                hometown_similarity: 0.0,
            },
        }])
    }

    #[tokio::test]
    async fn record_creates_parent_dirs_and_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join("review_queue.jsonl");
        let sink = FileReviewSink::new(&path);

        sink.record(&sample_entry()).await.unwrap();
        sink.record(&sample_entry()).await.unwrap();

        let contents = tokio::fs::read_to_string(&path).await.unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2, "each batch appends one line");

        let parsed: ReviewLogEntry = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(parsed.total_possible_matches, 1);
        assert_eq!(parsed.matches[0].new_record.name, "Jane Smyth");
        assert_eq!(parsed.matches[0].existing_record.id, "rec001");
    }

    #[tokio::test]
    async fn unwritable_destination_propagates_error() {
        let dir = tempfile::tempdir().unwrap();
        // The "parent" is a regular file, so directory creation must fail
        let blocker = dir.path().join("blocker");
        tokio::fs::write(&blocker, b"x").await.unwrap();
        let sink = FileReviewSink::new(blocker.join("review_queue.jsonl"));

        let result = sink.record(&sample_entry()).await;
        assert!(result.is_err(), "write failure must propagate");
    }
}
