//! Data models for roster reconciliation

pub mod athlete;
pub mod outcome;

pub use athlete::{CandidateRecord, CorpusRecord};
pub use outcome::{
    Classification, MatchComparison, MatchOutcome, MatchedPair, PossibleMatch, ReconcileReport,
    ReviewLogEntry,
};
