//! External collaborator implementations

pub mod corpus_client;
pub mod review_logger;

pub use corpus_client::{AirtableCorpusStore, CorpusConfig, CorpusError};
pub use review_logger::{FileReviewSink, ReviewLogError};
