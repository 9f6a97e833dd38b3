//! Record reconciliation engine
//!
//! The decision core of the service: validity filtering, name
//! normalization, pairwise similarity scoring, weighted confidence, and
//! threshold classification, orchestrated per batch by the pipeline.

pub mod classifier;
pub mod confidence;
pub mod normalizer;
pub mod pipeline;
pub mod similarity;
pub mod validator;

pub use classifier::{classify, DUPLICATE_THRESHOLD, REVIEW_THRESHOLD};
pub use confidence::{compare, confidence};
pub use normalizer::normalize_name;
pub use pipeline::Reconciler;
pub use similarity::similarity;
pub use validator::is_valid;
