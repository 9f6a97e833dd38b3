//! HTTP API handlers for rrec-ingest

pub mod health;
pub mod info;
pub mod reconcile;

pub use health::health_routes;
pub use info::info_routes;
pub use reconcile::reconcile_routes;
