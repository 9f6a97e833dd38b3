//! # RosterRecon Common Library
//!
//! Shared code for the RosterRecon services including:
//! - Error types (Error enum, Result alias)
//! - Configuration loading (TOML file + environment overrides)

pub mod config;
pub mod error;

pub use config::Settings;
pub use error::{Error, Result};
