//! Configuration resolution for rrec-ingest
//!
//! Settings resolve with ENV → TOML priority via `rrec_common::config`.
//! `RREC_CONFIG` points at an explicit TOML file; otherwise the platform
//! default location is consulted, and a missing file falls through to
//! environment variables and compiled defaults.

use rrec_common::config::{Settings, TomlConfig};
use rrec_common::Result;
use std::path::PathBuf;

use crate::services::CorpusConfig;

/// Load and resolve service settings
pub fn load_settings() -> Result<Settings> {
    let toml_config = match std::env::var("RREC_CONFIG") {
        Ok(path) if !path.trim().is_empty() => TomlConfig::load(&PathBuf::from(path))?,
        _ => TomlConfig::load_default()?,
    };
    Settings::resolve(&toml_config)
}

/// Corpus-store connection settings from resolved service settings
pub fn corpus_config(settings: &Settings) -> CorpusConfig {
    CorpusConfig {
        api_key: settings.corpus_api_key.clone(),
        base_id: settings.corpus_base_id.clone(),
        table: settings.corpus_table.clone(),
    }
}
