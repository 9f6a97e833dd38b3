//! Configuration loading for RosterRecon services
//!
//! Settings resolve with Environment → TOML file → compiled default priority.
//! The corpus-store credentials have no compiled default: a service that
//! needs them fails at startup when neither tier provides one.

use crate::{Error, Result};
use serde::Deserialize;
use std::path::PathBuf;

/// Default HTTP bind address for rrec-ingest
pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:5740";

/// Default review log destination, relative to the working directory
pub const DEFAULT_REVIEW_LOG_PATH: &str = "logs/review_queue.jsonl";

/// Default corpus table name
pub const DEFAULT_CORPUS_TABLE: &str = "Verified Athletes";

/// Raw TOML configuration file contents
///
/// All fields optional; omitted keys fall back to environment or defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    pub corpus_api_key: Option<String>,
    pub corpus_base_id: Option<String>,
    pub corpus_table: Option<String>,
    pub review_log_path: Option<String>,
    pub bind_address: Option<String>,
}

impl TomlConfig {
    /// Load TOML config from an explicit path
    pub fn load(path: &std::path::Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        toml::from_str(&contents).map_err(|e| Error::Config(format!("Invalid TOML in {}: {}", path.display(), e)))
    }

    /// Load TOML config from the default platform location, if present
    ///
    /// Linux/macOS/Windows: `<config dir>/rrec/config.toml`. A missing file
    /// is not an error; resolution simply falls through to defaults.
    pub fn load_default() -> Result<Self> {
        match default_config_path() {
            Some(path) if path.exists() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }
}

/// Default platform config file path (`~/.config/rrec/config.toml` on Linux)
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("rrec").join("config.toml"))
}

/// Fully resolved service settings
#[derive(Debug, Clone)]
pub struct Settings {
    /// Corpus store API key (required)
    pub corpus_api_key: String,
    /// Corpus store base identifier (required)
    pub corpus_base_id: String,
    /// Corpus table name
    pub corpus_table: String,
    /// Destination path for the review log
    pub review_log_path: PathBuf,
    /// HTTP bind address
    pub bind_address: String,
}

impl Settings {
    /// Resolve settings with Environment → TOML → default priority
    ///
    /// # Errors
    /// Returns `Error::Config` when the corpus credentials are absent from
    /// every tier. This is checked before any network activity so a
    /// misconfigured service fails at startup, not mid-batch.
    pub fn resolve(toml_config: &TomlConfig) -> Result<Self> {
        let corpus_api_key = resolve_value("RREC_CORPUS_API_KEY", toml_config.corpus_api_key.as_deref())
            .ok_or_else(|| {
                Error::Config(
                    "Corpus API key not configured. Set RREC_CORPUS_API_KEY or corpus_api_key in config.toml"
                        .to_string(),
                )
            })?;

        let corpus_base_id = resolve_value("RREC_CORPUS_BASE_ID", toml_config.corpus_base_id.as_deref())
            .ok_or_else(|| {
                Error::Config(
                    "Corpus base id not configured. Set RREC_CORPUS_BASE_ID or corpus_base_id in config.toml"
                        .to_string(),
                )
            })?;

        let corpus_table = resolve_value("RREC_CORPUS_TABLE", toml_config.corpus_table.as_deref())
            .unwrap_or_else(|| DEFAULT_CORPUS_TABLE.to_string());

        let review_log_path = resolve_value("RREC_REVIEW_LOG", toml_config.review_log_path.as_deref())
            .unwrap_or_else(|| DEFAULT_REVIEW_LOG_PATH.to_string());

        let bind_address = resolve_value("RREC_BIND", toml_config.bind_address.as_deref())
            .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());

        Ok(Settings {
            corpus_api_key,
            corpus_base_id,
            corpus_table,
            review_log_path: PathBuf::from(review_log_path),
            bind_address,
        })
    }
}

/// Resolve one setting: non-empty environment variable wins over TOML
fn resolve_value(env_var: &str, toml_value: Option<&str>) -> Option<String> {
    if let Ok(value) = std::env::var(env_var) {
        if !value.trim().is_empty() {
            return Some(value);
        }
    }
    toml_value
        .filter(|v| !v.trim().is_empty())
        .map(|v| v.to_string())
}
