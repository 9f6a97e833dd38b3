//! Corpus store API client
//!
//! Paginated reader for the verified-athlete corpus, held by an
//! Airtable-style REST store. Pagination continues while the store returns
//! an opaque `offset` continuation token. A transport failure mid-way
//! through pagination degrades to the records accumulated so far (with a
//! warning) rather than failing the batch; the caller reconciles against
//! the partial snapshot.

use crate::models::CorpusRecord;
use crate::types::CorpusStore;
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

const CORPUS_BASE_URL: &str = "https://api.airtable.com/v0";
const PAGE_SIZE: u32 = 100;
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Corpus client errors
#[derive(Debug, Error)]
pub enum CorpusError {
    /// Credentials absent or blank; checked before any fetch is attempted
    #[error("Missing corpus credentials: {0}")]
    MissingCredentials(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("API error {0}: {1}")]
    Api(u16, String),

    #[error("Parse error: {0}")]
    Parse(String),
}

/// One page of corpus records
#[derive(Debug, Deserialize)]
struct CorpusPage {
    #[serde(default)]
    records: Vec<CorpusPageRecord>,
    /// Continuation token; absent on the final page
    offset: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CorpusPageRecord {
    id: String,
    #[serde(default)]
    fields: CorpusFields,
}

/// Corpus-store field names are capitalized column labels
#[derive(Debug, Default, Deserialize)]
struct CorpusFields {
    #[serde(rename = "Name", default)]
    name: String,
    #[serde(rename = "College", default)]
    college: String,
    #[serde(rename = "Sport", default)]
    sport: String,
    #[serde(rename = "Hometown", default)]
    hometown: String,
    #[serde(rename = "Year", default)]
    year: String,
    #[serde(rename = "Position", default)]
    position: String,
}

impl CorpusPageRecord {
    fn into_record(self) -> CorpusRecord {
        CorpusRecord {
            id: self.id,
            name: self.fields.name,
            college: self.fields.college,
            sport: self.fields.sport,
            hometown: self.fields.hometown,
            year: self.fields.year,
            position: self.fields.position,
        }
    }
}

/// Connection settings for the corpus store
#[derive(Debug, Clone)]
pub struct CorpusConfig {
    pub api_key: String,
    pub base_id: String,
    pub table: String,
}

/// Airtable-style corpus store client
pub struct AirtableCorpusStore {
    http_client: reqwest::Client,
    config: CorpusConfig,
    base_url: String,
}

impl AirtableCorpusStore {
    /// Create a client, validating credentials up front
    ///
    /// # Errors
    /// `CorpusError::MissingCredentials` when the API key or base id is
    /// blank; the engine cannot run without them, so this fails at
    /// construction rather than mid-batch.
    pub fn new(config: CorpusConfig) -> Result<Self, CorpusError> {
        if config.api_key.trim().is_empty() {
            return Err(CorpusError::MissingCredentials("api_key".to_string()));
        }
        if config.base_id.trim().is_empty() {
            return Err(CorpusError::MissingCredentials("base_id".to_string()));
        }

        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| CorpusError::Network(e.to_string()))?;

        Ok(Self {
            http_client,
            config,
            base_url: CORPUS_BASE_URL.to_string(),
        })
    }

    /// Override the store endpoint (local instances, proxies, tests)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn table_url(&self) -> String {
        format!(
            "{}/{}/{}",
            self.base_url, self.config.base_id, self.config.table
        )
    }

    /// Fetch one page of records
    async fn fetch_page(&self, offset: Option<&str>) -> Result<CorpusPage, CorpusError> {
        let mut request = self
            .http_client
            .get(self.table_url())
            .bearer_auth(&self.config.api_key)
            .query(&[("pageSize", PAGE_SIZE.to_string())]);

        if let Some(token) = offset {
            request = request.query(&[("offset", token)]);
        }

        let response = request
            .send()
            .await
            .map_err(|e| CorpusError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CorpusError::Api(status.as_u16(), body));
        }

        response
            .json::<CorpusPage>()
            .await
            .map_err(|e| CorpusError::Parse(e.to_string()))
    }
}

#[async_trait]
impl CorpusStore for AirtableCorpusStore {
    async fn fetch_all(&self) -> Result<Vec<CorpusRecord>, CorpusError> {
        let mut records = Vec::new();
        let mut offset: Option<String> = None;

        loop {
            match self.fetch_page(offset.as_deref()).await {
                Ok(page) => {
                    records.extend(page.records.into_iter().map(CorpusPageRecord::into_record));
                    match page.offset {
                        Some(token) => offset = Some(token),
                        None => break,
                    }
                }
                Err(e) => {
                    // Accepted staleness: reconcile against the partial
                    // snapshot rather than failing the batch.
                    tracing::warn!(
                        error = %e,
                        fetched = records.len(),
                        "Corpus fetch failed mid-pagination, proceeding with partial snapshot"
                    );
                    break;
                }
            }
        }

        tracing::info!(count = records.len(), table = %self.config.table, "Loaded corpus snapshot");
        Ok(records)
    }
}
