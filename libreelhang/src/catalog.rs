//! Catalog access
//!
//! The game and the gallery both read the same remote movie collection.
//! `CatalogSource` is the capability the rest of the crate depends on;
//! `HttpCatalog` is the real implementation, and `MockCatalog` exists so
//! integration tests can exercise fetch flows without network access.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use tokio::time::sleep;

use crate::error::{CatalogError, Result};
use crate::types::{CatalogBody, MovieRecord};

/// Read access to the remote movie collection.
///
/// One fetch per screen activation; no retry, no pagination, no
/// authentication. Implementations must not cache across calls.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch the full movie list.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Network` on transport failure,
    /// `CatalogError::Status` on a non-success response,
    /// `CatalogError::Decode` when the body matches neither accepted
    /// shape, and `CatalogError::EmptyCatalog` when the decoded
    /// collection holds no records.
    async fn fetch_films(&self) -> Result<Vec<MovieRecord>>;

    /// Identifier for logging.
    fn name(&self) -> &str;
}

/// HTTP implementation of `CatalogSource`.
pub struct HttpCatalog {
    endpoint: String,
    client: reqwest::Client,
}

impl HttpCatalog {
    pub fn new(endpoint: String) -> Self {
        Self {
            endpoint,
            client: reqwest::Client::new(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl CatalogSource for HttpCatalog {
    async fn fetch_films(&self) -> Result<Vec<MovieRecord>> {
        tracing::debug!(endpoint = %self.endpoint, "fetching catalog");

        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(CatalogError::Network)?;

        if !response.status().is_success() {
            return Err(CatalogError::Status(response.status().as_u16()).into());
        }

        let text = response.text().await.map_err(CatalogError::Network)?;
        let records = decode_catalog(&text)?;
        tracing::info!(count = records.len(), "catalog fetched");
        Ok(records)
    }

    fn name(&self) -> &str {
        "http"
    }
}

/// Decode a catalog body. An empty collection is rejected outright: no
/// round can ever be seeded from it.
fn decode_catalog(text: &str) -> Result<Vec<MovieRecord>> {
    let body: CatalogBody =
        serde_json::from_str(text).map_err(|e| CatalogError::Decode(e.to_string()))?;

    let records = body.into_records();
    if records.is_empty() {
        return Err(CatalogError::EmptyCatalog.into());
    }
    Ok(records)
}

/// Configuration for mock catalog behavior
#[derive(Debug, Clone)]
pub struct MockCatalogConfig {
    /// Records to return on success
    pub records: Vec<MovieRecord>,

    /// Whether the fetch should succeed
    pub fetch_succeeds: bool,

    /// Error message to report on failure
    pub fetch_error: Option<String>,

    /// Delay before completing (simulates network latency)
    pub delay: Duration,

    /// Number of times fetch_films has been called
    pub fetch_call_count: Arc<Mutex<usize>>,
}

impl Default for MockCatalogConfig {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            fetch_succeeds: true,
            fetch_error: None,
            delay: Duration::from_millis(0),
            fetch_call_count: Arc::new(Mutex::new(0)),
        }
    }
}

/// Mock catalog for testing
pub struct MockCatalog {
    config: MockCatalogConfig,
}

impl MockCatalog {
    pub fn new(config: MockCatalogConfig) -> Self {
        Self { config }
    }

    /// A catalog that returns the given titles.
    pub fn with_titles(titles: &[&str]) -> Self {
        let records = titles
            .iter()
            .enumerate()
            .map(|(i, title)| MovieRecord {
                id: (i + 1).to_string(),
                title: title.to_string(),
                image: None,
                url: None,
            })
            .collect();
        Self::new(MockCatalogConfig {
            records,
            ..Default::default()
        })
    }

    /// A catalog whose fetch always fails with the given message.
    pub fn failing(error: &str) -> Self {
        Self::new(MockCatalogConfig {
            fetch_succeeds: false,
            fetch_error: Some(error.to_string()),
            ..Default::default()
        })
    }

    /// A catalog that delays before responding.
    pub fn with_delay(titles: &[&str], delay: Duration) -> Self {
        let mut mock = Self::with_titles(titles);
        mock.config.delay = delay;
        mock
    }

    /// Get the number of times fetch_films was called
    pub fn fetch_call_count(&self) -> usize {
        *self.config.fetch_call_count.lock().unwrap()
    }
}

#[async_trait]
impl CatalogSource for MockCatalog {
    async fn fetch_films(&self) -> Result<Vec<MovieRecord>> {
        *self.config.fetch_call_count.lock().unwrap() += 1;

        if !self.config.delay.is_zero() {
            sleep(self.config.delay).await;
        }

        if self.config.fetch_succeeds {
            Ok(self.config.records.clone())
        } else {
            let message = self
                .config
                .fetch_error
                .clone()
                .unwrap_or_else(|| "Mock fetch failed".to_string());
            Err(CatalogError::Unavailable(message).into())
        }
    }

    fn name(&self) -> &str {
        "mock"
    }
}
