//! Sources of the starter todo list.

use crate::builder::SourceConfig;
use crate::core::TodoItem;
use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

/// The one class of runtime failure: the starter list could not be loaded.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("HTTP request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("HTTP request timed out")]
    Timeout,

    #[error("Network response was not ok: HTTP {0}")]
    Status(u16),

    /// The body was not a JSON array. Individual elements are never rejected.
    #[error("Failed to decode todo list: {0}")]
    Decode(#[source] reqwest::Error),
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::Timeout
        } else if e.is_decode() {
            Self::Decode(e)
        } else {
            Self::Transport(e)
        }
    }
}

/// Something that can produce the starter list once.
#[async_trait]
pub trait TodoSource: Send + Sync {
    async fn fetch(&self) -> Result<Vec<TodoItem>, FetchError>;
}

/// Fetches the starter list from an HTTP JSON feed.
///
/// The feed must be a JSON array; each element is kept as-is, so an item
/// without an `id` or `title` still reaches the collection.
pub struct HttpSource {
    client: reqwest::Client,
    config: SourceConfig,
}

impl HttpSource {
    /// Build the HTTP client with the configured timeout.
    ///
    /// Fails with [`FetchError::Client`] rather than falling back to a
    /// client without the timeout.
    pub fn new(config: SourceConfig) -> Result<Self, FetchError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(FetchError::Client)?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &SourceConfig {
        &self.config
    }
}

#[async_trait]
impl TodoSource for HttpSource {
    async fn fetch(&self) -> Result<Vec<TodoItem>, FetchError> {
        let url = self.config.request_url();
        debug!(%url, "Fetching starter todos");

        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(FetchError::Status(response.status().as_u16()));
        }

        let feed: Vec<Value> = response.json().await?;
        Ok(feed.iter().map(TodoItem::from_value).collect())
    }
}

/// Serves a fixed list, for offline sessions and tests.
#[derive(Clone, Debug, Default)]
pub struct StaticSource {
    items: Vec<TodoItem>,
}

impl StaticSource {
    pub fn new(items: Vec<TodoItem>) -> Self {
        Self { items }
    }
}

#[async_trait]
impl TodoSource for StaticSource {
    async fn fetch(&self) -> Result<Vec<TodoItem>, FetchError> {
        Ok(self.items.clone())
    }
}
