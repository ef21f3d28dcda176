//! Configuration of the remote starter list.

use crate::builder::error::BuildError;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

/// Feed queried when no endpoint is configured
pub const DEFAULT_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/todos";

/// Number of items requested from the feed
pub const DEFAULT_LIMIT: usize = 5;

/// Request timeout applied unless configured otherwise
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Where and how the starter list is fetched.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Feed URL, without the limit query parameter
    pub endpoint: Url,

    /// Value sent as `_limit`
    pub limit: usize,

    /// Whole-request timeout; `None` waits indefinitely
    pub timeout: Option<Duration>,
}

impl SourceConfig {
    /// Full request URL including the `_limit` query parameter.
    pub fn request_url(&self) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("_limit", &self.limit.to_string());
        url
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            endpoint: Url::parse(DEFAULT_ENDPOINT).expect("default endpoint is a valid URL"),
            limit: DEFAULT_LIMIT,
            timeout: Some(DEFAULT_TIMEOUT),
        }
    }
}

/// Builder for [`SourceConfig`] with a fluent API.
///
/// # Example
///
/// ```
/// use todo_state::builder::SourceConfigBuilder;
/// use std::time::Duration;
///
/// let config = SourceConfigBuilder::new()
///     .endpoint("http://127.0.0.1:8080/todos")
///     .limit(3)
///     .timeout(Duration::from_secs(2))
///     .build()
///     .unwrap();
///
/// assert_eq!(config.request_url().as_str(), "http://127.0.0.1:8080/todos?_limit=3");
/// ```
pub struct SourceConfigBuilder {
    endpoint: Option<String>,
    limit: usize,
    timeout: Option<Duration>,
}

impl SourceConfigBuilder {
    pub fn new() -> Self {
        Self {
            endpoint: None,
            limit: DEFAULT_LIMIT,
            timeout: Some(DEFAULT_TIMEOUT),
        }
    }

    /// Set the feed URL (defaults to [`DEFAULT_ENDPOINT`]).
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Set how many items to request.
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Wait for the feed without a timeout.
    pub fn no_timeout(mut self) -> Self {
        self.timeout = None;
        self
    }

    /// Build the configuration.
    /// Returns an error if the endpoint or limit is unusable.
    pub fn build(self) -> Result<SourceConfig, BuildError> {
        if self.limit == 0 {
            return Err(BuildError::ZeroLimit);
        }

        let raw = self.endpoint.unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        let endpoint = Url::parse(&raw).map_err(|e| BuildError::InvalidEndpoint {
            endpoint: raw.clone(),
            reason: e.to_string(),
        })?;

        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(BuildError::UnsupportedScheme(endpoint.scheme().to_string()));
        }

        Ok(SourceConfig {
            endpoint,
            limit: self.limit,
            timeout: self.timeout,
        })
    }
}

impl Default for SourceConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
