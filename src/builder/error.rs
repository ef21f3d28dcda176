//! Build errors for configuration builders.

use thiserror::Error;

/// Errors that can occur when building a source configuration.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Invalid endpoint '{endpoint}': {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },

    #[error("Endpoint must use http or https, got '{0}'")]
    UnsupportedScheme(String),

    #[error("Item limit must be at least 1. Call .limit(n) with n > 0")]
    ZeroLimit,
}
