//! Builder API for configuring the startup feed.
//!
//! The feed endpoint, item limit and request timeout are collected with a
//! fluent builder and validated once in `build()`.

pub mod config;
pub mod error;

pub use config::{SourceConfig, SourceConfigBuilder, DEFAULT_ENDPOINT, DEFAULT_LIMIT};
pub use error::BuildError;
