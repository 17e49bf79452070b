//! # Twitter Index
//!
//! Demonstrates the Elasticsearch index lifecycle: create the `twitter` index
//! with its mapping, index a tweet, read it back and delete the index.
//!
//! ## Modules
//!
//! - [`config`]: Environment settings and dependency initialization
//! - [`app`]: The demo flow and its four operations

pub mod app;
pub mod config;

pub use app::App;
pub use config::{Dependencies, Settings};

use thiserror::Error;
use twitter_index_repository::DocumentStoreError;

/// Errors that abort the demo.
#[derive(Error, Debug)]
pub enum TwitterIndexError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Document store error.
    #[error("Document store error: {0}")]
    StoreError(#[from] DocumentStoreError),
}

impl TwitterIndexError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }
}
