//! Settings read from the process environment.

use std::env;

use twitter_index_repository::config::DEFAULT_INDEX_NAME;
use twitter_index_repository::validate_index_name;

use crate::TwitterIndexError;

/// Environment variable naming the Elasticsearch base URL.
pub const ELASTIC_URL_ENV: &str = "ELASTIC_URL";

/// Environment variable overriding the index name.
pub const INDEX_NAME_ENV: &str = "TWITTER_INDEX_NAME";

/// Used when `ELASTIC_URL` is unset or empty.
pub const DEFAULT_ELASTIC_URL: &str = "http://127.0.0.1:9200";

/// Runtime settings for the demo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Elasticsearch base URL.
    pub elastic_url: String,
    /// Index the demo operates on.
    pub index_name: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            elastic_url: DEFAULT_ELASTIC_URL.to_string(),
            index_name: DEFAULT_INDEX_NAME.to_string(),
        }
    }
}

impl Settings {
    /// Read settings from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `ELASTIC_URL`: Elasticsearch base URL (default: http://127.0.0.1:9200)
    /// - `TWITTER_INDEX_NAME`: Index name (default: twitter)
    ///
    /// Empty values count as unset.
    pub fn from_env() -> Result<Self, TwitterIndexError> {
        let defaults = Self::default();

        let elastic_url = non_empty_var(ELASTIC_URL_ENV).unwrap_or(defaults.elastic_url);
        let index_name = non_empty_var(INDEX_NAME_ENV).unwrap_or(defaults.index_name);

        validate_index_name(&index_name).map_err(|e| {
            TwitterIndexError::config(format!("Invalid {}: {}", INDEX_NAME_ENV, e))
        })?;

        Ok(Self {
            elastic_url,
            index_name,
        })
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}
