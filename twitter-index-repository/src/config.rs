//! Configuration types for the TweetIndexService.

/// Default name of the index the demo operates on.
pub const DEFAULT_INDEX_NAME: &str = "twitter";

/// Configuration for the TweetIndexService.
///
/// Holds the index the service works against and the settings used when the
/// service has to create it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TweetIndexServiceConfig {
    /// Name of the index holding the tweets.
    pub index_name: String,
    /// Number of primary shards used when creating the index.
    pub number_of_shards: u32,
    /// Number of replicas used when creating the index.
    pub number_of_replicas: u32,
}

impl Default for TweetIndexServiceConfig {
    fn default() -> Self {
        Self {
            index_name: DEFAULT_INDEX_NAME.to_string(),
            number_of_shards: 1,
            number_of_replicas: 0,
        }
    }
}

impl TweetIndexServiceConfig {
    /// Create a config for the given index with the default shard layout.
    ///
    /// # Arguments
    ///
    /// * `index_name` - Name of the index holding the tweets
    pub fn with_index_name(index_name: impl Into<String>) -> Self {
        Self {
            index_name: index_name.into(),
            ..Self::default()
        }
    }
}
