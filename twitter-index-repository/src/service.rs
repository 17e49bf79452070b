//! Tweet index service implementation.
//!
//! This module provides the typed service application code uses to manage the
//! tweet index and the tweets stored in it. It validates input, converts tweets
//! to and from store documents and delegates the calls to a `DocumentStoreProvider`.

use serde_json::Value;
use tracing::{debug, info};
use twitter_index_shared::Tweet;

use crate::config::TweetIndexServiceConfig;
use crate::elasticsearch::get_index_settings;
use crate::errors::DocumentStoreError;
use crate::interfaces::DocumentStoreProvider;
use crate::types::IndexedDocument;
use crate::utils::{validate_document_id, validate_index_name};

/// The main service for interacting with the tweet index.
///
/// All operations work against the index named in the service configuration.
///
/// # Example
///
/// ```no_run
/// use twitter_index_repository::{ElasticsearchProvider, TweetIndexService};
/// use twitter_index_shared::Tweet;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let provider = Box::new(ElasticsearchProvider::new("http://localhost:9200")?);
/// let service = TweetIndexService::new(provider);
///
/// service.ensure_index().await?;
/// service.index_tweet("1", &Tweet::new("olivere", "Take Five")).await?;
/// let tweet = service.get_tweet("1").await?;
/// service.delete_index().await?;
/// # Ok(())
/// # }
/// ```
pub struct TweetIndexService {
    provider: Box<dyn DocumentStoreProvider>,
    config: TweetIndexServiceConfig,
}

impl TweetIndexService {
    /// Create a new TweetIndexService working on the default `twitter` index.
    pub fn new(provider: Box<dyn DocumentStoreProvider>) -> Self {
        Self {
            provider,
            config: TweetIndexServiceConfig::default(),
        }
    }

    /// Create a new TweetIndexService with custom configuration.
    pub fn with_config(
        provider: Box<dyn DocumentStoreProvider>,
        config: TweetIndexServiceConfig,
    ) -> Self {
        Self { provider, config }
    }

    /// Name of the index this service operates on.
    pub fn index_name(&self) -> &str {
        &self.config.index_name
    }

    /// Create the tweet index with its settings and mapping unless it already exists.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - The index was created and the store acknowledged it
    /// * `Ok(false)` - The index already existed, or the creation was not acknowledged
    /// * `Err(DocumentStoreError)` - If the check or the creation fails
    pub async fn ensure_index(&self) -> Result<bool, DocumentStoreError> {
        let index = self.index_name();
        validate_index_name(index)?;

        if self.provider.index_exists(index).await? {
            debug!(index = %index, "Index already exists");
            return Ok(false);
        }

        let settings = get_index_settings(&self.config);
        let acknowledged = self.provider.create_index(index, &settings).await?;

        info!(index = %index, acknowledged, "Created index");
        Ok(acknowledged)
    }

    /// Index a tweet under the given id, replacing any previous version.
    ///
    /// # Returns
    ///
    /// * `Ok(IndexedDocument)` - What the store reported for the write
    /// * `Err(DocumentStoreError::ValidationError)` - If the id is empty
    /// * `Err(DocumentStoreError)` - If the write fails
    pub async fn index_tweet(
        &self,
        id: &str,
        tweet: &Tweet,
    ) -> Result<IndexedDocument, DocumentStoreError> {
        validate_index_name(self.index_name())?;
        validate_document_id(id)?;

        let document = serde_json::to_value(tweet)
            .map_err(|e| DocumentStoreError::serialization(e.to_string()))?;

        self.provider
            .index_document(self.index_name(), id, &document)
            .await
    }

    /// Fetch a tweet by id.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(Tweet))` - The stored tweet
    /// * `Ok(None)` - No document with this id
    /// * `Err(DocumentStoreError::ParseError)` - If the stored document is not a tweet
    /// * `Err(DocumentStoreError)` - If the request fails
    pub async fn get_tweet(&self, id: &str) -> Result<Option<Tweet>, DocumentStoreError> {
        validate_index_name(self.index_name())?;
        validate_document_id(id)?;

        self.provider
            .get_document(self.index_name(), id)
            .await?
            .map(Self::decode_tweet)
            .transpose()
    }

    /// Delete the tweet index together with every tweet in it.
    ///
    /// # Returns
    ///
    /// * `Ok(bool)` - Whether the store acknowledged the deletion
    /// * `Err(DocumentStoreError)` - If the deletion fails, including when the index is missing
    pub async fn delete_index(&self) -> Result<bool, DocumentStoreError> {
        validate_index_name(self.index_name())?;

        self.provider.delete_index(self.index_name()).await
    }

    fn decode_tweet(source: Value) -> Result<Tweet, DocumentStoreError> {
        serde_json::from_value(source).map_err(|e| DocumentStoreError::parse(e.to_string()))
    }
}
