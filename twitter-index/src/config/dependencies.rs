//! Dependency initialization and wiring for the demo.

use tracing::info;
use twitter_index_repository::{
    ElasticsearchProvider, TweetIndexService, TweetIndexServiceConfig,
};

use crate::app::App;
use crate::config::Settings;
use crate::TwitterIndexError;

/// Container for all initialized dependencies.
pub struct Dependencies {
    /// The configured application ready to run.
    pub app: App,
}

impl Dependencies {
    /// Initialize all dependencies from environment variables.
    ///
    /// See [`Settings::from_env`] for the variables read.
    pub async fn new() -> Result<Self, TwitterIndexError> {
        let settings = Settings::from_env()?;
        Self::from_settings(&settings).await
    }

    /// Initialize all dependencies from explicit settings.
    ///
    /// Connects to Elasticsearch and checks that the node answers before
    /// returning. There is no retry: an unreachable node is an error.
    pub async fn from_settings(settings: &Settings) -> Result<Self, TwitterIndexError> {
        info!(
            elastic_url = %settings.elastic_url,
            index_name = %settings.index_name,
            "connecting to ES @ {}",
            settings.elastic_url
        );

        let provider = ElasticsearchProvider::new(&settings.elastic_url).map_err(|e| {
            TwitterIndexError::config(format!("Failed to create Elasticsearch provider: {}", e))
        })?;

        provider.ping().await?;

        info!("Elasticsearch connection established");

        let service = TweetIndexService::with_config(
            Box::new(provider),
            TweetIndexServiceConfig::with_index_name(settings.index_name.clone()),
        );

        Ok(Self {
            app: App::new(service),
        })
    }
}
