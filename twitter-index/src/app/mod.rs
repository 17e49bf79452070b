//! The index lifecycle demo.
//!
//! `App::run` calls the four operations once each, in order: create the index,
//! index the demo tweet, read it back, delete the index. The first error stops
//! the run.

use tracing::{info, instrument, warn};
use twitter_index_repository::{IndexedDocument, TweetIndexService};
use twitter_index_shared::Tweet;

use crate::TwitterIndexError;

/// Identifier the demo tweet is stored under.
pub const DEMO_TWEET_ID: &str = "1";

/// The tweet written and read back by the demo.
pub fn demo_tweet() -> Tweet {
    Tweet::new("olivere", "Take Five")
}

/// Application object holding the store handle.
pub struct App {
    service: TweetIndexService,
}

impl App {
    pub fn new(service: TweetIndexService) -> Self {
        Self { service }
    }

    /// Name of the index the demo operates on.
    pub fn index_name(&self) -> &str {
        self.service.index_name()
    }

    /// Create the index with its mapping unless it already exists.
    ///
    /// Prints an acknowledgment line when the index was created.
    #[instrument(skip(self), fields(index = %self.index_name()))]
    pub async fn create(&self) -> Result<bool, TwitterIndexError> {
        let created = self.service.ensure_index().await?;
        if created {
            println!("Index {} created", self.index_name());
        }
        Ok(created)
    }

    /// Index the demo tweet.
    #[instrument(skip(self), fields(index = %self.index_name()))]
    pub async fn index(&self) -> Result<IndexedDocument, TwitterIndexError> {
        let indexed = self
            .service
            .index_tweet(DEMO_TWEET_ID, &demo_tweet())
            .await?;
        println!("Indexed tweet {} to index {}", indexed.id, indexed.index);
        Ok(indexed)
    }

    /// Read the demo tweet back.
    ///
    /// Returns `None` when no tweet is stored under the demo id.
    #[instrument(skip(self), fields(index = %self.index_name()))]
    pub async fn get(&self) -> Result<Option<Tweet>, TwitterIndexError> {
        let tweet = self.service.get_tweet(DEMO_TWEET_ID).await?;
        match &tweet {
            Some(tweet) => info!(user = %tweet.user, message = %tweet.message, "Got tweet"),
            None => warn!(doc_id = DEMO_TWEET_ID, "Tweet not found"),
        }
        Ok(tweet)
    }

    /// Delete the index.
    ///
    /// Prints an acknowledgment line when the deletion was acknowledged.
    #[instrument(skip(self), fields(index = %self.index_name()))]
    pub async fn delete_index(&self) -> Result<bool, TwitterIndexError> {
        let acknowledged = self.service.delete_index().await?;
        if acknowledged {
            println!("index deleted");
        }
        Ok(acknowledged)
    }

    /// Run the whole demo flow.
    pub async fn run(&self) -> Result<(), TwitterIndexError> {
        self.create().await?;
        self.index().await?;
        self.get().await?;
        self.delete_index().await?;
        Ok(())
    }
}
