//! Integration tests for the demo flow.
//!
//! These tests run the real `App` and `TweetIndexService` over a mock
//! `DocumentStoreProvider` that records every call.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;
use tokio::sync::Mutex;

use twitter_index::app::{demo_tweet, DEMO_TWEET_ID};
use twitter_index::{App, TwitterIndexError};
use twitter_index_repository::{
    DocumentStoreError, DocumentStoreProvider, IndexedDocument, TweetIndexService,
    TweetIndexServiceConfig,
};

/// Operation the mock fails on, if any.
#[derive(Clone, Copy, PartialEq, Eq)]
enum FailOn {
    Nothing,
    IndexDocument,
}

// Mock document store for testing
struct MockStore {
    calls: Arc<Mutex<Vec<String>>>,
    indices: Arc<Mutex<HashMap<String, HashMap<String, Value>>>>,
    fail_on: FailOn,
}

impl MockStore {
    fn new() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            indices: Arc::new(Mutex::new(HashMap::new())),
            fail_on: FailOn::Nothing,
        }
    }

    fn failing_on(fail_on: FailOn) -> Self {
        Self {
            fail_on,
            ..Self::new()
        }
    }

    async fn with_index(self, index: &str) -> Self {
        self.indices
            .lock()
            .await
            .insert(index.to_string(), HashMap::new());
        self
    }

    async fn record(&self, call: String) {
        self.calls.lock().await.push(call);
    }
}

#[async_trait::async_trait]
impl DocumentStoreProvider for MockStore {
    async fn index_exists(&self, index: &str) -> Result<bool, DocumentStoreError> {
        self.record(format!("exists:{}", index)).await;
        Ok(self.indices.lock().await.contains_key(index))
    }

    async fn create_index(&self, index: &str, _body: &Value) -> Result<bool, DocumentStoreError> {
        self.record(format!("create:{}", index)).await;
        self.indices
            .lock()
            .await
            .insert(index.to_string(), HashMap::new());
        Ok(true)
    }

    async fn index_document(
        &self,
        index: &str,
        id: &str,
        document: &Value,
    ) -> Result<IndexedDocument, DocumentStoreError> {
        self.record(format!("index:{}/{}", index, id)).await;
        if self.fail_on == FailOn::IndexDocument {
            return Err(DocumentStoreError::index("Mock index failure"));
        }
        self.indices
            .lock()
            .await
            .entry(index.to_string())
            .or_default()
            .insert(id.to_string(), document.clone());
        Ok(IndexedDocument {
            index: index.to_string(),
            id: id.to_string(),
            version: 1,
            result: "created".to_string(),
        })
    }

    async fn get_document(
        &self,
        index: &str,
        id: &str,
    ) -> Result<Option<Value>, DocumentStoreError> {
        self.record(format!("get:{}/{}", index, id)).await;
        Ok(self
            .indices
            .lock()
            .await
            .get(index)
            .and_then(|docs| docs.get(id).cloned()))
    }

    async fn delete_index(&self, index: &str) -> Result<bool, DocumentStoreError> {
        self.record(format!("delete:{}", index)).await;
        Ok(self.indices.lock().await.remove(index).is_some())
    }
}

fn app_with(store: MockStore) -> App {
    App::new(TweetIndexService::new(Box::new(store)))
}

#[tokio::test]
async fn test_run_calls_operations_in_order() {
    let store = MockStore::new();
    let calls = store.calls.clone();
    let app = app_with(store);

    app.run().await.unwrap();

    assert_eq!(
        *calls.lock().await,
        vec![
            "exists:twitter",
            "create:twitter",
            "index:twitter/1",
            "get:twitter/1",
            "delete:twitter",
        ]
    );
}

#[tokio::test]
async fn test_create_skips_existing_index() {
    let store = MockStore::new().with_index("twitter").await;
    let calls = store.calls.clone();
    let app = app_with(store);

    let created = app.create().await.unwrap();

    assert!(!created);
    assert_eq!(*calls.lock().await, vec!["exists:twitter"]);
}

#[tokio::test]
async fn test_get_returns_indexed_tweet() {
    let app = app_with(MockStore::new());

    assert!(app.create().await.unwrap());
    let indexed = app.index().await.unwrap();
    let tweet = app.get().await.unwrap();

    assert_eq!(indexed.id, DEMO_TWEET_ID);
    assert_eq!(indexed.index, "twitter");
    assert_eq!(tweet, Some(demo_tweet()));
}

#[tokio::test]
async fn test_get_before_index_is_none() {
    let app = app_with(MockStore::new());
    app.create().await.unwrap();

    assert_eq!(app.get().await.unwrap(), None);
}

#[tokio::test]
async fn test_delete_index_acknowledged() {
    let app = app_with(MockStore::new());
    app.create().await.unwrap();

    assert!(app.delete_index().await.unwrap());
}

#[tokio::test]
async fn test_first_failure_aborts_run() {
    let store = MockStore::failing_on(FailOn::IndexDocument);
    let calls = store.calls.clone();
    let app = app_with(store);

    let result = app.run().await;

    assert!(matches!(
        result,
        Err(TwitterIndexError::StoreError(DocumentStoreError::IndexError(_)))
    ));
    assert_eq!(
        *calls.lock().await,
        vec!["exists:twitter", "create:twitter", "index:twitter/1"]
    );
}

#[tokio::test]
async fn test_run_uses_configured_index() {
    let store = MockStore::new();
    let calls = store.calls.clone();
    let service = TweetIndexService::with_config(
        Box::new(store),
        TweetIndexServiceConfig::with_index_name("tweets_test"),
    );
    let app = App::new(service);

    app.run().await.unwrap();

    assert_eq!(app.index_name(), "tweets_test");
    assert!(calls
        .lock()
        .await
        .iter()
        .all(|call| call.contains("tweets_test")));
}
