//! Document store provider trait definition.
//!
//! This module defines the abstract interface for index lifecycle and document
//! operations, allowing for different backend implementations.

use async_trait::async_trait;
use serde_json::Value;

use crate::errors::DocumentStoreError;
use crate::types::IndexedDocument;

/// Abstracts the underlying document store (Elasticsearch, or a mock in tests).
///
/// Implementations are injected into `TweetIndexService`. Each method maps to a
/// single call against the store's HTTP API and returns `DocumentStoreError` when
/// the call fails or the store answers with a non-success status.
#[async_trait]
pub trait DocumentStoreProvider: Send + Sync {
    /// Check whether an index exists.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - The index exists
    /// * `Ok(false)` - The store answered 404
    /// * `Err(DocumentStoreError)` - If the check fails
    async fn index_exists(&self, index: &str) -> Result<bool, DocumentStoreError>;

    /// Create an index with the given settings and mappings body.
    ///
    /// # Returns
    ///
    /// * `Ok(bool)` - Whether the store acknowledged the creation
    /// * `Err(DocumentStoreError)` - If the creation fails (including when the index already exists)
    async fn create_index(&self, index: &str, body: &Value) -> Result<bool, DocumentStoreError>;

    /// Index (create or replace) a document under the given id.
    ///
    /// # Returns
    ///
    /// * `Ok(IndexedDocument)` - Index, id, version and result reported by the store
    /// * `Err(DocumentStoreError)` - If the write fails
    async fn index_document(
        &self,
        index: &str,
        id: &str,
        document: &Value,
    ) -> Result<IndexedDocument, DocumentStoreError>;

    /// Fetch the source of a document by id.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(Value))` - The stored `_source`
    /// * `Ok(None)` - The document was not found
    /// * `Err(DocumentStoreError)` - If the request fails
    async fn get_document(&self, index: &str, id: &str)
        -> Result<Option<Value>, DocumentStoreError>;

    /// Delete an index and every document in it.
    ///
    /// # Returns
    ///
    /// * `Ok(bool)` - Whether the store acknowledged the deletion
    /// * `Err(DocumentStoreError)` - If the deletion fails
    async fn delete_index(&self, index: &str) -> Result<bool, DocumentStoreError>;
}
