//! Document store error types.
//!
//! This module defines the unified error type for all document store operations,
//! covering transport failures, non-success responses and payload decoding.

use thiserror::Error;

/// Unified errors from document store operations.
///
/// Used by the `DocumentStoreProvider` trait and `TweetIndexService`. Every variant
/// is fatal to the demo flow; the variants only differ in which operation failed.
#[derive(Debug, Clone, Error)]
pub enum DocumentStoreError {
    /// Validation error (e.g., empty document id, malformed index name).
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Failed to establish connection to the document store.
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// Failed to check whether an index exists.
    #[error("Index check error: {0}")]
    IndexCheckError(String),

    /// Failed to create an index.
    #[error("Index creation error: {0}")]
    IndexCreationError(String),

    /// Failed to index a document.
    #[error("Index error: {0}")]
    IndexError(String),

    /// Failed to retrieve a document.
    #[error("Get error: {0}")]
    GetError(String),

    /// Failed to delete an index.
    #[error("Delete index error: {0}")]
    DeleteIndexError(String),

    /// Failed to parse a response from the document store.
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Failed to serialize data for the document store.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl DocumentStoreError {
    /// Create a validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::ValidationError(msg.into())
    }

    /// Create a connection error.
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::ConnectionError(msg.into())
    }

    /// Create an index check error.
    pub fn index_check(msg: impl Into<String>) -> Self {
        Self::IndexCheckError(msg.into())
    }

    /// Create an index creation error.
    pub fn index_creation(msg: impl Into<String>) -> Self {
        Self::IndexCreationError(msg.into())
    }

    /// Create an index error.
    pub fn index(msg: impl Into<String>) -> Self {
        Self::IndexError(msg.into())
    }

    /// Create a get error.
    pub fn get(msg: impl Into<String>) -> Self {
        Self::GetError(msg.into())
    }

    /// Create a delete index error.
    pub fn delete_index(msg: impl Into<String>) -> Self {
        Self::DeleteIndexError(msg.into())
    }

    /// Create a parse error.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::ParseError(msg.into())
    }

    /// Create a serialization error.
    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::SerializationError(msg.into())
    }
}
