//! Response types for document store operations.

use serde::{Deserialize, Serialize};

/// Result of indexing a single document.
///
/// Mirrors the fields of the store's index response that callers report on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexedDocument {
    /// Index the document was written to.
    #[serde(rename = "_index")]
    pub index: String,
    /// Identifier of the document.
    #[serde(rename = "_id")]
    pub id: String,
    /// Document version after the write.
    #[serde(rename = "_version", default)]
    pub version: u64,
    /// Outcome reported by the store, e.g. "created" or "updated".
    #[serde(default)]
    pub result: String,
}

/// Acknowledgement returned by index-level operations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub(crate) struct Acknowledged {
    #[serde(default)]
    pub acknowledged: bool,
}

/// Envelope returned when fetching a document by id.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct GetDocumentResponse {
    pub found: Option<bool>,
    #[serde(rename = "_source")]
    pub source: Option<serde_json::Value>,
}
