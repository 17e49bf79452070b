//! Elasticsearch provider implementation.
//!
//! This module provides the concrete implementation of `DocumentStoreProvider`
//! using the official Elasticsearch Rust crate.

use async_trait::async_trait;
use elasticsearch::{
    http::response::Response,
    http::transport::{SingleNodeConnectionPool, TransportBuilder},
    indices::{IndicesCreateParts, IndicesDeleteParts, IndicesExistsParts},
    Elasticsearch, GetParts, IndexParts,
};
use serde_json::Value;
use tracing::{debug, error, info};
use url::Url;

use crate::errors::DocumentStoreError;
use crate::interfaces::DocumentStoreProvider;
use crate::types::{Acknowledged, GetDocumentResponse, IndexedDocument};

/// Elasticsearch provider implementation.
///
/// Wraps a single-node Elasticsearch client. The provider is index-agnostic:
/// every call names the index it works on.
///
/// # Example
///
/// ```ignore
/// use twitter_index_repository::ElasticsearchProvider;
///
/// let provider = ElasticsearchProvider::new("http://localhost:9200")?;
/// provider.ping().await?;
/// let exists = provider.index_exists("twitter").await?;
/// ```
pub struct ElasticsearchProvider {
    client: Elasticsearch,
}

impl ElasticsearchProvider {
    /// Create a new Elasticsearch provider for the specified URL.
    ///
    /// No request is sent; use [`ElasticsearchProvider::ping`] to check that the
    /// node is reachable.
    ///
    /// # Arguments
    ///
    /// * `url` - The Elasticsearch base URL (e.g., "http://localhost:9200")
    ///
    /// # Returns
    ///
    /// * `Ok(ElasticsearchProvider)` - A new provider instance
    /// * `Err(DocumentStoreError)` - If the URL is invalid or the transport cannot be built
    pub fn new(url: &str) -> Result<Self, DocumentStoreError> {
        let parsed_url =
            Url::parse(url).map_err(|e| DocumentStoreError::connection(e.to_string()))?;

        let conn_pool = SingleNodeConnectionPool::new(parsed_url);
        let transport = TransportBuilder::new(conn_pool)
            .disable_proxy()
            .build()
            .map_err(|e| DocumentStoreError::connection(e.to_string()))?;

        let client = Elasticsearch::new(transport);

        info!(url = %url, "Created Elasticsearch provider");

        Ok(Self { client })
    }

    /// Check that the node answers.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - The node answered with a success status
    /// * `Err(DocumentStoreError::ConnectionError)` - The node is unreachable or unhealthy
    pub async fn ping(&self) -> Result<(), DocumentStoreError> {
        let response = self
            .client
            .ping()
            .send()
            .await
            .map_err(|e| DocumentStoreError::connection(e.to_string()))?;

        let status = response.status_code();
        if !status.is_success() {
            return Err(DocumentStoreError::connection(format!(
                "Ping failed with status {}",
                status
            )));
        }

        debug!("Elasticsearch node answered ping");
        Ok(())
    }

    /// Read the body of a failed response for error reporting.
    async fn error_body(response: Response) -> String {
        response.text().await.unwrap_or_default()
    }
}

#[async_trait]
impl DocumentStoreProvider for ElasticsearchProvider {
    async fn index_exists(&self, index: &str) -> Result<bool, DocumentStoreError> {
        let response = self
            .client
            .indices()
            .exists(IndicesExistsParts::Index(&[index]))
            .send()
            .await
            .map_err(|e| DocumentStoreError::index_check(e.to_string()))?;

        let status = response.status_code();
        match status.as_u16() {
            200 => Ok(true),
            404 => Ok(false),
            _ => {
                let error_body = Self::error_body(response).await;
                error!(status = %status, body = %error_body, "Index exists request failed");
                Err(DocumentStoreError::index_check(format!(
                    "Index exists check failed with status {}: {}",
                    status, error_body
                )))
            }
        }
    }

    async fn create_index(&self, index: &str, body: &Value) -> Result<bool, DocumentStoreError> {
        let response = self
            .client
            .indices()
            .create(IndicesCreateParts::Index(index))
            .body(body)
            .send()
            .await
            .map_err(|e| DocumentStoreError::index_creation(e.to_string()))?;

        let status = response.status_code();
        if !status.is_success() {
            let error_body = Self::error_body(response).await;
            error!(status = %status, body = %error_body, "Create index request failed");
            return Err(DocumentStoreError::index_creation(format!(
                "Create index failed with status {}: {}",
                status, error_body
            )));
        }

        let ack = response
            .json::<Acknowledged>()
            .await
            .map_err(|e| DocumentStoreError::parse(e.to_string()))?;

        debug!(index = %index, acknowledged = ack.acknowledged, "Index created");
        Ok(ack.acknowledged)
    }

    async fn index_document(
        &self,
        index: &str,
        id: &str,
        document: &Value,
    ) -> Result<IndexedDocument, DocumentStoreError> {
        let response = self
            .client
            .index(IndexParts::IndexId(index, id))
            .body(document)
            .send()
            .await
            .map_err(|e| DocumentStoreError::index(e.to_string()))?;

        let status = response.status_code();
        if !status.is_success() {
            let error_body = Self::error_body(response).await;
            error!(status = %status, body = %error_body, "Index document request failed");
            return Err(DocumentStoreError::index(format!(
                "Index document failed with status {}: {}",
                status, error_body
            )));
        }

        let indexed = response
            .json::<IndexedDocument>()
            .await
            .map_err(|e| DocumentStoreError::parse(e.to_string()))?;

        debug!(
            index = %indexed.index,
            doc_id = %indexed.id,
            version = indexed.version,
            result = %indexed.result,
            "Document indexed"
        );
        Ok(indexed)
    }

    async fn get_document(
        &self,
        index: &str,
        id: &str,
    ) -> Result<Option<Value>, DocumentStoreError> {
        let response = self
            .client
            .get(GetParts::IndexId(index, id))
            .send()
            .await
            .map_err(|e| DocumentStoreError::get(e.to_string()))?;

        let status = response.status_code();
        let body = response
            .text()
            .await
            .map_err(|e| DocumentStoreError::get(e.to_string()))?;

        // A missing document answers 404 with `"found": false`; a missing index
        // answers 404 with an error body instead.
        let envelope = match serde_json::from_str::<GetDocumentResponse>(&body) {
            Ok(envelope)
                if status.is_success() || (status.as_u16() == 404 && envelope.found.is_some()) =>
            {
                envelope
            }
            _ => {
                error!(status = %status, body = %body, "Get document request failed");
                return Err(DocumentStoreError::get(format!(
                    "Get document failed with status {}: {}",
                    status, body
                )));
            }
        };

        if envelope.found != Some(true) {
            debug!(index = %index, doc_id = %id, "Document not found");
            return Ok(None);
        }

        let source = envelope.source.ok_or_else(|| {
            DocumentStoreError::parse(format!("Document {} has no _source", id))
        })?;

        debug!(index = %index, doc_id = %id, "Document fetched");
        Ok(Some(source))
    }

    async fn delete_index(&self, index: &str) -> Result<bool, DocumentStoreError> {
        let response = self
            .client
            .indices()
            .delete(IndicesDeleteParts::Index(&[index]))
            .send()
            .await
            .map_err(|e| DocumentStoreError::delete_index(e.to_string()))?;

        let status = response.status_code();
        if !status.is_success() {
            let error_body = Self::error_body(response).await;
            error!(status = %status, body = %error_body, "Delete index request failed");
            return Err(DocumentStoreError::delete_index(format!(
                "Delete index failed with status {}: {}",
                status, error_body
            )));
        }

        let ack = response
            .json::<Acknowledged>()
            .await
            .map_err(|e| DocumentStoreError::parse(e.to_string()))?;

        debug!(index = %index, acknowledged = ack.acknowledged, "Index deleted");
        Ok(ack.acknowledged)
    }
}
