//! # Twitter Index Repository
//!
//! This crate provides traits and implementations for interacting with the
//! document store holding the twitter index. It includes definitions for
//! errors, the store interface, a typed tweet service and a concrete
//! implementation for Elasticsearch.

pub mod config;
pub mod elasticsearch;
pub mod errors;
pub mod interfaces;
pub mod service;
pub mod types;
pub mod utils;

pub use config::TweetIndexServiceConfig;
pub use errors::DocumentStoreError;
pub use interfaces::DocumentStoreProvider;
pub use self::elasticsearch::ElasticsearchProvider;
pub use service::TweetIndexService;
pub use types::IndexedDocument;
pub use utils::{validate_document_id, validate_index_name};
