//! Elasticsearch implementation of the document store provider.
//!
//! This module provides a concrete implementation of `DocumentStoreProvider`
//! using Elasticsearch as the backend, plus the tweet index settings.

mod index_settings;
mod provider;

pub use index_settings::get_index_settings;
pub use provider::ElasticsearchProvider;
