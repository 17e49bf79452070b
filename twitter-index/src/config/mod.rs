//! Configuration and dependency initialization.

mod dependencies;
mod settings;

pub use dependencies::Dependencies;
pub use settings::{Settings, DEFAULT_ELASTIC_URL, ELASTIC_URL_ENV, INDEX_NAME_ENV};
