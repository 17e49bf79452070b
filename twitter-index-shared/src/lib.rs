//! # Twitter Index Shared
//!
//! This crate defines the record type stored in the twitter index and shared
//! by the repository and the application crates.

pub mod types;

pub use types::tweet::Tweet;
