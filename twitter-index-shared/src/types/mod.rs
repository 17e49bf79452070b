//! Data structures stored in the document store.

pub mod tweet;

pub use tweet::Tweet;
