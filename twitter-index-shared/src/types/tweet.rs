//! Tweet record type.
//!
//! The serialized shape must match the index mapping: `user` is an exact-match
//! keyword, `message` is stored full text.

use serde::{Deserialize, Serialize};

/// A single tweet as stored in the document store.
///
/// # Fields
///
/// - `user`: Author identifier (keyword field)
/// - `message`: Free text body (text field)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Tweet {
    pub user: String,
    pub message: String,
}

impl Tweet {
    /// Create a new tweet.
    ///
    /// # Example
    ///
    /// ```
    /// use twitter_index_shared::Tweet;
    ///
    /// let tweet = Tweet::new("olivere", "Take Five");
    /// assert_eq!(tweet.user, "olivere");
    /// ```
    pub fn new(user: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tweet_new() {
        let tweet = Tweet::new("olivere", "Take Five");

        assert_eq!(tweet.user, "olivere");
        assert_eq!(tweet.message, "Take Five");
    }

    #[test]
    fn test_serialized_field_names() {
        let tweet = Tweet::new("olivere", "Take Five");

        let value = serde_json::to_value(&tweet).unwrap();

        assert_eq!(
            value,
            serde_json::json!({ "user": "olivere", "message": "Take Five" })
        );
    }

    #[test]
    fn test_deserialize_ignores_store_metadata() {
        let source = r#"{"user":"olivere","message":"Take Five","extra":1}"#;

        let tweet: Tweet = serde_json::from_str(source).unwrap();

        assert_eq!(tweet, Tweet::new("olivere", "Take Five"));
    }

    #[test]
    fn test_deserialize_missing_field_fails() {
        let source = r#"{"user":"olivere"}"#;

        assert!(serde_json::from_str::<Tweet>(source).is_err());
    }
}
