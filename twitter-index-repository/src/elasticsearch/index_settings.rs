//! Elasticsearch index settings and mappings.
//!
//! This module defines the settings and field mapping for the tweet index.

use serde_json::{json, Value};

use crate::config::TweetIndexServiceConfig;

/// Get the index settings and mappings for the tweet index.
///
/// The mapping declares:
/// - **user**: `keyword`, for exact-match lookups
/// - **message**: `text`, stored and with fielddata enabled so it can be
///   aggregated and sorted on
///
/// # Arguments
///
/// * `config` - Service configuration carrying the shard and replica counts
pub fn get_index_settings(config: &TweetIndexServiceConfig) -> Value {
    json!({
        "settings": {
            "number_of_shards": config.number_of_shards,
            "number_of_replicas": config.number_of_replicas
        },
        "mappings": {
            "properties": {
                "user": {
                    "type": "keyword"
                },
                "message": {
                    "type": "text",
                    "store": true,
                    "fielddata": true
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_settings_structure() {
        let settings = get_index_settings(&TweetIndexServiceConfig::default());

        assert_eq!(settings["settings"]["number_of_shards"], 1);
        assert_eq!(settings["settings"]["number_of_replicas"], 0);

        let properties = &settings["mappings"]["properties"];
        assert_eq!(properties["user"]["type"], "keyword");
        assert_eq!(properties["message"]["type"], "text");
        assert_eq!(properties["message"]["store"], true);
        assert_eq!(properties["message"]["fielddata"], true);
    }

    #[test]
    fn test_index_settings_follow_config() {
        let config = TweetIndexServiceConfig {
            number_of_shards: 3,
            number_of_replicas: 2,
            ..TweetIndexServiceConfig::default()
        };

        let settings = get_index_settings(&config);

        assert_eq!(settings["settings"]["number_of_shards"], 3);
        assert_eq!(settings["settings"]["number_of_replicas"], 2);
    }

    #[test]
    fn test_mapping_covers_tweet_fields_only() {
        let settings = get_index_settings(&TweetIndexServiceConfig::default());
        let properties = settings["mappings"]["properties"].as_object().unwrap();

        let mut fields: Vec<&str> = properties.keys().map(String::as_str).collect();
        fields.sort();
        assert_eq!(fields, vec!["message", "user"]);
    }
}
