//! Utility functions for the twitter index repository.

use crate::errors::DocumentStoreError;

/// Characters the store refuses in index names.
const FORBIDDEN_INDEX_CHARS: &[char] = &['\\', '/', '*', '?', '"', '<', '>', '|', ',', '#', ' ', ':'];

/// Validate an index name against the store's naming rules.
///
/// Index names must be non-empty and lowercase, must not start with `-`, `_` or `+`,
/// cannot be `.` or `..`, and cannot contain any of `\ / * ? " < > | , # :` or spaces.
///
/// # Example
///
/// ```
/// use twitter_index_repository::validate_index_name;
///
/// assert!(validate_index_name("twitter").is_ok());
/// assert!(validate_index_name("Twitter").is_err());
/// ```
pub fn validate_index_name(name: &str) -> Result<(), DocumentStoreError> {
    if name.is_empty() {
        return Err(DocumentStoreError::validation("index name is required"));
    }

    if name == "." || name == ".." {
        return Err(DocumentStoreError::validation(format!(
            "index name '{}' is reserved",
            name
        )));
    }

    if name.starts_with(['-', '_', '+']) {
        return Err(DocumentStoreError::validation(format!(
            "index name '{}' must not start with '-', '_' or '+'",
            name
        )));
    }

    if name.chars().any(|c| c.is_uppercase()) {
        return Err(DocumentStoreError::validation(format!(
            "index name '{}' must be lowercase",
            name
        )));
    }

    if let Some(c) = name.chars().find(|c| FORBIDDEN_INDEX_CHARS.contains(c)) {
        return Err(DocumentStoreError::validation(format!(
            "index name '{}' contains forbidden character '{}'",
            name, c
        )));
    }

    Ok(())
}

/// Validate a document identifier.
pub fn validate_document_id(id: &str) -> Result<(), DocumentStoreError> {
    if id.is_empty() {
        return Err(DocumentStoreError::validation("document id is required"));
    }
    Ok(())
}
