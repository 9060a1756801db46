//! Request parameter validation
//!
//! Every invalid (collection, language, term) combination fails here with
//! a 400 before any engine call is made.

use crate::error::ApiError;
use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Languages the search templates exist for
static VALID_LANGUAGES: Lazy<HashSet<&'static str>> =
    Lazy::new(|| HashSet::from(["en", "es"]));

/// Reject a blank collection name
pub fn require_collection(collection: &str) -> Result<(), ApiError> {
    if collection.trim().is_empty() {
        return Err(ApiError::InvalidArgument(
            "You must supply a collection name and term".to_string(),
        ));
    }
    Ok(())
}

/// Reject a language outside the allow-list
pub fn require_language(language: &str) -> Result<(), ApiError> {
    if !VALID_LANGUAGES.contains(language) {
        return Err(ApiError::InvalidArgument(
            "Not a valid language code.".to_string(),
        ));
    }
    Ok(())
}

/// Reject a blank search term
pub fn require_term(term: &str) -> Result<(), ApiError> {
    if term.trim().is_empty() {
        return Err(ApiError::InvalidArgument(
            "You must supply a search term".to_string(),
        ));
    }
    Ok(())
}
