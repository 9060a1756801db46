//! Client-facing result types

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Uniform `{total, results}` envelope returned to callers
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResultEnvelope<T> {
    /// Engine-reported total hit count; may exceed `results.len()`
    pub total: u64,
    /// Results in engine order; relevance ordering is the engine's job
    pub results: Vec<T>,
}

impl<T> ResultEnvelope<T> {
    pub fn new(total: u64, results: Vec<T>) -> Self {
        Self { total, results }
    }

    /// Envelope for a query that matched nothing
    pub fn empty() -> Self {
        Self {
            total: 0,
            results: Vec::new(),
        }
    }
}

/// A single sitewide search result.
///
/// Deserialized from the engine's source document field names and
/// serialized under the public API names. Optional fields stay `None`
/// when the source document omits the key entirely, and `Some("")` when
/// the key is present but empty; clients rely on the distinction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct SearchResultItem {
    /// The title of this item
    #[serde(default)]
    pub title: Option<String>,

    /// The URL for this result
    pub url: String,

    /// The content type of this result, if there is one
    #[serde(rename(deserialize = "metatag-dcterms-type"), default)]
    pub content_type: Option<String>,

    /// The description of this result
    #[serde(rename(deserialize = "metatag-description"), default)]
    pub description: Option<String>,
}

/// A single autosuggest entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Suggestion {
    /// The suggested search term
    pub term: String,
}

/// Classified health of the search cluster
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthStatus {
    Healthy,
    Unhealthy,
}

impl HealthStatus {
    /// Classify an engine-reported cluster color. Anything other than
    /// green or yellow, including unrecognized values, is unhealthy.
    pub fn from_color(color: &str) -> Self {
        match color {
            "green" | "yellow" => Self::Healthy,
            _ => Self::Unhealthy,
        }
    }
}

/// Mapping helper shared by search and autosuggest responses
pub(crate) fn from_documents<T: DeserializeOwned>(
    documents: Vec<serde_json::Value>,
) -> Result<Vec<T>, serde_json::Error> {
    documents
        .into_iter()
        .map(serde_json::from_value)
        .collect()
}
