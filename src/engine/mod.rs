//! Search engine collaborator boundary
//!
//! The engine is reached exclusively through the [`SearchEngine`] trait:
//! it can execute a named template query and answer a health probe,
//! nothing more. Production uses the reqwest-backed [`ElasticClient`];
//! tests substitute mocks.

mod client;

pub use client::ElasticClient;

use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

/// A named, parameterized search request executed by the engine,
/// analogous to a stored procedure.
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateQuery {
    /// Index or alias the template runs against
    pub index: String,
    /// Registered template name
    pub template: String,
    /// Template parameters
    pub params: HashMap<String, Value>,
}

impl TemplateQuery {
    /// Create a query with no parameters
    pub fn new(index: impl Into<String>, template: impl Into<String>) -> Self {
        Self {
            index: index.into(),
            template: template.into(),
            params: HashMap::new(),
        }
    }

    /// Add a template parameter
    pub fn param(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }
}

/// Raw hits returned by a templated search, before mapping
#[derive(Debug, Clone, Default)]
pub struct EngineResults {
    /// Engine-reported total hit count, independent of page size
    pub total: u64,
    /// Source documents in engine order
    pub documents: Vec<Value>,
}

/// Raw response to a health probe
#[derive(Debug, Clone)]
pub struct EngineHealth {
    /// Reported cluster color ("green", "yellow", "red", ...)
    pub status: String,
    /// Raw diagnostic payload, kept for logging
    pub debug_info: String,
}

/// Failures at the engine boundary
#[derive(Debug, Error)]
pub enum EngineError {
    /// The engine answered with a non-success HTTP status
    #[error("engine returned HTTP {0}")]
    Http(u16),

    /// The engine could not be reached or the body could not be read
    #[error("engine transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The engine's body did not match the expected shape
    #[error("unparseable engine response: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Capability contract for the search engine collaborator
#[async_trait]
pub trait SearchEngine: Send + Sync {
    /// Execute a templated search and return the raw hits.
    ///
    /// Exactly one call per request; no retries, no caching.
    async fn search_template(&self, query: &TemplateQuery) -> Result<EngineResults, EngineError>;

    /// Probe cluster health scoped to the given index or alias
    async fn health(&self, index: &str) -> Result<EngineHealth, EngineError>;
}
