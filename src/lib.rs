//! SiteSearch-RS: an HTTP facade for sitewide search and autosuggest
//!
//! Incoming requests are translated into parameterized Elasticsearch
//! template queries, and the engine's JSON responses are mapped into a
//! stable client-facing envelope. The engine itself is an external
//! collaborator behind the [`engine::SearchEngine`] trait; this crate
//! never touches an index directly and never computes relevance.

pub mod config;
pub mod engine;
pub mod error;
pub mod health;
pub mod query;
pub mod results;
pub mod validate;
pub mod web;

pub use config::Settings;
pub use engine::{ElasticClient, SearchEngine, TemplateQuery};
pub use error::ApiError;
pub use results::{ResultEnvelope, SearchResultItem, Suggestion};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default result offset when the caller does not supply one
pub const DEFAULT_FROM: u32 = 0;

/// Default page size when the caller does not supply one
pub const DEFAULT_SIZE: u32 = 10;

/// Default site filter (no filtering)
pub const DEFAULT_SITE: &str = "all";
