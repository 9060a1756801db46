//! Settings structures for SiteSearch-RS configuration

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main settings structure matching settings.yml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub elasticsearch: ElasticsearchSettings,
    pub search: SearchIndexOptions,
    pub autosuggest: AutosuggestIndexOptions,
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let settings: Settings = serde_yaml::from_str(&content)?;
        Ok(settings)
    }

    /// Merge with environment variables (SITESEARCH_* prefix)
    pub fn merge_env(&mut self) {
        if let Ok(val) = std::env::var("SITESEARCH_PORT") {
            if let Ok(port) = val.parse() {
                self.server.port = port;
            }
        }
        if let Ok(val) = std::env::var("SITESEARCH_BIND_ADDRESS") {
            self.server.bind_address = val;
        }
        if let Ok(val) = std::env::var("SITESEARCH_ELASTICSEARCH_URL") {
            self.elasticsearch.url = val;
        }
        if let Ok(val) = std::env::var("SITESEARCH_SEARCH_ALIAS") {
            self.search.alias_name = val;
        }
        if let Ok(val) = std::env::var("SITESEARCH_AUTOSUGGEST_ALIAS") {
            self.autosuggest.alias_name = val;
        }
    }
}

/// Server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Server port
    pub port: u16,
    /// Bind address
    pub bind_address: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            port: 5000,
            bind_address: "127.0.0.1".to_string(),
        }
    }
}

/// Connection settings for the Elasticsearch cluster
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ElasticsearchSettings {
    /// Base URL of the cluster
    pub url: String,
    /// Request timeout in seconds
    pub request_timeout: f64,
}

impl Default for ElasticsearchSettings {
    fn default() -> Self {
        Self {
            url: "http://localhost:9200".to_string(),
            request_timeout: 30.0,
        }
    }
}

/// Options for the sitewide search endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchIndexOptions {
    /// Index alias the search templates run against
    pub alias_name: String,
    /// Prefix of the registered search template names
    pub template_prefix: String,
    /// Source fields requested from the engine, in order
    pub fields: Vec<String>,
}

impl Default for SearchIndexOptions {
    fn default() -> Self {
        Self {
            alias_name: "cgov".to_string(),
            template_prefix: "cgov_search".to_string(),
            fields: vec![
                "url".to_string(),
                "title".to_string(),
                "metatag-description".to_string(),
                "metatag-dcterms-type".to_string(),
            ],
        }
    }
}

/// Options for the autosuggest endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AutosuggestIndexOptions {
    /// Index alias the suggestion templates run against
    pub alias_name: String,
    /// Prefix of the registered suggestion template names
    pub template_prefix: String,
}

impl Default for AutosuggestIndexOptions {
    fn default() -> Self {
        Self {
            alias_name: "autosg".to_string(),
            template_prefix: "autosg_suggest".to_string(),
        }
    }
}
