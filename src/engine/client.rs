//! Elasticsearch client for templated search and health probes

use super::{EngineError, EngineHealth, EngineResults, SearchEngine, TemplateQuery};
use crate::config::ElasticsearchSettings;
use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};
use std::time::Duration;
use url::Url;

/// Production [`SearchEngine`] speaking the Elasticsearch HTTP API.
///
/// Safe to share across requests; reqwest pools connections internally.
#[derive(Clone)]
pub struct ElasticClient {
    http: Client,
    base_url: String,
}

impl ElasticClient {
    /// Build a client from settings. Fails on a malformed endpoint URL.
    pub fn with_settings(settings: &ElasticsearchSettings) -> Result<Self> {
        let base = Url::parse(&settings.url)?;

        let http = Client::builder()
            .timeout(Duration::from_secs_f64(settings.request_timeout))
            .gzip(true)
            .build()?;

        Ok(Self {
            http,
            base_url: base.as_str().trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }
}

#[async_trait]
impl SearchEngine for ElasticClient {
    async fn search_template(&self, query: &TemplateQuery) -> Result<EngineResults, EngineError> {
        let url = self.endpoint(&format!("{}/_search/template", query.index));
        let body = json!({
            "id": query.template,
            "params": query.params,
        });

        let response = self.http.post(&url).json(&body).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(EngineError::Http(status.as_u16()));
        }

        let raw: RawSearchResponse = serde_json::from_str(&response.text().await?)?;

        Ok(EngineResults {
            total: raw.hits.total.value(),
            documents: raw.hits.hits.into_iter().map(|hit| hit.source).collect(),
        })
    }

    async fn health(&self, index: &str) -> Result<EngineHealth, EngineError> {
        let url = self.endpoint(&format!("_cluster/health/{}", index));

        let response = self.http.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(EngineError::Http(status.as_u16()));
        }

        // Keep the raw body around so probe failures can be logged verbatim.
        let text = response.text().await?;
        let raw: RawClusterHealth = serde_json::from_str(&text)?;

        Ok(EngineHealth {
            status: raw.status,
            debug_info: text,
        })
    }
}

/// Wire shape of a `_search/template` response
#[derive(Debug, Deserialize)]
struct RawSearchResponse {
    hits: RawHits,
}

#[derive(Debug, Deserialize)]
struct RawHits {
    total: RawTotal,
    #[serde(default)]
    hits: Vec<RawHit>,
}

/// `hits.total` is a bare number up to ES 6 and `{value, relation}` from ES 7
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawTotal {
    Legacy(u64),
    Tracked { value: u64 },
}

impl RawTotal {
    fn value(&self) -> u64 {
        match *self {
            Self::Legacy(value) => value,
            Self::Tracked { value } => value,
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawHit {
    #[serde(rename = "_source")]
    source: Value,
}

/// Wire shape of a `_cluster/health` response
#[derive(Debug, Deserialize)]
struct RawClusterHealth {
    status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = ElasticClient::with_settings(&ElasticsearchSettings::default());
        assert!(client.is_ok());
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let settings = ElasticsearchSettings {
            url: "http://localhost:9200/".to_string(),
            ..Default::default()
        };
        let client = ElasticClient::with_settings(&settings).unwrap();
        assert_eq!(
            client.endpoint("cgov/_search/template"),
            "http://localhost:9200/cgov/_search/template"
        );
    }

    #[test]
    fn test_total_encodings() {
        let legacy: RawSearchResponse =
            serde_json::from_str(r#"{"hits": {"total": 222, "hits": []}}"#).unwrap();
        assert_eq!(legacy.hits.total.value(), 222);

        let tracked: RawSearchResponse = serde_json::from_str(
            r#"{"hits": {"total": {"value": 222, "relation": "eq"}, "hits": []}}"#,
        )
        .unwrap();
        assert_eq!(tracked.hits.total.value(), 222);
    }
}
