//! Cluster health probe
//!
//! A single health query scoped to the configured index alias. Green and
//! yellow count as healthy; red, unrecognized colors, and probe-level
//! failures all surface as `ServiceUnavailable`.

use crate::engine::SearchEngine;
use crate::error::ApiError;
use crate::results::HealthStatus;

/// Literal body returned by the status endpoints when the probe passes
pub const HEALTHY_STATUS: &str = "alive!";

const UNHEALTHY_MESSAGE: &str = "Service not healthy";

/// Probe the engine and classify the result
pub async fn probe(engine: &dyn SearchEngine, index: &str) -> Result<&'static str, ApiError> {
    match engine.health(index).await {
        Ok(health) => match HealthStatus::from_color(&health.status) {
            HealthStatus::Healthy => Ok(HEALTHY_STATUS),
            HealthStatus::Unhealthy => {
                tracing::error!(
                    index = %index,
                    status = %health.status,
                    debug_info = %health.debug_info,
                    "search cluster is unhealthy"
                );
                Err(ApiError::ServiceUnavailable(UNHEALTHY_MESSAGE.to_string()))
            }
        },
        Err(err) => {
            tracing::error!(index = %index, error = %err, "health probe failed");
            Err(ApiError::ServiceUnavailable(UNHEALTHY_MESSAGE.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{EngineError, EngineHealth, EngineResults, TemplateQuery};
    use async_trait::async_trait;
    use axum::http::StatusCode;

    enum ProbeBehavior {
        Color(&'static str),
        Fail,
    }

    struct HealthEngine(ProbeBehavior);

    #[async_trait]
    impl SearchEngine for HealthEngine {
        async fn search_template(
            &self,
            _query: &TemplateQuery,
        ) -> Result<EngineResults, EngineError> {
            unimplemented!("not used by these tests")
        }

        async fn health(&self, _index: &str) -> Result<EngineHealth, EngineError> {
            match self.0 {
                ProbeBehavior::Color(color) => Ok(EngineHealth {
                    status: color.to_string(),
                    debug_info: format!("{{\"status\":\"{}\"}}", color),
                }),
                ProbeBehavior::Fail => Err(EngineError::Http(500)),
            }
        }
    }

    #[tokio::test]
    async fn test_green_and_yellow_are_healthy() {
        for color in ["green", "yellow"] {
            let engine = HealthEngine(ProbeBehavior::Color(color));
            let status = probe(&engine, "autosg").await.unwrap();
            assert_eq!(status, HEALTHY_STATUS);
        }
    }

    #[tokio::test]
    async fn test_red_and_unexpected_are_unhealthy() {
        for color in ["red", "purple", ""] {
            let engine = HealthEngine(ProbeBehavior::Color(color));
            let err = probe(&engine, "autosg").await.unwrap_err();
            assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        }
    }

    #[tokio::test]
    async fn test_probe_failure_is_unhealthy() {
        let engine = HealthEngine(ProbeBehavior::Fail);
        let err = probe(&engine, "cgov").await.unwrap_err();
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "Service not healthy");
    }
}
