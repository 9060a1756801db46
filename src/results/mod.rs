//! Response mapping from raw engine hits to the client envelope
//!
//! [`execute`] is the single seam between a built [`TemplateQuery`] and
//! the engine: it performs exactly one templated-search call, converts
//! engine-reported failures into [`ApiError::Upstream`], and projects the
//! returned documents, preserving engine order.

mod types;

pub use types::{HealthStatus, ResultEnvelope, SearchResultItem, Suggestion};

use crate::engine::{SearchEngine, TemplateQuery};
use crate::error::ApiError;
use serde::de::DeserializeOwned;

/// Client-visible message for any engine-level failure
pub const UPSTREAM_ERROR_MESSAGE: &str = "Error connecting to search servers";

/// Execute a template query and map the response into an envelope.
///
/// Zero matching documents is not an error; it yields an empty envelope
/// with `total == 0`. A document the engine returns but that cannot be
/// mapped (e.g. missing its required `url`) is an engine-level failure,
/// never a partial result.
pub async fn execute<T: DeserializeOwned>(
    engine: &dyn SearchEngine,
    query: &TemplateQuery,
) -> Result<ResultEnvelope<T>, ApiError> {
    let raw = engine.search_template(query).await.map_err(|err| {
        tracing::error!(
            template = %query.template,
            index = %query.index,
            error = %err,
            "templated search failed"
        );
        ApiError::Upstream(UPSTREAM_ERROR_MESSAGE.to_string())
    })?;

    let results = types::from_documents(raw.documents).map_err(|err| {
        tracing::error!(
            template = %query.template,
            error = %err,
            "engine returned an unmappable document"
        );
        ApiError::Upstream(UPSTREAM_ERROR_MESSAGE.to_string())
    })?;

    Ok(ResultEnvelope::new(raw.total, results))
}
