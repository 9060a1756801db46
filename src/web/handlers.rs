//! HTTP request handlers
//!
//! Thin adapters over the shared validate/resolve/build/map core. The two
//! search variants differ only in whether the language arrives as its own
//! path segment or embedded in the collection name.

use super::state::AppState;
use crate::engine::TemplateQuery;
use crate::error::ApiError;
use crate::health;
use crate::query::{self, SearchRequest, SuggestRequest};
use crate::results::{self, ResultEnvelope, SearchResultItem, Suggestion};
use crate::validate;
use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

/// Query parameters for search
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    /// Result offset
    pub from: Option<u32>,
    /// Page size
    pub size: Option<u32>,
    /// Site filter
    pub site: Option<String>,
}

/// Query parameters for autosuggest
#[derive(Debug, Default, Deserialize)]
pub struct SuggestParams {
    /// Maximum number of suggestions
    pub size: Option<u32>,
}

/// GET /search/:collection/:language/:term
pub async fn search(
    State(state): State<AppState>,
    Path((collection, language, term)): Path<(String, String, String)>,
    Query(params): Query<SearchParams>,
) -> Result<Json<ResultEnvelope<SearchResultItem>>, ApiError> {
    validate::require_collection(&collection)?;
    validate::require_language(&language)?;
    validate::require_term(&term)?;

    let request = search_request(&state, collection, Some(language), term, params);
    let query = query::build_search_query(&state.settings.search, &request);

    run_search(&state, &query).await
}

/// GET /search/:collection/:term — the collection embeds the language
/// (e.g. "cgov_en"), so no separate language segment is validated.
pub async fn search_embedded_language(
    State(state): State<AppState>,
    Path((collection, term)): Path<(String, String)>,
    Query(params): Query<SearchParams>,
) -> Result<Json<ResultEnvelope<SearchResultItem>>, ApiError> {
    validate::require_collection(&collection)?;
    validate::require_term(&term)?;

    let request = search_request(&state, collection, None, term, params);
    let query = query::build_search_query(&state.settings.search, &request);

    run_search(&state, &query).await
}

/// GET /autosuggest/:collection/:language/:term
pub async fn autosuggest(
    State(state): State<AppState>,
    Path((collection, language, term)): Path<(String, String, String)>,
    Query(params): Query<SuggestParams>,
) -> Result<Json<ResultEnvelope<Suggestion>>, ApiError> {
    validate::require_collection(&collection)?;
    validate::require_language(&language)?;
    validate::require_term(&term)?;

    let request = SuggestRequest {
        collection,
        language: Some(language),
        term,
        size: params.size.unwrap_or(crate::DEFAULT_SIZE),
    };
    let query = query::build_suggest_query(&state.settings.autosuggest, &request);

    let envelope = results::execute(state.engine.as_ref(), &query).await?;
    Ok(Json(envelope))
}

/// GET /autosuggest/:collection/:term — the collection embeds the
/// language (e.g. "cgov_en").
pub async fn autosuggest_embedded_language(
    State(state): State<AppState>,
    Path((collection, term)): Path<(String, String)>,
    Query(params): Query<SuggestParams>,
) -> Result<Json<ResultEnvelope<Suggestion>>, ApiError> {
    validate::require_collection(&collection)?;
    validate::require_term(&term)?;

    let request = SuggestRequest {
        collection,
        language: None,
        term,
        size: params.size.unwrap_or(crate::DEFAULT_SIZE),
    };
    let query = query::build_suggest_query(&state.settings.autosuggest, &request);

    let envelope = results::execute(state.engine.as_ref(), &query).await?;
    Ok(Json(envelope))
}

/// GET /search/status
pub async fn search_status(State(state): State<AppState>) -> Result<&'static str, ApiError> {
    health::probe(state.engine.as_ref(), &state.settings.search.alias_name).await
}

/// GET /autosuggest/status
pub async fn autosuggest_status(State(state): State<AppState>) -> Result<&'static str, ApiError> {
    health::probe(state.engine.as_ref(), &state.settings.autosuggest.alias_name).await
}

fn search_request(
    state: &AppState,
    collection: String,
    language: Option<String>,
    term: String,
    params: SearchParams,
) -> SearchRequest {
    SearchRequest {
        collection,
        language,
        term,
        from: params.from.unwrap_or(crate::DEFAULT_FROM),
        size: params.size.unwrap_or(crate::DEFAULT_SIZE),
        site: params.site.unwrap_or_else(|| crate::DEFAULT_SITE.to_string()),
        fields: state.settings.search.fields.clone(),
    }
}

async fn run_search(
    state: &AppState,
    query: &TemplateQuery,
) -> Result<Json<ResultEnvelope<SearchResultItem>>, ApiError> {
    let envelope = results::execute(state.engine.as_ref(), query).await?;
    Ok(Json(envelope))
}
