//! Template name resolution and query construction
//!
//! A search runs through a registered Elasticsearch template, selected by
//! a documented naming convention:
//! - `{prefix}_{collection}_{language}` when the language arrives as its
//!   own path segment,
//! - `{prefix}_{collection}` when the collection already embeds the
//!   language (e.g. "cgov_en").
//!
//! Resolution is pure and deterministic; unrecognized combinations are a
//! caller error caught by [`crate::validate`], never papered over here.

use crate::config::{AutosuggestIndexOptions, SearchIndexOptions};
use crate::engine::TemplateQuery;

/// Resolve the template name for a collection.
///
/// `language` is `Some` for convention (a) and `None` for convention (b).
pub fn resolve_template(prefix: &str, collection: &str, language: Option<&str>) -> String {
    match language {
        Some(lang) => format!("{}_{}_{}", prefix, collection, lang),
        None => format!("{}_{}", prefix, collection),
    }
}

/// A validated full-search request
#[derive(Debug, Clone)]
pub struct SearchRequest {
    pub collection: String,
    /// `None` when the collection embeds the language
    pub language: Option<String>,
    pub term: String,
    pub from: u32,
    pub size: u32,
    pub site: String,
    pub fields: Vec<String>,
}

/// A validated autosuggest request.
///
/// Suggestions have no offset; paginating them is not meaningful and is
/// deliberately not exposed.
#[derive(Debug, Clone)]
pub struct SuggestRequest {
    pub collection: String,
    pub language: Option<String>,
    pub term: String,
    pub size: u32,
}

/// Build the template query for a full search
pub fn build_search_query(options: &SearchIndexOptions, request: &SearchRequest) -> TemplateQuery {
    let template = resolve_template(
        &options.template_prefix,
        &request.collection,
        request.language.as_deref(),
    );

    TemplateQuery::new(&options.alias_name, template)
        .param("my_value", request.term.as_str())
        .param("my_size", request.size)
        .param("my_from", request.from)
        .param("my_fields", quoted_field_list(&request.fields))
        .param("my_site", request.site.as_str())
}

/// Build the template query for an autosuggest lookup
pub fn build_suggest_query(
    options: &AutosuggestIndexOptions,
    request: &SuggestRequest,
) -> TemplateQuery {
    let template = resolve_template(
        &options.template_prefix,
        &request.collection,
        request.language.as_deref(),
    );

    TemplateQuery::new(&options.alias_name, template)
        .param("searchstring", request.term.as_str())
        .param("my_size", request.size)
}

/// Join field names into the quoted, comma-separated form the search
/// templates splice into their source filter.
fn quoted_field_list(fields: &[String]) -> String {
    fields
        .iter()
        .map(|field| format!("\"{}\"", field))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn search_request() -> SearchRequest {
        SearchRequest {
            collection: "cgov".to_string(),
            language: Some("en".to_string()),
            term: "lung cancer".to_string(),
            from: 0,
            size: 10,
            site: "all".to_string(),
            fields: SearchIndexOptions::default().fields,
        }
    }

    #[test]
    fn test_resolution_with_language_segment() {
        assert_eq!(
            resolve_template("cgov_search", "cgov", Some("en")),
            "cgov_search_cgov_en"
        );
        assert_eq!(
            resolve_template("autosg_suggest", "cgov", Some("es")),
            "autosg_suggest_cgov_es"
        );
    }

    #[test]
    fn test_resolution_with_embedded_language() {
        assert_eq!(
            resolve_template("autosg_suggest", "cgov_en", None),
            "autosg_suggest_cgov_en"
        );
        assert_eq!(
            resolve_template("cgov_search", "doc_es", None),
            "cgov_search_doc_es"
        );
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let first = resolve_template("cgov_search", "cgov", Some("en"));
        for _ in 0..10 {
            assert_eq!(resolve_template("cgov_search", "cgov", Some("en")), first);
        }
    }

    #[test]
    fn test_search_query_parameters() {
        let options = SearchIndexOptions::default();
        let query = build_search_query(&options, &search_request());

        assert_eq!(query.index, "cgov");
        assert_eq!(query.template, "cgov_search_cgov_en");
        assert_eq!(query.params["my_value"], "lung cancer");
        assert_eq!(query.params["my_size"], 10);
        assert_eq!(query.params["my_from"], 0);
        assert_eq!(query.params["my_site"], "all");
        assert_eq!(
            query.params["my_fields"],
            "\"url\", \"title\", \"metatag-description\", \"metatag-dcterms-type\""
        );
    }

    #[test]
    fn test_search_query_honors_paging() {
        let options = SearchIndexOptions::default();
        let mut request = search_request();
        request.from = 20;
        request.size = 50;

        let query = build_search_query(&options, &request);
        assert_eq!(query.params["my_from"], 20);
        assert_eq!(query.params["my_size"], 50);
    }

    #[test]
    fn test_suggest_query_parameters() {
        let options = AutosuggestIndexOptions::default();
        let request = SuggestRequest {
            collection: "cgov".to_string(),
            language: Some("en".to_string()),
            term: "breast cancer".to_string(),
            size: 10,
        };

        let query = build_suggest_query(&options, &request);
        assert_eq!(query.index, "autosg");
        assert_eq!(query.template, "autosg_suggest_cgov_en");
        assert_eq!(query.params["searchstring"], "breast cancer");
        assert_eq!(query.params["my_size"], 10);
        assert_eq!(query.params.len(), 2);
    }

    #[test]
    fn test_quoted_field_list() {
        let fields = vec!["url".to_string(), "title".to_string()];
        assert_eq!(quoted_field_list(&fields), "\"url\", \"title\"");
        assert_eq!(quoted_field_list(&[]), "");
    }
}
