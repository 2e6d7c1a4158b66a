//! Query-string construction and parsing.
//!
//! Filter state round-trips through the URL, so links are built from the same
//! `QueryPairs` the filters produce.

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

use leptos::prelude::*;
use leptos_router::hooks::{use_params_map, use_query_map};
use leptos_router::params::ParamsMap;
use url::form_urlencoded;

/// `path` with `pairs` appended as a form-encoded query string.
pub fn href(path: &str, pairs: &[(&'static str, String)]) -> String {
    if pairs.is_empty() {
        return path.to_owned();
    }
    let query = form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs.iter().map(|(k, v)| (*k, v.as_str())))
        .finish();
    format!("{path}?{query}")
}

/// Parse a raw query string into a key lookup. The first occurrence wins.
pub fn parse_lookup(raw: &str) -> impl Fn(&str) -> Option<String> + use<> {
    let pairs = form_urlencoded::parse(raw.trim_start_matches('?').as_bytes())
        .into_owned()
        .collect::<Vec<_>>();
    move |key: &str| pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v.clone())
}

/// Key lookup over router query params.
pub fn params_lookup(params: ParamsMap) -> impl Fn(&str) -> Option<String> {
    move |key: &str| params.get(key)
}

/// Lookup over the current request's query string.
pub fn use_query_lookup() -> impl Fn(&str) -> Option<String> {
    params_lookup(use_query_map().get_untracked())
}

/// The `:slug` route segment, or empty when absent.
pub fn use_slug() -> String {
    use_params_map().get_untracked().get("slug").unwrap_or_default()
}

pub fn country_href(slug: &str) -> String {
    format!("/countries/{slug}")
}

pub fn material_href(slug: &str) -> String {
    format!("/materials/{slug}")
}
