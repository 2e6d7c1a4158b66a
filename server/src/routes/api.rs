//! Read-only JSON API over the dataset store.
//!
//! Every response carries the dataset fingerprint as its `ETag`; a matching
//! `If-None-Match` short-circuits to 304. Query parameters are parsed with the
//! same lenient filters the pages use, so a bad value never yields a 400.

use std::collections::HashMap;

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::header::{ETAG, IF_NONE_MATCH};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use flows::concentration::{Concentration, partner_concentration};
use flows::corridors::extract_corridors;
use flows::countries::{CountryProfile, RoleBreakdown};
use flows::filters::{CountryDetailFilter, CountryFilter, MaterialFilter};
use flows::freshness::{UpdateAge, update_age};
use flows::model::{RawMaterial, TradeFlow};
use flows::pagination::{COUNTRIES_PER_PAGE, CORRIDORS_PER_PAGE, MATERIALS_PER_PAGE, paginate};
use flows::trend::{TrendSignal, trend_signals};
use serde::Serialize;
use thiserror::Error;
use time::{Date, OffsetDateTime};

use crate::state::AppState;

type Params = Query<HashMap<String, String>>;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("no country with slug \"{0}\"")]
    CountryNotFound(String),
    #[error("no material with slug \"{0}\"")]
    MaterialNotFound(String),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            Self::CountryNotFound(_) | Self::MaterialNotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::debug!(error = %self, "api lookup failed");
        let body = serde_json::json!({ "error": self.to_string() });
        (self.status(), Json(body)).into_response()
    }
}

#[derive(Serialize)]
pub struct CountrySummary<'a> {
    pub slug: &'a str,
    pub name: &'a str,
    pub role_breakdown: &'a RoleBreakdown,
    pub concentration: Concentration,
}

impl<'a> CountrySummary<'a> {
    fn from_profile(profile: &'a CountryProfile) -> Self {
        Self {
            slug: &profile.slug,
            name: &profile.name,
            role_breakdown: &profile.role_breakdown,
            concentration: partner_concentration(&profile.partner_counts()),
        }
    }
}

#[derive(Serialize)]
pub struct CountryDetail<'a> {
    #[serde(flatten)]
    pub profile: &'a CountryProfile,
    pub concentration: Concentration,
    pub trends: Vec<TrendSignal>,
}

#[derive(Serialize)]
pub struct MaterialDetail<'a> {
    #[serde(flatten)]
    pub material: &'a RawMaterial,
    pub update_age: Option<UpdateAge>,
    pub related_flows: Vec<&'a TradeFlow>,
}

fn lookup(params: &HashMap<String, String>) -> impl Fn(&str) -> Option<String> + '_ {
    |key: &str| params.get(key).cloned()
}

/// JSON body tagged with the dataset ETag, or a bare 304 when the client
/// already holds it.
fn respond<T: Serialize>(state: &AppState, headers: &HeaderMap, body: &T) -> Response {
    respond_tagged(state.etag(), headers, body)
}

fn respond_tagged<T: Serialize>(etag: String, headers: &HeaderMap, body: &T) -> Response {
    let fresh = headers
        .get(IF_NONE_MATCH)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.split(',').any(|tag| tag.trim() == etag));
    if fresh {
        return (StatusCode::NOT_MODIFIED, [(ETAG, etag)]).into_response();
    }
    (StatusCode::OK, [(ETAG, etag)], Json(body)).into_response()
}

/// `GET /api/flows`: every trade flow in dataset order.
pub async fn list_flows(State(state): State<AppState>, headers: HeaderMap) -> Response {
    respond(&state, &headers, &state.store.flows())
}

/// `GET /api/countries?q&coverage&page`: filtered, paginated summaries.
pub async fn list_countries(State(state): State<AppState>, headers: HeaderMap, Query(params): Params) -> Response {
    let filter = CountryFilter::from_lookup(lookup(&params));
    let summaries = filter
        .apply(state.store.profiles())
        .into_iter()
        .map(CountrySummary::from_profile)
        .collect::<Vec<_>>();
    let page = paginate(summaries, filter.page, COUNTRIES_PER_PAGE);
    respond(&state, &headers, &page)
}

/// `GET /api/countries/{slug}`: profile with concentration and trends.
pub async fn get_country(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(slug): Path<String>,
) -> Result<Response, ApiError> {
    let profile = state.store.country(&slug).ok_or(ApiError::CountryNotFound(slug))?;
    let detail = CountryDetail {
        profile,
        concentration: partner_concentration(&profile.partner_counts()),
        trends: trend_signals(&profile.material_records),
    };
    Ok(respond(&state, &headers, &detail))
}

/// `GET /api/countries/{slug}/corridors?corridor_role&page`
pub async fn list_corridors(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(slug): Path<String>,
    Query(params): Params,
) -> Result<Response, ApiError> {
    let profile = state.store.country(&slug).ok_or(ApiError::CountryNotFound(slug))?;
    let filter = CountryDetailFilter::from_lookup(lookup(&params));
    let corridors = extract_corridors(state.store.flows(), &profile.name)
        .into_iter()
        .filter(|c| filter.corridor_role.matches(c.role))
        .collect::<Vec<_>>();
    let page = paginate(corridors, filter.page, CORRIDORS_PER_PAGE);
    Ok(respond(&state, &headers, &page))
}

/// `GET /api/materials?q&category&confidence&page`
pub async fn list_materials(State(state): State<AppState>, headers: HeaderMap, Query(params): Params) -> Response {
    let filter = MaterialFilter::from_lookup(lookup(&params));
    let page = paginate(filter.apply(state.store.materials()), filter.page, MATERIALS_PER_PAGE);
    respond(&state, &headers, &page)
}

/// `GET /api/materials/{slug}`: material with data points and related flows.
pub async fn get_material(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(slug): Path<String>,
) -> Result<Response, ApiError> {
    material_response(&state, &headers, slug, OffsetDateTime::now_utc().date())
}

/// The body carries `update_age`, so the tag also varies with `today`.
fn material_response(
    state: &AppState,
    headers: &HeaderMap,
    slug: String,
    today: Date,
) -> Result<Response, ApiError> {
    let material = state.store.material(&slug).ok_or(ApiError::MaterialNotFound(slug))?;
    let detail = MaterialDetail {
        material,
        update_age: update_age(material.updated_on, today),
        related_flows: state.store.flows_for_material(material),
    };
    Ok(respond_tagged(state.dated_etag(today), headers, &detail))
}

#[cfg(test)]
#[path = "api_test.rs"]
mod tests;
