use std::collections::HashMap;

use axum::body::to_bytes;
use axum::extract::{Path, Query, State};
use axum::http::header::{ETAG, IF_NONE_MATCH};
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use flows::DataStore;
use serde_json::Value;
use time::{Date, Month};

use super::*;
use crate::routes::healthz;
use crate::state::AppState;

fn state() -> AppState {
    AppState::new(DataStore::builtin().unwrap())
}

fn query(pairs: &[(&str, &str)]) -> Query<HashMap<String, String>> {
    Query(
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect(),
    )
}

async fn json(resp: Response) -> Value {
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn flows_carry_dataset_etag() {
    let state = state();
    let resp = list_flows(State(state.clone()), HeaderMap::new()).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers().get(ETAG).unwrap(), state.etag().as_str());

    let body = json(resp).await;
    let flows = body.as_array().unwrap();
    assert_eq!(flows.len(), state.store.flows().len());
    assert_eq!(flows[0]["product"], "Crude oil");
}

#[tokio::test]
async fn matching_if_none_match_returns_not_modified() {
    let state = state();
    let mut headers = HeaderMap::new();
    headers.insert(IF_NONE_MATCH, HeaderValue::from_str(&format!("\"stale\", {}", state.etag())).unwrap());

    let resp = list_flows(State(state.clone()), headers).await;
    assert_eq!(resp.status(), StatusCode::NOT_MODIFIED);

    let mut stale = HeaderMap::new();
    stale.insert(IF_NONE_MATCH, HeaderValue::from_static("\"stale\""));
    let resp = list_flows(State(state), stale).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn countries_filter_by_text() {
    let resp = list_countries(State(state()), HeaderMap::new(), query(&[("q", "chi")])).await;
    let body = json(resp).await;

    let names = body["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap().to_owned())
        .collect::<Vec<_>>();
    assert!(names.contains(&"Chile".to_owned()));
    assert!(names.contains(&"China".to_owned()));
    assert!(names.iter().all(|n| n.to_lowercase().contains("chi")));
    assert!(body["items"][0]["concentration"]["risk_band"].is_string());
}

#[tokio::test]
async fn countries_garbage_page_falls_back_to_first() {
    let resp = list_countries(State(state()), HeaderMap::new(), query(&[("page", "banana")])).await;
    let body = json(resp).await;
    assert_eq!(body["page"], 1);
    assert_eq!(body["per_page"], COUNTRIES_PER_PAGE);
}

#[tokio::test]
async fn unknown_country_is_json_404() {
    let err = get_country(State(state()), HeaderMap::new(), Path("atlantis".to_owned()))
        .await
        .unwrap_err();
    let resp = err.into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body = json(resp).await;
    assert!(body["error"].as_str().unwrap().contains("atlantis"));
}

#[tokio::test]
async fn country_detail_includes_derived_fields() {
    let resp = get_country(State(state()), HeaderMap::new(), Path("chile".to_owned()))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = json(resp).await;
    assert_eq!(body["name"], "Chile");
    assert_eq!(body["role_breakdown"]["importer_count"], 0);
    assert!(body["concentration"]["hhi"].is_number());
    assert!(body["trends"].is_array());
}

#[tokio::test]
async fn corridors_respect_role_filter() {
    let state = state();
    let inbound = list_corridors(
        State(state.clone()),
        HeaderMap::new(),
        Path("chile".to_owned()),
        query(&[("corridor_role", "importer")]),
    )
    .await
    .unwrap();
    let body = json(inbound).await;
    assert_eq!(body["total_items"], 0);
    assert_eq!(body["page"], 1);

    let all = list_corridors(State(state), HeaderMap::new(), Path("chile".to_owned()), query(&[]))
        .await
        .unwrap();
    let body = json(all).await;
    let items = body["items"].as_array().unwrap();
    assert!(!items.is_empty());
    assert!(items.iter().all(|c| c["role"] == "exporter"));
}

#[tokio::test]
async fn materials_filter_by_category() {
    let resp = list_materials(
        State(state()),
        HeaderMap::new(),
        query(&[("category", "critical_mineral")]),
    )
    .await;
    let body = json(resp).await;

    assert_eq!(body["total_items"], 4);
    let items = body["items"].as_array().unwrap();
    assert!(items.iter().all(|m| m["category"] == "critical_mineral"));
}

#[tokio::test]
async fn material_detail_lists_points_and_related_flows() {
    let resp = get_material(State(state()), HeaderMap::new(), Path("lithium".to_owned()))
        .await
        .unwrap();
    let body = json(resp).await;

    assert_eq!(body["name"], "Lithium");
    assert_eq!(body["data_points"].as_array().unwrap().len(), 6);
    let related = body["related_flows"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["product"].as_str().unwrap().to_owned())
        .collect::<Vec<_>>();
    assert!(related.contains(&"Lithium carbonate".to_owned()));
}

fn day(d: u8) -> Date {
    Date::from_calendar_date(2026, Month::March, d).unwrap()
}

#[test]
fn material_etag_changes_with_the_date() {
    let state = state();
    let first = material_response(&state, &HeaderMap::new(), "lithium".to_owned(), day(1)).unwrap();
    let second = material_response(&state, &HeaderMap::new(), "lithium".to_owned(), day(2)).unwrap();

    let tag = |resp: &Response| resp.headers().get(ETAG).unwrap().clone();
    assert_ne!(tag(&first), tag(&second));
    assert_ne!(tag(&first), state.etag().as_str());
}

#[test]
fn yesterdays_material_tag_is_not_fresh_today() {
    let state = state();
    let mut headers = HeaderMap::new();
    headers.insert(IF_NONE_MATCH, HeaderValue::from_str(&state.dated_etag(day(1))).unwrap());

    let same_day = material_response(&state, &headers, "lithium".to_owned(), day(1)).unwrap();
    assert_eq!(same_day.status(), StatusCode::NOT_MODIFIED);

    let next_day = material_response(&state, &headers, "lithium".to_owned(), day(2)).unwrap();
    assert_eq!(next_day.status(), StatusCode::OK);
}

#[tokio::test]
async fn unknown_material_is_404() {
    let err = get_material(State(state()), HeaderMap::new(), Path("unobtainium".to_owned()))
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::MaterialNotFound(_)));
    assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn healthz_is_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}
