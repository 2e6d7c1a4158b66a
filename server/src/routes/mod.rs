//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! One Axum router serves the read-only JSON API, the server-rendered Leptos
//! pages and the stylesheet under `/assets`. Every request is traced and
//! responses are gzip-compressed.

pub mod api;

use std::path::Path;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use client::state::catalog::Catalog;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// JSON API routes. Read-only, so any origin may call them.
pub fn api_routes(state: AppState) -> Router {
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any);

    Router::new()
        .route("/api/flows", get(api::list_flows))
        .route("/api/countries", get(api::list_countries))
        .route("/api/countries/{slug}", get(api::get_country))
        .route("/api/countries/{slug}/corridors", get(api::list_corridors))
        .route("/api/materials", get(api::list_materials))
        .route("/api/materials/{slug}", get(api::get_material))
        .route("/healthz", get(healthz))
        .layer(cors)
        .with_state(state)
}

/// Full application: API routes, Leptos SSR pages and static assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded.
pub fn app(state: AppState, assets_dir: &Path) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let store = state.store.clone();
    let context = move || provide_context(Catalog::new(store.clone()));
    let shell = {
        let opts = leptos_options.clone();
        move || client::app::shell(opts.clone())
    };

    // Unmatched paths still render the app so the router's not-found page
    // sets the 404.
    let leptos_router = Router::new()
        .leptos_routes_with_context(&leptos_options, routes, context.clone(), shell.clone())
        .fallback(leptos_axum::render_app_to_stream_with_context(context, shell))
        .with_state(leptos_options);

    Ok(api_routes(state)
        .merge(leptos_router)
        .nest_service("/assets", ServeDir::new(assets_dir))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

pub async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
