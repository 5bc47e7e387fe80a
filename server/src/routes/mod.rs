//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the contact action and health check, and stitches them
//! with Leptos SSR rendering under a single Axum router. `POST /contact`
//! sits beside the Leptos page route so the form works without WASM.
//! Compiled WASM, JS, and CSS are served from the Leptos site root under
//! `/pkg`.

pub mod contact;

use std::path::PathBuf;

use axum::Router;
use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// API routes used by the hydrated client.
fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/contact", post(contact::submit_contact))
        .route("/healthz", get(healthz))
        .with_state(state)
}

/// API routes + Leptos SSR pages + static assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[[workspace.metadata.leptos]]` section or `LEPTOS_*` env vars).
pub fn leptos_app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(contact_client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || contact_client::app::shell(opts.clone())
        })
        .route(
            "/contact",
            post({
                let state = state.clone();
                move |State(options): State<LeptosOptions>, request: Request| {
                    contact::submit_contact_page(state.clone(), options, request)
                }
            }),
        )
        .with_state(leptos_options.clone());

    let pkg_path = PathBuf::from(leptos_options.site_root.as_ref()).join(leptos_options.site_pkg_dir.as_ref());

    Ok(api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(pkg_path))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
