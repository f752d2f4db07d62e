//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! One API endpoint (`/api/lead`) plus a health probe; everything else is the
//! static marketing site served from the configured site directory.

pub mod intake;

use std::path::Path;

use axum::Router;
use axum::http::{Method, StatusCode, header};
use axum::routing::{get, post};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// API routes. The lead endpoint answers every non-POST method itself so the
/// rejection carries the JSON error body and `Allow` header.
fn api_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/api/lead", post(intake::submit).fallback(intake::method_not_allowed))
        .layer(cors)
        .route("/healthz", get(healthz))
        .with_state(state)
}

/// Full application: API routes with the static site as fallback.
pub fn app(state: AppState, site_dir: &Path) -> Router {
    let site = ServeDir::new(site_dir).append_index_html_on_directories(true);

    api_routes(state)
        .fallback_service(site)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
