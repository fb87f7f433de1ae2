//! Router assembly.

mod api;
mod common;
mod pages;

pub use api::api_routes;
pub use common::common_routes;
pub use pages::page_routes;

use crate::config::Settings;
use crate::doc::ApiDoc;
use crate::state::AppState;
use axum::{routing::get, Json, Router};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// The full application: JSON API, pages, probes and the OpenAPI document, wrapped in the
/// body limit and request tracing.
pub fn app(state: AppState, settings: &Settings) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(api_routes(state.clone()))
        .merge(page_routes(state))
        .route("/api-docs/openapi.json", get(openapi))
        .layer(RequestBodyLimitLayer::new(settings.body_limit_bytes))
        .layer(TraceLayer::new_for_http())
}
