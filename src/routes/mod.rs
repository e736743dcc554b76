//! Router assembly: product routes, common routes, not-found fallback and middleware.

mod common;
mod product;
pub use common::common_routes;
pub use product::product_routes;

use crate::handlers::route_not_found;
use crate::state::AppState;
use axum::{extract::DefaultBodyLimit, Router};
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};

/// Default request body limit in bytes.
pub const DEFAULT_BODY_LIMIT: usize = 64 * 1024;

/// Full application router with request tracing and a body size limit.
pub fn app(state: AppState, body_limit: usize) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(product_routes(state))
        .fallback(route_not_found)
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(body_limit))
        .layer(TraceLayer::new_for_http())
}
