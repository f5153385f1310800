//! HTTP server exposing a single greeting endpoint.
//!
//! `GET /` returns a fixed JSON payload and sets `X-Content-Type-Options`
//! so clients never MIME-sniff the body. Routing misses and method
//! mismatches fall through to axum's defaults.

pub mod config;
pub mod routes;

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

/// Creates the axum application router.
pub fn create_app() -> Router {
    Router::new()
        .route("/", get(routes::root::get))
        .layer(TraceLayer::new_for_http())
}
