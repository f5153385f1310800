//! Root endpoint.

use axum::Json;
use axum::http::header;
use axum::response::IntoResponse;
use serde::Serialize;

#[derive(Serialize)]
pub struct RootResponse {
    pub message: &'static str,
}

/// GET / — returns the greeting payload.
///
/// Every response carries `X-Content-Type-Options: nosniff`. The handler
/// reads nothing from the request and holds no state, so concurrent
/// invocations are independent.
pub async fn get() -> impl IntoResponse {
    (
        [(header::X_CONTENT_TYPE_OPTIONS, "nosniff")],
        Json(RootResponse {
            message: "Hello World",
        }),
    )
}
