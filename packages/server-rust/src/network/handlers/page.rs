//! Browser page and API description.

use axum::response::Html;
use axum::Json;
use utoipa::OpenApi;

use crate::network::openapi::ApiDoc;

const INDEX_HTML: &str = include_str!("../../../assets/index.html");

/// Serves the calculator page.
pub async fn index_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Serves the OpenAPI document for the JSON endpoints.
pub async fn openapi_handler() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
