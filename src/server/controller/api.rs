use axum::{http::StatusCode, response::IntoResponse, Json};
use utoipa::OpenApi;

use crate::{
    model::api::{EndpointsDto, ErrorDto},
    server::{
        error::{internal::InternalError, AppError},
        router::ApiDoc,
    },
};

/// Tag for grouping documentation endpoints in OpenAPI documentation
pub static API_TAG: &str = "api";

const ENDPOINTS_JSON: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/endpoints.json"));

/// Describe every available endpoint.
///
/// Serves the static endpoint documentation embedded at build time.
///
/// # Returns
/// - `200 OK` - `{"endpoints": {...}}`
/// - `500 Internal Server Error` - The embedded document is not valid JSON
#[utoipa::path(
    get,
    path = "/api",
    tag = API_TAG,
    responses(
        (status = 200, description = "Endpoint documentation", body = EndpointsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_endpoints() -> Result<impl IntoResponse, AppError> {
    let endpoints =
        serde_json::from_str(ENDPOINTS_JSON).map_err(InternalError::EndpointsDocument)?;

    Ok((StatusCode::OK, Json(EndpointsDto { endpoints })))
}

/// Serve the generated OpenAPI document.
#[utoipa::path(
    get,
    path = "/api/openapi.json",
    tag = API_TAG,
    responses(
        (status = 200, description = "OpenAPI document")
    ),
)]
pub async fn get_openapi() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}

/// Fallback for any path or method without a route.
pub async fn route_not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorDto {
            msg: "Route Not Found".to_string(),
        }),
    )
}
