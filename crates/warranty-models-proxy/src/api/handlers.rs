//! HTTP request handlers.

use super::AppState;
use crate::error::ProxyError;
use axum::extract::{Query, State};
use axum::http::{header, HeaderMap, HeaderValue, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Reflected origin when the caller declares none.
const ANY_ORIGIN: &str = "*";

/// Query parameters accepted by the relay route.
#[derive(Debug, Deserialize)]
pub struct RelayQuery {
    /// Caller-declared origin; takes precedence over the Origin header.
    origin: Option<String>,
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Health check endpoint.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// Relay a model-list lookup to the upstream script endpoint.
///
/// GET forwards upstream and returns the JSON body verbatim; OPTIONS
/// answers the CORS preflight with 204 and no body; any other method is
/// a JSON 405. The caller origin is reflected in the CORS headers, so
/// cacheable responses carry `Vary: Origin`.
pub async fn relay_models(
    State(state): State<AppState>,
    method: Method,
    Query(query): Query<RelayQuery>,
    headers: HeaderMap,
) -> Result<Response, ProxyError> {
    let origin = resolve_origin(&query, &headers);

    if method == Method::OPTIONS {
        let mut response_headers = cors_headers(&origin);
        response_headers.insert(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("GET, OPTIONS"),
        );
        return Ok((StatusCode::NO_CONTENT, response_headers).into_response());
    }

    if method != Method::GET {
        return Err(ProxyError::MethodNotAllowed);
    }

    info!(origin = %origin, "relaying model lookup");
    let body = state.upstream.fetch_models(&origin).await?;

    let mut response_headers = cors_headers(&origin);
    response_headers.insert(header::VARY, HeaderValue::from_static("Origin"));

    Ok((StatusCode::OK, response_headers, Json(body)).into_response())
}

/// Caller origin: explicit query parameter first, then the Origin
/// header, then the wildcard.
fn resolve_origin(query: &RelayQuery, headers: &HeaderMap) -> String {
    query
        .origin
        .clone()
        .or_else(|| {
            headers
                .get(header::ORIGIN)
                .and_then(|value| value.to_str().ok())
                .map(str::to_string)
        })
        .unwrap_or_else(|| ANY_ORIGIN.to_string())
}

fn cors_headers(origin: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_str(origin).unwrap_or_else(|_| HeaderValue::from_static(ANY_ORIGIN)),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type"),
    );
    headers
}
