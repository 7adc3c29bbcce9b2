//! HTTP API for the model-list relay.

mod handlers;
mod middleware;

pub use handlers::*;
pub use middleware::{logging_middleware, rate_limit_middleware, RateLimitState};

use crate::upstream::UpstreamClient;
use axum::{
    middleware as axum_middleware,
    routing::{any, get},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Upstream script endpoint client
    pub upstream: Arc<UpstreamClient>,
}

impl AppState {
    /// Create new application state.
    pub fn new(upstream: UpstreamClient) -> Self {
        Self {
            upstream: Arc::new(upstream),
        }
    }
}

/// Create the API router with the default rate limit.
pub fn create_router(state: AppState) -> Router {
    create_router_with_rate_limit(state, RateLimitState::new(60))
}

/// Create the API router with a custom rate limit.
pub fn create_router_with_rate_limit(state: AppState, rate_limit: RateLimitState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        // The relay inspects the method itself: GET forwards, OPTIONS
        // answers the preflight, anything else is a JSON 405.
        .route("/api/models", any(handlers::relay_models))
        .layer(axum_middleware::from_fn_with_state(
            rate_limit.clone(),
            rate_limit_middleware,
        ))
        .layer(axum_middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
