//! Rate limiting and request logging middleware.

use crate::error::ProxyError;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use governor::{
    clock::DefaultClock,
    state::{InMemoryState, NotKeyed},
    Quota, RateLimiter,
};
use std::{num::NonZeroU32, sync::Arc, time::Instant};
use tracing::{debug, warn};

/// Global request limiter, shared across all callers.
pub type RelayLimiter = RateLimiter<NotKeyed, InMemoryState, DefaultClock>;

/// Rate limiter state shared across requests.
#[derive(Clone)]
pub struct RateLimitState {
    limiter: Arc<RelayLimiter>,
}

impl RateLimitState {
    /// Allow `requests_per_minute` in total, across all callers.
    pub fn new(requests_per_minute: u32) -> Self {
        let per_minute = NonZeroU32::new(requests_per_minute).unwrap_or(NonZeroU32::MIN);

        Self {
            limiter: Arc::new(RateLimiter::direct(Quota::per_minute(per_minute))),
        }
    }

    /// Effectively unlimited, for tests.
    pub fn permissive() -> Self {
        Self::new(10_000)
    }

    /// Whether one more request fits in the current window.
    pub fn check(&self) -> bool {
        self.limiter.check().is_ok()
    }
}

/// Reject requests over the global rate limit with a JSON 429.
pub async fn rate_limit_middleware(
    State(rate_limit): State<RateLimitState>,
    request: Request,
    next: Next,
) -> Result<Response, ProxyError> {
    if !rate_limit.check() {
        warn!("global rate limit exceeded");
        return Err(ProxyError::RateLimited);
    }

    Ok(next.run(request).await)
}

/// Log every request with its outcome and duration.
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let start = Instant::now();

    let response = next.run(request).await;

    let status = response.status();
    let duration = start.elapsed();
    if status.is_client_error() || status.is_server_error() {
        warn!(%method, %uri, %status, ?duration, "request failed");
    } else {
        debug!(%method, %uri, %status, ?duration, "request completed");
    }

    response
}
