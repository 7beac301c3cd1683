//! Rate limiting middleware for contact submissions.

use axum::{
    body::Body,
    extract::ConnectInfo,
    http::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::{
    net::SocketAddr,
    sync::Arc,
    time::{Duration, Instant},
};

use crate::rate_limit::{RateLimitResult, RateLimitStore};
use crate::web::error::ApiError;

/// Plain-text body of the 429 response.
pub const RATE_LIMIT_MESSAGE: &str =
    "Too many contact requests from this IP, please try again later.";

/// State for the submission rate limit.
#[derive(Clone)]
pub struct RateLimitState {
    /// Injected counter store.
    store: Arc<dyn RateLimitStore>,
    /// Read client address from proxy headers.
    trust_proxy: bool,
}

impl RateLimitState {
    /// Create a new rate limit state.
    pub fn new(store: Arc<dyn RateLimitStore>, trust_proxy: bool) -> Self {
        Self { store, trust_proxy }
    }

    /// Count a request from `key`.
    pub fn check(&self, key: &str) -> RateLimitResult {
        self.store.hit(key, Instant::now())
    }

    /// Start a background task to periodically clean up old entries.
    pub fn start_cleanup_task(&self) {
        let store = Arc::clone(&self.store);
        tokio::spawn(async move {
            loop {
                tokio::time::sleep(Duration::from_secs(300)).await; // Every 5 minutes
                store.cleanup(Instant::now());
            }
        });
    }
}

/// Extract the client key from a request.
///
/// Proxy headers are only consulted when `trust_proxy` is set.
pub fn client_key(req: &Request<Body>, trust_proxy: bool) -> String {
    if trust_proxy {
        // Take the first IP in the chain
        if let Some(ip) = req
            .headers()
            .get("X-Forwarded-For")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(',').next())
            .map(str::trim)
            .filter(|ip| !ip.is_empty())
        {
            return ip.to_string();
        }

        if let Some(real_ip) = req
            .headers()
            .get("X-Real-IP")
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|ip| !ip.is_empty())
        {
            return real_ip.to_string();
        }
    }

    if let Some(ConnectInfo(addr)) = req.extensions().get::<ConnectInfo<SocketAddr>>() {
        return addr.ip().to_string();
    }

    "unknown".to_string()
}

/// Rate limiting middleware for the submission endpoint.
pub async fn contact_rate_limit(
    state: RateLimitState,
    req: Request<Body>,
    next: Next,
) -> Response {
    let key = client_key(&req, state.trust_proxy);

    if let RateLimitResult::Denied { retry_after } = state.check(&key) {
        tracing::warn!(client = %key, "Contact rate limit exceeded");
        return ApiError::rate_limited(RATE_LIMIT_MESSAGE, retry_after).into_response();
    }

    next.run(req).await
}
