//! Middleware for Web API.

pub mod cors;
pub mod rate_limit;

pub use cors::create_cors_layer;
pub use rate_limit::{client_key, contact_rate_limit, RateLimitState, RATE_LIMIT_MESSAGE};
