//! Web API module.
//!
//! Serves the contact form endpoints over HTTP.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod server;

pub use error::ApiError;
pub use handlers::AppState;
pub use middleware::RateLimitState;
pub use router::{create_health_router, create_router};
pub use server::WebServer;
