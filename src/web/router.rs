//! Router configuration for Web API.

use axum::{middleware, routing::get, routing::post, Router};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use super::handlers::{list_contacts, submit_contact, AppState};
use super::middleware::{contact_rate_limit, create_cors_layer, RateLimitState};
use crate::contact::ContactStore;
use crate::mail::Mailer;

/// Create the main API router.
///
/// Only `POST /contact` is rate limited. Listing and unsupported methods
/// (which get a 405) do not count against the limit.
pub fn create_router<S: ContactStore, M: Mailer>(
    app_state: Arc<AppState<S, M>>,
    rate_limit: RateLimitState,
    cors_origins: &[String],
) -> Router {
    let contact_routes = post(submit_contact::<S, M>)
        .route_layer(middleware::from_fn(move |req, next| {
            let state = rate_limit.clone();
            contact_rate_limit(state, req, next)
        }))
        .get(list_contacts::<S, M>);

    Router::new()
        .route("/contact", contact_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(create_cors_layer(cors_origins)),
        )
        .with_state(app_state)
}

/// Create a health check router.
pub fn create_health_router() -> Router {
    Router::new().route("/health", get(health_check))
}

/// Health check handler.
async fn health_check() -> &'static str {
    "OK"
}
