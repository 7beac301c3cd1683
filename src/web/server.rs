//! Web server for the contact intake service.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::compression::CompressionLayer;

use crate::config::Config;
use crate::contact::ContactStore;
use crate::error::{IntakeError, Result};
use crate::mail::Mailer;
use crate::rate_limit::{RateLimitConfig, SlidingWindowLimiter};

use super::handlers::AppState;
use super::middleware::RateLimitState;
use super::router::{create_health_router, create_router};

/// Web server for the API.
pub struct WebServer<S, M> {
    /// Server address.
    addr: SocketAddr,
    /// Application state.
    app_state: Arc<AppState<S, M>>,
    /// Submission rate limit.
    rate_limit: RateLimitState,
    /// Allowed CORS origins.
    cors_origins: Vec<String>,
}

impl<S: ContactStore, M: Mailer> WebServer<S, M> {
    /// Create a new web server.
    pub fn new(config: &Config, store: Arc<S>, mailer: Arc<M>) -> Result<Self> {
        let addr = format!("{}:{}", config.server.host, config.server.port)
            .parse()
            .map_err(|e| IntakeError::Config(format!("invalid server address: {e}")))?;

        let limiter = SlidingWindowLimiter::new(RateLimitConfig::new(
            config.rate_limit.max_requests,
            config.rate_limit.window_secs,
        ));
        let rate_limit = RateLimitState::new(Arc::new(limiter), config.rate_limit.trust_proxy);

        Ok(Self {
            addr,
            app_state: Arc::new(AppState::new(store, mailer)),
            rate_limit,
            cors_origins: config.server.cors_origins.clone(),
        })
    }

    /// Get the server address.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    fn into_router(self) -> Router {
        create_router(self.app_state, self.rate_limit, &self.cors_origins)
            .merge(create_health_router())
            .layer(CompressionLayer::new())
    }

    async fn bind(self) -> Result<(TcpListener, Router)> {
        let listener = TcpListener::bind(self.addr).await?;

        self.rate_limit.start_cleanup_task();
        tracing::info!("Rate limit cleanup task started");

        Ok((listener, self.into_router()))
    }

    /// Run the web server.
    pub async fn run(self) -> Result<()> {
        let (listener, router) = self.bind().await?;

        tracing::info!("Web server listening on http://{}", listener.local_addr()?);

        axum::serve(
            listener,
            router.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .await?;
        Ok(())
    }

    /// Run the server and return the actual bound address.
    ///
    /// This is useful for testing when binding to port 0.
    pub async fn run_with_addr(self) -> Result<SocketAddr> {
        let (listener, router) = self.bind().await?;
        let local_addr = listener.local_addr()?;

        tracing::info!("Web server listening on http://{}", local_addr);

        tokio::spawn(async move {
            if let Err(e) = axum::serve(
                listener,
                router.into_make_service_with_connect_info::<SocketAddr>(),
            )
            .await
            {
                tracing::error!("Web server error: {}", e);
            }
        });

        Ok(local_addr)
    }
}
