//! Per-client rate limiting for contact submissions.
//!
//! Counters live behind the [`RateLimitStore`] trait so the HTTP layer owns
//! an injected store instead of module-level state. [`SlidingWindowLimiter`]
//! is the in-memory implementation; counters are not persisted across
//! restarts.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

/// Configuration for rate limiting.
#[derive(Debug, Clone, Copy)]
pub struct RateLimitConfig {
    /// Maximum requests allowed in the time window.
    pub max_requests: u32,
    /// Time window for counting requests.
    pub window: Duration,
}

impl RateLimitConfig {
    /// Create a new rate limit configuration.
    pub fn new(max_requests: u32, window_secs: u64) -> Self {
        Self {
            max_requests,
            window: Duration::from_secs(window_secs),
        }
    }
}

impl Default for RateLimitConfig {
    /// 10 submissions per 15 minutes.
    fn default() -> Self {
        Self::new(10, 15 * 60)
    }
}

/// Result of a rate limit check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RateLimitResult {
    /// Request is allowed.
    Allowed,
    /// Request is denied due to rate limit.
    Denied {
        /// Time until the oldest counted request leaves the window.
        retry_after: Duration,
    },
}

impl RateLimitResult {
    /// Check if the request is allowed.
    pub fn is_allowed(&self) -> bool {
        matches!(self, RateLimitResult::Allowed)
    }
}

/// Counter store keyed by client identifier.
///
/// Implementations must be safe under concurrent calls from many requests.
pub trait RateLimitStore: Send + Sync {
    /// Count a request for `key` at `now`, or deny it if the key is over quota.
    fn hit(&self, key: &str, now: Instant) -> RateLimitResult;

    /// Drop state that no longer affects any decision at `now`.
    fn cleanup(&self, now: Instant);
}

/// Tracks request timestamps for a single client.
#[derive(Debug, Default)]
struct ClientHits {
    timestamps: Vec<Instant>,
}

impl ClientHits {
    /// Remove timestamps outside the window ending at `now`.
    fn prune(&mut self, window: Duration, now: Instant) {
        self.timestamps
            .retain(|&t| now.saturating_duration_since(t) < window);
    }

    fn oldest(&self) -> Option<Instant> {
        self.timestamps.iter().min().copied()
    }
}

/// Sliding-window rate limiter.
///
/// # Example
///
/// ```
/// use contact_intake::rate_limit::{RateLimitConfig, RateLimitStore, SlidingWindowLimiter};
/// use std::time::Instant;
///
/// let limiter = SlidingWindowLimiter::new(RateLimitConfig::new(2, 60));
/// let now = Instant::now();
///
/// assert!(limiter.hit("203.0.113.7", now).is_allowed());
/// assert!(limiter.hit("203.0.113.7", now).is_allowed());
/// assert!(!limiter.hit("203.0.113.7", now).is_allowed());
/// ```
#[derive(Debug)]
pub struct SlidingWindowLimiter {
    config: RateLimitConfig,
    clients: Mutex<HashMap<String, ClientHits>>,
}

impl SlidingWindowLimiter {
    /// Create a new rate limiter with the given configuration.
    pub fn new(config: RateLimitConfig) -> Self {
        Self {
            config,
            clients: Mutex::new(HashMap::new()),
        }
    }

    /// The configuration this limiter enforces.
    #[cfg(test)]
    pub fn config(&self) -> RateLimitConfig {
        self.config
    }

    /// Number of requests still allowed for `key` at `now`.
    #[cfg(test)]
    pub fn remaining(&self, key: &str, now: Instant) -> u32 {
        let clients = self.lock();
        let used = clients
            .get(key)
            .map(|hits| {
                hits.timestamps
                    .iter()
                    .filter(|&&t| now.saturating_duration_since(t) < self.config.window)
                    .count()
            })
            .unwrap_or(0);
        self.config.max_requests.saturating_sub(used as u32)
    }

    /// Number of clients currently tracked.
    #[cfg(test)]
    pub fn tracked_clients(&self) -> usize {
        self.lock().len()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, ClientHits>> {
        self.clients.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl RateLimitStore for SlidingWindowLimiter {
    fn hit(&self, key: &str, now: Instant) -> RateLimitResult {
        let mut clients = self.lock();
        let hits = clients.entry(key.to_string()).or_default();

        hits.prune(self.config.window, now);

        if hits.timestamps.len() >= self.config.max_requests as usize {
            let retry_after = hits
                .oldest()
                .map(|oldest| {
                    self.config
                        .window
                        .saturating_sub(now.saturating_duration_since(oldest))
                })
                .unwrap_or(Duration::ZERO);
            return RateLimitResult::Denied { retry_after };
        }

        hits.timestamps.push(now);
        RateLimitResult::Allowed
    }

    fn cleanup(&self, now: Instant) {
        let mut clients = self.lock();

        for hits in clients.values_mut() {
            hits.prune(self.config.window, now);
        }

        clients.retain(|_, hits| !hits.timestamps.is_empty());
    }
}
