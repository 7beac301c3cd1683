//! API handlers.

pub mod contact;

pub use contact::*;

use std::sync::Arc;

use crate::contact::ContactStore;
use crate::mail::Mailer;

/// Application state shared across handlers.
///
/// The store and mailer are created once at startup and shared by every
/// request.
pub struct AppState<S, M> {
    /// Submission store.
    pub store: Arc<S>,
    /// Outbound mail transport.
    pub mailer: Arc<M>,
}

impl<S: ContactStore, M: Mailer> AppState<S, M> {
    /// Create a new application state.
    pub fn new(store: Arc<S>, mailer: Arc<M>) -> Self {
        Self { store, mailer }
    }
}

impl<S, M> Clone for AppState<S, M> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            mailer: Arc::clone(&self.mailer),
        }
    }
}
