//! Outbound mail module.
//!
//! This module provides:
//! - The [`Mailer`] transport contract and its SMTP implementation
//! - Composition of the confirmation sent to submitters
//! - Detached, log-only dispatch

mod smtp;
mod template;

pub use smtp::{relay_host, SmtpMailer};
pub use template::{confirmation_email, CONFIRMATION_SUBJECT, TOPIC_PLACEHOLDER};

use std::future::Future;
use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::Result;

/// A plain-text email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Email {
    /// Recipient address.
    pub to: String,
    /// Subject line.
    pub subject: String,
    /// Plain-text body.
    pub body: String,
}

/// Outbound mail transport.
pub trait Mailer: Send + Sync + 'static {
    /// Send one email. Delivery is attempted exactly once.
    fn send(&self, email: Email) -> impl Future<Output = Result<()>> + Send;
}

/// Send `email` on a detached task.
///
/// The outcome is only logged. Callers may drop the handle; it is returned
/// so tests can wait for the send to finish.
pub fn dispatch<M: Mailer>(mailer: Arc<M>, email: Email) -> JoinHandle<()> {
    tokio::spawn(async move {
        let to = email.to.clone();
        match mailer.send(email).await {
            Ok(()) => tracing::info!(to = %to, "Confirmation email sent"),
            Err(e) => tracing::warn!(to = %to, error = %e, "Failed to send confirmation email"),
        }
    })
}
