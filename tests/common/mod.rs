//! Test helpers for Web API tests.
//!
//! Builds an in-process router around an in-memory store and fake mailers.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum_test::TestServer;
use contact_intake::rate_limit::{RateLimitConfig, SlidingWindowLimiter};
use contact_intake::web::router::create_router;
use contact_intake::web::{AppState, RateLimitState};
use contact_intake::{
    Contact, ContactRepository, ContactStore, Database, Email, IntakeError, Mailer, NewContact,
    Result,
};

/// Default timeout for waiting on background mail tasks.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Mailer that records every email it is asked to send.
#[derive(Default)]
pub struct RecordingMailer {
    sent: Mutex<Vec<Email>>,
}

impl RecordingMailer {
    /// Snapshot of the emails sent so far.
    pub fn sent(&self) -> Vec<Email> {
        self.sent.lock().unwrap().clone()
    }

    /// Wait until at least `count` emails were sent.
    pub async fn wait_for(&self, count: usize) -> Vec<Email> {
        let deadline = tokio::time::Instant::now() + DEFAULT_TIMEOUT;
        loop {
            let sent = self.sent();
            if sent.len() >= count || tokio::time::Instant::now() >= deadline {
                return sent;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
    }
}

impl Mailer for RecordingMailer {
    async fn send(&self, email: Email) -> Result<()> {
        self.sent.lock().unwrap().push(email);
        Ok(())
    }
}

/// Mailer whose relay always rejects the message.
#[derive(Default)]
pub struct FailingMailer {
    attempts: Mutex<usize>,
}

impl FailingMailer {
    pub fn attempts(&self) -> usize {
        *self.attempts.lock().unwrap()
    }
}

impl Mailer for FailingMailer {
    async fn send(&self, _email: Email) -> Result<()> {
        *self.attempts.lock().unwrap() += 1;
        Err(IntakeError::Mail("relay unavailable".to_string()))
    }
}

/// Store whose every operation fails.
pub struct FailingStore;

impl ContactStore for FailingStore {
    async fn create(&self, _contact: NewContact) -> Result<Contact> {
        Err(IntakeError::Database("disk full".to_string()))
    }

    async fn list_all(&self) -> Result<Vec<Contact>> {
        Err(IntakeError::Database("disk full".to_string()))
    }
}

/// Options for building a test server.
pub struct TestOptions {
    pub max_requests: u32,
    pub window_secs: u64,
    pub trust_proxy: bool,
}

impl Default for TestOptions {
    fn default() -> Self {
        Self {
            max_requests: 10,
            window_secs: 900,
            trust_proxy: true,
        }
    }
}

/// Build a test server over arbitrary store and mailer implementations.
pub fn create_server_with<S: ContactStore, M: Mailer>(
    store: Arc<S>,
    mailer: Arc<M>,
    options: TestOptions,
) -> TestServer {
    let limiter = SlidingWindowLimiter::new(RateLimitConfig::new(
        options.max_requests,
        options.window_secs,
    ));
    let rate_limit = RateLimitState::new(Arc::new(limiter), options.trust_proxy);
    let app_state = Arc::new(AppState::new(store, mailer));

    let router = create_router(app_state, rate_limit, &[]);
    TestServer::new(router).expect("Failed to create test server")
}

/// A test server backed by an in-memory database.
pub struct TestApp {
    pub server: TestServer,
    pub repo: Arc<ContactRepository>,
    pub mailer: Arc<RecordingMailer>,
}

/// Create a test application with the given rate limit options.
pub async fn create_test_app_with(options: TestOptions) -> TestApp {
    let db = Database::open_in_memory()
        .await
        .expect("Failed to create test database");
    let repo = Arc::new(ContactRepository::new(db.pool().clone()));
    let mailer = Arc::new(RecordingMailer::default());

    let server = create_server_with(Arc::clone(&repo), Arc::clone(&mailer), options);

    TestApp {
        server,
        repo,
        mailer,
    }
}

/// Create a test application with default limits.
pub async fn create_test_app() -> TestApp {
    create_test_app_with(TestOptions::default()).await
}
