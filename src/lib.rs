//! Contact intake service.
//!
//! Accepts contact form submissions over HTTP, validates and sanitizes them,
//! stores them, and sends a confirmation email to the submitter.

pub mod config;
pub mod contact;
pub mod db;
pub mod error;
pub mod logging;
pub mod mail;
pub mod rate_limit;
pub mod web;

pub use config::Config;
pub use contact::{Contact, ContactRepository, ContactStore, NewContact};
pub use db::Database;
pub use error::{IntakeError, Result};
pub use mail::{Email, Mailer, SmtpMailer};
pub use web::WebServer;
