//! Contact submission persistence.

use std::future::Future;

use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

use super::types::{format_timestamp, Contact, ContactRow, NewContact};
use crate::{IntakeError, Result};

/// Persistence contract for contact submissions.
///
/// The store only ever creates and reads; there is no update or delete.
pub trait ContactStore: Send + Sync + 'static {
    /// Persist a new submission.
    ///
    /// Assigns an identifier, fills in `submitted_at` if absent, and returns
    /// the stored representation.
    fn create(&self, contact: NewContact) -> impl Future<Output = Result<Contact>> + Send;

    /// Return every stored submission in natural retrieval order.
    fn list_all(&self) -> impl Future<Output = Result<Vec<Contact>>> + Send;
}

/// SQLite-backed contact store.
#[derive(Debug, Clone)]
pub struct ContactRepository {
    pool: SqlitePool,
}

impl ContactRepository {
    /// Create a new ContactRepository over the given pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Get a submission by ID.
    pub async fn get_by_id(&self, id: &str) -> Result<Option<Contact>> {
        let row = sqlx::query_as::<_, ContactRow>(
            "SELECT id, name, email, phone, topic, message, submitted_at
             FROM contacts WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Contact::try_from).transpose()
    }

    /// Count stored submissions.
    pub async fn count(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM contacts")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}

impl ContactStore for ContactRepository {
    async fn create(&self, contact: NewContact) -> Result<Contact> {
        let id = Uuid::new_v4().to_string();
        let submitted_at = contact.submitted_at.unwrap_or_else(Utc::now);

        sqlx::query(
            "INSERT INTO contacts (id, name, email, phone, topic, message, submitted_at)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&id)
        .bind(&contact.name)
        .bind(&contact.email)
        .bind(&contact.phone)
        .bind(&contact.topic)
        .bind(&contact.message)
        .bind(format_timestamp(&submitted_at))
        .execute(&self.pool)
        .await?;

        self.get_by_id(&id)
            .await?
            .ok_or_else(|| IntakeError::Database(format!("contact {id} missing after insert")))
    }

    async fn list_all(&self) -> Result<Vec<Contact>> {
        let rows = sqlx::query_as::<_, ContactRow>(
            "SELECT id, name, email, phone, topic, message, submitted_at
             FROM contacts ORDER BY rowid",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Contact::try_from).collect()
    }
}
