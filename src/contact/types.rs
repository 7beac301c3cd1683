//! Contact submission types.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use crate::{IntakeError, Result};

/// A stored contact submission.
///
/// Stored submissions are never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    /// Identifier assigned by the store.
    pub id: String,
    /// Submitter name (escaped).
    pub name: String,
    /// Normalized submitter email address.
    pub email: String,
    /// Phone number (escaped).
    pub phone: Option<String>,
    /// Topic of the message (escaped).
    pub topic: Option<String>,
    /// Message body (escaped).
    pub message: String,
    /// When the submission was persisted.
    pub submitted_at: DateTime<Utc>,
}

/// Data for creating a new contact submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContact {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub topic: Option<String>,
    pub message: String,
    /// Defaults to the time of persistence when `None`.
    pub submitted_at: Option<DateTime<Utc>>,
}

impl NewContact {
    /// Create a new submission with the required fields.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: None,
            topic: None,
            message: message.into(),
            submitted_at: None,
        }
    }

    /// Set the phone number.
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// Set the topic.
    pub fn with_topic(mut self, topic: impl Into<String>) -> Self {
        self.topic = Some(topic.into());
        self
    }

    /// Set an explicit submission timestamp.
    pub fn with_submitted_at(mut self, submitted_at: DateTime<Utc>) -> Self {
        self.submitted_at = Some(submitted_at);
        self
    }
}

/// Raw database row for a contact.
#[derive(Debug, Clone, sqlx::FromRow)]
pub(crate) struct ContactRow {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub topic: Option<String>,
    pub message: String,
    pub submitted_at: String,
}

impl TryFrom<ContactRow> for Contact {
    type Error = IntakeError;

    fn try_from(row: ContactRow) -> Result<Self> {
        let submitted_at = DateTime::parse_from_rfc3339(&row.submitted_at)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|e| {
                IntakeError::Database(format!(
                    "invalid submitted_at for contact {}: {e}",
                    row.id
                ))
            })?;

        Ok(Self {
            id: row.id,
            name: row.name,
            email: row.email,
            phone: row.phone,
            topic: row.topic,
            message: row.message,
            submitted_at,
        })
    }
}

/// Format a timestamp the way it is stored.
pub(crate) fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_new_contact_builder() {
        let ts = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();
        let contact = NewContact::new("Ann", "ann@example.com", "Hello")
            .with_phone("555-0100")
            .with_topic("Sales")
            .with_submitted_at(ts);

        assert_eq!(contact.name, "Ann");
        assert_eq!(contact.phone.as_deref(), Some("555-0100"));
        assert_eq!(contact.topic.as_deref(), Some("Sales"));
        assert_eq!(contact.submitted_at, Some(ts));
    }

    #[test]
    fn test_row_conversion() {
        let row = ContactRow {
            id: "abc".to_string(),
            name: "Ann".to_string(),
            email: "ann@example.com".to_string(),
            phone: None,
            topic: None,
            message: "Hello".to_string(),
            submitted_at: "2026-10-14T09:30:00.000000Z".to_string(),
        };

        let contact = Contact::try_from(row).unwrap();
        assert_eq!(
            contact.submitted_at,
            Utc.with_ymd_and_hms(2026, 10, 14, 9, 30, 0).unwrap()
        );
    }

    #[test]
    fn test_row_conversion_bad_timestamp() {
        let row = ContactRow {
            id: "abc".to_string(),
            name: "Ann".to_string(),
            email: "ann@example.com".to_string(),
            phone: None,
            topic: None,
            message: "Hello".to_string(),
            submitted_at: "yesterday".to_string(),
        };

        assert!(matches!(
            Contact::try_from(row),
            Err(IntakeError::Database(_))
        ));
    }

    #[test]
    fn test_serialize_camel_case() {
        let contact = Contact {
            id: "abc".to_string(),
            name: "Ann".to_string(),
            email: "ann@example.com".to_string(),
            phone: None,
            topic: None,
            message: "Hello".to_string(),
            submitted_at: Utc.with_ymd_and_hms(2026, 10, 14, 9, 30, 0).unwrap(),
        };

        let json = serde_json::to_value(&contact).unwrap();
        assert_eq!(json["id"], "abc");
        assert_eq!(json["email"], "ann@example.com");
        assert!(json["topic"].is_null());
        assert!(json["submittedAt"].is_string());
        assert!(json.get("submitted_at").is_none());
    }

    #[test]
    fn test_format_timestamp_roundtrips_precision() {
        let ts = Utc.with_ymd_and_hms(2026, 10, 14, 9, 30, 0).unwrap();
        assert_eq!(format_timestamp(&ts), "2026-10-14T09:30:00.000000Z");
    }
}
