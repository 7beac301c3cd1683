//! Request DTOs for Web API.

use serde::Deserialize;
use validator::{Validate, ValidateEmail, ValidateLength, ValidationErrors};

use super::validation::{not_empty_trimmed, ValidateFields};
use crate::contact::{escape_html, normalize_email, strip_control_chars, NewContact};

/// Maximum message length in characters, after trimming.
pub const MAX_MESSAGE_LENGTH: u64 = 1000;

/// Contact form submission (POST /contact).
///
/// Every field is optional at the JSON level so that missing fields are
/// reported as validation errors alongside the others.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactRequest {
    /// Submitter name.
    #[serde(default)]
    pub name: Option<String>,
    /// Submitter email.
    #[serde(default)]
    pub email: Option<String>,
    /// Phone number (optional).
    #[serde(default)]
    pub phone: Option<String>,
    /// Topic (optional).
    #[serde(default)]
    pub topic: Option<String>,
    /// Message body.
    #[serde(default)]
    pub message: Option<String>,
}

/// Control characters removed, then trimmed. This is the text that is
/// validated and, once escaped, stored.
fn cleaned(value: &Option<String>) -> String {
    strip_control_chars(value.as_deref().unwrap_or(""))
        .trim()
        .to_string()
}

/// Cleaned optional field; blank counts as absent.
fn present(value: &Option<String>) -> Option<String> {
    Some(cleaned(value)).filter(|v| !v.is_empty())
}

impl Validate for ContactRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if let Err(e) = not_empty_trimmed(&cleaned(&self.name)) {
            errors.add("name", e.with_message("Name is required".into()));
        }

        if !cleaned(&self.email).validate_email() {
            errors.add(
                "email",
                validator::ValidationError::new("email")
                    .with_message("Valid email is required".into()),
            );
        }

        let message = cleaned(&self.message);
        if let Err(e) = not_empty_trimmed(&message) {
            errors.add("message", e.with_message("Message is required".into()));
        } else if !message.validate_length(None, Some(MAX_MESSAGE_LENGTH), None) {
            errors.add(
                "message",
                validator::ValidationError::new("length").with_message(
                    format!("Message must be at most {MAX_MESSAGE_LENGTH} characters").into(),
                ),
            );
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

impl ValidateFields for ContactRequest {
    const FIELDS: &'static [&'static str] = &["name", "email", "phone", "topic", "message"];
}

impl ContactRequest {
    /// Build the submission to store: trimmed, escaped, email normalized.
    ///
    /// Call only after [`Validate::validate`] succeeded.
    pub fn into_new_contact(self) -> NewContact {
        let email = cleaned(&self.email);
        let email = normalize_email(&email).unwrap_or_else(|| email.to_lowercase());

        NewContact {
            name: escape_html(&cleaned(&self.name)),
            email,
            phone: present(&self.phone).map(|v| escape_html(&v)),
            topic: present(&self.topic).map(|v| escape_html(&v)),
            message: escape_html(&cleaned(&self.message)),
            submitted_at: None,
        }
    }
}
