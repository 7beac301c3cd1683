//! Confirmation email composition.

use super::Email;
use crate::contact::Contact;

/// Subject of the confirmation email.
pub const CONFIRMATION_SUBJECT: &str = "Thank you for contacting us";

/// Shown in place of a missing topic.
pub const TOPIC_PLACEHOLDER: &str = "General inquiry";

/// Compose the confirmation sent to the submitter of `contact`.
pub fn confirmation_email(contact: &Contact) -> Email {
    let topic = contact.topic.as_deref().unwrap_or(TOPIC_PLACEHOLDER);

    let body = format!(
        "Hi {name},\n\n\
         Thank you for reaching out. We have received your message and will get back to you soon.\n\n\
         Topic: {topic}\n\n\
         Your message:\n{message}\n",
        name = contact.name,
        message = contact.message,
    );

    Email {
        to: contact.email.clone(),
        subject: CONFIRMATION_SUBJECT.to_string(),
        body,
    }
}
