//! Response DTOs for Web API.

use serde::Serialize;

use crate::contact::Contact;

/// Message returned with a newly stored submission.
pub const CONTACT_CREATED_MESSAGE: &str = "Contact form submitted successfully";

/// Successful submission response (201).
#[derive(Debug, Serialize)]
pub struct ContactCreatedResponse {
    /// Success indicator.
    pub message: String,
    /// The stored submission.
    pub contact: Contact,
}

impl ContactCreatedResponse {
    /// Wrap a stored submission.
    pub fn new(contact: Contact) -> Self {
        Self {
            message: CONTACT_CREATED_MESSAGE.to_string(),
            contact,
        }
    }
}
