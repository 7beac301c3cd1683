//! Contact submissions: data model, sanitization and persistence.

mod repository;
pub mod sanitize;
mod types;

pub use repository::{ContactRepository, ContactStore};
pub use sanitize::{escape_html, normalize_email, strip_control_chars};
pub use types::{Contact, NewContact};
