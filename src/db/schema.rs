//! Database schema and migrations.
//!
//! Migrations are applied sequentially when the database is first opened
//! or upgraded.

/// Database migrations.
///
/// Each migration is a SQL script that will be executed in order.
/// The schema_version table tracks which migrations have been applied.
pub const MIGRATIONS: &[&str] = &[
    // v1: contacts collection
    r#"
CREATE TABLE contacts (
    id            TEXT PRIMARY KEY,
    name          TEXT NOT NULL CHECK (length(name) > 0),
    email         TEXT NOT NULL CHECK (length(email) > 0),
    phone         TEXT,
    topic         TEXT,
    message       TEXT NOT NULL CHECK (length(message) > 0),
    submitted_at  TEXT NOT NULL
);

CREATE INDEX idx_contacts_submitted_at ON contacts(submitted_at);
"#,
];
