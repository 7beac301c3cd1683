//! Error types for the contact intake service.

use thiserror::Error;

/// Common error type for the contact intake service.
#[derive(Error, Debug)]
pub enum IntakeError {
    /// Database error.
    ///
    /// Any persistence fault (connectivity, constraint violation, decoding)
    /// ends up here. Errors from sqlx are converted automatically.
    #[error("database error: {0}")]
    Database(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Outbound mail error.
    #[error("mail error: {0}")]
    Mail(String),
}

impl From<sqlx::Error> for IntakeError {
    fn from(e: sqlx::Error) -> Self {
        IntakeError::Database(e.to_string())
    }
}

impl From<lettre::error::Error> for IntakeError {
    fn from(e: lettre::error::Error) -> Self {
        IntakeError::Mail(e.to_string())
    }
}

impl From<lettre::address::AddressError> for IntakeError {
    fn from(e: lettre::address::AddressError) -> Self {
        IntakeError::Mail(format!("invalid address: {e}"))
    }
}

impl From<lettre::transport::smtp::Error> for IntakeError {
    fn from(e: lettre::transport::smtp::Error) -> Self {
        IntakeError::Mail(e.to_string())
    }
}

/// Result type alias for contact intake operations.
pub type Result<T> = std::result::Result<T, IntakeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_error_display() {
        let err = IntakeError::Database("connection refused".to_string());
        assert_eq!(err.to_string(), "database error: connection refused");
    }

    #[test]
    fn test_mail_error_display() {
        let err = IntakeError::Mail("relay rejected".to_string());
        assert_eq!(err.to_string(), "mail error: relay rejected");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: IntakeError = io_err.into();
        assert!(matches!(err, IntakeError::Io(_)));
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_sqlx_error_conversion() {
        let err: IntakeError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, IntakeError::Database(_)));
    }

    #[test]
    fn test_address_error_conversion() {
        let parse: std::result::Result<lettre::Address, _> = "not an address".parse();
        let err: IntakeError = parse.unwrap_err().into();
        assert!(matches!(err, IntakeError::Mail(_)));
        assert!(err.to_string().contains("invalid address"));
    }
}
