//! SMTP mail transport.

use lettre::message::{header::ContentType, Mailbox};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use super::{Email, Mailer};
use crate::config::MailConfig;
use crate::{IntakeError, Result};

/// Resolve a provider name to its SMTP relay host.
///
/// Unknown names are assumed to already be a host name.
pub fn relay_host(service: &str) -> String {
    match service.trim().to_lowercase().as_str() {
        "gmail" | "googlemail" => "smtp.gmail.com".to_string(),
        "outlook" | "hotmail" | "outlook365" | "live" => "smtp-mail.outlook.com".to_string(),
        "yahoo" => "smtp.mail.yahoo.com".to_string(),
        "icloud" => "smtp.mail.me.com".to_string(),
        other => other.to_string(),
    }
}

/// Mailer sending through an authenticated SMTP relay.
///
/// The transport is pooled and shared by all requests.
#[derive(Clone)]
pub struct SmtpMailer {
    from: Option<String>,
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpMailer {
    /// Build a mailer from configuration.
    ///
    /// No connection is made here. Missing credentials are tolerated so that
    /// startup succeeds; sending then fails and is logged.
    pub fn new(config: &MailConfig) -> Result<Self> {
        let host = relay_host(&config.service);
        let mut builder = AsyncSmtpTransport::<Tokio1Executor>::relay(&host)?;

        match (&config.user, &config.password) {
            (Some(user), Some(password)) => {
                builder = builder.credentials(Credentials::new(user.clone(), password.clone()));
            }
            _ => tracing::warn!(
                relay = %host,
                "Mail credentials not configured; confirmation emails will fail to send"
            ),
        }

        Ok(Self {
            from: config.user.clone(),
            transport: builder.build(),
        })
    }

    fn build_message(&self, email: Email) -> Result<Message> {
        let from = self
            .from
            .as_deref()
            .ok_or_else(|| IntakeError::Mail("no sending account configured".to_string()))?;

        let message = Message::builder()
            .from(from.parse::<Mailbox>()?)
            .to(email.to.parse::<Mailbox>()?)
            .subject(email.subject)
            .header(ContentType::TEXT_PLAIN)
            .body(email.body)?;

        Ok(message)
    }
}

impl std::fmt::Debug for SmtpMailer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmtpMailer")
            .field("from", &self.from)
            .finish_non_exhaustive()
    }
}

impl Mailer for SmtpMailer {
    async fn send(&self, email: Email) -> Result<()> {
        let message = self.build_message(email)?;
        let response = self.transport.send(message).await?;

        if !response.is_positive() {
            return Err(IntakeError::Mail(format!(
                "relay rejected message: {}",
                response.code()
            )));
        }

        Ok(())
    }
}
