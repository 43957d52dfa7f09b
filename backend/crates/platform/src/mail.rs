//! Outbound Mail Transport
//!
//! Handlers never talk SMTP directly; they hand a [`MailMessage`] to a
//! [`MailSender`]. Production uses [`SmtpMailSender`] (lettre, pooled
//! connection to an authenticated relay); local development without mail
//! credentials uses [`LogMailSender`], which only logs.

use lettre::message::{Mailbox, header::ContentType};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use thiserror::Error;

/// A plain-text message to deliver
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailMessage {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// What the transport reported after accepting a message
#[derive(Debug, Clone)]
pub struct MailReceipt {
    pub response: String,
}

/// Mail delivery errors
#[derive(Debug, Error)]
pub enum MailError {
    /// Sender or recipient could not be parsed as a mailbox
    #[error("Invalid mailbox address '{address}': {reason}")]
    InvalidAddress { address: String, reason: String },

    /// Message could not be assembled
    #[error("Failed to build message: {0}")]
    Build(String),

    /// Relay connection, authentication or delivery failed
    #[error("Mail transport failed: {0}")]
    Transport(String),
}

/// Mail delivery abstraction
#[trait_variant::make(MailSender: Send)]
pub trait LocalMailSender {
    /// Deliver `message` once. Implementations must not retry.
    async fn send(&self, message: &MailMessage) -> Result<MailReceipt, MailError>;
}

/// SMTP relay sender (STARTTLS/TLS handled by lettre)
#[derive(Clone)]
pub struct SmtpMailSender {
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpMailSender {
    /// Connect lazily to `host` with the given account credentials
    pub fn relay(host: &str, username: &str, password: &str) -> Result<Self, MailError> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(host)
            .map_err(|e| MailError::Transport(e.to_string()))?
            .credentials(Credentials::new(username.to_string(), password.to_string()))
            .build();

        Ok(Self { transport })
    }
}

impl MailSender for SmtpMailSender {
    async fn send(&self, message: &MailMessage) -> Result<MailReceipt, MailError> {
        let email = build_message(message)?;

        let response = self
            .transport
            .send(email)
            .await
            .map_err(|e| MailError::Transport(e.to_string()))?;

        let text = response.message().collect::<Vec<_>>().join(" ");

        Ok(MailReceipt {
            response: format!("{} {}", response.code(), text),
        })
    }
}

/// Development sender that logs instead of delivering
#[derive(Debug, Clone, Default)]
pub struct LogMailSender;

impl MailSender for LogMailSender {
    async fn send(&self, message: &MailMessage) -> Result<MailReceipt, MailError> {
        // Validate exactly like the SMTP sender would.
        build_message(message)?;

        // Never the body: it carries the one-time code
        tracing::info!(
            to = %message.to,
            subject = %message.subject,
            "Mail delivery stub (no SMTP credentials configured)"
        );

        Ok(MailReceipt {
            response: "logged".to_string(),
        })
    }
}

fn parse_mailbox(address: &str) -> Result<Mailbox, MailError> {
    address
        .parse::<Mailbox>()
        .map_err(|e| MailError::InvalidAddress {
            address: address.to_string(),
            reason: e.to_string(),
        })
}

/// Assemble a plain-text lettre message
pub fn build_message(message: &MailMessage) -> Result<Message, MailError> {
    Message::builder()
        .from(parse_mailbox(&message.from)?)
        .to(parse_mailbox(&message.to)?)
        .subject(message.subject.clone())
        .header(ContentType::TEXT_PLAIN)
        .body(message.body.clone())
        .map_err(|e| MailError::Build(e.to_string()))
}
