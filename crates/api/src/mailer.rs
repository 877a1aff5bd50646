//! SMTP mailer for replying to feedback submitters.

use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

/// Errors from building or delivering an email.
#[derive(Debug, thiserror::Error)]
pub enum MailError {
    #[error("Invalid email address: {0}")]
    Address(#[from] lettre::address::AddressError),

    #[error("Failed to build message: {0}")]
    Message(#[from] lettre::error::Error),

    #[error("SMTP error: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),
}

/// SMTP settings loaded from the environment.
#[derive(Debug, Clone)]
pub struct MailerConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    /// Sender mailbox, e.g. `Plaza Admin <admin@example.org>`.
    pub from: String,
}

impl MailerConfig {
    /// Load SMTP configuration from environment variables.
    ///
    /// Returns `None` when `SMTP_HOST` is unset; the mailer is an optional
    /// collaborator and the rest of the service runs without it.
    ///
    /// | Env Var         | Default |
    /// |-----------------|---------|
    /// | `SMTP_HOST`     | --      |
    /// | `SMTP_PORT`     | `587`   |
    /// | `SMTP_USERNAME` | ``      |
    /// | `SMTP_PASSWORD` | ``      |
    /// | `SMTP_FROM`     | --      |
    pub fn from_env() -> Option<Self> {
        let host = std::env::var("SMTP_HOST").ok()?;
        let from = std::env::var("SMTP_FROM").ok()?;

        let port: u16 = std::env::var("SMTP_PORT")
            .unwrap_or_else(|_| "587".into())
            .parse()
            .expect("SMTP_PORT must be a valid u16");

        Some(Self {
            host,
            port,
            username: std::env::var("SMTP_USERNAME").unwrap_or_default(),
            password: std::env::var("SMTP_PASSWORD").unwrap_or_default(),
            from,
        })
    }
}

/// Sends plain-text email over an authenticated SMTP relay.
pub struct Mailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl Mailer {
    /// Build a mailer from SMTP settings.
    pub fn new(config: &MailerConfig) -> Result<Self, MailError> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host)?
            .port(config.port)
            .credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ))
            .build();

        Ok(Self {
            transport,
            from: config.from.parse()?,
        })
    }

    /// Send a plain-text email to `to`.
    pub async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), MailError> {
        let email = Message::builder()
            .from(self.from.clone())
            .to(to.parse()?)
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(body.to_string())?;

        self.transport.send(email).await?;
        Ok(())
    }
}
