//! SMTP delivery using lettre

use async_trait::async_trait;
use lettre::{
    Message, SmtpTransport, Transport, message::MultiPart,
    transport::smtp::authentication::Credentials,
};

use crate::{EmailConfig, EmailError, EmailProvider, OutgoingEmail, config::parse_mailbox};

/// How the connection to an authenticated relay is secured
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TlsMode {
    /// TLS handshake right after connecting (SMTPS)
    Implicit,
    /// Plain greeting, then upgrade with `STARTTLS`
    StartTls,
}

impl TlsMode {
    pub const SMTPS_PORT: u16 = 465;

    pub fn for_port(port: u16) -> Self {
        if port == Self::SMTPS_PORT {
            Self::Implicit
        } else {
            Self::StartTls
        }
    }
}

/// SMTP relay provider
///
/// Resend is reached through its SMTP relay: username `resend`, password is the API key.
#[derive(Clone)]
pub struct SmtpProvider {
    mailer: SmtpTransport,
}

impl SmtpProvider {
    pub fn new(config: &EmailConfig) -> Result<Self, EmailError> {
        let mailer = if config.smtp_username.is_empty() || config.smtp_password.is_empty() {
            tracing::info!(
                smtp_host = %config.smtp_host,
                smtp_port = config.smtp_port,
                "SMTP credentials not configured, using unauthenticated connection (e.g., MailDev)"
            );

            SmtpTransport::builder_dangerous(&config.smtp_host)
                .port(config.smtp_port)
                .build()
        } else {
            let tls = TlsMode::for_port(config.smtp_port);

            tracing::info!(
                smtp_host = %config.smtp_host,
                smtp_port = config.smtp_port,
                tls = ?tls,
                from = %config.from_address,
                "Email provider initialized with authentication and TLS"
            );

            let creds =
                Credentials::new(config.smtp_username.clone(), config.smtp_password.clone());

            let builder = match tls {
                TlsMode::Implicit => SmtpTransport::relay(&config.smtp_host)?,
                TlsMode::StartTls => SmtpTransport::starttls_relay(&config.smtp_host)?,
            };

            builder
                .port(config.smtp_port)
                .credentials(creds)
                .build()
        };

        Ok(Self { mailer })
    }
}

#[async_trait]
impl EmailProvider for SmtpProvider {
    async fn send(&self, email: OutgoingEmail) -> Result<(), EmailError> {
        tracing::info!(to = %email.to, subject = %email.subject, "Sending email");

        let message = build_message(email)?;
        let mailer = self.mailer.clone();

        // lettre's SmtpTransport blocks on network I/O
        tokio::task::spawn_blocking(move || mailer.send(&message)).await??;

        Ok(())
    }
}

pub(crate) fn build_message(email: OutgoingEmail) -> Result<Message, EmailError> {
    Ok(Message::builder()
        .from(parse_mailbox(&email.from)?)
        .to(parse_mailbox(&email.to)?)
        .subject(email.subject)
        .multipart(MultiPart::alternative_plain_html(email.plain, email.html))?)
}
