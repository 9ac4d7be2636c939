use async_trait::async_trait;

use crate::EmailError;

/// A fully composed message, ready for a provider
#[derive(Debug, Clone, PartialEq)]
pub struct OutgoingEmail {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub html: String,
    pub plain: String,
}

/// Email delivery backend
///
/// Resolves once the provider accepted the message. Any error means the
/// message was not delivered; callers decide how to surface it.
#[async_trait]
pub trait EmailProvider: Send + Sync {
    async fn send(&self, email: OutgoingEmail) -> Result<(), EmailError>;
}

/// Provider that only logs what it would have sent
#[derive(Debug, Default, Clone)]
pub struct LogProvider;

#[async_trait]
impl EmailProvider for LogProvider {
    async fn send(&self, email: OutgoingEmail) -> Result<(), EmailError> {
        tracing::info!(
            from = %email.from,
            to = %email.to,
            subject = %email.subject,
            "Email sending skipped"
        );
        tracing::debug!(body = %email.plain);

        Ok(())
    }
}
