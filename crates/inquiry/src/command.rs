use std::sync::Arc;

use strukter_mailer::EmailProvider;

use crate::{Inquiry, Notification, Outcome};

/// Submission handler: forwards inquiries to the email provider
#[derive(Clone)]
pub struct Command {
    provider: Arc<dyn EmailProvider>,
    notification: Notification,
}

impl Command {
    pub fn new(provider: Arc<dyn EmailProvider>, notification: Notification) -> Self {
        Self {
            provider,
            notification,
        }
    }

    /// Send one inquiry notification.
    ///
    /// Never fails: provider errors come back as [`Outcome::Failure`] and nothing is retried.
    #[tracing::instrument(name = "inquiry.send", skip_all)]
    pub async fn send(&self, inquiry: Inquiry) -> Outcome {
        let email = match self.notification.compose(&inquiry) {
            Ok(email) => email,
            Err(err) => {
                tracing::error!(err = %err, "failed to render inquiry email");

                return Outcome::failure(err.to_string());
            }
        };

        match self.provider.send(email).await {
            Ok(()) => {
                tracing::info!("Inquiry delivered");

                Outcome::Success
            }
            Err(err) => {
                tracing::error!(err = %err, "failed to deliver inquiry");

                Outcome::failure(err.to_string())
            }
        }
    }
}
