use anyhow::Result;
use strukter_inquiry::{Command, Inquiry, Notification, Outcome};

/// Push one inquiry through the configured provider and print the outcome
pub async fn send(config: crate::config::Config, inquiry: Inquiry) -> Result<()> {
    let provider = strukter_mailer::from_config(&config.email)?;
    let command = Command::new(provider, Notification::from(&config.email));

    let outcome = command.send(inquiry).await;
    println!("{}", serde_json::to_string(&outcome)?);

    if let Outcome::Failure { reason } = outcome {
        anyhow::bail!("inquiry was not delivered: {reason}");
    }

    Ok(())
}
