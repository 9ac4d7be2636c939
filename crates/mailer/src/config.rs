use lettre::message::Mailbox;
use serde::Deserialize;

use crate::EmailError;

#[derive(Debug, Deserialize, Clone)]
pub struct EmailConfig {
    #[serde(default = "default_smtp_host")]
    pub smtp_host: String,
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,
    #[serde(default = "default_smtp_username")]
    pub smtp_username: String,
    #[serde(default)]
    pub smtp_password: String,
    #[serde(default = "default_from_address")]
    pub from_address: String,
    /// Mailbox that receives website inquiries
    #[serde(default = "default_contact_address")]
    pub contact_address: String,
    #[serde(default = "default_inquiry_subject")]
    pub inquiry_subject: String,
    /// Log outgoing emails instead of handing them to SMTP (local development)
    #[serde(default)]
    pub skip_sending: bool,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            smtp_host: default_smtp_host(),
            smtp_port: default_smtp_port(),
            smtp_username: default_smtp_username(),
            smtp_password: String::new(),
            from_address: default_from_address(),
            contact_address: default_contact_address(),
            inquiry_subject: default_inquiry_subject(),
            skip_sending: false,
        }
    }
}

impl EmailConfig {
    /// Check that both fixed addresses parse as mailboxes
    pub fn validate(&self) -> Result<(), EmailError> {
        parse_mailbox(&self.from_address)?;
        parse_mailbox(&self.contact_address)?;

        Ok(())
    }
}

pub(crate) fn parse_mailbox(address: &str) -> Result<Mailbox, EmailError> {
    address.parse().map_err(|source| EmailError::Address {
        address: address.to_owned(),
        source,
    })
}

fn default_smtp_host() -> String {
    "smtp.resend.com".to_string()
}

fn default_smtp_port() -> u16 {
    587
}

fn default_smtp_username() -> String {
    "resend".to_string()
}

fn default_from_address() -> String {
    "max@strukter.io".to_string()
}

fn default_contact_address() -> String {
    "max@strukter.io".to_string()
}

fn default_inquiry_subject() -> String {
    "Strukter Website Inquiry".to_string()
}
