mod config;
mod error;
mod provider;
mod service;

use std::sync::Arc;

pub use config::*;
pub use error::*;
pub use provider::*;
pub use service::*;

/// Pick the provider the configuration asks for
pub fn from_config(config: &EmailConfig) -> Result<Arc<dyn EmailProvider>, EmailError> {
    if config.skip_sending {
        tracing::warn!("email.skip_sending is set, outgoing emails will only be logged");

        return Ok(Arc::new(LogProvider));
    }

    Ok(Arc::new(SmtpProvider::new(config)?))
}
