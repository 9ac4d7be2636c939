use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;
use strukter_mailer::EmailConfig;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub email: EmailConfig,
    #[serde(default)]
    pub site: SiteConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Company details shown on the landing page
#[derive(Debug, Deserialize, Clone)]
pub struct SiteConfig {
    #[serde(default = "default_site_name")]
    pub name: String,
    #[serde(default = "default_tagline")]
    pub tagline: String,
    #[serde(default = "default_address_line1")]
    pub address_line1: String,
    #[serde(default = "default_address_line2")]
    pub address_line2: String,
    #[serde(default = "default_phone")]
    pub phone: String,
    #[serde(default = "default_sales_email")]
    pub sales_email: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: default_site_name(),
            tagline: default_tagline(),
            address_line1: default_address_line1(),
            address_line2: default_address_line2(),
            phone: default_phone(),
            sales_email: default_sales_email(),
        }
    }
}

impl SiteConfig {
    /// Phone number as a `tel:` target
    pub fn phone_href(&self) -> String {
        let digits: String = self
            .phone
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '+')
            .collect();

        format!("tel:{digits}")
    }
}

fn default_site_name() -> String {
    "Strukter Services".to_string()
}

fn default_tagline() -> String {
    "Customized Vacation Rental Technology".to_string()
}

fn default_address_line1() -> String {
    "4706 Chiquita Blvd S".to_string()
}

fn default_address_line2() -> String {
    "Cape Coral, FL 33914".to_string()
}

fn default_phone() -> String {
    "+1 (703) 679-7985".to_string()
}

fn default_sales_email() -> String {
    "sales@strukter.io".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. `RESEND_API_KEY` (email.smtp_password)
    /// 2. Environment variables (STRUKTER__SERVER__PORT, etc.)
    /// 3. Config file specified by path
    /// 4. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Config file is optional
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("STRUKTER")
                .separator("__")
                .try_parsing(true),
        );

        if let Ok(api_key) = env::var("RESEND_API_KEY") {
            builder = builder.set_override("email.smtp_password", api_key)?;
        }

        builder.build()?.try_deserialize()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.server.host.is_empty() {
            return Err("Server host must not be empty".to_string());
        }
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        self.email.validate().map_err(|e| e.to_string())?;

        Ok(())
    }
}
