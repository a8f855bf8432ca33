use config::{Config as ConfigBuilder, ConfigError, Environment, File, Map};
use kvithyld_contact::{ContactConfig, SubmitterKind};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub contact: ContactConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Company details shown on the page.
#[derive(Debug, Deserialize, Clone)]
pub struct SiteConfig {
    #[serde(default = "default_site_name")]
    pub name: String,
    #[serde(default = "default_site_phone")]
    pub phone: String,
    #[serde(default = "default_site_email")]
    pub email: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: default_site_name(),
            phone: default_site_phone(),
            email: default_site_email(),
        }
    }
}

impl SiteConfig {
    /// `tel:` link target, without spaces.
    pub fn phone_href(&self) -> String {
        let digits: String = self.phone.split_whitespace().collect();
        format!("tel:{digits}")
    }
}

fn default_site_name() -> String {
    "Kvithyld Sikkerhet".to_string()
}

fn default_site_phone() -> String {
    "+47 900 00 000".to_string()
}

fn default_site_email() -> String {
    "post@kvithyldsikkerhet.no".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (KVITHYLD__CONTACT__SUBMITTER, etc.)
    /// 2. Config file specified by path
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        Self::load_with_vars(config_path, None)
    }

    /// Same as [`Config::load`], reading variables from `vars` instead of
    /// the process environment when given.
    pub fn load_with_vars(
        config_path: Option<String>,
        vars: Option<Map<String, String>>,
    ) -> Result<Self, ConfigError> {
        let var = |name: &str| match &vars {
            Some(vars) => vars.get(name).cloned(),
            None => env::var(name).ok(),
        };

        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?;

        let config_file_path = config_path
            .or_else(|| var("CONFIG_PATH"))
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Optional, defaults apply when missing
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        let api_key = var("RESEND_API_KEY");

        builder = builder.add_source(
            Environment::with_prefix("KVITHYLD")
                .separator("__")
                .try_parsing(true)
                .source(vars),
        );

        if let Some(api_key) = api_key {
            builder = builder.set_override("contact.resend.api_key", api_key)?;
        }

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        if self.contact.from_address.trim().is_empty() {
            return Err("Contact from_address must not be empty".to_string());
        }
        if self.contact.to_address.trim().is_empty() {
            return Err("Contact to_address must not be empty".to_string());
        }

        match self.contact.submitter {
            SubmitterKind::Resend if self.contact.resend.api_key.is_empty() => {
                Err("Resend submitter requires contact.resend.api_key".to_string())
            }
            SubmitterKind::Smtp if self.contact.smtp.host.is_empty() => {
                Err("SMTP submitter requires contact.smtp.host".to_string())
            }
            _ => Ok(()),
        }
    }
}
