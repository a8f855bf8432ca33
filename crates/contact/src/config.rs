use serde::Deserialize;
use strum::{AsRefStr, Display, EnumString};

#[derive(EnumString, Display, Default, Clone, Copy, Debug, PartialEq, Deserialize, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SubmitterKind {
    #[default]
    Simulated,
    Resend,
    Smtp,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ContactConfig {
    #[serde(default)]
    pub submitter: SubmitterKind,
    #[serde(default = "default_from_address")]
    pub from_address: String,
    #[serde(default = "default_to_address")]
    pub to_address: String,
    #[serde(default = "default_simulated_delay_ms")]
    pub simulated_delay_ms: u64,
    #[serde(default)]
    pub resend: ResendConfig,
    #[serde(default)]
    pub smtp: SmtpConfig,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            submitter: SubmitterKind::default(),
            from_address: default_from_address(),
            to_address: default_to_address(),
            simulated_delay_ms: default_simulated_delay_ms(),
            resend: ResendConfig::default(),
            smtp: SmtpConfig::default(),
        }
    }
}

fn default_from_address() -> String {
    "nettside@kvithyldsikkerhet.no".to_string()
}

fn default_to_address() -> String {
    "post@kvithyldsikkerhet.no".to_string()
}

fn default_simulated_delay_ms() -> u64 {
    1000
}

#[derive(Debug, Deserialize, Clone)]
pub struct ResendConfig {
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_resend_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_resend_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ResendConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            endpoint: default_resend_endpoint(),
            timeout_secs: default_resend_timeout_secs(),
        }
    }
}

fn default_resend_endpoint() -> String {
    "https://api.resend.com/emails".to_string()
}

fn default_resend_timeout_secs() -> u64 {
    10
}

#[derive(Debug, Deserialize, Clone)]
pub struct SmtpConfig {
    #[serde(default = "default_smtp_host")]
    pub host: String,
    #[serde(default = "default_smtp_port")]
    pub port: u16,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

impl Default for SmtpConfig {
    fn default() -> Self {
        Self {
            host: default_smtp_host(),
            port: default_smtp_port(),
            username: String::new(),
            password: String::new(),
        }
    }
}

fn default_smtp_host() -> String {
    "localhost".to_string()
}

fn default_smtp_port() -> u16 {
    1025
}
