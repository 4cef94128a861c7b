use std::env;

use crate::mail::SenderDefaults;

pub const DEFAULT_RESEND_API_URL: &str = "https://api.resend.com";
pub const DEFAULT_FROM_ADDRESS: &str = "alex@orchestraconnect.fr";
pub const DEFAULT_FROM_NAME: &str = "Alex - OrchestraConnect";
pub const DEFAULT_REPLY_TO: &str = "alex@orchestraconnect.fr";

#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub resend_api_key: Option<String>,
    pub resend_api_url: String,
    pub email_from_address: String,
    pub email_from_name: String,
    pub email_reply_to: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Empty values behave like unset ones.
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Ok(Config {
            server_host: var("SERVER_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            server_port: var("SERVER_PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidPort)?,
            resend_api_key: var("RESEND_API_KEY"),
            resend_api_url: var("RESEND_API_URL")
                .unwrap_or_else(|| DEFAULT_RESEND_API_URL.to_string()),
            email_from_address: var("EMAIL_FROM_ADDRESS")
                .unwrap_or_else(|| DEFAULT_FROM_ADDRESS.to_string()),
            email_from_name: var("EMAIL_FROM_NAME")
                .unwrap_or_else(|| DEFAULT_FROM_NAME.to_string()),
            email_reply_to: var("EMAIL_REPLY_TO").unwrap_or_else(|| DEFAULT_REPLY_TO.to_string()),
        })
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    pub fn sender_defaults(&self) -> SenderDefaults {
        SenderDefaults {
            from_email: self.email_from_address.clone(),
            from_name: self.email_from_name.clone(),
            reply_to: self.email_reply_to.clone(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid server port")]
    InvalidPort,
}
