use std::env;

use config::{
    Config,
    ConfigError,
    File,
};
use custom_error::custom_error;

#[derive(Clone, Debug, serde::Deserialize)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub email_client: EmailClientSettings,
}

#[derive(Clone, Debug, serde::Deserialize)]
pub struct ApplicationSettings {
    pub host: String,
    pub max_pending_connections: u32,
    pub port: u16,
}

#[derive(Clone, Debug, serde::Deserialize)]
pub struct EmailClientSettings {
    pub base_url: String,
    /// Source and destination of every relayed offer email.
    pub mailbox: String,
    pub timeout_secs: u64,
    pub token: String,
}

impl ApplicationSettings {
    pub fn binding_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

custom_error! {
///! Custom error for invalid configuration files.
pub ConfigurationError
    InvalidConfig{source:ConfigError} = "{source}",
}

/// Load the configuration from the directory: `configuration`.
///
/// `configuration/base` is merged with `configuration/${APP_ENVIRONMENT}`
/// (defaulting to `local` when the variable is unset) and with environment
/// variables prefixed by `APP` and separated by `__`:
/// e.g. `APP_APPLICATION__PORT=5001` sets `Settings.application.port`.
///
/// It fails if:
/// - the `configuration/base` file is missing
/// - the `configuration/${APP_ENVIRONMENT}` file is missing
/// - the `configuration/*` files have missing or unexpected fields
pub fn load_configuration() -> Result<Settings, ConfigurationError> {
    let mut config = Config::new();
    config.merge(File::with_name("configuration/base").required(true))?;
    let app_environment = env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "local".into());
    config.merge(File::with_name(&format!("configuration/{}", app_environment)).required(true))?;
    config.merge(config::Environment::with_prefix("app").separator("__"))?;

    config.try_into().map(Ok)?
}
