//! Configuration loading from the process environment.

use thiserror::Error;

use crate::config::schema::CatalogConfig;

/// Environment variable selecting the listening port.
pub const PORT_VAR: &str = "PORT";

/// Error type for configuration loading.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT value {value:?}: expected a port number between 1 and 65535")]
    InvalidPort { value: String },
}

/// Load configuration from the real process environment.
pub fn load_config() -> Result<CatalogConfig, ConfigError> {
    load_from(|key| std::env::var(key).ok())
}

/// Load configuration using `lookup` to resolve environment variables.
///
/// An unset or empty `PORT` keeps the default of 8080.
pub fn load_from<F>(lookup: F) -> Result<CatalogConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = CatalogConfig::default();

    if let Some(raw) = lookup(PORT_VAR).filter(|v| !v.trim().is_empty()) {
        config.listener.port = match raw.trim().parse::<u16>() {
            Ok(port) if port != 0 => port,
            _ => return Err(ConfigError::InvalidPort { value: raw }),
        };
    }

    Ok(config)
}
