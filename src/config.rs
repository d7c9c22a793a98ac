use std::env;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use thiserror::Error;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_STATIC_DIR: &str = "../frontend/dist";
pub const DEFAULT_LOG_FILTER: &str = "class_builder=debug,tower_http=info";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Invalid value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_address: SocketAddr,
    /// Directory served for every path the API does not claim.
    pub static_dir: Option<PathBuf>,
    pub enable_cors: bool,
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_address: SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT)),
            static_dir: Some(PathBuf::from(DEFAULT_STATIC_DIR)),
            enable_cors: true,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl AppConfig {
    /// Read configuration from the process environment, after loading
    /// `.env` if present.
    pub fn new_from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host: IpAddr = match lookup("HOST") {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
                field: "HOST".to_string(),
                reason: format!("not an IP address: {}", raw),
            })?,
            None => defaults.bind_address.ip(),
        };

        let port: u16 = match lookup("PORT") {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
                field: "PORT".to_string(),
                reason: format!("not a port number: {}", raw),
            })?,
            None => DEFAULT_PORT,
        };

        let static_dir = match lookup("STATIC_DIR") {
            Some(raw) if raw.trim().is_empty() => None,
            Some(raw) => Some(PathBuf::from(raw.trim())),
            None => defaults.static_dir,
        };

        let enable_cors = match lookup("CORS_ENABLED") {
            Some(raw) => parse_bool("CORS_ENABLED", &raw)?,
            None => defaults.enable_cors,
        };

        let log_filter = lookup("RUST_LOG").unwrap_or(defaults.log_filter);

        Ok(Self {
            bind_address: SocketAddr::new(host, port),
            static_dir,
            enable_cors,
            log_filter,
        })
    }
}

fn parse_bool(field: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(ConfigError::InvalidValue {
            field: field.to_string(),
            reason: format!("expected a boolean, got '{}'", other),
        }),
    }
}
