//! Host configuration (environment variables + defaults).
//!
//! Values may also come from a `.env` file, which `main` loads before calling
//! [`HostConfig::from_env`]. Malformed values are logged and replaced by the
//! default so a typo never keeps the UI from starting.

use common::config::ClientConfig;
use log::warn;
use thiserror::Error;

pub const HOST_VAR: &str = "DATA_SHARING_HOST";
pub const PORT_VAR: &str = "DATA_SHARING_PORT";
pub const BACKEND_ORIGIN_VAR: &str = "DATA_SHARING_BACKEND_ORIGIN";
pub const OPEN_BROWSER_VAR: &str = "DATA_SHARING_OPEN_BROWSER";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_BACKEND_ORIGIN: &str = "http://localhost:5000";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} must be a port number, got {value:?}")]
    InvalidPort { name: &'static str, value: String },

    #[error("{name} must be true or false, got {value:?}")]
    InvalidFlag { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub host: String,
    pub port: u16,
    /// Origin of the marketplace backend the browser client talks to.
    pub backend_origin: String,
    pub open_browser: bool,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            backend_origin: DEFAULT_BACKEND_ORIGIN.to_string(),
            open_browser: true,
        }
    }
}

impl HostConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from any variable source. Used directly by
    /// tests so they never touch the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let port = match lookup(PORT_VAR).map(|raw| parse_port(PORT_VAR, &raw)) {
            Some(Ok(port)) => port,
            Some(Err(e)) => {
                warn!("{}; using {}", e, defaults.port);
                defaults.port
            }
            None => defaults.port,
        };

        let open_browser = match lookup(OPEN_BROWSER_VAR).map(|raw| parse_flag(OPEN_BROWSER_VAR, &raw)) {
            Some(Ok(flag)) => flag,
            Some(Err(e)) => {
                warn!("{}; using {}", e, defaults.open_browser);
                defaults.open_browser
            }
            None => defaults.open_browser,
        };

        Self {
            host: non_empty(lookup(HOST_VAR)).unwrap_or(defaults.host),
            port,
            backend_origin: non_empty(lookup(BACKEND_ORIGIN_VAR)).unwrap_or(defaults.backend_origin),
            open_browser,
        }
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(&self.backend_origin)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_port(name: &'static str, raw: &str) -> Result<u16, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::InvalidPort {
        name,
        value: raw.to_string(),
    })
}

fn parse_flag(name: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            name,
            value: raw.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        assert_eq!(HostConfig::from_lookup(lookup_from(&[])), HostConfig::default());
    }

    #[test]
    fn reads_every_variable() {
        let config = HostConfig::from_lookup(lookup_from(&[
            (HOST_VAR, "0.0.0.0"),
            (PORT_VAR, "9000"),
            (BACKEND_ORIGIN_VAR, "http://backend:5000/"),
            (OPEN_BROWSER_VAR, "false"),
        ]));

        assert_eq!(config.url(), "http://0.0.0.0:9000");
        assert!(!config.open_browser);
        assert_eq!(config.client_config().backend_origin, "http://backend:5000");
    }

    #[test]
    fn bad_values_fall_back_to_defaults() {
        let config = HostConfig::from_lookup(lookup_from(&[
            (PORT_VAR, "eighty"),
            (OPEN_BROWSER_VAR, "maybe"),
            (BACKEND_ORIGIN_VAR, "  "),
        ]));

        assert_eq!(config, HostConfig::default());
    }

    #[test]
    fn port_error_names_the_variable() {
        let err = parse_port(PORT_VAR, "x").unwrap_err();
        assert_eq!(err.to_string(), "DATA_SHARING_PORT must be a port number, got \"x\"");
    }
}
