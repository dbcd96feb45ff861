//! Server configuration.

use std::net::SocketAddr;
use std::path::PathBuf;

/// Environment variable holding the listen address.
pub const ADDR_VAR: &str = "TIMETABLE_ADDR";

/// Environment variable holding the path to a record file.
pub const DATA_VAR: &str = "TIMETABLE_DATA";

/// Errors from reading the configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The listen address could not be parsed
    #[error("invalid TIMETABLE_ADDR {value:?}: expected host:port")]
    InvalidAddr { value: String },
}

/// Configuration for the timetable server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to listen on.
    pub addr: SocketAddr,

    /// JSON file of train records.
    /// When `None`, the built-in sample trains are served.
    pub data_path: Option<PathBuf>,
}

impl ServerConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(addr: SocketAddr, data_path: Option<PathBuf>) -> Self {
        Self { addr, data_path }
    }

    /// Read the configuration from the process environment.
    ///
    /// Unset variables keep their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the configuration through a variable lookup function.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let addr = match lookup(ADDR_VAR) {
            Some(value) => value
                .parse()
                .map_err(|_| ConfigError::InvalidAddr { value })?,
            None => Self::default().addr,
        };

        let data_path = lookup(DATA_VAR)
            .filter(|p| !p.is_empty())
            .map(PathBuf::from);

        Ok(Self::new(addr, data_path))
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            data_path: None,
        }
    }
}
