//! Service configuration.
//!
//! Values come from three layers, highest precedence first: command-line
//! overrides, an optional TOML file, and [`ServiceConfig::default`].
//!
//! ```toml
//! bind_addr = "0.0.0.0:8000"
//! log_level = "debug"
//! ```

use crate::error::{Result, ServiceError};
use serde::Deserialize;
use std::{
    fs,
    net::{Ipv4Addr, SocketAddr, SocketAddrV4},
    path::Path,
};

pub const DEFAULT_BIND_ADDR: SocketAddr =
    SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::LOCALHOST, 8000));
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Configuration for the web service.
///
/// # Example
///
/// ```rust
/// use webservice::ServiceConfig;
///
/// let config = ServiceConfig {
///     bind_addr: "0.0.0.0:9000".parse().unwrap(),
///     ..Default::default()
/// };
/// assert_eq!(config.log_level, "info");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServiceConfig {
    /// Address to bind the HTTP server to. Port 0 picks a free port.
    pub bind_addr: SocketAddr,

    /// `EnvFilter` directive used when `RUST_LOG` is not set.
    pub log_level: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

/// Values supplied on the command line; `None` leaves the lower layer in place.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub bind_addr: Option<SocketAddr>,
    pub log_level: Option<String>,
}

impl ServiceConfig {
    /// Parses a TOML document. Missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::ConfigParse`] for malformed TOML, unknown keys or
    /// an unparsable address. `origin` is only used in the error.
    pub fn from_toml_str(content: &str, origin: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|source| ServiceError::ConfigParse {
            path: origin.to_path_buf(),
            source,
        })
    }

    /// Reads the config file at `path`, or returns the defaults when `path` is `None`.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::ConfigRead`] if the file cannot be read and
    /// [`ServiceError::ConfigParse`] if it is not a valid config.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let content = fs::read_to_string(path).map_err(|source| ServiceError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content, path)
    }

    #[must_use]
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(bind_addr) = overrides.bind_addr {
            self.bind_addr = bind_addr;
        }
        if let Some(log_level) = overrides.log_level {
            self.log_level = log_level;
        }
        self
    }
}
