//! Host configuration.
//!
//! Values come from the process environment (after `.env` is loaded). Each
//! key falls back to a default when unset; a set but unparsable value is an
//! error so a typo never silently binds the wrong port.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_DIST_DIR: &str = "client/dist";
pub const DEFAULT_BIND_ADDR: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {key} value {value:?}: {reason}")]
    Invalid { key: &'static str, value: String, reason: String },
    #[error("{key} must not be empty")]
    Empty { key: &'static str },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
    pub bind_addr: IpAddr,
    /// Trunk output directory holding `index.html` and the wasm bundle.
    pub dist_dir: PathBuf,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self { port: DEFAULT_PORT, bind_addr: DEFAULT_BIND_ADDR, dist_dir: PathBuf::from(DEFAULT_DIST_DIR) }
    }
}

impl HostConfig {
    /// Read configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when a set variable cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, which returns the raw value of a
    /// variable if it is set.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when a set variable cannot be parsed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let port = parse_var(&lookup, "PORT")?.unwrap_or(defaults.port);
        let bind_addr = parse_var(&lookup, "BIND_ADDR")?.unwrap_or(defaults.bind_addr);
        let dist_dir = match lookup("DIST_DIR") {
            Some(raw) if raw.trim().is_empty() => return Err(ConfigError::Empty { key: "DIST_DIR" }),
            Some(raw) => PathBuf::from(raw.trim()),
            None => defaults.dist_dir,
        };
        Ok(Self { port, bind_addr, dist_dir })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}

fn parse_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let Some(raw) = lookup(key) else {
        tracing::debug!(key, "not set, using default");
        return Ok(None);
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::Empty { key });
    }
    trimmed
        .parse()
        .map(Some)
        .map_err(|e: T::Err| ConfigError::Invalid { key, value: raw.clone(), reason: e.to_string() })
}
