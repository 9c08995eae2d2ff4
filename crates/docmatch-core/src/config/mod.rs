//! Environment-backed configuration.
//!
//! Every setting has a default. Override with `DOCMATCH_*` environment
//! variables.

pub mod error;

#[cfg(test)]
mod tests;

pub use error::ConfigError;

use std::env;
use std::net::IpAddr;
use std::path::PathBuf;

/// Server configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `DOCMATCH_*` overrides on top of defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port. Default: `8080`.
    pub port: u16,

    /// IP address to bind to. Default: `127.0.0.1`.
    pub bind_addr: IpAddr,

    /// Base URL of the external scoring engine. Default:
    /// `http://localhost:5001`. The `/compare` path is appended by the
    /// client; the address itself is deployment configuration, never logic.
    pub engine_url: String,

    /// Per-request timeout for outbound engine calls, in seconds.
    /// Default: `120`.
    pub engine_timeout_secs: u64,

    /// File the most recent batch snapshot is written to.
    /// Default: `./.data/last_batch.json`.
    pub snapshot_path: PathBuf,

    /// Origin allowed by CORS. Default: `http://localhost:3000`.
    pub cors_origin: String,
}

/// Default scoring-engine URL used when `DOCMATCH_ENGINE_URL` is not set.
pub const DEFAULT_ENGINE_URL: &str = "http://localhost:5001";

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            bind_addr: IpAddr::V4(std::net::Ipv4Addr::new(127, 0, 0, 1)),
            engine_url: DEFAULT_ENGINE_URL.to_string(),
            engine_timeout_secs: 120,
            snapshot_path: PathBuf::from("./.data/last_batch.json"),
            cors_origin: "http://localhost:3000".to_string(),
        }
    }
}

impl Config {
    const ENV_PORT: &'static str = "DOCMATCH_PORT";
    const ENV_BIND_ADDR: &'static str = "DOCMATCH_BIND_ADDR";
    const ENV_ENGINE_URL: &'static str = "DOCMATCH_ENGINE_URL";
    const ENV_ENGINE_TIMEOUT_SECS: &'static str = "DOCMATCH_ENGINE_TIMEOUT_SECS";
    const ENV_SNAPSHOT_PATH: &'static str = "DOCMATCH_SNAPSHOT_PATH";
    const ENV_CORS_ORIGIN: &'static str = "DOCMATCH_CORS_ORIGIN";

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let port = Self::parse_port_from_env(defaults.port)?;
        let bind_addr = Self::parse_bind_addr_from_env(defaults.bind_addr)?;
        let engine_url = Self::parse_string_from_env(Self::ENV_ENGINE_URL, defaults.engine_url);
        let engine_timeout_secs =
            Self::parse_u64_from_env(Self::ENV_ENGINE_TIMEOUT_SECS, defaults.engine_timeout_secs);
        let snapshot_path =
            Self::parse_path_from_env(Self::ENV_SNAPSHOT_PATH, defaults.snapshot_path);
        let cors_origin = Self::parse_string_from_env(Self::ENV_CORS_ORIGIN, defaults.cors_origin);

        Ok(Self {
            port,
            bind_addr,
            engine_url,
            engine_timeout_secs,
            snapshot_path,
            cors_origin,
        })
    }

    /// Validates basic invariants (does not create directories).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.engine_url.starts_with("http://") && !self.engine_url.starts_with("https://") {
            return Err(ConfigError::InvalidEngineUrl {
                value: self.engine_url.clone(),
            });
        }

        if self.engine_timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout {
                value: self.engine_timeout_secs,
            });
        }

        if self.snapshot_path.exists() && self.snapshot_path.is_dir() {
            return Err(ConfigError::SnapshotPathIsADirectory {
                path: self.snapshot_path.clone(),
            });
        }

        Ok(())
    }

    /// Returns `"{bind_addr}:{port}"` (useful for logging/binding).
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }

    fn parse_port_from_env(default: u16) -> Result<u16, ConfigError> {
        match env::var(Self::ENV_PORT) {
            Ok(value) => {
                let port: u16 = value.parse().map_err(|e| ConfigError::PortParseError {
                    value: value.clone(),
                    source: e,
                })?;

                if port == 0 {
                    return Err(ConfigError::InvalidPort { value });
                }

                Ok(port)
            }
            Err(_) => Ok(default),
        }
    }

    fn parse_bind_addr_from_env(default: IpAddr) -> Result<IpAddr, ConfigError> {
        match env::var(Self::ENV_BIND_ADDR) {
            Ok(value) => value
                .parse()
                .map_err(|e| ConfigError::InvalidBindAddr { value, source: e }),
            Err(_) => Ok(default),
        }
    }

    fn parse_path_from_env(var_name: &str, default: PathBuf) -> PathBuf {
        env::var(var_name).map(PathBuf::from).unwrap_or(default)
    }

    fn parse_string_from_env(var_name: &str, default: String) -> String {
        env::var(var_name).unwrap_or(default)
    }

    fn parse_u64_from_env(var_name: &str, default: u64) -> u64 {
        env::var(var_name)
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(default)
    }
}
