//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during configuration loading and validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Port value is outside valid range (1-65535).
    #[error("invalid port '{value}': must be between 1 and 65535")]
    InvalidPort { value: String },

    /// Port string could not be parsed as a number.
    #[error("failed to parse port '{value}': {source}")]
    PortParseError {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// Bind address string could not be parsed.
    #[error("failed to parse bind address '{value}': {source}")]
    InvalidBindAddr {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },

    /// Engine URL is not an http(s) address.
    #[error("invalid engine URL '{value}': expected an http:// or https:// address")]
    InvalidEngineUrl { value: String },

    /// Outbound timeout must be at least one second.
    #[error("invalid engine timeout '{value}': must be greater than zero")]
    InvalidTimeout { value: u64 },

    /// Snapshot path points at a directory, not a writable file location.
    #[error("snapshot path is a directory: {path}")]
    SnapshotPathIsADirectory { path: PathBuf },
}
