//! Process configuration.
//!
//! Read once at startup from `ROUTE_*` environment variables. Engine
//! tuning ([`SearchConfig`](crate::planner::SearchConfig),
//! [`ScoringConfig`](crate::scoring::ScoringConfig)) is not configured
//! here; it uses the defaults those types carry.

use std::net::SocketAddr;
use std::path::PathBuf;

pub const DATA_DIR_VAR: &str = "ROUTE_DATA_DIR";
pub const BIND_ADDR_VAR: &str = "ROUTE_BIND_ADDR";
pub const STATIC_DIR_VAR: &str = "ROUTE_STATIC_DIR";
pub const STATUS_FILE_VAR: &str = "ROUTE_STATUS_FILE";

const NETWORK_FILE: &str = "network.json";
const TRANSFERS_FILE: &str = "transfers.json";

/// An environment variable held a value that could not be used.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {var}: {value:?} ({reason})")]
pub struct ConfigError {
    pub var: &'static str,
    pub value: String,
    pub reason: String,
}

/// Where the server finds its data and listens.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub bind_addr: SocketAddr,
    pub static_dir: PathBuf,
    /// Snapshot of line statuses; none means no delay information.
    pub status_file: Option<PathBuf>,
}

impl AppConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration through `lookup`, treating blank values as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let bind_addr = match get(BIND_ADDR_VAR) {
            Some(value) => value.trim().parse().map_err(|e: std::net::AddrParseError| ConfigError {
                var: BIND_ADDR_VAR,
                value: value.clone(),
                reason: e.to_string(),
            })?,
            None => defaults.bind_addr,
        };

        Ok(Self {
            data_dir: get(DATA_DIR_VAR).map_or(defaults.data_dir, PathBuf::from),
            bind_addr,
            static_dir: get(STATIC_DIR_VAR).map_or(defaults.static_dir, PathBuf::from),
            status_file: get(STATUS_FILE_VAR).map(PathBuf::from),
        })
    }

    pub fn network_path(&self) -> PathBuf {
        self.data_dir.join(NETWORK_FILE)
    }

    pub fn transfers_path(&self) -> PathBuf {
        self.data_dir.join(TRANSFERS_FILE)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 5000)),
            static_dir: PathBuf::from("static"),
            status_file: None,
        }
    }
}
