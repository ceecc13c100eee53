//! Server configuration read from the environment

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

pub const DEFAULT_DATA_FILE: &str = "tasks.json";
pub const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub data_file: PathBuf,
    pub host: IpAddr,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// Read `TASKBOARD_FILE`, `TASKBOARD_HOST` and `TASKBOARD_PORT`
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let value = |name: &str| {
            lookup(name)
                .map(|raw| raw.trim().to_string())
                .filter(|raw| !raw.is_empty())
        };

        let host = match value("TASKBOARD_HOST") {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                tracing::warn!("Ignoring invalid TASKBOARD_HOST: {}", raw);
                defaults.host
            }),
            None => defaults.host,
        };

        let port = match value("TASKBOARD_PORT") {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                tracing::warn!("Ignoring invalid TASKBOARD_PORT: {}", raw);
                defaults.port
            }),
            None => defaults.port,
        };

        Self {
            data_file: value("TASKBOARD_FILE")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_file),
            host,
            port,
        }
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
