//! Server configuration (environment-driven).

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use anyhow::{Context, Result};

/// Where the HTTP server listens.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: Self::DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    pub const DEFAULT_PORT: u16 = 3333;

    /// Read `APP_HOST` / `APP_PORT`, falling back to `0.0.0.0:3333`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(raw) = non_empty(lookup("APP_HOST")) {
            config.host = raw
                .parse()
                .with_context(|| format!("APP_HOST is not a valid IP address: {raw:?}"))?;
        }
        if let Some(raw) = non_empty(lookup("APP_PORT")) {
            config.port = raw
                .parse()
                .with_context(|| format!("APP_PORT is not a valid port: {raw:?}"))?;
        }

        Ok(config)
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
