//! Server Config

use std::net::ToSocketAddrs;

use clap::Args;
use serde::Deserialize;
use thiserror::Error;

use crate::requests::DEFAULT_MAX_BODY_BYTES;

/// Router settings supplied as a single JSON document.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RouterConfig {
    /// Address to bind, as `host:port`.
    pub addr: String,
}

/// Rejected `ROUTER_CONFIG` values.
#[derive(Debug, Error)]
pub enum RouterConfigError {
    /// Not a JSON router document.
    #[error("router config is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The address does not resolve to a socket address.
    #[error("router address '{addr}' cannot be bound: {source}")]
    Addr {
        /// Address after normalization.
        addr: String,

        /// Resolution failure.
        #[source]
        source: std::io::Error,
    },
}

/// Parses `ROUTER_CONFIG` and resolves its address.
///
/// A bare `:port` listens on every interface.
fn parse_router_config(raw: &str) -> Result<RouterConfig, RouterConfigError> {
    let mut config: RouterConfig = serde_json::from_str(raw)?;

    if config.addr.starts_with(':') {
        config.addr = format!("0.0.0.0{}", config.addr);
    }

    if let Err(source) = config.addr.to_socket_addrs() {
        return Err(RouterConfigError::Addr {
            addr: config.addr,
            source,
        });
    }

    Ok(config)
}

/// Server runtime network settings.
#[derive(Debug, Args)]
pub struct ServerRuntimeConfig {
    /// Server host address
    #[arg(short = 'H', long, env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Server port
    #[arg(short, long, env = "SERVER_PORT", default_value = "8698")]
    pub port: u16,

    /// JSON router configuration, e.g. `{"addr":":8080"}`. Overrides host and port.
    #[arg(long, env = "ROUTER_CONFIG", value_parser = parse_router_config)]
    pub router_config: Option<RouterConfig>,

    /// Largest accepted request body in bytes
    #[arg(long, env = "MAX_BODY_BYTES", default_value_t = DEFAULT_MAX_BODY_BYTES)]
    pub max_body_bytes: usize,
}

impl ServerRuntimeConfig {
    /// Get the socket address for binding.
    #[must_use]
    pub fn socket_addr(&self) -> String {
        match &self.router_config {
            Some(router) => router.addr.clone(),
            None => format!("{}:{}", self.host, self.port),
        }
    }
}
