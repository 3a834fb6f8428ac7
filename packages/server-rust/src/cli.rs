//! Command-line and environment configuration for the server binary.

use std::net::SocketAddr;
use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::network::NetworkConfig;

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable multi-line output.
    Pretty,
    /// One JSON object per event.
    Json,
}

/// Calculator HTTP server.
#[derive(Debug, Clone, Parser)]
#[command(name = "calculator-server", version, about)]
pub struct ServerArgs {
    /// Address to bind.
    #[arg(long, env = "CALCULATOR_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on (0 = OS-assigned).
    #[arg(long, env = "CALCULATOR_PORT", default_value_t = 8000)]
    pub port: u16,

    /// Allowed CORS origins, comma-separated. `*` allows any.
    #[arg(
        long,
        env = "CALCULATOR_CORS_ORIGINS",
        value_delimiter = ',',
        default_value = "*"
    )]
    pub cors_origins: Vec<String>,

    /// Per-request timeout in seconds.
    #[arg(long, env = "CALCULATOR_REQUEST_TIMEOUT_SECS", default_value_t = 30)]
    pub request_timeout_secs: u64,

    /// Largest accepted request body in bytes.
    #[arg(long, env = "CALCULATOR_MAX_BODY_BYTES", default_value_t = 65_536)]
    pub max_body_bytes: usize,

    /// Seconds to wait for in-flight requests on shutdown.
    #[arg(long, env = "CALCULATOR_DRAIN_TIMEOUT_SECS", default_value_t = 30)]
    pub drain_timeout_secs: u64,

    /// Default log filter; `RUST_LOG` takes precedence.
    #[arg(long, env = "CALCULATOR_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Log output format.
    #[arg(long, env = "CALCULATOR_LOG_FORMAT", value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,

    /// Expose Prometheus metrics on this address (disabled when unset).
    #[arg(long, env = "CALCULATOR_METRICS_ADDR")]
    pub metrics_addr: Option<SocketAddr>,
}

impl ServerArgs {
    #[must_use]
    pub fn network_config(&self) -> NetworkConfig {
        NetworkConfig {
            host: self.host.clone(),
            port: self.port,
            cors_origins: self.cors_origins.clone(),
            request_timeout: Duration::from_secs(self.request_timeout_secs),
            max_body_bytes: self.max_body_bytes,
            drain_timeout: Duration::from_secs(self.drain_timeout_secs),
        }
    }
}
