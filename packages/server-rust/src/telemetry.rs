//! Logging and metrics setup for the server binary.
//!
//! `RUST_LOG` takes precedence over the configured default filter:
//! ```bash
//! RUST_LOG=calculator_server=debug,calculator_core=debug calculator-server
//! ```

use std::net::SocketAddr;

use metrics_exporter_prometheus::PrometheusBuilder;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::cli::LogFormat;

/// Builds the event filter: `RUST_LOG` if set, otherwise `default_filter`.
///
/// # Errors
///
/// Returns an error if `default_filter` is not a valid filter directive.
pub fn env_filter(default_filter: &str) -> anyhow::Result<EnvFilter> {
    if std::env::var_os(EnvFilter::DEFAULT_ENV).is_some() {
        return Ok(EnvFilter::from_default_env());
    }
    Ok(EnvFilter::try_new(default_filter)?)
}

/// Installs the global `tracing` subscriber.
///
/// # Errors
///
/// Returns an error if the filter is invalid or a global subscriber is already set.
pub fn init_tracing(format: LogFormat, default_filter: &str) -> anyhow::Result<()> {
    let filter = env_filter(default_filter)?;
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .try_init()?,
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_current_span(true),
            )
            .try_init()?,
    }
    Ok(())
}

/// Installs the Prometheus recorder and its scrape endpoint on `addr`.
///
/// Must be called from within a tokio runtime.
///
/// # Errors
///
/// Returns an error if a recorder is already installed or the listener fails.
pub fn install_metrics_exporter(addr: SocketAddr) -> anyhow::Result<()> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_filter_accepts_directives() {
        if std::env::var_os(EnvFilter::DEFAULT_ENV).is_none() {
            assert!(env_filter("info,calculator_core=debug").is_ok());
            assert!(env_filter("calculator_server=notalevel").is_err());
        }
    }
}
