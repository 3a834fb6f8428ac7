use clap::Parser;
use tracing::{info, warn};

use calculator_server::cli::ServerArgs;
use calculator_server::{telemetry, NetworkModule};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = ServerArgs::parse();
    telemetry::init_tracing(args.log_format, &args.log_level)?;

    if let Some(addr) = args.metrics_addr {
        telemetry::install_metrics_exporter(addr)?;
        info!(%addr, "Prometheus exporter listening");
    }

    let mut module = NetworkModule::new(args.network_config());
    let port = module.start().await?;
    info!(port, "calculator server ready");

    module.serve(shutdown_signal()).await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for Ctrl-C: {e}");
        std::future::pending::<()>().await;
    }
}
