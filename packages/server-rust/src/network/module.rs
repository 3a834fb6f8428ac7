//! Network module with deferred startup lifecycle.
//!
//! `new()` creates shared state, `start()` binds the TCP listener, and
//! `serve()` accepts connections until the shutdown future resolves.

use std::future::Future;
use std::sync::Arc;

use axum::middleware::from_fn_with_state;
use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tracing::{info, warn};

use super::config::NetworkConfig;
use super::handlers::{
    add_handler, calculation_handler, divide_handler, health_handler, index_handler,
    liveness_handler, multiply_handler, openapi_handler, readiness_handler, subtract_handler,
    AppState,
};
use super::middleware::with_http_layers;
use super::shutdown::{track_in_flight, ShutdownController};
use crate::service::CalculatorService;

/// Manages the HTTP server lifecycle.
pub struct NetworkModule {
    state: AppState,
    listener: Option<TcpListener>,
}

impl NetworkModule {
    /// Creates the module without binding any port.
    #[must_use]
    pub fn new(config: NetworkConfig) -> Self {
        Self {
            state: AppState::new(config),
            listener: None,
        }
    }

    #[must_use]
    pub fn shutdown_controller(&self) -> Arc<ShutdownController> {
        Arc::clone(&self.state.shutdown)
    }

    #[must_use]
    pub fn calculator(&self) -> Arc<CalculatorService> {
        Arc::clone(&self.state.calculator)
    }

    /// Assembles the axum router with all routes and middleware.
    ///
    /// Routes:
    /// - `GET /` -- calculator page
    /// - `GET /openapi.json` -- API description
    /// - `GET /health`, `/health/live`, `/health/ready` -- probes
    /// - `POST /add`, `/subtract`, `/multiply`, `/divide` -- two-operand arithmetic
    /// - `POST /calculations` -- polymorphic calculation over a list of inputs
    ///
    /// Only the API routes are in-flight tracked; probes stay answerable while draining.
    pub fn build_router(&self) -> Router {
        build_router(self.state.clone())
    }

    /// Binds the TCP listener and returns the bound port (OS-assigned when configured as 0).
    ///
    /// # Errors
    ///
    /// Returns an error if the address cannot be bound (e.g., port in use).
    pub async fn start(&mut self) -> anyhow::Result<u16> {
        let listener = TcpListener::bind(self.state.config.bind_addr()).await?;
        let port = listener.local_addr()?.port();

        info!("TCP listener bound to {}:{}", self.state.config.host, port);

        self.listener = Some(listener);
        Ok(port)
    }

    /// Serves requests until `shutdown` resolves, then drains in-flight requests.
    ///
    /// Shutdown sequence:
    /// 1. The shutdown future fires: health goes to Draining, new API calls get 503
    /// 2. axum stops accepting connections and finishes open ones
    /// 3. Waits up to `drain_timeout` for tracked requests, then health goes to Stopped
    ///
    /// # Errors
    ///
    /// Returns an error if the server encounters a fatal I/O error.
    ///
    /// # Panics
    ///
    /// Panics if `start()` was not called before `serve()`.
    pub async fn serve(
        self,
        shutdown: impl Future<Output = ()> + Send + 'static,
    ) -> anyhow::Result<()> {
        let listener = self
            .listener
            .expect("start() must be called before serve()");
        let state = self.state;
        let controller = Arc::clone(&state.shutdown);
        let drain_timeout = state.config.drain_timeout;

        let router = build_router(state);

        let signal_controller = Arc::clone(&controller);
        let signal = async move {
            shutdown.await;
            info!("Shutdown signal received, draining");
            signal_controller.trigger_shutdown();
        };

        controller.set_ready();
        info!("Serving HTTP connections");

        axum::serve(listener, router)
            .with_graceful_shutdown(signal)
            .await?;

        controller.trigger_shutdown();
        if controller.wait_for_drain(drain_timeout).await {
            info!("All requests drained");
        } else {
            warn!(
                in_flight = controller.in_flight_count(),
                "Drain timeout expired with in-flight requests remaining"
            );
        }
        Ok(())
    }
}

fn build_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/add", post(add_handler))
        .route("/subtract", post(subtract_handler))
        .route("/multiply", post(multiply_handler))
        .route("/divide", post(divide_handler))
        .route("/calculations", post(calculation_handler))
        .route_layer(from_fn_with_state(
            Arc::clone(&state.shutdown),
            track_in_flight,
        ));

    let config = Arc::clone(&state.config);

    let router = Router::new()
        .route("/", get(index_handler))
        .route("/openapi.json", get(openapi_handler))
        .route("/health", get(health_handler))
        .route("/health/live", get(liveness_handler))
        .route("/health/ready", get(readiness_handler))
        .merge(api)
        .with_state(state);

    with_http_layers(router, &config)
}
