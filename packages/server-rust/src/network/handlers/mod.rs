//! HTTP handler definitions for the calculator server.
//!
//! This module defines `AppState` (the shared state carried through axum
//! extractors) and re-exports all handler functions for building the router.

pub mod arithmetic;
pub mod calculations;
pub mod health;
pub mod page;

pub use arithmetic::{add_handler, divide_handler, multiply_handler, subtract_handler};
pub use calculations::calculation_handler;
pub use health::{health_handler, liveness_handler, readiness_handler};
pub use page::{index_handler, openapi_handler};

use std::sync::Arc;
use std::time::Instant;

use super::{NetworkConfig, ShutdownController};
use crate::service::CalculatorService;

/// Shared application state passed to all axum handlers via `State` extraction.
///
/// Holds `Arc` references so cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    /// Evaluates operations and calculations; also owns the evaluation counters.
    pub calculator: Arc<CalculatorService>,
    /// Graceful shutdown controller with health state and in-flight tracking.
    pub shutdown: Arc<ShutdownController>,
    /// Network configuration the server was started with.
    pub config: Arc<NetworkConfig>,
    /// Server process start time, used for uptime calculation.
    pub start_time: Instant,
}

impl AppState {
    /// Fresh state with a new calculator service and shutdown controller.
    #[must_use]
    pub fn new(config: NetworkConfig) -> Self {
        Self {
            calculator: Arc::new(CalculatorService::new()),
            shutdown: Arc::new(ShutdownController::new()),
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }
}
