//! Calculator Server: axum HTTP API and browser page over `calculator-core`.

pub mod cli;
pub mod network;
pub mod service;
pub mod telemetry;

pub use network::{NetworkConfig, NetworkModule};
pub use service::CalculatorService;
