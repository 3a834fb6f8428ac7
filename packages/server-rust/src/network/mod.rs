//! HTTP surface: configuration, handlers, middleware, error mapping, and lifecycle.

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod module;
pub mod openapi;
pub mod shutdown;

pub use config::NetworkConfig;
pub use error::{ApiError, ErrorResponse};
pub use handlers::AppState;
pub use module::NetworkModule;
pub use shutdown::{HealthState, InFlightGuard, ShutdownController};
