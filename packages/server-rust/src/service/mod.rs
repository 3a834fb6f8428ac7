//! Domain services used by the HTTP handlers.

pub mod calculator;

pub use calculator::{CalculatorService, CalculatorStats};
