//! Calculator Core: numbers, dynamic input values, two-operand arithmetic, and
//! the polymorphic `Calculation` model.

pub mod calculation;
pub mod error;
pub mod operations;
pub mod types;

pub use calculation::{Calculation, CalculationType};
pub use error::{CalculationError, OperationError};
pub use operations::BinaryOperator;
pub use types::{Number, UserId, Value};
