//! Error taxonomy for the calculation model.
//!
//! Every failure is an "invalid input" condition detected at the point of
//! computation. Display strings are part of the public contract: the HTTP
//! layer forwards them verbatim as `{"error": ...}` bodies.

/// Errors raised when constructing or evaluating a [`Calculation`](crate::Calculation).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalculationError {
    /// The factory was given a type name outside the four supported ones.
    #[error("Unsupported calculation type: '{0}'")]
    UnsupportedType(String),
    /// Inputs are not a list, or the list holds something other than numbers.
    #[error("Inputs must be a list of numbers.")]
    NotANumberList,
    /// A variant that folds over its inputs got fewer than it needs.
    #[error("Inputs must be a list with at least two numbers.")]
    TooFewInputs {
        /// Minimum number of inputs the variant accepts.
        required: usize,
        /// Number of inputs actually supplied.
        actual: usize,
    },
    /// A divisor after the first input is zero.
    #[error("Cannot divide by zero.")]
    DivisionByZero,
    /// The result overflowed the range of a 64-bit float.
    #[error("Result is out of range.")]
    ResultOutOfRange,
}

/// Errors raised by the two-operand [`operations`](crate::operations).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum OperationError {
    #[error("Cannot divide by zero!")]
    DivideByZero,
    #[error("Result is out of range!")]
    ResultOutOfRange,
}
