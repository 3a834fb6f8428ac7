//! Two-operand arithmetic over [`Number`].
//!
//! Integer arithmetic is checked: an overflowing `i64` operation falls back
//! to `f64` instead of wrapping. Division always yields a float.

use std::fmt;

use crate::error::OperationError;
use crate::types::Number;

/// Applies `checked` when both operands are integers, `float` otherwise or on overflow.
fn combine(
    a: Number,
    b: Number,
    checked: fn(i64, i64) -> Option<i64>,
    float: fn(f64, f64) -> f64,
) -> Number {
    if let (Number::Int(x), Number::Int(y)) = (a, b) {
        if let Some(v) = checked(x, y) {
            return Number::Int(v);
        }
    }
    Number::Float(float(a.as_f64(), b.as_f64()))
}

/// Returns `a + b`.
#[must_use]
pub fn add(a: Number, b: Number) -> Number {
    combine(a, b, i64::checked_add, |x, y| x + y)
}

/// Returns `a - b`.
#[must_use]
pub fn subtract(a: Number, b: Number) -> Number {
    combine(a, b, i64::checked_sub, |x, y| x - y)
}

/// Returns `a * b`.
#[must_use]
pub fn multiply(a: Number, b: Number) -> Number {
    combine(a, b, i64::checked_mul, |x, y| x * y)
}

/// Returns `a / b` as a float.
///
/// # Errors
///
/// Returns [`OperationError::DivideByZero`] when `b` is zero.
pub fn divide(a: Number, b: Number) -> Result<Number, OperationError> {
    if b.is_zero() {
        return Err(OperationError::DivideByZero);
    }
    Ok(Number::Float(a.as_f64() / b.as_f64()))
}

/// One of the four binary operators exposed over HTTP.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl BinaryOperator {
    /// Lowercase name, also used as the HTTP path segment.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            BinaryOperator::Add => "add",
            BinaryOperator::Subtract => "subtract",
            BinaryOperator::Multiply => "multiply",
            BinaryOperator::Divide => "divide",
        }
    }

    /// Applies the operator to `a` and `b`.
    ///
    /// # Errors
    ///
    /// - [`OperationError::DivideByZero`] for a division by zero.
    /// - [`OperationError::ResultOutOfRange`] when the result is not finite.
    pub fn apply(self, a: Number, b: Number) -> Result<Number, OperationError> {
        let value = match self {
            BinaryOperator::Add => add(a, b),
            BinaryOperator::Subtract => subtract(a, b),
            BinaryOperator::Multiply => multiply(a, b),
            BinaryOperator::Divide => divide(a, b)?,
        };
        if value.is_finite() {
            Ok(value)
        } else {
            Err(OperationError::ResultOutOfRange)
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(n: Number, expected: f64) -> bool {
        (n.as_f64() - expected).abs() < 1e-9
    }

    #[test]
    fn add_integers_and_floats() {
        assert_eq!(add(2.into(), 3.into()), Number::Int(5));
        assert_eq!(add((-2).into(), (-3).into()), Number::Int(-5));
        assert!(approx(add(2.5.into(), 3.5.into()), 6.0));
        assert!(approx(add((-2.5).into(), 3.5.into()), 1.0));
        assert_eq!(add(0.into(), 0.into()), Number::Int(0));
    }

    #[test]
    fn subtract_integers_and_floats() {
        assert_eq!(subtract(5.into(), 3.into()), Number::Int(2));
        assert_eq!(subtract((-5).into(), (-3).into()), Number::Int(-2));
        assert!(approx(subtract(5.5.into(), 2.5.into()), 3.0));
        assert!(approx(subtract((-5.5).into(), (-2.5).into()), -3.0));
    }

    #[test]
    fn multiply_integers_and_floats() {
        assert_eq!(multiply(2.into(), 3.into()), Number::Int(6));
        assert_eq!(multiply((-2).into(), 3.into()), Number::Int(-6));
        assert!(approx(multiply(2.5.into(), 4.0.into()), 10.0));
        assert_eq!(multiply(0.into(), 5.into()), Number::Int(0));
    }

    #[test]
    fn divide_always_yields_float() {
        let q = divide(6.into(), 3.into()).unwrap();
        assert!(matches!(q, Number::Float(_)));
        assert!(approx(q, 2.0));
        assert!(approx(divide((-6).into(), 3.into()).unwrap(), -2.0));
        assert!(approx(divide(0.into(), 5.into()).unwrap(), 0.0));
        assert!(approx(divide(7.into(), 2.into()).unwrap(), 3.5));
    }

    #[test]
    fn divide_by_zero_fails() {
        let err = divide(6.into(), 0.into()).unwrap_err();
        assert_eq!(err, OperationError::DivideByZero);
        assert_eq!(err.to_string(), "Cannot divide by zero!");
        assert!(divide(6.into(), 0.0.into()).is_err());
    }

    #[test]
    fn integer_overflow_falls_back_to_float() {
        let sum = add(i64::MAX.into(), 1.into());
        assert!(matches!(sum, Number::Float(_)));

        let product = multiply(i64::MAX.into(), 2.into());
        assert!(matches!(product, Number::Float(_)));
    }

    #[test]
    fn binary_operator_dispatch() {
        assert_eq!(BinaryOperator::Add.apply(10.into(), 5.into()), Ok(Number::Int(15)));
        assert_eq!(BinaryOperator::Subtract.apply(10.into(), 5.into()), Ok(Number::Int(5)));
        assert_eq!(BinaryOperator::Multiply.apply(10.into(), 5.into()), Ok(Number::Int(50)));
        assert_eq!(BinaryOperator::Divide.apply(10.into(), 2.into()), Ok(Number::Int(5)));
        assert_eq!(
            BinaryOperator::Divide.apply(10.into(), 0.into()),
            Err(OperationError::DivideByZero)
        );
    }

    #[test]
    fn binary_operator_names() {
        assert_eq!(BinaryOperator::Add.to_string(), "add");
        assert_eq!(BinaryOperator::Multiply.to_string(), "multiply");
    }

    #[test]
    fn float_overflow_is_out_of_range() {
        assert_eq!(
            BinaryOperator::Multiply.apply(1e308.into(), 10.into()),
            Err(OperationError::ResultOutOfRange)
        );
        assert_eq!(
            BinaryOperator::Add.apply(f64::MAX.into(), f64::MAX.into()),
            Err(OperationError::ResultOutOfRange)
        );
        assert_eq!(
            BinaryOperator::Divide.apply(1e308.into(), 1e-308.into()),
            Err(OperationError::ResultOutOfRange)
        );
        assert_eq!(
            OperationError::ResultOutOfRange.to_string(),
            "Result is out of range!"
        );
    }
}
