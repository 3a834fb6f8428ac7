//! Polymorphic calculation model.
//!
//! A [`Calculation`] pairs a [`CalculationType`] variant with the raw inputs
//! it was created from. Inputs are validated lazily: construction always
//! succeeds once the type is known, and [`Calculation::result`] reports any
//! problem with the inputs each time it is called.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::error::{CalculationError, OperationError};
use crate::operations;
use crate::types::{Number, UserId, Value};

/// The four calculation variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalculationType {
    /// Sum of all inputs. Accepts any number of inputs, including none.
    Addition,
    /// Left fold of differences: `a - b - c ...`.
    Subtraction,
    /// Product of all inputs.
    Multiplication,
    /// Left fold of quotients: `a / b / c ...`.
    Division,
}

impl CalculationType {
    /// All variants, in display order.
    pub const ALL: [CalculationType; 4] = [
        CalculationType::Addition,
        CalculationType::Subtraction,
        CalculationType::Multiplication,
        CalculationType::Division,
    ];

    /// Lowercase type tag.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            CalculationType::Addition => "addition",
            CalculationType::Subtraction => "subtraction",
            CalculationType::Multiplication => "multiplication",
            CalculationType::Division => "division",
        }
    }

    /// Minimum number of inputs the variant accepts.
    #[must_use]
    pub fn min_inputs(self) -> usize {
        match self {
            CalculationType::Addition => 0,
            CalculationType::Subtraction
            | CalculationType::Multiplication
            | CalculationType::Division => 2,
        }
    }

    /// Computes the variant's result over already-validated numbers.
    ///
    /// # Errors
    ///
    /// - [`CalculationError::TooFewInputs`] when `inputs` is shorter than
    ///   [`min_inputs`](Self::min_inputs).
    /// - [`CalculationError::DivisionByZero`] for a division where any
    ///   input after the first is zero.
    /// - [`CalculationError::ResultOutOfRange`] when the result overflows to
    ///   infinity.
    pub fn evaluate(self, inputs: &[Number]) -> Result<Number, CalculationError> {
        let required = self.min_inputs();
        if inputs.len() < required {
            return Err(CalculationError::TooFewInputs {
                required,
                actual: inputs.len(),
            });
        }

        let value = match self {
            CalculationType::Addition => inputs
                .iter()
                .fold(Number::Int(0), |acc, &n| operations::add(acc, n)),
            CalculationType::Subtraction => fold_rest(inputs, operations::subtract),
            CalculationType::Multiplication => fold_rest(inputs, operations::multiply),
            CalculationType::Division => {
                if inputs[1..].iter().any(|n| n.is_zero()) {
                    return Err(CalculationError::DivisionByZero);
                }
                inputs[1..]
                    .iter()
                    .try_fold(inputs[0], |acc, &n| operations::divide(acc, n))
                    .map_err(|_: OperationError| CalculationError::DivisionByZero)?
            }
        };

        if value.is_finite() {
            Ok(value)
        } else {
            Err(CalculationError::ResultOutOfRange)
        }
    }
}

/// Folds `op` over `inputs[1..]` starting from `inputs[0]`. Callers guarantee a non-empty slice.
fn fold_rest(inputs: &[Number], op: fn(Number, Number) -> Number) -> Number {
    inputs[1..].iter().fold(inputs[0], |acc, &n| op(acc, n))
}

impl fmt::Display for CalculationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CalculationType {
    type Err = CalculationError;

    /// Case-insensitive match against the four type tags.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| CalculationError::UnsupportedType(s.to_string()))
    }
}

/// A single calculation owned by a user.
///
/// Immutable once built. The result is recomputed on every call to
/// [`result`](Self::result) rather than cached.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Calculation {
    id: Uuid,
    user_id: UserId,
    #[serde(rename = "type")]
    kind: CalculationType,
    inputs: Value,
}

impl Calculation {
    /// Builds a calculation of a known variant with a fresh identifier.
    ///
    /// Inputs are stored as given; they are validated by [`result`](Self::result).
    #[must_use]
    pub fn new(kind: CalculationType, user_id: UserId, inputs: impl Into<Value>) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            kind,
            inputs: inputs.into(),
        }
    }

    /// Factory: builds the variant named by `calculation_type` (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns [`CalculationError::UnsupportedType`] when the name is not one
    /// of `addition`, `subtraction`, `multiplication` or `division`.
    pub fn create(
        calculation_type: &str,
        user_id: UserId,
        inputs: impl Into<Value>,
    ) -> Result<Self, CalculationError> {
        let kind = calculation_type.parse()?;
        Ok(Self::new(kind, user_id, inputs))
    }

    #[must_use]
    pub fn id(&self) -> Uuid {
        self.id
    }

    #[must_use]
    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    #[must_use]
    pub fn kind(&self) -> CalculationType {
        self.kind
    }

    #[must_use]
    pub fn inputs(&self) -> &Value {
        &self.inputs
    }

    /// Validates the inputs and computes the result.
    ///
    /// # Errors
    ///
    /// - [`CalculationError::NotANumberList`] when the inputs are not a list
    ///   made only of numbers.
    /// - Any error from [`CalculationType::evaluate`].
    pub fn result(&self) -> Result<Number, CalculationError> {
        let numbers = self
            .inputs
            .as_numbers()
            .ok_or(CalculationError::NotANumberList)?;
        debug!(
            id = %self.id,
            kind = self.kind.as_str(),
            inputs = numbers.len(),
            "evaluating calculation"
        );
        self.kind.evaluate(&numbers)
    }
}
