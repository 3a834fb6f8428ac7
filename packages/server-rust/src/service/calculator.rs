//! Calculator domain service.
//!
//! Thin stateless wrapper over `calculator-core` that adds the server's
//! observability: `tracing` events for rejected input, `metrics` counters per
//! operation and outcome, and in-process totals reported by `/health`.

use std::sync::atomic::{AtomicU64, Ordering};

use calculator_core::{
    BinaryOperator, Calculation, CalculationError, Number, OperationError,
};
use serde::Serialize;
use tracing::debug;

/// Snapshot of the service's evaluation counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CalculatorStats {
    /// Evaluations that produced a result.
    pub evaluated: u64,
    /// Evaluations rejected because of invalid input.
    pub rejected: u64,
}

/// Evaluates binary operations and calculations on behalf of the HTTP handlers.
#[derive(Debug, Default)]
pub struct CalculatorService {
    evaluated: AtomicU64,
    rejected: AtomicU64,
}

impl CalculatorService {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies `op` to the two operands.
    ///
    /// # Errors
    ///
    /// Propagates any [`OperationError`] raised by the operator.
    pub fn apply(
        &self,
        op: BinaryOperator,
        a: Number,
        b: Number,
    ) -> Result<Number, OperationError> {
        let result = op.apply(a, b);
        match &result {
            Ok(value) => {
                debug!(operation = op.as_str(), %a, %b, %value, "operation evaluated");
            }
            Err(err) => {
                debug!(operation = op.as_str(), %a, %b, error = %err, "operation rejected");
            }
        }
        self.record(
            "calculator_operations_total",
            "operation",
            op.as_str(),
            result.is_ok(),
        );
        result
    }

    /// Computes the result of a calculation.
    ///
    /// # Errors
    ///
    /// Propagates any [`CalculationError`] raised by the calculation.
    pub fn evaluate(&self, calculation: &Calculation) -> Result<Number, CalculationError> {
        let result = calculation.result();
        if let Err(err) = &result {
            debug!(
                id = %calculation.id(),
                user_id = %calculation.user_id(),
                kind = calculation.kind().as_str(),
                error = %err,
                "calculation rejected"
            );
        }
        self.record(
            "calculator_calculations_total",
            "type",
            calculation.kind().as_str(),
            result.is_ok(),
        );
        result
    }

    /// Returns the current counter values.
    #[must_use]
    pub fn stats(&self) -> CalculatorStats {
        CalculatorStats {
            evaluated: self.evaluated.load(Ordering::Relaxed),
            rejected: self.rejected.load(Ordering::Relaxed),
        }
    }

    fn record(&self, metric: &'static str, label: &'static str, value: &'static str, ok: bool) {
        let outcome = if ok {
            self.evaluated.fetch_add(1, Ordering::Relaxed);
            "ok"
        } else {
            self.rejected.fetch_add(1, Ordering::Relaxed);
            "rejected"
        };
        metrics::counter!(metric, label => value, "outcome" => outcome).increment(1);
    }
}

#[cfg(test)]
mod tests {
    use calculator_core::{CalculationType, UserId};

    use super::*;

    #[test]
    fn apply_counts_successes_and_rejections() {
        let service = CalculatorService::new();

        let sum = service.apply(BinaryOperator::Add, 10.into(), 5.into()).unwrap();
        assert_eq!(sum, Number::Int(15));

        let err = service
            .apply(BinaryOperator::Divide, 10.into(), 0.into())
            .unwrap_err();
        assert_eq!(err, OperationError::DivideByZero);

        assert_eq!(
            service.stats(),
            CalculatorStats {
                evaluated: 1,
                rejected: 1
            }
        );
    }

    #[test]
    fn evaluate_delegates_to_calculation() {
        let service = CalculatorService::new();
        let calc = Calculation::new(CalculationType::Multiplication, UserId::random(), vec![3, 4, 2]);
        assert_eq!(service.evaluate(&calc), Ok(Number::Int(24)));

        let bad = Calculation::new(CalculationType::Subtraction, UserId::random(), vec![1]);
        assert!(matches!(
            service.evaluate(&bad),
            Err(CalculationError::TooFewInputs { .. })
        ));

        assert_eq!(service.stats().evaluated, 1);
        assert_eq!(service.stats().rejected, 1);
    }

    #[test]
    fn new_service_starts_at_zero() {
        let stats = CalculatorService::new().stats();
        assert_eq!(stats.evaluated, 0);
        assert_eq!(stats.rejected, 0);
    }
}
