use thiserror::Error;

/// Errors raised by the weight relations and the weight budget.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum WeightError {
    /// Fuel and empty weight leave no room for payload and crew.
    #[error(
        "infeasible weight budget: fuel fraction {fuel_fraction} + empty fraction {empty_fraction} >= 1"
    )]
    InfeasibleWeightBudget {
        fuel_fraction: f64,
        empty_fraction: f64,
    },

    /// A weight that must be finite and positive is not.
    #[error("{name} must be finite and positive, got {value}")]
    NonPositiveWeight { name: &'static str, value: f64 },

    /// A fuel fraction outside `(0, 1)`.
    #[error("fuel fraction must lie in (0, 1), got {value}")]
    FuelFraction { value: f64 },
}

/// Checks that a weight is finite and positive.
pub(crate) fn positive(name: &'static str, value: f64) -> Result<f64, WeightError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(WeightError::NonPositiveWeight { name, value })
    }
}
