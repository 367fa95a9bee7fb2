//! The weight budget as a model of the takeoff-weight self-map.
//!
//! [`WeightBudget`] evaluates `f(W_TO)`, the takeoff weight implied by a
//! trial takeoff weight. [`TakeoffMap`] and [`TakeoffResidual`] adapt it to
//! the fixed-point and bisection solvers.

use std::convert::Infallible;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use sizing_core::{EquationProblem, FixedPointProblem, Model};

use crate::{
    EmptyWeightRegression, WeightError,
    error::positive,
    fractions::max_takeoff_weight,
};

/// Fixed inputs of a takeoff-weight solve.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawBudget", into = "RawBudget"))]
pub struct WeightBudget {
    payload: f64,
    crew: f64,
    fuel_fraction: f64,
    regression: EmptyWeightRegression,
}

impl WeightBudget {
    /// Creates a validated weight budget.
    ///
    /// # Errors
    ///
    /// Returns an error if `payload` or `crew` is not finite and positive,
    /// or if `fuel_fraction` is not in `(0, 1)`.
    pub fn new(
        payload: f64,
        crew: f64,
        fuel_fraction: f64,
        regression: EmptyWeightRegression,
    ) -> Result<Self, WeightError> {
        let payload = positive("payload weight", payload)?;
        let crew = positive("crew weight", crew)?;
        if !(fuel_fraction > 0.0 && fuel_fraction < 1.0) {
            return Err(WeightError::FuelFraction {
                value: fuel_fraction,
            });
        }

        Ok(Self {
            payload,
            crew,
            fuel_fraction,
            regression,
        })
    }

    #[must_use]
    pub fn payload(&self) -> f64 {
        self.payload
    }

    #[must_use]
    pub fn crew(&self) -> f64 {
        self.crew
    }

    #[must_use]
    pub fn fuel_fraction(&self) -> f64 {
        self.fuel_fraction
    }

    #[must_use]
    pub fn regression(&self) -> &EmptyWeightRegression {
        &self.regression
    }

    /// Evaluates the weight budget at a trial takeoff weight.
    ///
    /// # Errors
    ///
    /// Returns an error if `trial` is not finite and positive, or if the
    /// budget cannot close at `trial`.
    pub fn evaluate(&self, trial: f64) -> Result<Breakdown, WeightError> {
        let trial = positive("trial takeoff weight", trial)?;
        let empty_fraction = self.regression.fraction(trial);
        let takeoff_weight =
            max_takeoff_weight(self.payload, self.crew, self.fuel_fraction, empty_fraction)?;

        Ok(Breakdown {
            fuel_fraction: self.fuel_fraction,
            empty_fraction,
            takeoff_weight,
        })
    }

    /// Derivative of the self-map `f(W_TO)` at a trial takeoff weight.
    ///
    /// Fixed-point iteration converges near a root where this slope has
    /// magnitude below one.
    ///
    /// # Errors
    ///
    /// Returns an error if the budget cannot be evaluated at `trial`.
    pub fn map_slope(&self, trial: f64) -> Result<f64, WeightError> {
        let breakdown = self.evaluate(trial)?;
        let available = 1.0 - breakdown.fuel_fraction - breakdown.empty_fraction;
        Ok(breakdown.takeoff_weight * self.regression.slope(trial) / available)
    }
}

impl Model for WeightBudget {
    type Input = f64;
    type Output = Breakdown;
    type Error = WeightError;

    fn call(&self, trial: &f64) -> Result<Breakdown, WeightError> {
        self.evaluate(*trial)
    }
}

/// Weight fractions and the implied takeoff weight for one trial weight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Breakdown {
    pub fuel_fraction: f64,
    /// Empty-weight fraction at the trial weight.
    pub empty_fraction: f64,
    /// Takeoff weight implied by the trial weight.
    pub takeoff_weight: f64,
}

impl Breakdown {
    #[must_use]
    pub fn fuel_weight(&self) -> f64 {
        self.fuel_fraction * self.takeoff_weight
    }

    #[must_use]
    pub fn empty_weight(&self) -> f64 {
        self.empty_fraction * self.takeoff_weight
    }
}

/// The self-map `W_TO ↦ f(W_TO)` for fixed-point iteration.
#[derive(Debug, Clone, Copy, Default)]
pub struct TakeoffMap;

impl FixedPointProblem for TakeoffMap {
    type Input = f64;
    type Output = Breakdown;
    type Error = Infallible;

    fn input(&self, x: f64) -> Result<f64, Self::Error> {
        Ok(x)
    }

    fn next(&self, _trial: &f64, output: &Breakdown) -> Result<f64, Self::Error> {
        Ok(output.takeoff_weight)
    }
}

/// The residual `r(W_TO) = W_TO - f(W_TO)` for bisection.
#[derive(Debug, Clone, Copy, Default)]
pub struct TakeoffResidual;

impl EquationProblem<1> for TakeoffResidual {
    type Input = f64;
    type Output = Breakdown;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<f64, Self::Error> {
        Ok(x[0])
    }

    fn residuals(&self, trial: &f64, output: &Breakdown) -> Result<[f64; 1], Self::Error> {
        Ok([trial - output.takeoff_weight])
    }
}

#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
struct RawBudget {
    payload: f64,
    crew: f64,
    fuel_fraction: f64,
    regression: EmptyWeightRegression,
}

#[cfg(feature = "serde")]
impl TryFrom<RawBudget> for WeightBudget {
    type Error = WeightError;

    fn try_from(raw: RawBudget) -> Result<Self, Self::Error> {
        Self::new(raw.payload, raw.crew, raw.fuel_fraction, raw.regression)
    }
}

#[cfg(feature = "serde")]
impl From<WeightBudget> for RawBudget {
    fn from(budget: WeightBudget) -> Self {
        Self {
            payload: budget.payload,
            crew: budget.crew,
            fuel_fraction: budget.fuel_fraction,
            regression: budget.regression,
        }
    }
}
