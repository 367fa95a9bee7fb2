//! Takeoff-weight drivers over the generic solvers.

use std::error::Error as StdError;

use thiserror::Error;

use sizing_observers::TraceObserver;
use sizing_solvers::{
    History,
    equation::bisection::{self, BracketError},
    fixed_point,
};

use crate::{
    WeightBudget, WeightError,
    budget::{TakeoffMap, TakeoffResidual},
};

/// A takeoff-weight estimate and the iterations that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct Estimate {
    /// Final (or last) takeoff-weight estimate.
    pub takeoff_weight: f64,

    /// Empty-weight fraction at [`Estimate::takeoff_weight`].
    pub empty_fraction: f64,

    /// Number of iterations performed.
    pub iters: usize,

    /// Per-iteration records, one per iteration.
    pub history: History,
}

/// The outcome of a sizing run.
///
/// A run that exhausts its iteration budget is not an error. Its last
/// estimate is returned as [`Outcome::NotConverged`] so the caller can
/// retry or accept it knowingly.
#[derive(Debug, Clone, PartialEq)]
#[must_use]
pub enum Outcome {
    Converged(Estimate),
    NotConverged(Estimate),
}

impl Outcome {
    /// Returns the estimate regardless of convergence.
    #[must_use]
    pub fn estimate(&self) -> &Estimate {
        match self {
            Self::Converged(estimate) | Self::NotConverged(estimate) => estimate,
        }
    }

    #[must_use]
    pub fn into_estimate(self) -> Estimate {
        match self {
            Self::Converged(estimate) | Self::NotConverged(estimate) => estimate,
        }
    }

    #[must_use]
    pub fn is_converged(&self) -> bool {
        matches!(self, Self::Converged(_))
    }

    /// Returns the estimate only if the run converged.
    #[must_use]
    pub fn converged(self) -> Option<Estimate> {
        match self {
            Self::Converged(estimate) => Some(estimate),
            Self::NotConverged(_) => None,
        }
    }
}

/// Errors raised while sizing a design.
#[derive(Debug, Error)]
pub enum SizingError {
    /// The weight budget cannot close at some trial weight.
    #[error(
        "infeasible weight budget: fuel fraction {fuel_fraction} + empty fraction {empty_fraction} >= 1"
    )]
    InfeasibleWeightBudget {
        fuel_fraction: f64,
        empty_fraction: f64,
    },

    /// The bisection bracket does not straddle a root.
    #[error("no sign change in bracket: r({left}) = {left_residual}, r({right}) = {right_residual}")]
    NoSignChange {
        left: f64,
        right: f64,
        left_residual: f64,
        right_residual: f64,
    },

    #[error("initial takeoff weight guess must be finite and positive, got {guess}")]
    InvalidGuess { guess: f64 },

    #[error("invalid bracket: {0}")]
    InvalidBracket(#[from] BracketError),

    /// An iterate was zero or non-finite, or a residual was non-finite.
    #[error("invalid iterate at takeoff weight {x}: zero or non-finite value")]
    InvalidIterate { x: f64 },

    #[error(transparent)]
    Weight(WeightError),

    #[error("solver failed")]
    Solver(#[source] Box<dyn StdError + Send + Sync>),
}

impl From<WeightError> for SizingError {
    fn from(err: WeightError) -> Self {
        match err {
            WeightError::InfeasibleWeightBudget {
                fuel_fraction,
                empty_fraction,
            } => Self::InfeasibleWeightBudget {
                fuel_fraction,
                empty_fraction,
            },
            other => Self::Weight(other),
        }
    }
}

impl SizingError {
    /// Recovers a [`WeightError`] raised by the budget inside a solver.
    fn from_model(err: Box<dyn StdError + Send + Sync>) -> Self {
        match err.downcast::<WeightError>() {
            Ok(weight) => (*weight).into(),
            Err(other) => Self::Solver(other),
        }
    }
}

impl From<fixed_point::Error> for SizingError {
    fn from(err: fixed_point::Error) -> Self {
        match err {
            fixed_point::Error::InvalidGuess { guess } => Self::InvalidGuess { guess },
            fixed_point::Error::InvalidIterate { x, .. } => Self::InvalidIterate { x },
            fixed_point::Error::Model(err) => Self::from_model(err),
            fixed_point::Error::Problem(err) => Self::Solver(err),
        }
    }
}

impl From<bisection::Error> for SizingError {
    fn from(err: bisection::Error) -> Self {
        match err {
            bisection::Error::InvalidBracket(err) => Self::InvalidBracket(err),
            bisection::Error::NoSignChange {
                left,
                right,
                left_residual,
                right_residual,
            } => Self::NoSignChange {
                left,
                right,
                left_residual,
                right_residual,
            },
            bisection::Error::NonFiniteResidual { x, .. } => Self::InvalidIterate { x },
            bisection::Error::Model(err) => Self::from_model(err),
            bisection::Error::Problem(err) => Self::Solver(err),
        }
    }
}

/// Sizes a design by fixed-point iteration of the takeoff-weight self-map.
///
/// Convergence is local: the map must be a contraction near its fixed
/// point (see [`WeightBudget::map_slope`]) and `guess` must lie in its
/// basin of attraction.
///
/// # Errors
///
/// Returns an error if `guess` is not finite and positive, or if the
/// budget cannot close at some iterate.
pub fn size_fixed_point(
    budget: &WeightBudget,
    guess: f64,
    config: &fixed_point::Config,
) -> Result<Outcome, SizingError> {
    if !(guess.is_finite() && guess > 0.0) {
        return Err(SizingError::InvalidGuess { guess });
    }

    let solution = fixed_point::solve(
        budget,
        &TakeoffMap,
        guess,
        config,
        TraceObserver::new("fixed_point"),
    )?;

    let converged = solution.is_converged();
    let estimate = Estimate {
        takeoff_weight: solution.x,
        empty_fraction: budget.regression().fraction(solution.x),
        iters: solution.iters,
        history: solution.history,
    };

    if converged {
        tracing::debug!(
            takeoff_weight = estimate.takeoff_weight,
            iters = estimate.iters,
            "fixed-point sizing converged"
        );
        Ok(Outcome::Converged(estimate))
    } else {
        tracing::warn!(
            takeoff_weight = estimate.takeoff_weight,
            iters = estimate.iters,
            rel_change = solution.rel_change,
            map_slope = budget.map_slope(estimate.takeoff_weight).ok(),
            "fixed-point sizing did not converge"
        );
        Ok(Outcome::NotConverged(estimate))
    }
}

/// Sizes a design by bisection of the residual `W_TO - f(W_TO)`.
///
/// The tolerance in `config` bounds the residual magnitude, which is in
/// weight units.
///
/// # Errors
///
/// Returns an error if the bracket is invalid or does not straddle a sign
/// change, or if the budget cannot close at some trial weight.
pub fn size_bisection(
    budget: &WeightBudget,
    bracket: [f64; 2],
    config: &bisection::Config,
) -> Result<Outcome, SizingError> {
    let solution = bisection::solve(
        budget,
        &TakeoffResidual,
        bracket,
        config,
        TraceObserver::new("bisection"),
    )?;

    let converged = solution.is_converged();
    let estimate = Estimate {
        takeoff_weight: solution.x,
        empty_fraction: solution.snapshot.output.empty_fraction,
        iters: solution.iters,
        history: solution.history,
    };

    if converged {
        tracing::debug!(
            takeoff_weight = estimate.takeoff_weight,
            iters = estimate.iters,
            "bisection sizing converged"
        );
        Ok(Outcome::Converged(estimate))
    } else {
        tracing::warn!(
            takeoff_weight = estimate.takeoff_weight,
            iters = estimate.iters,
            residual = solution.residual,
            "bisection sizing did not converge"
        );
        Ok(Outcome::NotConverged(estimate))
    }
}
