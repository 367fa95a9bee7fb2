//! Preliminary takeoff-weight estimation.
//!
//! The takeoff weight `W_TO` of a design closes the weight budget
//!
//! ```text
//! W_TO = (W_payload + W_crew) / (1 - W_f/W_TO - W_e/W_TO)
//! ```
//!
//! where the fuel fraction `W_f/W_TO` follows from the mission profile and
//! the empty-weight fraction `W_e/W_TO = A · W_TO^B` is a historical
//! regression. Because the empty-weight fraction depends on `W_TO`, the
//! relation is implicit and is solved either by fixed-point iteration
//! ([`size_fixed_point`]) or by bisection of its residual
//! ([`size_bisection`]).
//!
//! # Modules
//!
//! - [`fractions`] — the closed-form weight relations
//! - [`regression`] — empty-weight regressions and aircraft-class presets
//! - [`mission`] — mission segments and the fuel fraction they imply
//! - [`budget`] — the weight budget as a [`Model`](sizing_core::Model)
//!
//! # Example
//!
//! ```rust
//! use sizing_solvers::fixed_point;
//! use sizing_weights::{
//!     AircraftClass, EmptyWeightRegression, Outcome, WeightBudget, size_fixed_point,
//! };
//!
//! let regression = EmptyWeightRegression::for_class(AircraftClass::MilitaryCargoBomber);
//! let budget = WeightBudget::new(10_000.0, 800.0, 0.3, regression)?;
//!
//! let outcome = size_fixed_point(&budget, 20_000.0, &fixed_point::Config::default())?;
//! let Outcome::Converged(estimate) = outcome else {
//!     panic!("expected convergence");
//! };
//! assert!((estimate.takeoff_weight - 41_791.95).abs() < 0.01);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod budget;
pub mod fractions;
pub mod mission;
pub mod regression;

mod error;
mod sizing;

pub use budget::{Breakdown, TakeoffMap, TakeoffResidual, WeightBudget};
pub use error::WeightError;
pub use mission::{Cruise, Loiter, Mission, MissionError, Segment};
pub use regression::{AircraftClass, EmptyWeightRegression};
pub use sizing::{Estimate, Outcome, SizingError, size_bisection, size_fixed_point};
