//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, enabling
//! observers to work generically across different solvers.
//!
//! # Event traits
//!
//! - [`HasIter`] — events that carry an iteration counter
//! - [`HasEstimate`] — events that carry the current estimate of the solution
//! - [`HasError`] — events that carry a convergence measure
//!
//! # Action traits
//!
//! - [`CanStopEarly`] — actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use sizing_core::Observer;
//! use sizing_observers::traits::{CanStopEarly, HasError, HasIter};
//!
//! struct AfterFive;
//!
//! impl<E: HasIter + HasError, A: CanStopEarly> Observer<E, A> for AfterFive {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.iter() >= 5 && event.error() < 1e-3).then(A::stop_early)
//!     }
//! }
//! ```

use sizing_solvers::{equation::bisection, fixed_point};

/// An event that carries a 1-based iteration counter.
pub trait HasIter {
    /// Returns the iteration counter.
    fn iter(&self) -> usize;
}

/// An event that carries the solver's current estimate.
pub trait HasEstimate {
    /// Returns the estimate produced by this iteration.
    fn estimate(&self) -> f64;
}

/// An event that carries a convergence measure.
///
/// The measure is whatever the solver compares against its tolerance.
pub trait HasError {
    /// Returns the convergence measure for this iteration.
    fn error(&self) -> f64;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

// --- bisection::Event ---

impl<I, O> HasIter for bisection::Event<'_, I, O> {
    fn iter(&self) -> usize {
        self.iter
    }
}

impl<I, O> HasEstimate for bisection::Event<'_, I, O> {
    fn estimate(&self) -> f64 {
        self.x()
    }
}

/// Absolute residual at the midpoint.
impl<I, O> HasError for bisection::Event<'_, I, O> {
    fn error(&self) -> f64 {
        self.residual().abs()
    }
}

// --- fixed_point::Event ---

impl<I, O> HasIter for fixed_point::Event<'_, I, O> {
    fn iter(&self) -> usize {
        self.iter
    }
}

impl<I, O> HasEstimate for fixed_point::Event<'_, I, O> {
    fn estimate(&self) -> f64 {
        self.x
    }
}

/// Relative change between successive iterates.
impl<I, O> HasError for fixed_point::Event<'_, I, O> {
    fn error(&self) -> f64 {
        self.rel_change
    }
}

// --- CanStopEarly impls ---

impl CanStopEarly for bisection::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

impl CanStopEarly for fixed_point::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
