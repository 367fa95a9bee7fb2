use sizing_core::Snapshot;

use crate::History;

/// Indicates whether the solver converged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The relative change dropped below the tolerance.
    Converged,
    /// Reached the iteration limit without converging.
    MaxIters,
    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a fixed-point solve.
#[derive(Debug, Clone)]
pub struct Solution<I, O> {
    /// Final solver status.
    pub status: Status,
    /// Latest iterate.
    pub x: f64,
    /// Relative change of the latest iteration.
    pub rel_change: f64,
    /// Model call that produced `x`.
    pub snapshot: Snapshot<I, O>,
    /// Number of iterations performed.
    pub iters: usize,
    /// One record per iteration.
    pub history: History,
}

impl<I, O> Solution<I, O> {
    /// Returns true if the solver converged.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        self.status == Status::Converged
    }
}
