use sizing_core::Snapshot;

use crate::{History, equation::Evaluation};

/// Indicates whether the solver converged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// `|r(x)|` dropped below the residual tolerance.
    Converged,
    /// Reached the iteration limit without converging.
    MaxIters,
    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a bisection solve.
#[derive(Debug, Clone)]
pub struct Solution<I, O> {
    /// Final solver status.
    pub status: Status,
    /// Reported root estimate: the converged point or the last midpoint.
    pub x: f64,
    /// Residual at `x`.
    pub residual: f64,
    /// Snapshot at `x`.
    pub snapshot: Snapshot<I, O>,
    /// Number of midpoint iterations performed.
    pub iters: usize,
    /// One record per midpoint iteration.
    pub history: History,
}

impl<I, O> Solution<I, O> {
    pub(super) fn from_eval(eval: Evaluation<I, O>, status: Status, history: History) -> Self {
        Self {
            status,
            x: eval.x,
            residual: eval.residual,
            snapshot: eval.snapshot,
            iters: history.len(),
            history,
        }
    }

    /// Returns true if the solver converged.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        self.status == Status::Converged
    }
}
