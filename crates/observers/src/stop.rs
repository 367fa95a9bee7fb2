use sizing_core::Observer;

use crate::traits::{CanStopEarly, HasError, HasIter};

/// Stops a solver once its error measure is below a threshold.
///
/// Lets a caller accept a looser answer than the solver's own tolerance,
/// for example when sweeping many design points. Iterations before
/// `min_iters` never stop the solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StopWhen {
    threshold: f64,
    min_iters: usize,
}

impl StopWhen {
    /// Stops on the first iteration whose error is below `threshold`.
    #[must_use]
    pub fn below(threshold: f64) -> Self {
        Self {
            threshold,
            min_iters: 1,
        }
    }

    /// Requires at least `min_iters` iterations before stopping.
    #[must_use]
    pub fn after(mut self, min_iters: usize) -> Self {
        self.min_iters = min_iters;
        self
    }
}

impl<E, A> Observer<E, A> for StopWhen
where
    E: HasIter + HasError,
    A: CanStopEarly,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (event.iter() >= self.min_iters && event.error() < self.threshold).then(A::stop_early)
    }
}
