use crate::equation::Evaluation;

/// Iteration event emitted by the bisection solver.
///
/// Emitted once per midpoint, after the midpoint is recorded in the history
/// and before the bracket is shrunk.
#[derive(Debug)]
pub struct Event<'a, I, O> {
    /// Iteration counter (1-based).
    pub iter: usize,
    /// Bracket the midpoint was taken from.
    pub bracket: [f64; 2],
    /// Evaluation at the midpoint.
    pub eval: &'a Evaluation<I, O>,
}

impl<I, O> Event<'_, I, O> {
    /// Returns the midpoint that was evaluated.
    #[must_use]
    pub fn x(&self) -> f64 {
        self.eval.x
    }

    /// Returns the residual at the midpoint.
    #[must_use]
    pub fn residual(&self) -> f64 {
        self.eval.residual
    }
}
