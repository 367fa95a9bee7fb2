use sizing_core::Snapshot;

/// Iteration event emitted by the fixed-point solver.
#[derive(Debug)]
pub struct Event<'a, I, O> {
    /// Iteration counter (1-based).
    pub iter: usize,
    /// Iterate the map was applied to.
    pub previous: f64,
    /// New iterate.
    pub x: f64,
    /// Relative change from `previous` to `x`.
    pub rel_change: f64,
    /// Model call that produced `x`.
    pub snapshot: &'a Snapshot<I, O>,
}
