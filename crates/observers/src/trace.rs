use sizing_core::Observer;

use crate::traits::{HasError, HasEstimate, HasIter};

/// An observer that logs every iteration at `DEBUG` level.
///
/// Each event becomes a `tracing` event with `solver`, `iter`, `estimate`
/// and `error` fields. The observer never returns an action.
#[derive(Debug, Clone, Copy)]
pub struct TraceObserver {
    solver: &'static str,
}

impl TraceObserver {
    /// Creates an observer that tags its events with `solver`.
    #[must_use]
    pub fn new(solver: &'static str) -> Self {
        Self { solver }
    }

    /// Returns the solver tag.
    #[must_use]
    pub fn solver(&self) -> &'static str {
        self.solver
    }
}

impl<E, A> Observer<E, A> for TraceObserver
where
    E: HasIter + HasEstimate + HasError,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        tracing::debug!(
            solver = self.solver,
            iter = event.iter(),
            estimate = event.estimate(),
            error = event.error(),
            "iteration"
        );
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Event;

    impl HasIter for Event {
        fn iter(&self) -> usize {
            1
        }
    }

    impl HasEstimate for Event {
        fn estimate(&self) -> f64 {
            2.0
        }
    }

    impl HasError for Event {
        fn error(&self) -> f64 {
            0.5
        }
    }

    #[test]
    fn never_returns_an_action() {
        let mut obs = TraceObserver::new("test");
        let action: Option<()> = obs.observe(&Event);
        assert!(action.is_none());
        assert_eq!(obs.solver(), "test");
    }
}
