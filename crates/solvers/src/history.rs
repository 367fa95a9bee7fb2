//! Iteration history shared by the solvers.

use std::slice;

/// One solver iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Record {
    /// Iteration counter (1-based).
    pub iter: usize,

    /// Estimate produced by this iteration.
    pub x: f64,

    /// Convergence measure for this iteration.
    ///
    /// Relative change for [`fixed_point`](crate::fixed_point), absolute
    /// residual for [`bisection`](crate::equation::bisection).
    pub error: f64,
}

impl Record {
    /// Creates a new record.
    #[must_use]
    pub fn new(iter: usize, x: f64, error: f64) -> Self {
        Self { iter, x, error }
    }
}

/// Ordered iteration records produced by a single solve.
///
/// Only solvers append to a history. Once a solution is returned its
/// history is read-only and its length equals the iteration count.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct History {
    records: Vec<Record>,
}

impl History {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, record: Record) {
        debug_assert_eq!(record.iter, self.records.len() + 1);
        self.records.push(record);
    }

    /// Returns the records in iteration order.
    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Returns the number of recorded iterations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if no iterations were recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the final record, if any.
    #[must_use]
    pub fn last(&self) -> Option<&Record> {
        self.records.last()
    }

    /// Iterates over the records in order.
    pub fn iter(&self) -> slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Yields `[iter, x]` pairs, ready for plotting.
    #[allow(clippy::cast_precision_loss)]
    pub fn points(&self) -> impl Iterator<Item = [f64; 2]> + '_ {
        self.records.iter().map(|r| [r.iter as f64, r.x])
    }

    /// Yields `[iter, error]` pairs, ready for plotting.
    #[allow(clippy::cast_precision_loss)]
    pub fn errors(&self) -> impl Iterator<Item = [f64; 2]> + '_ {
        self.records.iter().map(|r| [r.iter as f64, r.error])
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a Record;
    type IntoIter = slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
