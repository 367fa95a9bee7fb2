//! Reusable observers for sizing solvers.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work across the solvers in [`sizing_solvers`].
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for cross-solver observers
//!   ([`HasIter`], [`HasEstimate`], [`HasError`], [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`TraceObserver`] — logs every iteration through `tracing`
//! - [`StopWhen`] — stops a solver once its error is small enough
//!
//! [`Observer`]: sizing_core::Observer
//! [`HasIter`]: traits::HasIter
//! [`HasEstimate`]: traits::HasEstimate
//! [`HasError`]: traits::HasError
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod stop;
mod trace;

pub use stop::StopWhen;
pub use trace::TraceObserver;
