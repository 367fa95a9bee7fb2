//! Scalar root-finding solvers for sizing problems.
//!
//! # Solvers
//!
//! - [`fixed_point`] — Picard iteration of a self-map `x = f(x)`, stopped on
//!   relative change between successive iterates
//! - [`equation::bisection`] — bracketed bisection of a residual, stopped on
//!   absolute residual magnitude
//!
//! Both solvers record one [`Record`] per iteration into the [`History`]
//! returned with their solution.

pub mod equation;
pub mod fixed_point;

mod history;

pub use history::{History, Record};
