//! Root-finding for scalar residual equations.
//!
//! The sizing solvers work on one unknown at a time. An
//! [`EquationProblem<1>`] turns a trial value `x` into a model input and
//! reads a single residual `r(x)` back from the model output; the solvers
//! here search for `r(x) = 0`.
//!
//! - [`bisection`] — bracketed search, convergent whenever the bracket
//!   straddles a sign change
//!
//! [`EquationProblem<1>`]: sizing_core::EquationProblem

pub mod bisection;

mod evaluate;

pub use evaluate::{EvalError, EvaluateResult, Evaluation, evaluate};
