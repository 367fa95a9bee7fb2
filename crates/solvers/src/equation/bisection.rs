//! Bisection for scalar equation problems.
//!
//! # Algorithm
//!
//! Bisection keeps an interval `[a, b]` whose endpoint residuals have
//! opposite signs. Each iteration evaluates the residual at the midpoint,
//! stops if its magnitude is below [`Config::residual_tol`], and otherwise
//! replaces the endpoint that shares the midpoint's residual sign. The
//! interval always straddles a sign change, so a continuous residual always
//! has a root inside it.
//!
//! # Endpoints
//!
//! Both endpoints are evaluated once before iterating. An endpoint that
//! already meets the tolerance is returned as converged after zero
//! iterations. Endpoints with matching residual signs fail with
//! [`Error::NoSignChange`] before any midpoint is evaluated.
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per midpoint. Observers can return
//! [`Action::StopEarly`] to halt and report the current midpoint.

mod action;
mod bracket;
mod config;
mod error;
mod event;
mod solution;

pub use action::Action;
pub use bracket::{Bracket, BracketError, Sign};
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};

use std::error::Error as StdError;

use sizing_core::{EquationProblem, Model, Observer};

use crate::{
    History, Record,
    equation::{EvalError, Evaluation, evaluate},
};

use bracket::Bounds;

/// Finds a root of the residual using the bisection method.
///
/// Observers see each midpoint evaluation along with the bracket it was
/// taken from. See the [module docs](self) for details.
///
/// # Errors
///
/// Returns an error if the bracket is invalid or does not straddle a sign
/// change, a residual is non-finite, or the model or problem fails.
pub fn solve<M, P, Obs>(
    model: &M,
    problem: &P,
    bracket: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M::Input, M::Output>, Action>,
{
    let bounds = Bounds::new(bracket)?;
    let tol = config.residual_tol();

    let left_eval = finite(evaluate(model, problem, bounds.left()))?;
    if left_eval.residual.abs() < tol {
        return Ok(Solution::from_eval(left_eval, Status::Converged, History::new()));
    }

    let right_eval = finite(evaluate(model, problem, bounds.right()))?;
    if right_eval.residual.abs() < tol {
        return Ok(Solution::from_eval(right_eval, Status::Converged, History::new()));
    }

    let mut bracket = Bracket::new(
        bounds,
        Sign::of(left_eval.residual),
        Sign::of(right_eval.residual),
    )
    .ok_or(Error::NoSignChange {
        left: left_eval.x,
        right: right_eval.x,
        left_residual: left_eval.residual,
        right_residual: right_eval.residual,
    })?;

    let mut history = History::new();
    let mut iter = 0;

    loop {
        iter += 1;
        let mid = bracket.midpoint();
        let eval = finite(evaluate(model, problem, mid))?;
        debug_assert!(bracket.contains(mid));
        history.push(Record::new(iter, mid, eval.residual.abs()));

        let event = Event {
            iter,
            bracket: bracket.as_array(),
            eval: &eval,
        };
        let action = observer.observe(&event);

        let status = if eval.residual.abs() < tol {
            Some(Status::Converged)
        } else if action == Some(Action::StopEarly) {
            Some(Status::StoppedByObserver)
        } else if iter >= config.max_iters() {
            Some(Status::MaxIters)
        } else {
            None
        };

        if let Some(status) = status {
            return Ok(Solution::from_eval(eval, status, history));
        }

        bracket.shrink(mid, Sign::of(eval.residual));
    }
}

/// Runs bisection without observation.
///
/// # Errors
///
/// Returns an error if the bracket is invalid or does not straddle a sign
/// change, a residual is non-finite, or the model or problem fails.
pub fn solve_unobserved<M, P>(
    model: &M,
    problem: &P,
    bracket: [f64; 2],
    config: &Config,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
{
    solve(model, problem, bracket, config, ())
}

/// Converts an evaluation result, rejecting non-finite residuals.
fn finite<I, O, ME, PE>(
    result: Result<Evaluation<I, O>, EvalError<ME, PE>>,
) -> Result<Evaluation<I, O>, Error>
where
    ME: StdError + Send + Sync + 'static,
    PE: StdError + Send + Sync + 'static,
{
    let eval = result?;
    if eval.residual.is_finite() {
        Ok(eval)
    } else {
        Err(Error::NonFiniteResidual {
            x: eval.x,
            residual: eval.residual,
        })
    }
}
