//! Fixed-point (Picard) iteration for scalar self-maps.
//!
//! # Algorithm
//!
//! Starting from a guess `x₀`, the solver repeatedly applies the self-map
//! `xₙ = f(xₙ₋₁)` and measures the relative change
//! `|xₙ - xₙ₋₁| / |xₙ₋₁|`. It stops once that change is below
//! [`Config::rel_tol`] or the iteration budget runs out.
//!
//! # Limitations
//!
//! - **Local convergence only**: the iteration converges when the map is a
//!   contraction near its fixed point (`|f'(x*)| < 1`) and the guess lies
//!   in its basin of attraction. Otherwise it may oscillate or diverge and
//!   the solver reports [`Status::MaxIters`].
//! - **Nonzero iterates**: the relative change is undefined at zero, so a
//!   zero guess or iterate is an error.
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per iteration, after the new iterate has
//! been recorded. Observers can return [`Action::StopEarly`] to halt and
//! report the latest iterate.

mod action;
mod config;
mod error;
mod event;
mod solution;

#[cfg(test)]
mod tests;

pub use action::Action;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};

use sizing_core::{FixedPointProblem, Model, Observer, Snapshot};

use crate::{History, Record};

/// Iterates the self-map defined by `model` and `problem` from `guess`.
///
/// See the [module docs](self) for stopping rules and observer timing.
///
/// # Errors
///
/// Returns an error if the guess or an iterate is zero or non-finite, or if
/// the model or problem fails.
pub fn solve<M, P, Obs>(
    model: &M,
    problem: &P,
    guess: f64,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: FixedPointProblem<Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M::Input, M::Output>, Action>,
{
    #[allow(clippy::float_cmp)]
    if !guess.is_finite() || guess == 0.0 {
        return Err(Error::InvalidGuess { guess });
    }

    let mut history = History::new();
    let mut x = guess;
    let mut iter = 0;

    loop {
        iter += 1;
        let (next, snapshot) = step(model, problem, x)?;

        #[allow(clippy::float_cmp)]
        if !next.is_finite() || next == 0.0 {
            return Err(Error::InvalidIterate { iter, x: next });
        }

        let rel_change = (next - x).abs() / x.abs();
        history.push(Record::new(iter, next, rel_change));

        let event = Event {
            iter,
            previous: x,
            x: next,
            rel_change,
            snapshot: &snapshot,
        };
        let action = observer.observe(&event);

        let status = if rel_change < config.rel_tol() {
            Some(Status::Converged)
        } else if action == Some(Action::StopEarly) {
            Some(Status::StoppedByObserver)
        } else if iter >= config.max_iters() {
            Some(Status::MaxIters)
        } else {
            None
        };

        if let Some(status) = status {
            return Ok(Solution {
                status,
                x: next,
                rel_change,
                snapshot,
                iters: iter,
                history,
            });
        }

        x = next;
    }
}

/// Runs fixed-point iteration without observation.
///
/// # Errors
///
/// Returns an error if the guess or an iterate is zero or non-finite, or if
/// the model or problem fails.
pub fn solve_unobserved<M, P>(
    model: &M,
    problem: &P,
    guess: f64,
    config: &Config,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: FixedPointProblem<Input = M::Input, Output = M::Output>,
{
    solve(model, problem, guess, config, ())
}

/// Applies the self-map once.
fn step<M, P>(model: &M, problem: &P, x: f64) -> Result<(f64, Snapshot<M::Input, M::Output>), Error>
where
    M: Model,
    P: FixedPointProblem<Input = M::Input, Output = M::Output>,
{
    let input = problem.input(x).map_err(|e| Error::Problem(Box::new(e)))?;
    let output = model.call(&input).map_err(|e| Error::Model(Box::new(e)))?;
    let next = problem
        .next(&input, &output)
        .map_err(|e| Error::Problem(Box::new(e)))?;

    Ok((next, Snapshot::new(input, output)))
}
