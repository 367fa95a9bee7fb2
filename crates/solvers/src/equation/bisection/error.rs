use std::error::Error as StdError;

use thiserror::Error;

use crate::equation::EvalError;

use super::bracket::BracketError;

/// Errors that end a bisection solve without a solution.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    InvalidBracket(#[from] BracketError),

    /// Both endpoint residuals share a sign, so no root is guaranteed.
    #[error("no sign change in bracket: r({left}) = {left_residual}, r({right}) = {right_residual}")]
    NoSignChange {
        left: f64,
        right: f64,
        left_residual: f64,
        right_residual: f64,
    },

    #[error("residual at x = {x} is {residual}")]
    NonFiniteResidual { x: f64, residual: f64 },

    #[error("problem failed to map x or compute the residual")]
    Problem(#[source] Box<dyn StdError + Send + Sync>),

    #[error("model evaluation failed")]
    Model(#[source] Box<dyn StdError + Send + Sync>),
}

impl<ME, PE> From<EvalError<ME, PE>> for Error
where
    ME: StdError + Send + Sync + 'static,
    PE: StdError + Send + Sync + 'static,
{
    fn from(err: EvalError<ME, PE>) -> Self {
        match err {
            EvalError::Model(source) => Self::Model(Box::new(source)),
            EvalError::Problem(source) => Self::Problem(Box::new(source)),
        }
    }
}
