use std::error::Error as StdError;

use thiserror::Error;

/// Errors that can occur during fixed-point iteration.
#[derive(Debug, Error)]
pub enum Error {
    #[error("initial guess must be finite and nonzero, got {guess}")]
    InvalidGuess { guess: f64 },

    #[error("iteration {iter} produced {x}, relative change is undefined")]
    InvalidIterate { iter: usize, x: f64 },

    #[error("problem error")]
    Problem(#[source] Box<dyn StdError + Send + Sync>),

    #[error("model call failed")]
    Model(#[source] Box<dyn StdError + Send + Sync>),
}
