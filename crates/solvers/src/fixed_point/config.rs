use thiserror::Error;

/// Configuration for the fixed-point solver.
///
/// `rel_tol` bounds the relative change between successive iterates and
/// is dimensionless.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    max_iters: usize,
    rel_tol: f64,
}

/// Errors that can occur when validating a fixed-point solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("max_iters must be at least 1")]
    MaxIters,

    #[error("rel_tol must be finite and positive")]
    RelTol,
}

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(20, 1e-12).unwrap()
    }
}

impl Config {
    /// Creates a new config with a validated budget and tolerance.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_iters` is zero or `rel_tol` is not finite
    /// and positive.
    pub fn new(max_iters: usize, rel_tol: f64) -> Result<Self, ConfigError> {
        if max_iters == 0 {
            return Err(ConfigError::MaxIters);
        }
        if !rel_tol.is_finite() || rel_tol <= 0.0 {
            return Err(ConfigError::RelTol);
        }

        Ok(Self { max_iters, rel_tol })
    }

    /// Returns the maximum number of iterations.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the relative tolerance on successive iterates.
    #[must_use]
    pub fn rel_tol(&self) -> f64 {
        self.rel_tol
    }
}
