use thiserror::Error;

/// Configuration for the bisection solver.
///
/// `residual_tol` is an absolute bound on `|r(x)|`, expressed in the units
/// of the residual. It is not a bound on the width of the bracket.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    max_iters: usize,
    residual_tol: f64,
}

/// Errors that can occur when validating a bisection solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("max_iters must be at least 1")]
    MaxIters,

    #[error("residual_tol must be finite and positive")]
    ResidualTol,
}

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(100, 1e-6).unwrap()
    }
}

impl Config {
    /// Creates a new config with a validated budget and tolerance.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_iters` is zero or `residual_tol` is not
    /// finite and positive.
    pub fn new(max_iters: usize, residual_tol: f64) -> Result<Self, ConfigError> {
        if max_iters == 0 {
            return Err(ConfigError::MaxIters);
        }
        if !residual_tol.is_finite() || residual_tol <= 0.0 {
            return Err(ConfigError::ResidualTol);
        }

        Ok(Self {
            max_iters,
            residual_tol,
        })
    }

    /// Returns the maximum number of midpoint iterations.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the absolute residual tolerance.
    #[must_use]
    pub fn residual_tol(&self) -> f64 {
        self.residual_tol
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let config = Config::default();
        assert_eq!(config.max_iters(), 100);
        assert!(config.residual_tol() > 0.0);
    }

    #[test]
    fn rejects_zero_budget() {
        assert_eq!(Config::new(0, 1e-3), Err(ConfigError::MaxIters));
    }

    #[test]
    fn rejects_bad_tolerance() {
        assert_eq!(Config::new(10, 0.0), Err(ConfigError::ResidualTol));
        assert_eq!(Config::new(10, -1e-3), Err(ConfigError::ResidualTol));
        assert_eq!(Config::new(10, f64::NAN), Err(ConfigError::ResidualTol));
    }
}
