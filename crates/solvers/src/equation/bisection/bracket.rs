use thiserror::Error;

/// Bracket endpoints that cannot bound a search.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BracketError {
    #[error("bracket endpoints must be finite")]
    NonFinite,
    #[error("bracket endpoints coincide")]
    ZeroWidth,
}

/// A search interval whose endpoint residuals have opposite signs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket {
    left: f64,
    right: f64,
    left_sign: Sign,
}

impl Bracket {
    /// Creates a bracket from ordered bounds and the endpoint residual signs.
    ///
    /// Returns `None` if the signs match.
    pub(super) fn new(bounds: Bounds, left_sign: Sign, right_sign: Sign) -> Option<Self> {
        (left_sign != right_sign).then_some(Self {
            left: bounds.left,
            right: bounds.right,
            left_sign,
        })
    }

    /// Returns `[left, right]` with `left < right`.
    #[must_use]
    pub fn as_array(&self) -> [f64; 2] {
        [self.left, self.right]
    }

    #[must_use]
    pub fn midpoint(&self) -> f64 {
        0.5 * (self.left + self.right)
    }

    /// Returns true if `x` lies in the closed interval.
    pub(super) fn contains(&self, x: f64) -> bool {
        (self.left..=self.right).contains(&x)
    }

    /// Replaces the endpoint whose residual sign matches `sign` with `x`.
    ///
    /// The opposite-sign endpoint is kept, so the bracket still straddles
    /// a sign change afterwards.
    pub(super) fn shrink(&mut self, x: f64, sign: Sign) {
        if self.left_sign == sign {
            self.left = x;
        } else {
            self.right = x;
        }
    }
}

/// Residual sign. Zero counts as positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Positive,
    Negative,
}

impl Sign {
    #[must_use]
    pub fn of(residual: f64) -> Self {
        if residual < 0.0 { Self::Negative } else { Self::Positive }
    }
}

/// Ordered finite bounds for a bisection bracket.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Bounds {
    left: f64,
    right: f64,
}

impl Bounds {
    /// Validates and orders the bracket endpoints.
    ///
    /// # Errors
    ///
    /// Returns `BracketError` if endpoints are non-finite or zero width.
    pub(super) fn new(bracket: [f64; 2]) -> Result<Self, BracketError> {
        let [a, b] = bracket;

        if !a.is_finite() || !b.is_finite() {
            return Err(BracketError::NonFinite);
        }

        #[allow(clippy::float_cmp)]
        if a == b {
            return Err(BracketError::ZeroWidth);
        }

        Ok(Self {
            left: a.min(b),
            right: a.max(b),
        })
    }

    pub(super) fn left(&self) -> f64 {
        self.left
    }

    pub(super) fn right(&self) -> f64 {
        self.right
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn bounds_reorders_bracket() {
        let bounds = Bounds::new([3.0, 1.0]).expect("valid bracket");
        assert_relative_eq!(bounds.left(), 1.0);
        assert_relative_eq!(bounds.right(), 3.0);
    }

    #[test]
    fn bounds_rejects_non_finite() {
        assert_eq!(Bounds::new([f64::NAN, 1.0]), Err(BracketError::NonFinite));
        assert_eq!(
            Bounds::new([0.0, f64::INFINITY]),
            Err(BracketError::NonFinite)
        );
    }

    #[test]
    fn bounds_rejects_zero_width() {
        assert_eq!(Bounds::new([2.0, 2.0]), Err(BracketError::ZeroWidth));
    }

    #[test]
    fn bracket_requires_sign_change() {
        let bounds = Bounds::new([0.0, 1.0]).expect("valid bounds");
        assert!(Bracket::new(bounds, Sign::Negative, Sign::Negative).is_none());
        assert!(Bracket::new(bounds, Sign::Negative, Sign::Positive).is_some());
    }

    #[test]
    fn shrink_replaces_matching_endpoint() {
        let bounds = Bounds::new([0.0, 4.0]).expect("valid bounds");
        let mut bracket =
            Bracket::new(bounds, Sign::Negative, Sign::Positive).expect("sign change");

        bracket.shrink(2.0, Sign::Negative);
        assert_eq!(bracket.as_array(), [2.0, 4.0]);

        bracket.shrink(3.0, Sign::Positive);
        assert_eq!(bracket.as_array(), [2.0, 3.0]);
        assert_relative_eq!(bracket.midpoint(), 2.5);
        assert!(bracket.contains(2.5));
        assert!(!bracket.contains(3.5));
    }

    #[test]
    fn sign_of_zero_is_positive() {
        assert_eq!(Sign::of(0.0), Sign::Positive);
        assert_eq!(Sign::of(-1e-300), Sign::Negative);
    }
}
