/// Defines a scalar fixed-point problem `x = f(x)`.
///
/// The self-map is split across the model and the problem: the problem
/// builds a model input from the current iterate, the model is called,
/// and the problem extracts the next iterate from the model output.
pub trait FixedPointProblem {
    type Input;
    type Output;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Maps the current iterate into a model input.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the input cannot be constructed from `x`.
    fn input(&self, x: f64) -> Result<Self::Input, Self::Error>;

    /// Extracts the next iterate from model input/output.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the next iterate cannot be computed.
    fn next(&self, input: &Self::Input, output: &Self::Output) -> Result<f64, Self::Error>;
}
