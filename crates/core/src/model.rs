/// A fallible computation from a typed input to a typed output.
///
/// Solvers treat a model as a black box. A weight budget, for example,
/// takes a trial takeoff weight and returns the weight breakdown it
/// implies; the solver never looks inside.
pub trait Model {
    type Input;
    type Output;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Evaluates the model at `input`.
    ///
    /// # Errors
    ///
    /// Returns the model's error if it cannot be evaluated at `input`.
    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error>;
}

/// The input a model was called with and the output it returned.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot<I, O> {
    pub input: I,
    pub output: O,
}

impl<I, O> Snapshot<I, O> {
    pub fn new(input: I, output: O) -> Self {
        Self { input, output }
    }
}
