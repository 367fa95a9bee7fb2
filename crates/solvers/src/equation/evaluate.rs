use thiserror::Error;

use sizing_core::{EquationProblem, Model, Snapshot};

/// A scalar residual evaluated at `x`.
#[derive(Debug, Clone)]
pub struct Evaluation<I, O> {
    pub x: f64,
    pub residual: f64,
    pub snapshot: Snapshot<I, O>,
}

/// A failed residual evaluation, keeping the concrete error types.
#[derive(Debug, Error)]
pub enum EvalError<ME, PE> {
    #[error("model evaluation failed")]
    Model(#[source] ME),
    #[error("problem failed to map x or compute the residual")]
    Problem(#[source] PE),
}

/// Result of [`evaluate`] for model `M` and problem `P`.
pub type EvaluateResult<M, P> = Result<
    Evaluation<<M as Model>::Input, <M as Model>::Output>,
    EvalError<<M as Model>::Error, <P as EquationProblem<1>>::Error>,
>;

/// Evaluates the residual of a scalar equation problem at `x`.
///
/// Maps `x` to a model input, calls the model, then computes the residual
/// from the input and output.
///
/// # Errors
///
/// Returns an error if input mapping, the model call, or the residual fails.
pub fn evaluate<M, P>(model: &M, problem: &P, x: f64) -> EvaluateResult<M, P>
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
{
    let input = problem.input(&[x]).map_err(EvalError::Problem)?;
    let output = model.call(&input).map_err(EvalError::Model)?;
    let [residual] = problem
        .residuals(&input, &output)
        .map_err(EvalError::Problem)?;

    Ok(Evaluation {
        x,
        residual,
        snapshot: Snapshot::new(input, output),
    })
}
