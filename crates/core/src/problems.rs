mod equation;
mod fixed_point;

pub use equation::EquationProblem;
pub use fixed_point::FixedPointProblem;
