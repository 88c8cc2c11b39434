use zeroth_core::{BlackBox, EvalError};

use crate::check_dimension;

/// The gear train design problem.
///
/// Pick four integer tooth counts in `[12, 60]` so that the train ratio
/// `x₀x₁ / (x₂x₃)` comes as close as possible to `1/6.931`; the objective
/// is the squared ratio error. All four variables are integer. The global
/// minimum is `≈ 2.7e-12` at `(19, 16, 43, 49)`.
pub struct Gear;

impl BlackBox for Gear {
    fn dimension(&self) -> usize {
        4
    }

    fn var_lower(&self) -> &[f64] {
        &[12.0, 12.0, 12.0, 12.0]
    }

    fn var_upper(&self) -> &[f64] {
        &[60.0, 60.0, 60.0, 60.0]
    }

    fn integer_vars(&self) -> &[usize] {
        &[0, 1, 2, 3]
    }

    fn evaluate(&self, x: &[f64]) -> Result<f64, EvalError> {
        check_dimension(4, x)?;
        Ok((1.0 / 6.931 - x[0] * x[1] / (x[2] * x[3])).powi(2))
    }
}
