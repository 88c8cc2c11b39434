use crate::{BlackBox, EvalError, NoisyValue};

/// Adapter that flips the sign of the objective.
///
/// Maximizing an objective is the same as minimizing its negation, so an
/// engine that only minimizes can drive `Negated(provider)` instead. The
/// descriptor and the noisy capability pass through unchanged.
///
/// For the noisy path the bracket is reflected along with the value: the
/// deltas swap roles and change sign, so `lower <= 0 <= upper` still holds
/// and the reflected bracket contains the negated exact value.
pub struct Negated<B>(pub B);

impl<B: BlackBox> BlackBox for Negated<B> {
    fn dimension(&self) -> usize {
        self.0.dimension()
    }

    fn var_lower(&self) -> &[f64] {
        self.0.var_lower()
    }

    fn var_upper(&self) -> &[f64] {
        self.0.var_upper()
    }

    fn integer_vars(&self) -> &[usize] {
        self.0.integer_vars()
    }

    fn evaluate(&self, x: &[f64]) -> Result<f64, EvalError> {
        self.0.evaluate(x).map(|value| -value)
    }

    fn evaluate_noisy(&self, x: &[f64]) -> Result<NoisyValue, EvalError> {
        self.0.evaluate_noisy(x).map(|noisy| NoisyValue {
            value: -noisy.value,
            lower: -noisy.upper,
            upper: -noisy.lower,
        })
    }

    fn has_evaluate_noisy(&self) -> bool {
        self.0.has_evaluate_noisy()
    }
}
