use std::fmt;

use crate::{BlackBox, BoxedError, ConfigError, EvalError, NoisyValue};

/// Type-erased exact evaluator stored by [`UserBlackBox`].
pub type ObjectiveFn = Box<dyn Fn(&[f64]) -> Result<f64, BoxedError> + Send + Sync>;

/// Type-erased fast evaluator stored by [`UserBlackBox`].
pub type FastFn = Box<dyn Fn(&[f64]) -> Result<NoisyValue, BoxedError> + Send + Sync>;

/// A black box assembled from user-supplied data and callables.
///
/// Binds a problem descriptor (dimension, bounds, integer-variable
/// indices), a required exact evaluator, and an optional fast evaluator
/// into a [`BlackBox`]. The descriptor arrays are validated against the
/// dimension at construction and stored as owned copies, so every later
/// query is well-formed and O(1). Evaluation is a pure pass-through with a
/// length check: no caching, no retries, no transformation of results.
///
/// The callables must be `Send + Sync`; whether they tolerate concurrent
/// invocation is still their own affair, as is keeping
/// `var_lower[i] <= var_upper[i]` and the integer indices in range —
/// neither is checked here.
///
/// # Examples
///
/// ```
/// use zeroth_core::{BlackBox, NoisyValue, UserBlackBox};
///
/// let bb = UserBlackBox::new(2, [-1.0, -1.0], [1.0, 1.0], [], |p: &[f64]| {
///     Ok(p[0] * p[0] + p[1] * p[1])
/// })?
/// .with_fast(|p: &[f64]| Ok(NoisyValue::new(p[0] * p[0] + p[1] * p[1], -0.05, 0.05)));
///
/// assert_eq!(bb.evaluate(&[0.5, 0.5]).unwrap(), 0.5);
/// assert!(bb.has_evaluate_noisy());
/// # Ok::<(), zeroth_core::ConfigError>(())
/// ```
pub struct UserBlackBox {
    dimension: usize,
    var_lower: Vec<f64>,
    var_upper: Vec<f64>,
    integer_vars: Vec<usize>,
    objective: ObjectiveFn,
    fast: Option<FastFn>,
}

impl UserBlackBox {
    /// Creates a black box from a problem descriptor and an exact
    /// evaluator.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if `var_lower` or `var_upper` do not have
    /// exactly `dimension` entries, or if `integer_vars` has more entries
    /// than `dimension`.
    pub fn new<F>(
        dimension: usize,
        var_lower: impl Into<Vec<f64>>,
        var_upper: impl Into<Vec<f64>>,
        integer_vars: impl Into<Vec<usize>>,
        objective: F,
    ) -> Result<Self, ConfigError>
    where
        F: Fn(&[f64]) -> Result<f64, BoxedError> + Send + Sync + 'static,
    {
        let var_lower = var_lower.into();
        let var_upper = var_upper.into();
        let integer_vars = integer_vars.into();

        if var_lower.len() != dimension {
            return Err(ConfigError::VarLowerLength {
                expected: dimension,
                actual: var_lower.len(),
            });
        }
        if var_upper.len() != dimension {
            return Err(ConfigError::VarUpperLength {
                expected: dimension,
                actual: var_upper.len(),
            });
        }
        if integer_vars.len() > dimension {
            return Err(ConfigError::IntegerVarsLength {
                dimension,
                actual: integer_vars.len(),
            });
        }

        Ok(Self {
            dimension,
            var_lower,
            var_upper,
            integer_vars,
            objective: Box::new(objective),
            fast: None,
        })
    }

    /// Attaches a fast approximate evaluator.
    ///
    /// The evaluator must return a [`NoisyValue`] whose bracket contains
    /// the exact objective value at the same point. After this call,
    /// [`has_evaluate_noisy`] reports `true` for the rest of the black
    /// box's lifetime.
    ///
    /// [`has_evaluate_noisy`]: BlackBox::has_evaluate_noisy
    #[must_use]
    pub fn with_fast<F>(mut self, fast: F) -> Self
    where
        F: Fn(&[f64]) -> Result<NoisyValue, BoxedError> + Send + Sync + 'static,
    {
        self.fast = Some(Box::new(fast));
        self
    }

    fn check_dimension(&self, x: &[f64]) -> Result<(), EvalError> {
        if x.len() != self.dimension {
            return Err(EvalError::DimensionMismatch {
                expected: self.dimension,
                actual: x.len(),
            });
        }
        Ok(())
    }
}

impl BlackBox for UserBlackBox {
    fn dimension(&self) -> usize {
        self.dimension
    }

    fn var_lower(&self) -> &[f64] {
        &self.var_lower
    }

    fn var_upper(&self) -> &[f64] {
        &self.var_upper
    }

    fn integer_vars(&self) -> &[usize] {
        &self.integer_vars
    }

    fn evaluate(&self, x: &[f64]) -> Result<f64, EvalError> {
        self.check_dimension(x)?;
        (self.objective)(x).map_err(EvalError::Objective)
    }

    fn evaluate_noisy(&self, x: &[f64]) -> Result<NoisyValue, EvalError> {
        // Capability comes before the length check: a provider without the
        // fast path reports NoisyUnavailable even for malformed points.
        let Some(fast) = &self.fast else {
            return Err(EvalError::NoisyUnavailable);
        };
        self.check_dimension(x)?;
        fast(x).map_err(EvalError::Objective)
    }

    fn has_evaluate_noisy(&self) -> bool {
        self.fast.is_some()
    }
}

impl fmt::Debug for UserBlackBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserBlackBox")
            .field("dimension", &self.dimension)
            .field("var_lower", &self.var_lower)
            .field("var_upper", &self.var_upper)
            .field("integer_vars", &self.integer_vars)
            .field("has_fast", &self.fast.is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::{Arc, Mutex};

    use approx::assert_relative_eq;

    /// A black box over `dimension` variables that sums its point.
    fn summing(dimension: usize) -> UserBlackBox {
        UserBlackBox::new(
            dimension,
            vec![0.0; dimension],
            vec![1.0; dimension],
            [],
            |p: &[f64]| Ok(p.iter().sum()),
        )
        .expect("descriptor lengths are consistent")
    }

    #[test]
    fn construction_stores_the_descriptor() {
        let bb = UserBlackBox::new(3, [-1.0, -2.0, -3.0], [1.0, 2.0, 3.0], [0, 2], |p: &[f64]| {
            Ok(p[0])
        })
        .expect("descriptor lengths are consistent");

        assert_eq!(bb.dimension(), 3);
        assert_eq!(bb.var_lower(), &[-1.0, -2.0, -3.0]);
        assert_eq!(bb.var_upper(), &[1.0, 2.0, 3.0]);
        assert_eq!(bb.integer_vars(), &[0, 2]);
    }

    #[test]
    fn construction_rejects_var_lower_mismatch() {
        let result = UserBlackBox::new(2, [0.0, 0.0, 0.0], [1.0, 1.0], [], |p: &[f64]| Ok(p[0]));

        assert_eq!(
            result.err(),
            Some(ConfigError::VarLowerLength {
                expected: 2,
                actual: 3,
            })
        );
    }

    #[test]
    fn construction_rejects_var_upper_mismatch() {
        let result = UserBlackBox::new(2, [0.0, 0.0], [1.0], [], |p: &[f64]| Ok(p[0]));

        assert_eq!(
            result.err(),
            Some(ConfigError::VarUpperLength {
                expected: 2,
                actual: 1,
            })
        );
    }

    #[test]
    fn construction_rejects_excess_integer_vars() {
        let result = UserBlackBox::new(2, [0.0, 0.0], [1.0, 1.0], [0, 1, 0], |p: &[f64]| Ok(p[0]));

        assert_eq!(
            result.err(),
            Some(ConfigError::IntegerVarsLength {
                dimension: 2,
                actual: 3,
            })
        );
    }

    #[test]
    fn evaluate_rejects_wrong_length_at_every_dimension() {
        for dimension in [0, 1, 5] {
            let bb = summing(dimension);
            let too_long = vec![0.5; dimension + 1];

            let result = bb.evaluate(&too_long);
            assert!(
                matches!(
                    result,
                    Err(EvalError::DimensionMismatch { expected, actual })
                        if expected == dimension && actual == dimension + 1
                ),
                "dimension {dimension}: unexpected result {result:?}"
            );
        }
    }

    #[test]
    fn evaluate_is_a_pure_pass_through() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let bb = {
            let seen = Arc::clone(&seen);
            UserBlackBox::new(2, [0.0, 0.0], [1.0, 1.0], [], move |p: &[f64]| {
                seen.lock().unwrap().push(p.to_vec());
                Ok(42.5)
            })
            .expect("descriptor lengths are consistent")
        };

        assert_relative_eq!(bb.evaluate(&[0.25, 0.75]).unwrap(), 42.5);
        assert_eq!(*seen.lock().unwrap(), vec![vec![0.25, 0.75]]);
    }

    #[test]
    fn evaluator_errors_propagate_with_the_cause_attached() {
        let bb = UserBlackBox::new(1, [0.0], [1.0], [], |_: &[f64]| {
            Err("simulator crashed".into())
        })
        .expect("descriptor lengths are consistent");

        let err = bb.evaluate(&[0.5]).unwrap_err();
        match err {
            EvalError::Objective(source) => {
                assert_eq!(source.to_string(), "simulator crashed");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn noisy_without_fast_is_a_capability_error() {
        let bb = summing(2);

        assert!(!bb.has_evaluate_noisy());
        assert!(matches!(
            bb.evaluate_noisy(&[0.5, 0.5]),
            Err(EvalError::NoisyUnavailable)
        ));
    }

    #[test]
    fn noisy_capability_error_wins_over_length_errors() {
        let bb = summing(2);

        // Even a malformed point reports the missing capability.
        assert!(matches!(
            bb.evaluate_noisy(&[0.5]),
            Err(EvalError::NoisyUnavailable)
        ));
        assert!(matches!(
            bb.evaluate_noisy(&[]),
            Err(EvalError::NoisyUnavailable)
        ));
    }

    #[test]
    fn noisy_with_fast_returns_the_triple_unchanged() {
        let bb = summing(2).with_fast(|p: &[f64]| Ok(NoisyValue::new(p[0] + p[1], -0.1, 0.1)));

        assert!(bb.has_evaluate_noisy());

        let noisy = bb.evaluate_noisy(&[0.2, 0.3]).unwrap();
        assert_relative_eq!(noisy.value, 0.5);
        assert_relative_eq!(noisy.lower, -0.1);
        assert_relative_eq!(noisy.upper, 0.1);
    }

    #[test]
    fn noisy_with_fast_still_rejects_malformed_points() {
        let bb = summing(2).with_fast(|p: &[f64]| Ok(NoisyValue::new(p[0] + p[1], -0.1, 0.1)));

        assert!(matches!(
            bb.evaluate_noisy(&[0.2]),
            Err(EvalError::DimensionMismatch {
                expected: 2,
                actual: 1,
            })
        ));
    }

    #[test]
    fn fast_evaluator_errors_propagate_with_the_cause_attached() {
        let bb = summing(1).with_fast(|_: &[f64]| Err("surrogate diverged".into()));

        let err = bb.evaluate_noisy(&[0.5]).unwrap_err();
        match err {
            EvalError::Objective(source) => {
                assert_eq!(source.to_string(), "surrogate diverged");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn dimension_zero_is_constructible() {
        let bb = summing(0);

        assert_eq!(bb.dimension(), 0);
        assert!(bb.var_lower().is_empty());
        assert!(matches!(
            bb.evaluate(&[1.0]),
            Err(EvalError::DimensionMismatch {
                expected: 0,
                actual: 1,
            })
        ));
    }

    #[test]
    fn adapter_is_send_and_sync() {
        fn require_send_sync<T: Send + Sync>(_: &T) {}

        require_send_sync(&summing(2));
    }

    #[test]
    fn debug_output_omits_the_callables() {
        let bb = summing(1);
        let debug = format!("{bb:?}");

        assert!(debug.contains("dimension: 1"));
        assert!(debug.contains("has_fast: false"));
    }
}
