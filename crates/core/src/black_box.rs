use crate::{Counted, EvalError, Negated, NoisyValue};

/// The capability set of an objective function that can be optimized.
///
/// A black box describes a box-bounded problem (dimension, per-variable
/// bounds, optionally integer-constrained variables) and evaluates the
/// objective at a point. The optimization engine holds a provider through
/// this trait, typically as `&dyn BlackBox`, and never looks inside the
/// objective itself.
///
/// Exact evaluation is authoritative and assumed to dominate the wall-clock
/// time of an optimization run. It may block for an arbitrarily long time
/// and may have external side effects, such as launching a simulation. It
/// must be deterministic for the same point within one run, or surrogate
/// models built from its values become invalid. No timeout or cancellation
/// exists at this layer; any such policy belongs around the evaluator.
///
/// Providers with a cheaper approximate evaluator additionally implement
/// [`evaluate_noisy`] and report the capability through
/// [`has_evaluate_noisy`]. A well-behaved engine consults the flag before
/// ever calling the noisy path.
///
/// No method mutates the provider, so a single instance can serve repeated
/// queries, and concurrent ones when the underlying evaluators allow it.
///
/// # Examples
///
/// A minimal provider implements the four required methods and inherits the
/// no-integer-variables, no-noisy-path defaults:
///
/// ```
/// use zeroth_core::{BlackBox, EvalError};
///
/// struct Paraboloid;
///
/// impl BlackBox for Paraboloid {
///     fn dimension(&self) -> usize {
///         2
///     }
///
///     fn var_lower(&self) -> &[f64] {
///         &[-1.0, -1.0]
///     }
///
///     fn var_upper(&self) -> &[f64] {
///         &[1.0, 1.0]
///     }
///
///     fn evaluate(&self, x: &[f64]) -> Result<f64, EvalError> {
///         if x.len() != self.dimension() {
///             return Err(EvalError::DimensionMismatch {
///                 expected: self.dimension(),
///                 actual: x.len(),
///             });
///         }
///         Ok(x[0] * x[0] + x[1] * x[1])
///     }
/// }
///
/// let bb = Paraboloid;
/// assert_eq!(bb.evaluate(&[0.5, 0.5]).unwrap(), 0.5);
/// assert!(bb.integer_vars().is_empty());
/// assert!(!bb.has_evaluate_noisy());
/// ```
///
/// [`evaluate_noisy`]: BlackBox::evaluate_noisy
/// [`has_evaluate_noisy`]: BlackBox::has_evaluate_noisy
pub trait BlackBox {
    /// Returns the number of decision variables.
    ///
    /// Providers are expected to report a positive dimension and must keep
    /// it stable across calls.
    fn dimension(&self) -> usize;

    /// Returns the lower bounds of the decision variables.
    ///
    /// The slice has exactly [`dimension`] entries.
    ///
    /// [`dimension`]: BlackBox::dimension
    fn var_lower(&self) -> &[f64];

    /// Returns the upper bounds of the decision variables.
    ///
    /// The slice has exactly [`dimension`] entries, with
    /// `var_lower()[i] <= var_upper()[i]` expected for every variable.
    ///
    /// [`dimension`]: BlackBox::dimension
    fn var_upper(&self) -> &[f64];

    /// Returns the indices of variables that must take integer values.
    ///
    /// May be empty, and defaults to empty for providers with no integer
    /// variables. Indices are expected to lie in `0..dimension()`.
    fn integer_vars(&self) -> &[usize] {
        &[]
    }

    /// Evaluates the objective at `x`.
    ///
    /// Returns the true objective value, however long that takes to
    /// compute.
    ///
    /// # Errors
    ///
    /// Returns [`EvalError::DimensionMismatch`] if `x.len()` differs from
    /// [`dimension`], and surfaces evaluator failures as
    /// [`EvalError::Objective`] with the cause unchanged.
    ///
    /// [`dimension`]: BlackBox::dimension
    fn evaluate(&self, x: &[f64]) -> Result<f64, EvalError>;

    /// Evaluates a fast approximation of the objective at `x`.
    ///
    /// Returns a [`NoisyValue`] whose bracket is guaranteed to contain the
    /// exact value of [`evaluate`] at the same point, hopefully much more
    /// quickly. Only meaningful when [`has_evaluate_noisy`] reports `true`;
    /// the default implementation fails with
    /// [`EvalError::NoisyUnavailable`].
    ///
    /// # Errors
    ///
    /// Returns [`EvalError::NoisyUnavailable`] when the provider has no
    /// fast evaluator, [`EvalError::DimensionMismatch`] for malformed
    /// points, and [`EvalError::Objective`] for evaluator failures.
    ///
    /// [`evaluate`]: BlackBox::evaluate
    /// [`has_evaluate_noisy`]: BlackBox::has_evaluate_noisy
    fn evaluate_noisy(&self, x: &[f64]) -> Result<NoisyValue, EvalError> {
        let _ = x;
        Err(EvalError::NoisyUnavailable)
    }

    /// Indicates whether [`evaluate_noisy`] is available.
    ///
    /// This is a pure capability flag: callable at any time, evaluates
    /// nothing, and stays constant for the provider's lifetime. Engines use
    /// it to decide whether the accelerated path may be queried at all.
    ///
    /// [`evaluate_noisy`]: BlackBox::evaluate_noisy
    fn has_evaluate_noisy(&self) -> bool {
        false
    }

    /// Flips the sign of the objective.
    ///
    /// Maximizing an objective is the same as minimizing its negation, so
    /// an engine that only minimizes can drive `self.negated()` instead.
    /// See [`Negated`] for how the noisy bracket is reflected.
    fn negated(self) -> Negated<Self>
    where
        Self: Sized,
    {
        Negated(self)
    }

    /// Counts evaluations without changing behavior.
    ///
    /// See [`Counted`] for the counting rules.
    fn counted(self) -> Counted<Self>
    where
        Self: Sized,
    {
        Counted::new(self)
    }
}
