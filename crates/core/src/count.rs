use std::sync::atomic::{AtomicUsize, Ordering};

use crate::{BlackBox, EvalError, NoisyValue};

/// Adapter that counts evaluations without changing them.
///
/// Derivative-free engines are usually budgeted in function evaluations
/// rather than wall-clock time, so the call counts are the natural measure
/// of how much work a run spent. Wrapping a provider in `Counted` records
/// how many times each evaluation path was exercised while leaving every
/// result untouched.
///
/// Calls are counted when they are made, before the inner provider runs,
/// so failed evaluations are included. Descriptor reads are not counted.
///
/// The counters use relaxed atomics: totals are exact, but readers racing
/// with in-flight evaluations may observe intermediate values.
///
/// # Examples
///
/// ```
/// use zeroth_core::{BlackBox, UserBlackBox};
///
/// let bb = UserBlackBox::new(1, [0.0], [1.0], [], |x: &[f64]| Ok(2.0 * x[0]))?
///     .counted();
///
/// let _ = bb.evaluate(&[0.25]);
/// let _ = bb.evaluate(&[0.75]);
/// let _ = bb.evaluate_noisy(&[0.5]);
///
/// assert_eq!(bb.exact_evals(), 2);
/// assert_eq!(bb.noisy_evals(), 1);
/// # Ok::<(), zeroth_core::ConfigError>(())
/// ```
pub struct Counted<B> {
    inner: B,
    exact: AtomicUsize,
    noisy: AtomicUsize,
}

impl<B> Counted<B> {
    /// Wraps a provider with fresh counters.
    pub fn new(inner: B) -> Self {
        Self {
            inner,
            exact: AtomicUsize::new(0),
            noisy: AtomicUsize::new(0),
        }
    }

    /// Number of `evaluate` calls made so far.
    #[must_use]
    pub fn exact_evals(&self) -> usize {
        self.exact.load(Ordering::Relaxed)
    }

    /// Number of `evaluate_noisy` calls made so far.
    #[must_use]
    pub fn noisy_evals(&self) -> usize {
        self.noisy.load(Ordering::Relaxed)
    }

    /// Consumes the adapter and returns the wrapped provider.
    pub fn into_inner(self) -> B {
        self.inner
    }
}

impl<B: BlackBox> BlackBox for Counted<B> {
    fn dimension(&self) -> usize {
        self.inner.dimension()
    }

    fn var_lower(&self) -> &[f64] {
        self.inner.var_lower()
    }

    fn var_upper(&self) -> &[f64] {
        self.inner.var_upper()
    }

    fn integer_vars(&self) -> &[usize] {
        self.inner.integer_vars()
    }

    fn evaluate(&self, x: &[f64]) -> Result<f64, EvalError> {
        self.exact.fetch_add(1, Ordering::Relaxed);
        self.inner.evaluate(x)
    }

    fn evaluate_noisy(&self, x: &[f64]) -> Result<NoisyValue, EvalError> {
        self.noisy.fetch_add(1, Ordering::Relaxed);
        self.inner.evaluate_noisy(x)
    }

    fn has_evaluate_noisy(&self) -> bool {
        self.inner.has_evaluate_noisy()
    }
}
