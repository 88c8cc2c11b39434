use zeroth_core::{BlackBox, EvalError, NoisyValue};

/// Adapter that gives an exact provider a deterministic noisy mode.
///
/// The noisy value is the exact objective plus a bounded wiggle, reported
/// with the bracket `[-amplitude, amplitude]`, so the exact value always
/// lies inside the advertised interval. The wiggle depends only on the
/// point, never on call order, which keeps benchmark runs repeatable.
pub struct WithNoise<B> {
    inner: B,
    amplitude: f64,
}

impl<B> WithNoise<B> {
    /// Wraps a provider; `amplitude` is taken by absolute value.
    pub fn new(inner: B, amplitude: f64) -> Self {
        Self {
            inner,
            amplitude: amplitude.abs(),
        }
    }
}

/// Reproducible pseudo-noise in `[-1, 1]`.
fn wiggle(x: &[f64]) -> f64 {
    let mix: f64 = x.iter().enumerate().map(|(i, v)| v * (i + 1) as f64).sum();
    (13.0 * mix).sin()
}

impl<B: BlackBox> BlackBox for WithNoise<B> {
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
        self.inner.evaluate(x)
    }

    fn evaluate_noisy(&self, x: &[f64]) -> Result<NoisyValue, EvalError> {
        let exact = self.inner.evaluate(x)?;
        Ok(NoisyValue::new(
            exact + self.amplitude * wiggle(x),
            -self.amplitude,
            self.amplitude,
        ))
    }

    fn has_evaluate_noisy(&self) -> bool {
        true
    }
}
