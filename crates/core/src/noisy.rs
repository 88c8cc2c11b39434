/// An approximate objective value with a guaranteed error bracket.
///
/// Fast (noisy) evaluation reports the approximate `value` together with
/// two deltas bracketing the truth: the exact objective value is guaranteed
/// to lie in `[value + lower, value + upper]`. Suppliers must keep
/// `lower <= 0 <= upper`; the contract passes the triple through without
/// re-checking that invariant.
///
/// # Examples
///
/// ```
/// use zeroth_core::NoisyValue;
///
/// let noisy = NoisyValue::new(2.0, -0.25, 0.5);
/// assert_eq!(noisy.interval(), [1.75, 2.5]);
/// assert!(noisy.contains(2.3));
/// assert!(!noisy.contains(1.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NoisyValue {
    /// Approximate objective value.
    pub value: f64,

    /// Lower error delta, at most zero.
    pub lower: f64,

    /// Upper error delta, at least zero.
    pub upper: f64,
}

impl NoisyValue {
    /// Creates a noisy value from the approximate value and error deltas.
    pub fn new(value: f64, lower: f64, upper: f64) -> Self {
        Self {
            value,
            lower,
            upper,
        }
    }

    /// Returns the interval guaranteed to contain the exact objective value.
    #[must_use]
    pub fn interval(&self) -> [f64; 2] {
        [self.value + self.lower, self.value + self.upper]
    }

    /// Returns `true` if `exact` lies within the guaranteed interval.
    ///
    /// Both endpoints are inclusive.
    #[must_use]
    pub fn contains(&self, exact: f64) -> bool {
        let [lo, hi] = self.interval();
        lo <= exact && exact <= hi
    }
}
