use std::f64::consts::PI;

use zeroth_core::{BlackBox, EvalError};

use crate::check_dimension;

/// The sphere function, `f(x) = Σ xᵢ²`.
///
/// Smooth, convex, and separable, with its global minimum of 0 at the
/// origin. The search domain is `[-5.12, 5.12]` in every coordinate.
pub struct Sphere {
    var_lower: Vec<f64>,
    var_upper: Vec<f64>,
}

impl Sphere {
    pub fn new(dimension: usize) -> Self {
        Self {
            var_lower: vec![-5.12; dimension],
            var_upper: vec![5.12; dimension],
        }
    }
}

impl BlackBox for Sphere {
    fn dimension(&self) -> usize {
        self.var_lower.len()
    }

    fn var_lower(&self) -> &[f64] {
        &self.var_lower
    }

    fn var_upper(&self) -> &[f64] {
        &self.var_upper
    }

    fn evaluate(&self, x: &[f64]) -> Result<f64, EvalError> {
        check_dimension(self.dimension(), x)?;
        Ok(x.iter().map(|v| v * v).sum())
    }
}

/// The Rosenbrock function,
/// `f(x) = Σ 100 (xᵢ₊₁ - xᵢ²)² + (1 - xᵢ)²`.
///
/// Its global minimum of 0 at `(1, …, 1)` sits inside a long, curved,
/// nearly flat valley that is easy to reach and hard to traverse. The
/// search domain is `[-2.048, 2.048]` in every coordinate.
pub struct Rosenbrock {
    var_lower: Vec<f64>,
    var_upper: Vec<f64>,
}

impl Rosenbrock {
    pub fn new(dimension: usize) -> Self {
        Self {
            var_lower: vec![-2.048; dimension],
            var_upper: vec![2.048; dimension],
        }
    }
}

impl BlackBox for Rosenbrock {
    fn dimension(&self) -> usize {
        self.var_lower.len()
    }

    fn var_lower(&self) -> &[f64] {
        &self.var_lower
    }

    fn var_upper(&self) -> &[f64] {
        &self.var_upper
    }

    fn evaluate(&self, x: &[f64]) -> Result<f64, EvalError> {
        check_dimension(self.dimension(), x)?;
        Ok(x.windows(2)
            .map(|w| 100.0 * (w[1] - w[0] * w[0]).powi(2) + (1.0 - w[0]).powi(2))
            .sum())
    }
}

/// The Branin function on `[-5, 10] x [0, 15]`.
///
/// Three global minimizers, at `(-π, 12.275)`, `(π, 2.275)`, and
/// `(9.42478, 2.475)`, all with value `≈ 0.397887`.
pub struct Branin;

impl BlackBox for Branin {
    fn dimension(&self) -> usize {
        2
    }

    fn var_lower(&self) -> &[f64] {
        &[-5.0, 0.0]
    }

    fn var_upper(&self) -> &[f64] {
        &[10.0, 15.0]
    }

    fn evaluate(&self, x: &[f64]) -> Result<f64, EvalError> {
        check_dimension(2, x)?;
        let a = 1.0;
        let b = 5.1 / (4.0 * PI * PI);
        let c = 5.0 / PI;
        let r = 6.0;
        let s = 10.0;
        let t = 1.0 / (8.0 * PI);
        Ok(a * (x[1] - b * x[0] * x[0] + c * x[0] - r).powi(2)
            + s * (1.0 - t) * x[0].cos()
            + s)
    }
}

/// The six-hump camel function on `[-3, 3] x [-2, 2]`.
///
/// Six local minima, two of them global: `(0.0898, -0.7126)` and its
/// reflection `(-0.0898, 0.7126)`, both with value `≈ -1.0316`.
pub struct SixHumpCamel;

impl BlackBox for SixHumpCamel {
    fn dimension(&self) -> usize {
        2
    }

    fn var_lower(&self) -> &[f64] {
        &[-3.0, -2.0]
    }

    fn var_upper(&self) -> &[f64] {
        &[3.0, 2.0]
    }

    fn evaluate(&self, x: &[f64]) -> Result<f64, EvalError> {
        check_dimension(2, x)?;
        let (x1, x2) = (x[0], x[1]);
        Ok((4.0 - 2.1 * x1 * x1 + x1.powi(4) / 3.0) * x1 * x1
            + x1 * x2
            + (-4.0 + 4.0 * x2 * x2) * x2 * x2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn sphere_is_zero_at_the_origin() {
        let f = Sphere::new(5);

        assert_relative_eq!(f.evaluate(&[0.0; 5]).unwrap(), 0.0);
    }

    #[test]
    fn sphere_sums_squares() {
        let f = Sphere::new(3);

        assert_relative_eq!(f.evaluate(&[1.0, 2.0, 3.0]).unwrap(), 14.0);
    }

    #[test]
    fn sphere_descriptor_matches_the_requested_dimension() {
        let f = Sphere::new(7);

        assert_eq!(f.dimension(), 7);
        assert_eq!(f.var_lower().len(), 7);
        assert_eq!(f.var_upper().len(), 7);
        assert!(f.integer_vars().is_empty());
    }

    #[test]
    fn rosenbrock_is_zero_at_all_ones() {
        let f = Rosenbrock::new(4);

        assert_relative_eq!(f.evaluate(&[1.0; 4]).unwrap(), 0.0);
    }

    #[test]
    fn rosenbrock_at_the_origin() {
        let f = Rosenbrock::new(2);

        assert_relative_eq!(f.evaluate(&[0.0, 0.0]).unwrap(), 1.0);
    }

    #[test]
    fn branin_attains_its_minimum_at_all_three_minimizers() {
        for point in [
            [-PI, 12.275],
            [PI, 2.275],
            [9.42478, 2.475],
        ] {
            let value = Branin.evaluate(&point).unwrap();
            assert_relative_eq!(value, 0.397887, epsilon = 1e-4);
        }
    }

    #[test]
    fn six_hump_camel_attains_its_minimum_at_both_minimizers() {
        for point in [[0.0898, -0.7126], [-0.0898, 0.7126]] {
            let value = SixHumpCamel.evaluate(&point).unwrap();
            assert_relative_eq!(value, -1.0316, epsilon = 1e-4);
        }
    }

    #[test]
    fn wrong_length_points_are_rejected() {
        assert!(matches!(
            Branin.evaluate(&[1.0, 2.0, 3.0]),
            Err(EvalError::DimensionMismatch {
                expected: 2,
                actual: 3,
            })
        ));
        assert!(matches!(
            Sphere::new(3).evaluate(&[]),
            Err(EvalError::DimensionMismatch {
                expected: 3,
                actual: 0,
            })
        ));
    }
}
