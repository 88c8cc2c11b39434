//! Benchmark black boxes for exercising derivative-free engines.
//!
//! Each function implements [`BlackBox`](zeroth_core::BlackBox) over its
//! conventional search domain and has a known global minimum, so an engine
//! can be run against well-understood landscapes:
//!
//! - [`Sphere`] — smooth, convex, any dimension
//! - [`Rosenbrock`] — smooth with a curved narrow valley, any dimension
//! - [`Branin`] — smooth with three global minimizers
//! - [`SixHumpCamel`] — smooth with six local minima, two global
//! - [`Gear`] — mixed-integer gear train design
//!
//! [`WithNoise`] turns any exact provider into one that also offers a
//! deterministic, bracketed noisy evaluation mode.

mod mixed_integer;
mod noise;
mod smooth;

pub use mixed_integer::Gear;
pub use noise::WithNoise;
pub use smooth::{Branin, Rosenbrock, SixHumpCamel, Sphere};

use zeroth_core::EvalError;

pub(crate) fn check_dimension(expected: usize, x: &[f64]) -> Result<(), EvalError> {
    if x.len() == expected {
        Ok(())
    } else {
        Err(EvalError::DimensionMismatch {
            expected,
            actual: x.len(),
        })
    }
}
