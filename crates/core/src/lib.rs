//! Core abstractions for derivative-free (zeroth-order) optimization.
//!
//! This crate defines the contract between an optimization engine and the
//! expensive black-box functions it searches, plus the adapters that build
//! on that contract:
//!
//! - [`BlackBox`] — the capability set every objective-function provider
//!   implements: problem descriptor, exact evaluation, and an optional fast
//!   (noisy) evaluation mode behind a capability flag
//! - [`UserBlackBox`] — binds user-supplied bounds, integer-variable
//!   indices, and callables to [`BlackBox`]
//! - [`NoisyValue`] — an approximate objective value with a guaranteed
//!   error bracket
//! - [`Negated`] — runs maximization problems on a minimizing engine
//! - [`Counted`] — tallies evaluations without changing behavior
//!
//! The engine itself — surrogate models, sampling, the search loop — lives
//! elsewhere and consumes this crate through the [`BlackBox`] trait,
//! typically as `&dyn BlackBox`.
//!
//! # Features
//!
//! - `serde` — Enables serialization of [`NoisyValue`].

mod black_box;
mod count;
mod error;
mod negate;
mod noisy;
mod user;

pub use black_box::BlackBox;
pub use count::Counted;
pub use error::{BoxedError, ConfigError, EvalError};
pub use negate::Negated;
pub use noisy::NoisyValue;
pub use user::{FastFn, ObjectiveFn, UserBlackBox};
