use std::error::Error as StdError;

use thiserror::Error;

/// A type-erased error raised inside a user-supplied evaluator.
pub type BoxedError = Box<dyn StdError + Send + Sync>;

/// Errors that can occur when constructing a black box from user data.
///
/// These are fatal to construction: the black box is never produced.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// `var_lower` does not have exactly `dimension` entries.
    #[error("var_lower has length {actual}, expected {expected}")]
    VarLowerLength { expected: usize, actual: usize },

    /// `var_upper` does not have exactly `dimension` entries.
    #[error("var_upper has length {actual}, expected {expected}")]
    VarUpperLength { expected: usize, actual: usize },

    /// `integer_vars` lists more indices than there are variables.
    #[error("integer_vars has {actual} entries, more than dimension {dimension}")]
    IntegerVarsLength { dimension: usize, actual: usize },
}

/// Errors that can occur when querying a black box.
#[derive(Debug, Error)]
pub enum EvalError {
    /// The point does not match the black box dimension.
    #[error("point has {actual} components, expected {expected}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Noisy evaluation was requested from a provider without that
    /// capability.
    ///
    /// Callers are expected to consult [`has_evaluate_noisy`] first, so
    /// hitting this variant is a caller bug rather than a recoverable
    /// condition.
    ///
    /// [`has_evaluate_noisy`]: crate::BlackBox::has_evaluate_noisy
    #[error("noisy evaluation is not available for this black box")]
    NoisyUnavailable,

    /// The user-supplied evaluator failed.
    ///
    /// The evaluator's error is attached unchanged as the source.
    #[error("objective evaluation failed")]
    Objective(#[source] BoxedError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_errors_report_lengths() {
        let err = ConfigError::VarLowerLength {
            expected: 3,
            actual: 2,
        };
        assert_eq!(err.to_string(), "var_lower has length 2, expected 3");

        let err = ConfigError::IntegerVarsLength {
            dimension: 2,
            actual: 4,
        };
        assert_eq!(
            err.to_string(),
            "integer_vars has 4 entries, more than dimension 2"
        );
    }

    #[test]
    fn objective_error_keeps_source() {
        let source: BoxedError = "simulator crashed".into();
        let err = EvalError::Objective(source);

        assert_eq!(err.to_string(), "objective evaluation failed");
        let source = std::error::Error::source(&err).expect("source is attached");
        assert_eq!(source.to_string(), "simulator crashed");
    }
}
