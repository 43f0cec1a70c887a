//! Crate-wide error type.

use std::path::PathBuf;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, MoeaError>;

/// Errors raised by the engine, the reference-point tracker and the
/// quality indicators.
///
/// Failures coming out of user code (problem evaluation, operators,
/// evaluators, hooks) are carried by [`MoeaError::Operator`] without any
/// added context, so the caller sees the original error.
#[derive(Debug, thiserror::Error)]
pub enum MoeaError {
    /// A required argument was absent.
    #[error("NullArgument: {0} must not be absent")]
    NullArgument(&'static str),

    /// A reference front source could not be read.
    #[error("NotFound: cannot read reference front {path:?}: {source}")]
    NotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A reference front row could not be parsed.
    #[error("MalformedFront: line {line}: {reason}")]
    MalformedFront { line: usize, reason: String },

    /// An objective index was outside `[0, len)`.
    #[error("OutOfRange: index {index} outside objective bounds (len = {len})")]
    OutOfRange { index: usize, len: usize },

    /// An operation was invoked in a state that does not permit it.
    #[error("InvalidState: {0}")]
    InvalidState(String),

    /// The engine configuration was rejected.
    #[error("InvalidConfig: {0}")]
    InvalidConfig(String),

    /// A problem, evaluator, operator or hook failed.
    #[error(transparent)]
    Operator(#[from] anyhow::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, thiserror::Error)]
    #[error("simulator crashed")]
    struct SimulatorCrash;

    #[test]
    fn test_operator_error_is_transparent() {
        let err = MoeaError::from(anyhow::Error::new(SimulatorCrash));
        assert_eq!(err.to_string(), "simulator crashed");

        match err {
            MoeaError::Operator(inner) => assert!(inner.downcast_ref::<SimulatorCrash>().is_some()),
            other => panic!("expected Operator, got {other:?}"),
        }
    }

    #[test]
    fn test_out_of_range_message() {
        let err = MoeaError::OutOfRange { index: 3, len: 3 };
        assert_eq!(
            err.to_string(),
            "OutOfRange: index 3 outside objective bounds (len = 3)"
        );
    }
}
