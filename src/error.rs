//! Error types for ALNS runs.

use std::fmt;
use thiserror::Error;

/// Which of the two operator registries an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorKind {
    Destroy,
    Repair,
}

impl fmt::Display for OperatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperatorKind::Destroy => f.write_str("destroy"),
            OperatorKind::Repair => f.write_str("repair"),
        }
    }
}

/// Errors raised by the engine.
///
/// Configuration errors are detected before the first iteration. Collaborators
/// (operators, selection, acceptance, stopping, callbacks) are infallible by
/// signature: a panic inside one of them unwinds through
/// [`Alns::iterate`](crate::Alns::iterate) untouched.
#[derive(Debug, Error, PartialEq)]
pub enum AlnsError {
    /// The destroy or repair registry is empty.
    #[error("missing {kind} operators: at least one is required")]
    MissingOperators { kind: OperatorKind },

    /// The stopping criterion is not a fixed iteration budget.
    #[error("unsupported stopping criterion: only a fixed iteration budget is supported")]
    UnsupportedStoppingCriterion,

    /// The selection scheme returned an index outside the registry.
    #[error("selection scheme chose {kind} operator {index}, but only {len} are registered")]
    InvalidOperatorIndex {
        kind: OperatorKind,
        index: usize,
        len: usize,
    },

    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type alias for ALNS operations.
pub type Result<T> = std::result::Result<T, AlnsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = AlnsError::MissingOperators {
            kind: OperatorKind::Repair,
        };
        assert_eq!(
            err.to_string(),
            "missing repair operators: at least one is required"
        );

        let err = AlnsError::InvalidOperatorIndex {
            kind: OperatorKind::Destroy,
            index: 3,
            len: 2,
        };
        assert_eq!(
            err.to_string(),
            "selection scheme chose destroy operator 3, but only 2 are registered"
        );
    }
}
