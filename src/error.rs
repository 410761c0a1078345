//! Construction-time configuration errors.

/// A problem configuration was rejected at construction time.
///
/// Every variant names the offending field so the message can be shown to
/// an end user without further wrapping.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A scalar parameter that must be strictly positive was not.
    #[error("{field} must be a positive number")]
    NotPositive {
        /// Human-readable parameter name, e.g. "number of employees".
        field: &'static str,
    },

    /// A matrix input does not match the dimensions implied by the scalars.
    #[error("{field} does not have the right dimension: the matrix should have dimensions {expected}")]
    Dimension {
        field: &'static str,
        /// Expected shape, e.g. "[number of days] by [number of shifts]".
        expected: &'static str,
    },

    /// A value is well-shaped but violates a domain rule.
    #[error("{field} {problem}")]
    Invalid {
        field: &'static str,
        problem: &'static str,
    },
}

impl ConfigError {
    /// The name of the rejected field.
    pub fn field(&self) -> &'static str {
        match self {
            ConfigError::NotPositive { field }
            | ConfigError::Dimension { field, .. }
            | ConfigError::Invalid { field, .. } => field,
        }
    }
}
