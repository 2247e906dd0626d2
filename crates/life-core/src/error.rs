//! Error types for the `life-core` crate.
//!
//! Configuration problems and addressing problems are kept as distinct
//! variants: the first is a user-facing validation failure, the second a
//! caller contract violation.

/// Errors raised by grid and controller operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LifeError {
    /// Construction was attempted with settings that cannot produce a grid.
    #[error("invalid configuration: {reason}")]
    InvalidConfiguration {
        /// Explanation of what is wrong with the configuration.
        reason: String,
    },

    /// A cell coordinate fell outside the active grid.
    #[error("cell ({col}, {row}) is outside the {columns}x{rows} grid")]
    OutOfBounds {
        /// Requested column.
        col: usize,
        /// Requested row.
        row: usize,
        /// Active column count.
        columns: usize,
        /// Active row count.
        rows: usize,
    },

    /// The generation counter would overflow.
    #[error("generation counter overflow: cannot advance beyond u64::MAX")]
    GenerationOverflow,
}

impl LifeError {
    /// Shorthand for building an [`LifeError::InvalidConfiguration`].
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            reason: reason.into(),
        }
    }
}
