//! Error types for engine configuration and state transitions.

use roster_model::ModelError;
use thiserror::Error;

/// Errors raised when the engine is configured or driven with names it does
/// not know.
///
/// Empty results and out-of-range pages are not errors; they degrade to
/// well-defined empty or clamped outputs instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A filter name that was never registered.
    #[error("unknown filter: {name}")]
    UnknownFilter { name: String },

    /// A filter name registered twice.
    #[error("filter registered twice: {name}")]
    DuplicateFilter { name: String },

    /// A sort key that is not a schema field.
    #[error("unknown sort key: {key}")]
    UnknownSortKey { key: String },

    /// Page sizes must be positive.
    #[error("page size must be greater than zero")]
    ZeroPageSize,

    /// Schema or record level error.
    #[error(transparent)]
    Model(#[from] ModelError),
}

pub type Result<T> = std::result::Result<T, EngineError>;
