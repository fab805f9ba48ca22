//! Error types for line transformation.

use thiserror::Error;

/// Errors that reject a single input line or a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransformError {
    /// Content line splits into more fields than the column capacity.
    #[error("line has {fields} fields, more than the {capacity} column limit")]
    FieldCountExceeded { fields: usize, capacity: usize },

    /// Data line has a value in a position the header never declared.
    #[error("field {} has a value but the header declares only {columns} columns", .index + 1)]
    UndeclaredColumn { index: usize, columns: usize },

    /// Line is longer than the configured maximum.
    #[error("line is {length} bytes long, more than the {max} byte limit")]
    LineTooLong { length: usize, max: usize },

    /// Prefix, suffix or limits are unusable.
    #[error("malformed configuration: {reason}")]
    MalformedConfiguration { reason: String },
}

/// Result type for transformation operations.
pub type Result<T> = std::result::Result<T, TransformError>;
