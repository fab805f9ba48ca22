//! Transformer configuration supplied by the caller.

use crate::error::{Result, TransformError};

/// Default text written before the attributes of each row.
pub const DEFAULT_PREFIX: &str = "<partition";

/// Default text written after the attributes of each row.
pub const DEFAULT_SUFFIX: &str = "/>";

/// Default maximum number of fields per content line.
pub const DEFAULT_MAX_COLUMNS: usize = 256;

/// Default maximum line length in bytes, line ending excluded.
pub const DEFAULT_MAX_LINE_LENGTH: usize = 4096;

/// Settings for a [`Transformer`](crate::Transformer).
///
/// Prefix and suffix are opaque to the transformer. Call
/// [`validate`](Self::validate) before use when they come from user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformerConfig {
    /// Written before the attribute list, e.g. `<partition`.
    pub prefix: String,
    /// Written after the attribute list and a single space, e.g. `/>`.
    pub suffix: String,
    /// Maximum number of fields a content line may split into.
    pub max_columns: usize,
    /// Maximum line length in bytes, line ending excluded.
    pub max_line_length: usize,
    /// XML-escape attribute values.
    pub escape_values: bool,
}

impl Default for TransformerConfig {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            suffix: DEFAULT_SUFFIX.to_string(),
            max_columns: DEFAULT_MAX_COLUMNS,
            max_line_length: DEFAULT_MAX_LINE_LENGTH,
            escape_values: false,
        }
    }
}

impl TransformerConfig {
    /// Set the row prefix.
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Set the row suffix.
    #[must_use]
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Set the column capacity.
    #[must_use]
    pub fn with_max_columns(mut self, max_columns: usize) -> Self {
        self.max_columns = max_columns;
        self
    }

    /// Set the maximum line length.
    #[must_use]
    pub fn with_max_line_length(mut self, max_line_length: usize) -> Self {
        self.max_line_length = max_line_length;
        self
    }

    /// Enable or disable attribute value escaping.
    #[must_use]
    pub fn with_escape_values(mut self, enable: bool) -> Self {
        self.escape_values = enable;
        self
    }

    /// Checks that every row still renders to exactly one output line.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::MalformedConfiguration`] when the prefix or
    /// suffix contains a line break, or a limit is zero.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [("prefix", &self.prefix), ("suffix", &self.suffix)] {
            if value.contains(['\n', '\r']) {
                return Err(TransformError::MalformedConfiguration {
                    reason: format!("{name} must not contain line breaks"),
                });
            }
        }
        if self.max_columns == 0 {
            return Err(TransformError::MalformedConfiguration {
                reason: "column limit must be at least 1".to_string(),
            });
        }
        if self.max_line_length == 0 {
            return Err(TransformError::MalformedConfiguration {
                reason: "line length limit must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}
