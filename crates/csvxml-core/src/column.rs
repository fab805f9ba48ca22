//! Column descriptors derived from the header line.

use std::borrow::Cow;
use std::fmt::Write as _;

use quick_xml::escape::escape;

use crate::text::{skip_punct, starts_with_punct};

/// Name and role of one field position, fixed once the header is read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDescriptor {
    /// Display name, leading punctuation stripped for comment columns.
    pub key: String,
    /// Values render into the comment line instead of as attributes.
    pub is_comment: bool,
}

impl ColumnDescriptor {
    /// Creates an attribute column.
    pub fn attribute(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            is_comment: false,
        }
    }

    /// Creates a comment column.
    pub fn comment(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            is_comment: true,
        }
    }

    /// Builds a descriptor from one raw header field.
    ///
    /// A field starting with punctuation is a comment column named by the text
    /// after its leading punctuation and whitespace. Any other field is used
    /// verbatim as an attribute name.
    pub fn from_header_field(field: &str) -> Self {
        if starts_with_punct(field) {
            Self::comment(skip_punct(field))
        } else {
            Self::attribute(field)
        }
    }

    /// Appends this column's fragment for `value` to the matching buffer.
    pub(crate) fn render_into(
        &self,
        value: &str,
        escape_values: bool,
        comment: &mut String,
        attributes: &mut String,
    ) {
        if self.is_comment {
            let _ = write!(comment, "  {}: {} ", self.key, value);
        } else {
            let value = if escape_values {
                escape(value)
            } else {
                Cow::Borrowed(value)
            };
            let _ = write!(attributes, " {}=\"{}\"", self.key, value);
        }
    }
}
