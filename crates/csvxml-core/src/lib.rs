//! Line transformer for comma-separated input.
//!
//! Each input line is classified as blank, a verbatim comment or content. The
//! first content line is the header: it names the columns and marks the ones
//! whose header field starts with punctuation as comment columns. Every later
//! content line renders to an optional `<!-- ... -->` line built from the
//! comment columns and an optional `<prefix key="value" ... suffix>` line
//! built from the rest.
//!
//! # Example
//!
//! ```
//! use csvxml_core::{Output, Transformer, TransformerConfig};
//!
//! let mut transformer = Transformer::new(TransformerConfig::default());
//! assert!(matches!(transformer.transform("Name,!Note\n")?, Output::Header { columns: 2 }));
//!
//! let row = transformer.transform("Alice,hello\n")?;
//! assert_eq!(
//!     row.lines(),
//!     vec!["<!--  Note: hello  -->", "<partition Name=\"Alice\" />"]
//! );
//! # Ok::<(), csvxml_core::TransformError>(())
//! ```

mod classify;
mod column;
mod config;
mod error;
mod output;
mod text;
mod transformer;

// === Error Types ===
pub use error::{Result, TransformError};

// === Configuration ===
pub use config::{
    DEFAULT_MAX_COLUMNS, DEFAULT_MAX_LINE_LENGTH, DEFAULT_PREFIX, DEFAULT_SUFFIX,
    TransformerConfig,
};

// === Line Classification ===
pub use classify::{LineKind, classify, render_comment_line};

// === Transformation ===
pub use column::ColumnDescriptor;
pub use output::{Output, Row};
pub use transformer::Transformer;
