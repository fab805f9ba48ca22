//! Stateful per-stream line transformer.

use tracing::{debug, trace};

use crate::classify::{LineKind, classify, render_comment_line};
use crate::column::ColumnDescriptor;
use crate::config::TransformerConfig;
use crate::error::{Result, TransformError};
use crate::output::{Output, Row};
use crate::text::{content_length, is_space};

#[derive(Debug, Clone)]
enum Phase {
    AwaitingHeader,
    Ready(Vec<ColumnDescriptor>),
}

/// Converts one input line at a time, remembering the header between calls.
///
/// The first content line fixes the column descriptors for the rest of the
/// stream. Blank and comment lines pass through without affecting that.
#[derive(Debug, Clone)]
pub struct Transformer {
    config: TransformerConfig,
    phase: Phase,
}

impl Transformer {
    pub fn new(config: TransformerConfig) -> Self {
        Self {
            config,
            phase: Phase::AwaitingHeader,
        }
    }

    pub fn config(&self) -> &TransformerConfig {
        &self.config
    }

    /// Returns true once a header line has been ingested.
    pub fn has_header(&self) -> bool {
        matches!(self.phase, Phase::Ready(_))
    }

    /// Column descriptors from the header; empty until it has been seen.
    pub fn columns(&self) -> &[ColumnDescriptor] {
        match &self.phase {
            Phase::AwaitingHeader => &[],
            Phase::Ready(columns) => columns,
        }
    }

    /// Transforms one physical input line.
    ///
    /// # Errors
    ///
    /// - [`TransformError::LineTooLong`] when the line exceeds the length limit
    /// - [`TransformError::FieldCountExceeded`] when a content line has more
    ///   fields than the column limit
    /// - [`TransformError::UndeclaredColumn`] when a data line has a value past
    ///   the last header column
    ///
    /// A rejected line leaves the transformer unchanged.
    pub fn transform(&mut self, line: &str) -> Result<Output> {
        self.check_length(line.as_bytes())?;
        self.transform_line(line)
    }

    /// Transforms one physical input line given as raw bytes.
    ///
    /// The length limit applies to the bytes as read. Invalid UTF-8 is then
    /// replaced with U+FFFD before classification.
    ///
    /// # Errors
    ///
    /// Same as [`transform`](Self::transform).
    pub fn transform_bytes(&mut self, line: &[u8]) -> Result<Output> {
        self.check_length(line)?;
        self.transform_line(&String::from_utf8_lossy(line))
    }

    fn check_length(&self, line: &[u8]) -> Result<()> {
        let length = content_length(line);
        if length > self.config.max_line_length {
            return Err(TransformError::LineTooLong {
                length,
                max: self.config.max_line_length,
            });
        }
        Ok(())
    }

    fn transform_line(&mut self, line: &str) -> Result<Output> {
        let content = match classify(line) {
            LineKind::Blank => return Ok(Output::Blank),
            LineKind::Comment(raw) => return Ok(Output::Comment(render_comment_line(raw))),
            LineKind::Content(content) => content,
        };

        let fields: Vec<&str> = content.split(',').collect();
        if fields.len() > self.config.max_columns {
            return Err(TransformError::FieldCountExceeded {
                fields: fields.len(),
                capacity: self.config.max_columns,
            });
        }

        if let Phase::Ready(columns) = &self.phase {
            return render_row(columns, &fields, &self.config).map(Output::Row);
        }

        let columns = ingest_header(&fields);
        let count = columns.len();
        self.phase = Phase::Ready(columns);
        Ok(Output::Header { columns: count })
    }
}

fn ingest_header(fields: &[&str]) -> Vec<ColumnDescriptor> {
    let columns: Vec<ColumnDescriptor> = fields
        .iter()
        .map(|field| ColumnDescriptor::from_header_field(field))
        .collect();
    let comment_columns = columns.iter().filter(|c| c.is_comment).count();
    debug!(columns = columns.len(), comment_columns, "header ingested");
    for (index, column) in columns.iter().enumerate() {
        trace!(index, key = %column.key, is_comment = column.is_comment, "column");
    }
    columns
}

fn render_row(
    columns: &[ColumnDescriptor],
    fields: &[&str],
    config: &TransformerConfig,
) -> Result<Row> {
    let mut comment = String::new();
    let mut attributes = String::new();

    for (index, field) in fields.iter().enumerate() {
        if field.trim_matches(is_space).is_empty() {
            continue;
        }
        let column = columns
            .get(index)
            .ok_or(TransformError::UndeclaredColumn {
                index,
                columns: columns.len(),
            })?;
        column.render_into(field, config.escape_values, &mut comment, &mut attributes);
    }

    Ok(Row {
        comment: (!comment.is_empty()).then(|| format!("<!--{comment} -->")),
        attributes: (!attributes.is_empty())
            .then(|| format!("{}{} {}", config.prefix, attributes, config.suffix)),
    })
}
