//! Rendered result of transforming one line.

/// Output produced for one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    /// Blank input; rendered as one empty line.
    Blank,
    /// Verbatim comment line, already wrapped in `<!-- -->`.
    Comment(String),
    /// Header line ingested; produces no output.
    Header { columns: usize },
    /// Data line.
    Row(Row),
}

/// Lines rendered from one data line. Either or both may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    /// `<!--  key: value  -->` built from the comment columns.
    pub comment: Option<String>,
    /// `<prefix key="value" suffix>` built from the attribute columns.
    pub attributes: Option<String>,
}

impl Row {
    pub fn is_empty(&self) -> bool {
        self.comment.is_none() && self.attributes.is_none()
    }
}

impl Output {
    /// Output lines in emission order, without line terminators.
    pub fn lines(&self) -> Vec<&str> {
        match self {
            Self::Blank => vec![""],
            Self::Comment(text) => vec![text.as_str()],
            Self::Header { .. } => Vec::new(),
            Self::Row(row) => row
                .comment
                .iter()
                .chain(row.attributes.iter())
                .map(String::as_str)
                .collect(),
        }
    }
}
