//! Stream glue: read lines, transform them, write the fragments.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, ErrorKind, Write};
use std::path::Path;

use thiserror::Error;
use tracing::{debug, info, info_span, trace, warn};

use csvxml_core::{Output, TransformError, Transformer};

use crate::logging::redact_value;

/// Options for a conversion run.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConvertOptions {
    /// Abort on the first rejected line instead of skipping it.
    pub fail_fast: bool,
}

/// A line the transformer refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedLine {
    /// 1-based input line number.
    pub line: usize,
    pub message: String,
}

/// Counts collected over one conversion run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConvertSummary {
    /// Physical input lines read.
    pub lines: usize,
    pub blank: usize,
    pub comments: usize,
    /// Line number of the header, if one was seen.
    pub header_line: Option<usize>,
    /// Data lines rendered.
    pub records: usize,
    /// Output lines written, blank lines included.
    pub fragments: usize,
    pub rejected: Vec<RejectedLine>,
}

impl ConvertSummary {
    pub fn has_errors(&self) -> bool {
        !self.rejected.is_empty()
    }
}

/// Errors that stop a conversion run.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),

    /// Line rejected while running with `fail_fast`.
    #[error("line {line}: {source}")]
    Rejected {
        line: usize,
        #[source]
        source: TransformError,
    },
}

/// Opens the input, `None` or `-` meaning stdin.
pub fn open_input(path: Option<&Path>) -> io::Result<Box<dyn BufRead>> {
    match path {
        Some(path) if path != Path::new("-") => Ok(Box::new(BufReader::new(File::open(path)?))),
        _ => Ok(Box::new(BufReader::new(io::stdin()))),
    }
}

/// Opens the output, `None` or `-` meaning stdout.
pub fn open_output(path: Option<&Path>) -> io::Result<Box<dyn Write>> {
    match path {
        Some(path) if path != Path::new("-") => Ok(Box::new(BufWriter::new(File::create(path)?))),
        _ => Ok(Box::new(BufWriter::new(io::stdout()))),
    }
}

/// Outcome of [`read_line_bounded`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineRead {
    /// End of input; nothing was read.
    Eof,
    /// A whole line, terminator included, is in the buffer.
    Line,
    /// The line did not fit. The buffer holds its first `limit` bytes and the
    /// rest was discarded up to and including the `\n`.
    TooLong {
        /// Line length in bytes without its `\n` or `\r\n`.
        length: usize,
    },
}

/// Reads one line into `buffer`, never holding more than `limit` bytes.
///
/// # Errors
///
/// Returns any read error other than [`ErrorKind::Interrupted`].
pub fn read_line_bounded<R>(
    reader: &mut R,
    buffer: &mut Vec<u8>,
    limit: usize,
) -> io::Result<LineRead>
where
    R: BufRead + ?Sized,
{
    buffer.clear();
    let mut total = 0usize;
    let mut last = None;
    let mut before_last = None;

    loop {
        let available = match reader.fill_buf() {
            Ok(available) => available,
            Err(error) if error.kind() == ErrorKind::Interrupted => continue,
            Err(error) => return Err(error),
        };
        if available.is_empty() {
            break;
        }
        let (chunk, done) = match available.iter().position(|&b| b == b'\n') {
            Some(end) => (&available[..=end], true),
            None => (available, false),
        };
        let room = limit.saturating_sub(buffer.len());
        buffer.extend_from_slice(&chunk[..chunk.len().min(room)]);
        match chunk {
            [.., a, b] => (before_last, last) = (Some(*a), Some(*b)),
            [b] => (before_last, last) = (last, Some(*b)),
            [] => {}
        }
        let used = chunk.len();
        total += used;
        reader.consume(used);
        if done {
            break;
        }
    }

    if total == 0 {
        return Ok(LineRead::Eof);
    }
    if total <= limit {
        return Ok(LineRead::Line);
    }
    let terminator = match (before_last, last) {
        (Some(b'\r'), Some(b'\n')) => 2,
        (_, Some(b'\n')) => 1,
        _ => 0,
    };
    Ok(LineRead::TooLong {
        length: total - terminator,
    })
}

/// Runs every line of `reader` through `transformer`, writing fragments to `writer`.
///
/// Lines are handed to the transformer with their line ending attached. At
/// most the transformer's line length limit plus a `\r\n` is buffered per
/// line; anything longer is rejected unread. A UTF-8 byte order mark on the
/// first line is dropped and invalid UTF-8 is replaced.
///
/// # Errors
///
/// Returns [`PipelineError::Io`] on read or write failure, and
/// [`PipelineError::Rejected`] for the first rejected line when
/// `options.fail_fast` is set.
pub fn convert<R, W>(
    mut reader: R,
    mut writer: W,
    transformer: &mut Transformer,
    options: &ConvertOptions,
) -> Result<ConvertSummary, PipelineError>
where
    R: BufRead,
    W: Write,
{
    let span = info_span!("convert", fail_fast = options.fail_fast);
    let _guard = span.enter();

    let mut summary = ConvertSummary::default();
    let max_line_length = transformer.config().max_line_length;
    let limit = max_line_length.saturating_add(2);
    let mut buffer = Vec::with_capacity(limit.min(64 * 1024));

    loop {
        let read = read_line_bounded(&mut reader, &mut buffer, limit)?;
        if read == LineRead::Eof {
            break;
        }
        summary.lines += 1;
        let number = summary.lines;

        let mut bytes = buffer.as_slice();
        if number == 1 {
            bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
        }
        let result = match read {
            LineRead::TooLong { length } => Err(TransformError::LineTooLong {
                length,
                max: max_line_length,
            }),
            _ => {
                if std::str::from_utf8(bytes).is_err() {
                    warn!(line = number, "invalid UTF-8 replaced");
                }
                trace!(
                    line = number,
                    content = redact_value(String::from_utf8_lossy(bytes).trim_end()),
                    "read"
                );
                transformer.transform_bytes(bytes)
            }
        };

        let output = match result {
            Ok(output) => output,
            Err(error) => {
                warn!(line = number, %error, "line rejected");
                if options.fail_fast {
                    return Err(PipelineError::Rejected {
                        line: number,
                        source: error,
                    });
                }
                summary.rejected.push(RejectedLine {
                    line: number,
                    message: error.to_string(),
                });
                continue;
            }
        };

        match &output {
            Output::Blank => summary.blank += 1,
            Output::Comment(_) => summary.comments += 1,
            Output::Header { .. } => summary.header_line = Some(number),
            Output::Row(row) => {
                summary.records += 1;
                if row.is_empty() {
                    debug!(line = number, "row has no values");
                }
            }
        }
        for fragment in output.lines() {
            writeln!(writer, "{fragment}")?;
            summary.fragments += 1;
        }
    }

    writer.flush()?;
    info!(
        lines = summary.lines,
        records = summary.records,
        rejected = summary.rejected.len(),
        "conversion finished"
    );
    Ok(summary)
}
