//! ASCII character classes and slicing helpers.
//!
//! Classification follows the C locale: only ASCII characters are ever
//! considered whitespace or punctuation.

/// Space, tab, newline, vertical tab, form feed or carriage return.
pub(crate) fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

pub(crate) fn is_punct(c: char) -> bool {
    c.is_ascii_punctuation()
}

/// Strips the leading whitespace run.
pub(crate) fn skip_space(s: &str) -> &str {
    s.trim_start_matches(is_space)
}

/// Strips the leading run of punctuation and whitespace.
pub(crate) fn skip_punct(s: &str) -> &str {
    s.trim_start_matches(|c| is_punct(c) || is_space(c))
}

/// Strips trailing whitespace, line endings included.
pub(crate) fn trim_trailing_space(s: &str) -> &str {
    s.trim_end_matches(is_space)
}

pub(crate) fn starts_with_punct(s: &str) -> bool {
    s.chars().next().is_some_and(is_punct)
}

/// Length in bytes of the line without one trailing `\n` or `\r\n`.
pub(crate) fn content_length(line: &[u8]) -> usize {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line).len()
}
