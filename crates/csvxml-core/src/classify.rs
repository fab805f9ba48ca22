//! Per-line classification: blank, verbatim comment or content.

use crate::text::{is_punct, skip_punct, skip_space, trim_trailing_space};

/// What a single input line is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Empty or whitespace only.
    Blank,
    /// First non-whitespace character is punctuation. Holds the raw line.
    Comment(&'a str),
    /// Anything else. Holds the line without leading or trailing whitespace.
    Content(&'a str),
}

/// Classifies a raw input line, line ending included or not.
pub fn classify(line: &str) -> LineKind<'_> {
    let rest = skip_space(line);
    match rest.chars().next() {
        None => LineKind::Blank,
        Some(c) if is_punct(c) => LineKind::Comment(line),
        Some(_) => LineKind::Content(trim_trailing_space(rest)),
    }
}

/// Renders a verbatim comment line as `<!-- text -->`.
///
/// Commas become spaces first, so trailing commas are trimmed along with
/// trailing whitespace. The leading run of punctuation and whitespace is
/// skipped.
pub fn render_comment_line(raw: &str) -> String {
    let text = raw.replace(',', " ");
    format!("<!-- {} -->", skip_punct(trim_trailing_space(&text)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_blank() {
        assert_eq!(classify(""), LineKind::Blank);
        assert_eq!(classify("   \n"), LineKind::Blank);
        assert_eq!(classify("\t\r\n"), LineKind::Blank);
    }

    #[test]
    fn test_classify_comment_keeps_raw_line() {
        assert_eq!(
            classify("  # deprecated, skip\n"),
            LineKind::Comment("  # deprecated, skip\n")
        );
    }

    #[test]
    fn test_classify_content_is_trimmed() {
        assert_eq!(classify("  a,b , c \r\n"), LineKind::Content("a,b , c"));
    }

    #[test]
    fn test_render_comment_line() {
        assert_eq!(
            render_comment_line("# deprecated, skip\n"),
            "<!-- deprecated  skip -->"
        );
    }

    #[test]
    fn test_render_comment_line_trailing_commas() {
        assert_eq!(render_comment_line("# a, b,,,\n"), "<!-- a  b -->");
    }

    #[test]
    fn test_render_comment_line_all_punctuation() {
        assert_eq!(render_comment_line("###,,,\n"), "<!--  -->");
    }

    #[test]
    fn test_render_comment_line_keeps_inner_punctuation() {
        assert_eq!(
            render_comment_line("-- see: a.b, c!  \n"),
            "<!-- see: a.b  c! -->"
        );
    }
}
