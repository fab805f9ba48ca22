//! Property tests for line classification and rendering.

use csvxml_core::{Output, Transformer, TransformerConfig};
use proptest::prelude::*;

fn transformer() -> Transformer {
    Transformer::new(TransformerConfig::default())
}

/// A header or data field that starts with a letter and holds no comma.
fn plain_field() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9_]{0,8}"
}

fn punct() -> impl Strategy<Value = char> {
    prop::sample::select(vec!['!', '#', '%', '-', '.', ';', '@', '~'])
}

proptest! {
    #[test]
    fn whitespace_lines_are_blank(line in "[ \t\r\x0B\x0C]{0,20}\n?") {
        let mut t = transformer();
        prop_assert_eq!(t.transform(&line).unwrap(), Output::Blank);
        prop_assert!(!t.has_header());
    }

    #[test]
    fn punctuation_lines_become_comments(
        lead in "[ \t]{0,3}",
        mark in punct(),
        body in "[A-Za-z0-9 ,]{0,30}",
    ) {
        let mut t = transformer();
        let line = format!("{lead}{mark}{body}\n");
        let output = t.transform(&line).unwrap();

        let expected = body.replace(',', " ");
        let expected = expected.trim_start().trim_end();
        prop_assert_eq!(output, Output::Comment(format!("<!-- {expected} -->")));
        prop_assert!(!t.has_header());
    }

    #[test]
    fn header_defines_one_column_per_field(
        names in prop::collection::vec((plain_field(), any::<bool>()), 1..12),
    ) {
        let mut t = transformer();
        let header: Vec<String> = names
            .iter()
            .map(|(name, comment)| if *comment { format!("!{name}") } else { name.clone() })
            .collect();
        let header = format!("{}\n", header.join(","));

        // The first header field must not make the whole line a comment.
        prop_assume!(!names[0].1);

        let output = t.transform(&header).unwrap();
        prop_assert!(output.lines().is_empty());
        prop_assert_eq!(t.columns().len(), names.len());
        for (column, (name, comment)) in t.columns().iter().zip(&names) {
            prop_assert_eq!(&column.key, name);
            prop_assert_eq!(column.is_comment, *comment);
        }
    }

    #[test]
    fn rows_render_present_values_only(
        values in prop::collection::vec(prop::option::of(plain_field()), 1..10),
    ) {
        // First column is always an attribute with a value so the row stays content.
        let mut t = transformer();
        let header: Vec<String> = (0..=values.len())
            .map(|i| if i % 2 == 0 { format!("a{i}") } else { format!("!c{i}") })
            .collect();
        t.transform(&format!("{}\n", header.join(","))).unwrap();

        let mut row = vec!["first".to_string()];
        row.extend(values.iter().map(|v| v.clone().unwrap_or_default()));
        let output = t.transform(&format!("{}\n", row.join(","))).unwrap();

        let mut attributes = String::from(" a0=\"first\"");
        let mut comment = String::new();
        for (offset, value) in values.iter().enumerate() {
            let i = offset + 1;
            if let Some(value) = value {
                if i % 2 == 0 {
                    attributes.push_str(&format!(" a{i}=\"{value}\""));
                } else {
                    comment.push_str(&format!("  c{i}: {value} "));
                }
            }
        }

        let mut expected = Vec::new();
        if !comment.is_empty() {
            expected.push(format!("<!--{comment} -->"));
        }
        expected.push(format!("<partition{attributes} />"));
        prop_assert_eq!(output.lines(), expected);
    }

    #[test]
    fn too_many_fields_are_rejected(extra in 1usize..20) {
        let mut t = Transformer::new(TransformerConfig::default().with_max_columns(4));
        let fields = vec!["x"; 4 + extra].join(",");
        prop_assert!(t.transform(&fields).is_err());
        prop_assert!(!t.has_header());
    }
}
