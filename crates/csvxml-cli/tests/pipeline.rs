//! Integration tests for the pipeline module.

use std::fs;

use csvxml_cli::pipeline::{
    ConvertOptions, ConvertSummary, PipelineError, RejectedLine, convert, open_input, open_output,
};
use csvxml_core::{TransformError, Transformer, TransformerConfig};

const PARTITIONS: &str = "\
# partition table, sda
name,start,size,#comment

boot,0,512M,EFI system
root,512M,64G,
swap,,8G,
   
; end of table
";

fn run_with(
    input: &str,
    config: TransformerConfig,
    options: ConvertOptions,
) -> (String, Result<ConvertSummary, PipelineError>) {
    let mut transformer = Transformer::new(config);
    let mut out = Vec::new();
    let result = convert(input.as_bytes(), &mut out, &mut transformer, &options);
    (String::from_utf8(out).unwrap(), result)
}

fn run(input: &str) -> (String, ConvertSummary) {
    let (out, result) = run_with(input, TransformerConfig::default(), ConvertOptions::default());
    (out, result.unwrap())
}

#[test]
fn test_convert_partition_table() {
    let (out, summary) = run(PARTITIONS);

    insta::assert_snapshot!(out, @r#"
<!-- partition table  sda -->

<!--  comment: EFI system  -->
<partition name="boot" start="0" size="512M" />
<partition name="root" start="512M" size="64G" />
<partition name="swap" size="8G" />

<!-- end of table -->
"#);

    assert_eq!(
        summary,
        ConvertSummary {
            lines: 8,
            blank: 2,
            comments: 2,
            header_line: Some(2),
            records: 3,
            fragments: 8,
            rejected: Vec::new(),
        }
    );
    assert!(!summary.has_errors());
}

#[test]
fn test_rejected_lines_are_skipped() {
    let input = "a,b\n1,2\n1,2,3\n3,4\n";
    let (out, summary) = run(input);

    assert_eq!(
        out,
        "<partition a=\"1\" b=\"2\" />\n<partition a=\"3\" b=\"4\" />\n"
    );
    assert!(summary.has_errors());
    assert_eq!(
        summary.rejected,
        vec![RejectedLine {
            line: 3,
            message: "field 3 has a value but the header declares only 2 columns".to_string(),
        }]
    );
}

#[test]
fn test_fail_fast_stops_at_first_rejection() {
    let input = "a,b\n1,2\n1,2,3\n3,4\n";
    let (out, result) = run_with(
        input,
        TransformerConfig::default().with_max_columns(2),
        ConvertOptions { fail_fast: true },
    );

    match result {
        Err(PipelineError::Rejected { line, source }) => {
            assert_eq!(line, 3);
            assert_eq!(
                source,
                TransformError::FieldCountExceeded {
                    fields: 3,
                    capacity: 2
                }
            );
        }
        other => panic!("expected rejection, got {other:?}"),
    }
    // Output written before the rejection is kept.
    assert_eq!(out, "<partition a=\"1\" b=\"2\" />\n");
}

#[test]
fn test_long_line_is_rejected() {
    let long = "x".repeat(5000);
    let input = format!("a\n{long}\nshort\n");
    let (out, summary) = run(&input);

    assert_eq!(out, "<partition a=\"short\" />\n");
    assert_eq!(summary.rejected.len(), 1);
    assert_eq!(summary.rejected[0].line, 2);
    assert_eq!(
        summary.rejected[0].message,
        "line is 5000 bytes long, more than the 4096 byte limit"
    );
}

#[test]
fn test_oversized_line_is_skipped_without_buffering() {
    let mut input = String::from("a\n");
    input.push_str(&"y".repeat(1 << 20));
    input.push_str("\r\nshort\n");
    let (out, result) = run_with(
        &input,
        TransformerConfig::default().with_max_line_length(8),
        ConvertOptions::default(),
    );
    let summary = result.unwrap();

    assert_eq!(out, "<partition a=\"short\" />\n");
    assert_eq!(summary.lines, 3);
    assert_eq!(
        summary.rejected,
        vec![RejectedLine {
            line: 2,
            message: "line is 1048576 bytes long, more than the 8 byte limit".to_string(),
        }]
    );
}

#[test]
fn test_crlf_input() {
    let (out, summary) = run("Name,!Note\r\nAlice,hello\r\n\r\n");
    assert_eq!(
        out,
        "<!--  Note: hello  -->\n<partition Name=\"Alice\" />\n\n"
    );
    assert_eq!(summary.blank, 1);
}

#[test]
fn test_last_line_without_newline() {
    let (out, summary) = run("k\nv");
    assert_eq!(out, "<partition k=\"v\" />\n");
    assert_eq!(summary.lines, 2);
}

#[test]
fn test_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let input_path = dir.path().join("table.csv");
    let output_path = dir.path().join("table.xml");
    fs::write(&input_path, "id,!why\n7,lucky\n").unwrap();

    let reader = open_input(Some(input_path.as_path())).unwrap();
    let writer = open_output(Some(output_path.as_path())).unwrap();
    let mut transformer = Transformer::new(
        TransformerConfig::default()
            .with_prefix("<entry")
            .with_suffix("/>"),
    );
    let summary = convert(reader, writer, &mut transformer, &ConvertOptions::default()).unwrap();

    assert_eq!(summary.records, 1);
    assert_eq!(
        fs::read_to_string(&output_path).unwrap(),
        "<!--  why: lucky  -->\n<entry id=\"7\" />\n"
    );
}

#[test]
fn test_open_input_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    assert!(open_input(Some(dir.path().join("missing.csv").as_path())).is_err());
}
