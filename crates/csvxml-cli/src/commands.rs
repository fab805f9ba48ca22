use anyhow::{Context, Result};
use tracing::info;

use csvxml_cli::pipeline::{ConvertOptions, ConvertSummary, convert, open_input, open_output};
use csvxml_core::{Transformer, TransformerConfig};

use crate::cli::ConvertArgs;

pub fn transformer_config(args: &ConvertArgs) -> Result<TransformerConfig> {
    let config = TransformerConfig::default()
        .with_prefix(args.prefix.clone())
        .with_suffix(args.suffix.clone())
        .with_max_columns(args.max_columns)
        .with_max_line_length(args.max_line_length)
        .with_escape_values(args.escape_values);
    config.validate()?;
    Ok(config)
}

pub fn run_convert(args: &ConvertArgs) -> Result<ConvertSummary> {
    let config = transformer_config(args)?;
    let input_name = args
        .input
        .as_ref()
        .map_or_else(|| "<stdin>".to_string(), |path| path.display().to_string());
    let reader = open_input(args.input.as_deref())
        .with_context(|| format!("open input {input_name}"))?;
    let writer = match &args.output {
        Some(path) => open_output(Some(path.as_path()))
            .with_context(|| format!("create output {}", path.display()))?,
        None => open_output(None).context("open stdout")?,
    };
    info!(input = %input_name, prefix = %config.prefix, suffix = %config.suffix, "converting");

    let mut transformer = Transformer::new(config);
    let options = ConvertOptions {
        fail_fast: args.fail_fast,
    };
    let summary = convert(reader, writer, &mut transformer, &options)
        .with_context(|| format!("convert {input_name}"))?;
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    use crate::cli::Cli;

    #[test]
    fn test_transformer_config_from_args() {
        let cli = Cli::try_parse_from(["csvxml", "--prefix", "<vol", "--escape-values"]).unwrap();
        let config = transformer_config(&cli.convert).unwrap();
        assert_eq!(config.prefix, "<vol");
        assert!(config.escape_values);
    }

    #[test]
    fn test_transformer_config_rejects_zero_columns() {
        let cli = Cli::try_parse_from(["csvxml", "--max-columns", "0"]).unwrap();
        let err = transformer_config(&cli.convert).unwrap_err();
        assert_eq!(
            err.to_string(),
            "malformed configuration: column limit must be at least 1"
        );
    }

    #[test]
    fn test_run_convert_files() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.csv");
        let output = dir.path().join("out.xml");
        std::fs::write(&input, "a\n1\n1,2\n").unwrap();
        let cli = Cli::try_parse_from([
            "csvxml",
            input.to_str().unwrap(),
            "-o",
            output.to_str().unwrap(),
        ])
        .unwrap();

        let summary = run_convert(&cli.convert).unwrap();

        assert_eq!(summary.records, 1);
        assert_eq!(summary.rejected.len(), 1);
        assert_eq!(
            std::fs::read_to_string(&output).unwrap(),
            "<partition a=\"1\" />\n"
        );
    }
}
