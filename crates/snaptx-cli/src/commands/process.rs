//! Process command - extract transactions from a single screenshot.

use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::info;

use snaptx_core::{OcrEngine, TransactionParser};

use super::{extract_from_image, load_config};
use crate::export;

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input image file
    #[arg(required = true)]
    input: PathBuf,

    /// Output file path
    #[arg(short, long, default_value = "transactions.csv")]
    output: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "csv")]
    format: OutputFormat,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// CSV rows, one per transaction
    Csv,
    /// JSON array of records
    Json,
}

pub fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let engine = OcrEngine::new(config.ocr.clone());
    let parser = TransactionParser::new();

    if !engine.validate_image(&args.input) {
        anyhow::bail!("not a usable image: {}", args.input.display());
    }

    info!("processing image: {}", args.input.display());
    let records = extract_from_image(&engine, &parser, &args.input)?;

    if records.is_empty() {
        println!(
            "{} No transaction data found in {}",
            style("!").yellow(),
            args.input.display()
        );
        return Ok(());
    }

    match args.format {
        OutputFormat::Csv => export::write_csv(&records, &args.output)?,
        OutputFormat::Json => export::write_json(&records, &args.output)?,
    }

    println!(
        "{} Extracted {} transaction(s) to {}",
        style("✓").green(),
        records.len(),
        args.output.display()
    );

    Ok(())
}
