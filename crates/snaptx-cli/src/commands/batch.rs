//! Batch command - process a directory or glob of screenshots.

use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{error, warn};

use snaptx_core::{OcrEngine, ProcessingSummary, SnapTxConfig, TransactionParser};

use super::{extract_from_image, load_config};
use crate::export;

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input directory or glob pattern
    #[arg(required = true)]
    input: String,

    /// Output CSV file path
    #[arg(short, long, default_value = "transactions.csv")]
    output: PathBuf,
}

pub fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    let files = collect_image_files(&args.input, &config)?;
    if files.is_empty() {
        anyhow::bail!("no supported image files found for {}", args.input);
    }

    println!(
        "{} Found {} image(s) to process",
        style("ℹ").blue(),
        files.len()
    );

    let engine = OcrEngine::new(config.ocr.clone());
    let parser = TransactionParser::new();

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} images")
            .unwrap()
            .progress_chars("=>-"),
    );

    let mut summary = ProcessingSummary::default();

    for path in &files {
        if !engine.validate_image(path) {
            warn!("skipping invalid image: {}", path.display());
            summary.failed_count += 1;
            pb.inc(1);
            continue;
        }

        // One bad image must not sink the batch; failures are counted and
        // the run continues.
        match extract_from_image(&engine, &parser, path) {
            Ok(records) => {
                summary.processed_count += 1;
                summary.records.extend(records);
            }
            Err(e) => {
                error!("failed to process {}: {}", path.display(), e);
                summary.failed_count += 1;
            }
        }
        pb.inc(1);
    }

    pb.finish_with_message("Complete");
    summary.transaction_count = summary.records.len();

    if summary.records.is_empty() {
        warn!("no transactions extracted from any image");
    } else {
        export::write_csv(&summary.records, &args.output)?;
    }

    println!();
    println!(
        "{} Processed {} image(s) in {:?}",
        style("✓").green(),
        summary.processed_count,
        start.elapsed()
    );
    println!(
        "   {} transaction(s) extracted, {} failure(s)",
        style(summary.transaction_count).green(),
        style(summary.failed_count).red()
    );
    if !summary.records.is_empty() {
        println!("   Results saved to {}", args.output.display());
    }

    Ok(())
}

/// Collect supported image files from a directory, a single file, or a
/// glob pattern, sorted for a deterministic processing order.
fn collect_image_files(input: &str, config: &SnapTxConfig) -> anyhow::Result<Vec<PathBuf>> {
    let path = Path::new(input);

    let mut files: Vec<PathBuf> = if path.is_dir() {
        std::fs::read_dir(path)?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|p| p.is_file() && is_supported(p, config))
            .collect()
    } else if path.is_file() {
        if !is_supported(path, config) {
            anyhow::bail!("unsupported file format: {}", path.display());
        }
        vec![path.to_path_buf()]
    } else {
        glob(input)?
            .filter_map(|r| r.ok())
            .filter(|p| p.is_file() && is_supported(p, config))
            .collect()
    };

    files.sort();
    Ok(files)
}

fn is_supported(path: &Path, config: &SnapTxConfig) -> bool {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| format!(".{}", e.to_lowercase()))
        .unwrap_or_default();

    config.input.supported_formats.iter().any(|f| *f == ext)
}
