//! CLI subcommands.

pub mod batch;
pub mod config;
pub mod process;

use std::path::Path;

use tracing::{debug, warn};

use snaptx_core::{OcrEngine, RecordParser, SnapTxConfig, TransactionParser, TransactionRecord};

/// Minimum recognized-text length worth parsing at all.
const MIN_RECOGNIZED_CHARS: usize = 5;

/// Load the configuration file when one was given, defaults otherwise.
pub(crate) fn load_config(config_path: Option<&str>) -> anyhow::Result<SnapTxConfig> {
    match config_path {
        Some(path) => Ok(SnapTxConfig::from_file(Path::new(path))?),
        None => Ok(SnapTxConfig::default()),
    }
}

/// Run OCR on one image and parse transactions from the recognized text.
pub(crate) fn extract_from_image(
    engine: &OcrEngine,
    parser: &TransactionParser,
    path: &Path,
) -> anyhow::Result<Vec<TransactionRecord>> {
    let recognized = engine.recognize_file(path)?;

    if recognized.text.chars().count() < MIN_RECOGNIZED_CHARS {
        warn!("no meaningful text extracted from {}", path.display());
        return Ok(Vec::new());
    }

    debug!(
        "extracted text ({} chars, confidence: {:.2})",
        recognized.text.len(),
        recognized.confidence
    );

    let records = parser.parse(
        &recognized.text,
        &path.to_string_lossy(),
        Some(recognized.confidence),
    );
    Ok(records)
}
