//! Configuration structures for the recognition pipeline.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SnapTxError};

/// Main configuration for the snaptx pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SnapTxConfig {
    /// OCR configuration.
    pub ocr: OcrConfig,

    /// Input discovery configuration.
    pub input: InputConfig,
}

/// OCR engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OcrConfig {
    /// Tesseract language codes (e.g. "eng+vie").
    pub language: String,

    /// OCR Engine Mode passed to tesseract (--oem).
    pub oem: u8,

    /// Page Segmentation Mode passed to tesseract (--psm).
    pub psm: u8,

    /// Enable image preprocessing before recognition.
    pub preprocess: bool,

    /// Maximum input image size in bytes.
    pub max_image_bytes: u64,

    /// Minimum width/height for a usable image.
    pub min_dimension: u32,

    /// Maximum image dimension (longer side); larger images are downscaled.
    pub max_dimension: u32,
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            language: "eng+vie".to_string(),
            oem: 3,
            psm: 6,
            preprocess: true,
            max_image_bytes: 10_000_000,
            min_dimension: 50,
            max_dimension: 2000,
        }
    }
}

/// Input file discovery configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Supported image file extensions (lowercase, with leading dot).
    pub supported_formats: Vec<String>,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            supported_formats: vec![
                ".png".to_string(),
                ".jpg".to_string(),
                ".jpeg".to_string(),
                ".tiff".to_string(),
                ".bmp".to_string(),
            ],
        }
    }
}

impl SnapTxConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| SnapTxError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| SnapTxError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
