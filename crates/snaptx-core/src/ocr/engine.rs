//! Text recognition through the external tesseract executable.

use std::path::Path;
use std::process::Command;

use image::GenericImageView;
use tracing::{debug, warn};

use crate::error::{OcrError, Result, SnapTxError};
use crate::models::config::OcrConfig;

use super::preprocessing::ImagePreprocessor;

/// Best-effort text recovered from an image.
#[derive(Debug, Clone)]
pub struct RecognizedText {
    /// Recognized text, trimmed.
    pub text: String,

    /// Mean word confidence in [0.0, 1.0]; 0.0 when unavailable.
    pub confidence: f32,
}

/// OCR engine backed by the system `tesseract` executable.
///
/// The engine never links native libraries: images are handed over as
/// temporary PNG files and text comes back on stdout.
pub struct OcrEngine {
    config: OcrConfig,
    preprocessor: ImagePreprocessor,
}

impl OcrEngine {
    /// Create an engine for the given configuration.
    pub fn new(config: OcrConfig) -> Self {
        let preprocessor = ImagePreprocessor::new().with_max_dimension(config.max_dimension);
        Self {
            config,
            preprocessor,
        }
    }

    /// Check whether an image file is worth sending to the engine.
    pub fn validate_image(&self, path: &Path) -> bool {
        let Ok(meta) = std::fs::metadata(path) else {
            warn!("image file does not exist: {}", path.display());
            return false;
        };
        if meta.len() > self.config.max_image_bytes {
            warn!("image file too large: {} bytes", meta.len());
            return false;
        }

        match image::open(path) {
            Ok(img) => {
                let (width, height) = img.dimensions();
                if width < self.config.min_dimension || height < self.config.min_dimension {
                    warn!("image too small: {}x{}", width, height);
                    return false;
                }
                true
            }
            Err(e) => {
                warn!("cannot decode image {}: {}", path.display(), e);
                false
            }
        }
    }

    /// Recognize text in an image file.
    pub fn recognize_file(&self, path: &Path) -> Result<RecognizedText> {
        debug!("processing image: {}", path.display());

        let image = image::open(path)?;
        let image = if self.config.preprocess {
            self.preprocessor.prepare(&image)
        } else {
            self.preprocessor.downscale(&image)
        };

        // tesseract reads from disk; hand it a temporary PNG.
        let tmp = tempfile::Builder::new()
            .suffix(".png")
            .tempfile()
            .map_err(SnapTxError::Io)?;
        image.save_with_format(tmp.path(), image::ImageFormat::Png)?;

        let text = self.run_tesseract(tmp.path(), false)?;

        let confidence = match self.run_tesseract(tmp.path(), true) {
            Ok(tsv) => mean_word_confidence(&tsv),
            Err(e) => {
                warn!("could not extract confidence data: {}", e);
                0.0
            }
        };

        let text = text.trim().to_string();
        debug!(
            "extracted {} characters with confidence {:.2}",
            text.len(),
            confidence
        );

        Ok(RecognizedText { text, confidence })
    }

    fn run_tesseract(&self, image_path: &Path, tsv: bool) -> Result<String> {
        let mut cmd = Command::new("tesseract");
        cmd.arg(image_path)
            .arg("stdout")
            .arg("-l")
            .arg(&self.config.language)
            .arg("--oem")
            .arg(self.config.oem.to_string())
            .arg("--psm")
            .arg(self.config.psm.to_string());
        if tsv {
            cmd.arg("tsv");
        }

        let output = cmd.output().map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                SnapTxError::Ocr(OcrError::EngineUnavailable(
                    "tesseract executable not found on PATH".to_string(),
                ))
            } else {
                SnapTxError::Io(e)
            }
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(SnapTxError::Ocr(OcrError::Recognition(stderr)));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Mean of the positive word confidences in tesseract tsv output, scaled
/// to [0.0, 1.0]. The tsv format is one word per row; column 11 holds the
/// confidence, -1 for non-word rows.
fn mean_word_confidence(tsv: &str) -> f32 {
    let mut sum = 0.0f32;
    let mut count = 0usize;

    for line in tsv.lines().skip(1) {
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() < 12 {
            continue;
        }
        if let Ok(conf) = fields[10].parse::<f32>() {
            if conf > 0.0 {
                sum += conf;
                count += 1;
            }
        }
    }

    if count == 0 {
        0.0
    } else {
        (sum / count as f32) / 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TSV_HEADER: &str =
        "level\tpage_num\tblock_num\tpar_num\tline_num\tword_num\tleft\ttop\twidth\theight\tconf\ttext";

    #[test]
    fn test_mean_word_confidence() {
        let tsv = format!(
            "{}\n5\t1\t1\t1\t1\t1\t10\t10\t50\t20\t90\tHello\n5\t1\t1\t1\t1\t2\t70\t10\t50\t20\t80\tworld\n2\t1\t1\t0\t0\t0\t0\t0\t100\t40\t-1\t",
            TSV_HEADER
        );

        let confidence = mean_word_confidence(&tsv);
        assert!((confidence - 0.85).abs() < 1e-6);
    }

    #[test]
    fn test_mean_word_confidence_empty() {
        assert_eq!(mean_word_confidence(TSV_HEADER), 0.0);
        assert_eq!(mean_word_confidence(""), 0.0);
    }

    #[test]
    fn test_validate_image_rejects_missing_file() {
        let engine = OcrEngine::new(OcrConfig::default());
        assert!(!engine.validate_image(Path::new("no-such-file.png")));
    }

    #[test]
    fn test_validate_image_rejects_tiny_images() {
        let engine = OcrEngine::new(OcrConfig::default());

        let tmp = tempfile::Builder::new().suffix(".png").tempfile().unwrap();
        image::DynamicImage::new_luma8(10, 10)
            .save_with_format(tmp.path(), image::ImageFormat::Png)
            .unwrap();

        assert!(!engine.validate_image(tmp.path()));
    }

    #[test]
    fn test_validate_image_accepts_reasonable_images() {
        let engine = OcrEngine::new(OcrConfig::default());

        let tmp = tempfile::Builder::new().suffix(".png").tempfile().unwrap();
        image::DynamicImage::new_rgb8(200, 100)
            .save_with_format(tmp.path(), image::ImageFormat::Png)
            .unwrap();

        assert!(engine.validate_image(tmp.path()));
    }
}
