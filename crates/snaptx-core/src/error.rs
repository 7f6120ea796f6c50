//! Error types for the snaptx-core library.

use thiserror::Error;

/// Main error type for the snaptx library.
#[derive(Error, Debug)]
pub enum SnapTxError {
    /// OCR processing error.
    #[error("OCR error: {0}")]
    Ocr(#[from] OcrError),

    /// Image processing error.
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to OCR processing.
///
/// Field extraction has no error variant here: the extraction engine is
/// total over the string domain and signals failure only through absent
/// fields or an empty record sequence.
#[derive(Error, Debug)]
pub enum OcrError {
    /// The tesseract executable could not be launched.
    #[error("OCR engine unavailable: {0}")]
    EngineUnavailable(String),

    /// Text recognition failed.
    #[error("text recognition failed: {0}")]
    Recognition(String),

    /// Invalid image format or dimensions.
    #[error("invalid image: {0}")]
    InvalidImage(String),
}

/// Result type for the snaptx library.
pub type Result<T> = std::result::Result<T, SnapTxError>;
