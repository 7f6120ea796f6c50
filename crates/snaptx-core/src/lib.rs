//! Core library for transaction screenshot OCR processing.
//!
//! This crate provides:
//! - Image preprocessing and validation for OCR input
//! - Text recognition through the external tesseract executable
//! - Heuristic field extraction (date, amount, reference, description)
//! - Transaction record models and CSV-ready field set

pub mod error;
pub mod models;
pub mod ocr;
pub mod transaction;

pub use error::{OcrError, Result, SnapTxError};
pub use models::config::{InputConfig, OcrConfig, SnapTxConfig};
pub use models::transaction::{ProcessingSummary, TransactionRecord};
pub use ocr::{ImagePreprocessor, OcrEngine, RecognizedText};
pub use transaction::{normalize, RecordParser, TransactionParser};
