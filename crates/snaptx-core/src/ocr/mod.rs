//! OCR pipeline backed by the system tesseract executable.

mod engine;
mod preprocessing;

pub use engine::{OcrEngine, RecognizedText};
pub use preprocessing::ImagePreprocessor;
