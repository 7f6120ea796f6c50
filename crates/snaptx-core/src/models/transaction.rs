//! Transaction record models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single transaction extracted from recognized text.
///
/// Every field except `source_file` is optional: the extraction engine
/// fills in whatever the heuristics could recover, and absence of one
/// field never invalidates another. A record is constructed once, fully
/// populated, and immutable thereafter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// Transaction date (day precision, no time component).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,

    /// Transaction amount, strictly positive when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Decimal>,

    /// Free-text description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Account information.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account: Option<String>,

    /// Transaction category.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Reference number (alphanumeric, at least 4 characters).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,

    /// Account balance after the transaction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balance: Option<Decimal>,

    /// Source image file path.
    pub source_file: String,

    /// OCR confidence score (0.0 - 1.0), passed through unchanged.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f32>,
}

/// Result of a batch processing run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProcessingSummary {
    /// Number of images processed.
    pub processed_count: usize,

    /// Number of transactions extracted.
    pub transaction_count: usize,

    /// Number of failed processing attempts.
    pub failed_count: usize,

    /// All extracted transaction records.
    pub records: Vec<TransactionRecord>,
}
