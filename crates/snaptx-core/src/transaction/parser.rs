//! Transaction assembly from recognized text.

use tracing::{debug, info, warn};

use crate::models::transaction::TransactionRecord;

use super::rules::{
    AmountExtractor, DateExtractor, DescriptionExtractor, FieldExtractor, ReferenceExtractor,
};

/// Minimum normalized text length worth running the extractors over.
const MIN_TEXT_LEN: usize = 10;

/// A description must be longer than this to carry a record on its own.
const MIN_STANDALONE_DESCRIPTION_LEN: usize = 5;

/// Strip leading and trailing whitespace. No case folding or character
/// substitution happens here; the pattern tables are case-insensitive
/// where needed.
pub fn normalize(raw: &str) -> &str {
    raw.trim()
}

/// Trait for turning recognized text into transaction records.
pub trait RecordParser {
    /// Parse zero or one transaction records from recognized text.
    fn parse(
        &self,
        text: &str,
        source_file: &str,
        confidence: Option<f32>,
    ) -> Vec<TransactionRecord>;
}

/// Parses recognized text into transaction records using the rule-based
/// field extractors.
///
/// The parser is stateless apart from the precompiled pattern tables, so
/// one instance can serve any number of threads without coordination, and
/// calling it twice on the same input yields identical output.
pub struct TransactionParser {
    dates: DateExtractor,
    amounts: AmountExtractor,
    references: ReferenceExtractor,
    descriptions: DescriptionExtractor,
}

impl TransactionParser {
    /// Create a new parser.
    pub fn new() -> Self {
        Self {
            dates: DateExtractor::new(),
            amounts: AmountExtractor::new(),
            references: ReferenceExtractor::new(),
            descriptions: DescriptionExtractor::new(),
        }
    }
}

impl Default for TransactionParser {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordParser for TransactionParser {
    fn parse(
        &self,
        text: &str,
        source_file: &str,
        confidence: Option<f32>,
    ) -> Vec<TransactionRecord> {
        let text = normalize(text);
        if text.chars().count() < MIN_TEXT_LEN {
            warn!("text too short to contain transaction data");
            return Vec::new();
        }

        // The four extractors are mutually independent: each sees the same
        // normalized text and none depends on another's result.
        let date = self.dates.extract(text);
        let amount = self.amounts.extract(text);
        let reference = self.references.extract(text);
        let description = self.descriptions.extract(text);

        // Sufficiency policy: a date or reference alone is too weak to
        // constitute a transaction and would invite false positives from
        // coincidental numeric substrings.
        let substantial_description = description
            .as_ref()
            .is_some_and(|d| d.chars().count() > MIN_STANDALONE_DESCRIPTION_LEN);

        if amount.is_none() && !substantial_description {
            debug!("could not extract sufficient transaction data from text");
            return Vec::new();
        }

        info!(
            "parsed transaction: amount={:?}, date={:?}, ref={:?}",
            amount, date, reference
        );

        vec![TransactionRecord {
            date,
            amount,
            description,
            account: None,
            category: None,
            reference,
            balance: None,
            source_file: source_file.to_string(),
            confidence,
        }]
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;

    use super::*;

    #[test]
    fn test_complete_transaction_on_one_line() {
        let parser = TransactionParser::new();

        let text = "Date: 15/03/2024 Amount: 1.500.000 VND \
                    Description: Transfer to supplier Reference: TXN123456789";
        let records = parser.parse(text, "test_image.png", Some(0.95));

        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.date, NaiveDate::from_ymd_opt(2024, 3, 15));
        assert_eq!(record.amount, Some(Decimal::from_str("1500000").unwrap()));
        assert_eq!(record.description.as_deref(), Some("Transfer to supplier"));
        assert_eq!(record.reference.as_deref(), Some("TXN123456789"));
        assert_eq!(record.source_file, "test_image.png");
        assert_eq!(record.confidence, Some(0.95));
    }

    #[test]
    fn test_complete_transaction_multiline() {
        let parser = TransactionParser::new();

        let text = "Date: 15/03/2024\nAmount: 1.500.000 VND\nDescription: Transfer to supplier\nReference: TXN123456789";
        let records = parser.parse(text, "test_image.png", Some(0.95));

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].date, NaiveDate::from_ymd_opt(2024, 3, 15));
        assert_eq!(
            records[0].amount,
            Some(Decimal::from_str("1500000").unwrap())
        );
        assert_eq!(
            records[0].description.as_deref(),
            Some("Transfer to supplier")
        );
        assert_eq!(records[0].reference.as_deref(), Some("TXN123456789"));
    }

    #[test]
    fn test_amount_alone_is_sufficient() {
        let parser = TransactionParser::new();

        let records = parser.parse("Amount: 250.000 VND", "test_image.png", Some(0.8));

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].amount, Some(Decimal::from_str("250000").unwrap()));
        assert_eq!(records[0].confidence, Some(0.8));
    }

    #[test]
    fn test_date_alone_is_insufficient() {
        let parser = TransactionParser::new();

        assert!(parser
            .parse("Ngày 25 tháng 12 năm 2023", "test_image.png", Some(0.9))
            .is_empty());
        assert!(parser
            .parse("12/05/2024 01/06/2024", "test_image.png", Some(0.9))
            .is_empty());
    }

    #[test]
    fn test_reference_alone_is_insufficient() {
        let parser = TransactionParser::new();

        // The reference is extractable on its own...
        let text = "REF123456\nxxxx\nyyy";
        assert_eq!(
            ReferenceExtractor::new().extract(text).as_deref(),
            Some("123456")
        );
        // ...but without an amount or substantial description no record
        // is emitted.
        assert!(parser.parse(text, "test_image.png", Some(0.7)).is_empty());
    }

    #[test]
    fn test_short_text_yields_nothing() {
        let parser = TransactionParser::new();

        assert!(parser.parse("short", "test_image.png", Some(0.5)).is_empty());
        assert!(parser.parse("", "test_image.png", None).is_empty());
        assert!(parser
            .parse("         \n   ", "test_image.png", None)
            .is_empty());
    }

    #[test]
    fn test_parse_is_idempotent() {
        let parser = TransactionParser::new();

        let text = "Date: 15/03/2024\nAmount: 1.500.000 VND\nDescription: Transfer to supplier";
        let first = parser.parse(text, "a.png", Some(0.9));
        let second = parser.parse(text, "a.png", Some(0.9));

        assert_eq!(first, second);
    }

    #[test]
    fn test_confidence_is_passed_through_verbatim() {
        let parser = TransactionParser::new();

        let records = parser.parse("Amount: 250.000 VND", "a.png", Some(0.4321));
        assert_eq!(records[0].confidence, Some(0.4321));

        let records = parser.parse("Amount: 250.000 VND", "a.png", None);
        assert_eq!(records[0].confidence, None);
    }

    #[test]
    fn test_normalize_trims_only() {
        assert_eq!(normalize("  Mixed Case Text \n"), "Mixed Case Text");
    }
}
