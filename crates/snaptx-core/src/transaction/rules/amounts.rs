//! Amount extraction from transaction text.

use rust_decimal::Decimal;
use std::str::FromStr;

use regex::Regex;

use super::dates::date_match_spans;
use super::patterns::{AMOUNT_BARE, AMOUNT_ISO, AMOUNT_SYMBOL, AMOUNT_VND};
use super::FieldExtractor;

/// Amount field extractor.
pub struct AmountExtractor;

impl AmountExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for AmountExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// How separators in a matched numeric substring are interpreted.
#[derive(Debug, Clone, Copy)]
enum SeparatorRule {
    /// `.` and `,` both group digits; the đồng has no subunit.
    VietnameseGrouping,
    /// Mixed `.`/`,` disambiguated by the trailing-digit count.
    General,
}

struct AmountPattern {
    regex: &'static Regex,
    rule: SeparatorRule,
    /// Bare numbers only: a candidate inside a date-pattern match or flush
    /// against a letter is a date fragment or part of a code, not an amount.
    standalone_only: bool,
}

/// Amount patterns in priority order: currency-qualified forms first, the
/// bare-number fallback last. The fallback can still pick up genuinely
/// unrelated standalone numbers; its priority is fixed, so the risk stays.
fn amount_patterns() -> [AmountPattern; 4] {
    [
        AmountPattern {
            regex: &AMOUNT_VND,
            rule: SeparatorRule::VietnameseGrouping,
            standalone_only: false,
        },
        AmountPattern {
            regex: &AMOUNT_SYMBOL,
            rule: SeparatorRule::General,
            standalone_only: false,
        },
        AmountPattern {
            regex: &AMOUNT_ISO,
            rule: SeparatorRule::General,
            standalone_only: false,
        },
        AmountPattern {
            regex: &AMOUNT_BARE,
            rule: SeparatorRule::General,
            standalone_only: true,
        },
    ]
}

impl FieldExtractor for AmountExtractor {
    type Output = Decimal;

    fn extract(&self, text: &str) -> Option<Decimal> {
        let date_spans = date_match_spans(text);

        for source in amount_patterns() {
            for caps in source.regex.captures_iter(text) {
                let m = caps.get(1).unwrap();
                if source.standalone_only && !is_standalone(text, m.start(), m.end(), &date_spans)
                {
                    continue;
                }
                if let Some(amount) = normalize_amount(m.as_str(), source.rule) {
                    return Some(amount);
                }
            }
        }
        None
    }

    fn extract_all(&self, text: &str) -> Vec<Decimal> {
        let date_spans = date_match_spans(text);
        let mut results = Vec::new();

        for source in amount_patterns() {
            for caps in source.regex.captures_iter(text) {
                let m = caps.get(1).unwrap();
                if source.standalone_only && !is_standalone(text, m.start(), m.end(), &date_spans)
                {
                    continue;
                }
                if let Some(amount) = normalize_amount(m.as_str(), source.rule) {
                    results.push(amount);
                }
            }
        }
        results
    }
}

/// A bare numeric candidate only counts when it is not part of a date
/// match and not glued to letters on either side.
fn is_standalone(text: &str, start: usize, end: usize, date_spans: &[(usize, usize)]) -> bool {
    if date_spans.iter().any(|&(s, e)| start < e && end > s) {
        return false;
    }
    if let Some(prev) = text[..start].chars().next_back() {
        if prev.is_ascii_alphabetic() {
            return false;
        }
    }
    if let Some(next) = text[end..].chars().next() {
        if next.is_ascii_alphabetic() {
            return false;
        }
    }
    true
}

/// Normalize a matched numeric substring to a strictly positive decimal.
/// Returns `None` when the result is non-positive or not parseable; the
/// caller then moves on to the next candidate.
fn normalize_amount(raw: &str, rule: SeparatorRule) -> Option<Decimal> {
    // A leading or trailing separator is sentence punctuation.
    let raw = raw.trim_matches(|c| c == '.' || c == ',');
    if raw.is_empty() {
        return None;
    }

    let normalized = match rule {
        SeparatorRule::VietnameseGrouping => raw.replace(['.', ','], ""),
        SeparatorRule::General => normalize_general(raw)?,
    };

    let amount = Decimal::from_str(&normalized).ok()?;
    (amount > Decimal::ZERO).then_some(amount)
}

fn normalize_general(raw: &str) -> Option<String> {
    if raw.matches('.').count() > 1 {
        // Vietnamese grouping convention: all dots separate thousands.
        return Some(raw.replace('.', ""));
    }

    if let Some(last_comma) = raw.rfind(',') {
        let (integer, fraction) = raw.split_at(last_comma);
        let fraction = &fraction[1..];
        if fraction.len() <= 2 {
            // Comma as decimal separator. A dot left of it would be the
            // European "1.234,56" style, which is not supported: absence
            // beats a plausible-looking wrong number.
            if integer.contains('.') {
                return None;
            }
            let integer = integer.replace(',', "");
            if fraction.is_empty() {
                return Some(integer);
            }
            return Some(format!("{}.{}", integer, fraction));
        }
        // Comma as thousands separator.
        return Some(raw.replace(',', ""));
    }

    Some(raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_vietnamese_grouped_amount() {
        let extractor = AmountExtractor::new();

        assert_eq!(
            extractor.extract("Amount: 1.500.000 VND"),
            Some(dec("1500000"))
        );
        assert_eq!(extractor.extract("Amount: 250.000 VND"), Some(dec("250000")));
        assert_eq!(
            extractor.extract("2,500,000 VND"),
            Some(dec("2500000"))
        );
        assert_eq!(extractor.extract("Phí: 50.000đ"), Some(dec("50000")));
    }

    #[test]
    fn test_symbol_prefixed_amount() {
        let extractor = AmountExtractor::new();

        assert_eq!(extractor.extract("Total: $1,234.56"), Some(dec("1234.56")));
        assert_eq!(extractor.extract("Total: $500.50"), Some(dec("500.50")));
    }

    #[test]
    fn test_iso_code_amount() {
        let extractor = AmountExtractor::new();

        assert_eq!(extractor.extract("Paid 1000.00 USD"), Some(dec("1000.00")));
    }

    #[test]
    fn test_european_format_is_unsupported() {
        let extractor = AmountExtractor::new();

        // "1.234,56" must yield absence, not 1234.56 or 123456.
        assert_eq!(extractor.extract("Total: €1.234,56"), None);
    }

    #[test]
    fn test_bare_number_fallback() {
        let extractor = AmountExtractor::new();

        // Lowest priority, but a standalone number is still picked up.
        // Known false-positive risk: nothing marks this as monetary.
        assert_eq!(extractor.extract("Total due 1234 thanks"), Some(dec("1234")));
    }

    #[test]
    fn test_bare_number_skips_date_fragments() {
        let extractor = AmountExtractor::new();

        assert_eq!(extractor.extract("Ngày 25 tháng 12 năm 2023"), None);
        assert_eq!(extractor.extract("15/03/2024 receipt pending"), None);
    }

    #[test]
    fn test_bare_number_skips_code_digits() {
        let extractor = AmountExtractor::new();

        assert_eq!(extractor.extract("REF123456 pending"), None);
    }

    #[test]
    fn test_never_returns_non_positive() {
        let extractor = AmountExtractor::new();

        assert_eq!(extractor.extract("Amount: 0 VND"), None);
        assert_eq!(extractor.extract("0.00 USD"), None);
        // The sign sits outside the captured group; the magnitude wins.
        assert_eq!(extractor.extract("Balance change: -500 USD"), Some(dec("500")));
    }

    #[test]
    fn test_no_amount_found() {
        let extractor = AmountExtractor::new();

        assert_eq!(extractor.extract("No monetary value here"), None);
        assert_eq!(extractor.extract("..."), None);
    }

    #[test]
    fn test_extract_all_keeps_priority_order() {
        let extractor = AmountExtractor::new();

        let amounts = extractor.extract_all("Fee 10.000 VND then total $25.50");
        assert_eq!(amounts[0], dec("10000"));
        assert!(amounts.contains(&dec("25.50")));
    }
}
