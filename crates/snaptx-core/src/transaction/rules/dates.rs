//! Date extraction from transaction text.

use chrono::NaiveDate;
use regex::{Captures, Regex};

use super::patterns::{DATE_DMY_FULL, DATE_DMY_SHORT, DATE_DOTTED, DATE_VI_VERBOSE, DATE_YMD};
use super::FieldExtractor;

/// Date field extractor.
pub struct DateExtractor;

impl DateExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DateExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Date patterns in priority order: numeric day-first forms, ISO, dotted,
/// then the Vietnamese verbose form.
fn date_patterns() -> [&'static Regex; 5] {
    [
        &DATE_DMY_FULL,
        &DATE_DMY_SHORT,
        &DATE_YMD,
        &DATE_DOTTED,
        &DATE_VI_VERBOSE,
    ]
}

impl FieldExtractor for DateExtractor {
    type Output = NaiveDate;

    fn extract(&self, text: &str) -> Option<NaiveDate> {
        for pattern in date_patterns() {
            if let Some(caps) = pattern.captures(text) {
                if let Some(date) = parse_captured_date(&caps) {
                    return Some(date);
                }
                // An invalid calendar date abandons this pattern, not the
                // whole list.
            }
        }
        None
    }

    fn extract_all(&self, text: &str) -> Vec<NaiveDate> {
        let mut results = Vec::new();
        for pattern in date_patterns() {
            for caps in pattern.captures_iter(text) {
                if let Some(date) = parse_captured_date(&caps) {
                    if !results.contains(&date) {
                        results.push(date);
                    }
                }
            }
        }
        results
    }
}

/// All date-pattern match spans in the text, as byte ranges.
///
/// The amount extractor uses these to keep its bare-number fallback from
/// reading a date fragment as a monetary value.
pub(super) fn date_match_spans(text: &str) -> Vec<(usize, usize)> {
    let mut spans = Vec::new();
    for pattern in date_patterns() {
        for m in pattern.find_iter(text) {
            spans.push((m.start(), m.end()));
        }
    }
    spans
}

/// Whether any date pattern matches somewhere in the text.
///
/// The description fallback uses this so that a line holding only a date
/// (in any supported form, the verbose Vietnamese one included) is never
/// promoted to a description.
pub(super) fn contains_date(text: &str) -> bool {
    date_patterns().iter().any(|p| p.is_match(text))
}

/// Decide field order by structural cues, not pattern identity alone:
/// a 4-digit first group is a year, a "tháng" marker is day-month-year,
/// everything else defaults to day-month-year.
fn parse_captured_date(caps: &Captures) -> Option<NaiveDate> {
    let matched = caps.get(0)?.as_str();

    let (year, month, day): (i32, u32, u32) = if caps[1].len() == 4 {
        (
            caps[1].parse().ok()?,
            caps[2].parse().ok()?,
            caps[3].parse().ok()?,
        )
    } else if matched.to_lowercase().contains("tháng") {
        (
            caps[3].parse().ok()?,
            caps[2].parse().ok()?,
            caps[1].parse().ok()?,
        )
    } else {
        (
            expand_two_digit_year(caps[3].parse().ok()?),
            caps[2].parse().ok()?,
            caps[1].parse().ok()?,
        )
    };

    NaiveDate::from_ymd_opt(year, month, day)
}

/// Two-digit years below 50 fall in the 2000s, the rest in the 1900s.
fn expand_two_digit_year(year: i32) -> i32 {
    if year < 100 {
        if year < 50 {
            2000 + year
        } else {
            1900 + year
        }
    } else {
        year
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_date_dmy() {
        let extractor = DateExtractor::new();

        let result = extractor.extract("Date: 15/03/2024 Transaction details");
        assert_eq!(result, NaiveDate::from_ymd_opt(2024, 3, 15));

        let result = extractor.extract("31-12-2023");
        assert_eq!(result, NaiveDate::from_ymd_opt(2023, 12, 31));
    }

    #[test]
    fn test_extract_date_two_digit_year() {
        let extractor = DateExtractor::new();

        assert_eq!(
            extractor.extract("15/03/24"),
            NaiveDate::from_ymd_opt(2024, 3, 15)
        );
        assert_eq!(
            extractor.extract("15/03/99"),
            NaiveDate::from_ymd_opt(1999, 3, 15)
        );
    }

    #[test]
    fn test_extract_date_ymd() {
        let extractor = DateExtractor::new();

        let result = extractor.extract("2024-06-15");
        assert_eq!(result, NaiveDate::from_ymd_opt(2024, 6, 15));
    }

    #[test]
    fn test_extract_date_dotted() {
        let extractor = DateExtractor::new();

        let result = extractor.extract("25.11.2022");
        assert_eq!(result, NaiveDate::from_ymd_opt(2022, 11, 25));
    }

    #[test]
    fn test_extract_date_vietnamese_verbose() {
        let extractor = DateExtractor::new();

        let result = extractor.extract("Ngày 25 tháng 12 năm 2023");
        assert_eq!(result, NaiveDate::from_ymd_opt(2023, 12, 25));
    }

    #[test]
    fn test_invalid_calendar_date_is_discarded() {
        let extractor = DateExtractor::new();

        // Month 13 fails validation; no later pattern matches either.
        assert_eq!(extractor.extract("15/13/2024"), None);

        // The slash form is invalid but the dotted one later in the text
        // still parses.
        assert_eq!(
            extractor.extract("15/13/2024 or 15.03.2024"),
            NaiveDate::from_ymd_opt(2024, 3, 15)
        );
    }

    #[test]
    fn test_no_date_found() {
        let extractor = DateExtractor::new();

        assert_eq!(extractor.extract("No date information here"), None);
    }

    #[test]
    fn test_extract_all_collects_distinct_dates() {
        let extractor = DateExtractor::new();

        let dates = extractor.extract_all("15/03/2024 then 2024-06-15 then 15/03/2024");
        assert_eq!(
            dates,
            vec![
                NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
                NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
            ]
        );
    }
}
