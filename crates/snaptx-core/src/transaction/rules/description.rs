//! Description extraction from transaction text.

use regex::Regex;

use super::dates::contains_date;
use super::patterns::{
    DESC_LABEL_EN, DESC_LABEL_NOTE, DESC_LABEL_VI, LINE_AMOUNTLIKE, LINE_CODE, LINE_DATELIKE,
    REF_LABELED,
};
use super::FieldExtractor;

/// Minimum length of a labeled description capture.
const MIN_LABELED_LEN: usize = 4;

/// Minimum length of a fallback description line.
const MIN_LINE_LEN: usize = 5;

/// Description field extractor.
///
/// Stage A looks for labeled descriptions; stage B falls back to the first
/// line that does not look like a date, an amount, or a code.
pub struct DescriptionExtractor;

impl DescriptionExtractor {
    pub fn new() -> Self {
        Self
    }

    fn extract_labeled(&self, text: &str) -> Option<String> {
        for pattern in description_labels() {
            if let Some(caps) = pattern.captures(text) {
                let description = trim_inline_reference(caps.get(1).unwrap().as_str());
                if description.chars().count() >= MIN_LABELED_LEN {
                    return Some(description.to_string());
                }
            }
        }
        None
    }

    fn extract_fallback_line(&self, text: &str) -> Option<String> {
        text.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .find(|line| is_meaningful_line(line))
            .map(|line| line.to_string())
    }
}

impl Default for DescriptionExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Description labels in priority order: Vietnamese, English, note forms.
fn description_labels() -> [&'static Regex; 3] {
    [&DESC_LABEL_VI, &DESC_LABEL_EN, &DESC_LABEL_NOTE]
}

impl FieldExtractor for DescriptionExtractor {
    type Output = String;

    fn extract(&self, text: &str) -> Option<String> {
        self.extract_labeled(text)
            .or_else(|| self.extract_fallback_line(text))
    }

    fn extract_all(&self, text: &str) -> Vec<String> {
        let mut results = Vec::new();

        for pattern in description_labels() {
            for caps in pattern.captures_iter(text) {
                let description = trim_inline_reference(caps.get(1).unwrap().as_str());
                if description.chars().count() >= MIN_LABELED_LEN
                    && !results.iter().any(|r| r == description)
                {
                    results.push(description.to_string());
                }
            }
        }

        for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
            let labeled = description_labels().iter().any(|p| p.is_match(line));
            if !labeled && is_meaningful_line(line) && !results.iter().any(|r| r == line) {
                results.push(line.to_string());
            }
        }

        results
    }
}

/// A line qualifies as a fallback description when it is not date-like,
/// not amount-like, not a pure uppercase/digit code, and not trivially
/// short.
fn is_meaningful_line(line: &str) -> bool {
    !LINE_DATELIKE.is_match(line)
        && !contains_date(line)
        && !LINE_AMOUNTLIKE.is_match(line)
        && !LINE_CODE.is_match(line)
        && line.chars().count() >= MIN_LINE_LEN
}

/// Cut off an inline reference label that trails the description on the
/// same line, when doing so leaves a usable prefix.
fn trim_inline_reference(captured: &str) -> &str {
    if let Some(m) = REF_LABELED.find(captured) {
        if m.start() > 0 {
            let prefix = captured[..m.start()].trim();
            if prefix.chars().count() >= MIN_LABELED_LEN {
                return prefix;
            }
        }
    }
    captured.trim()
}
