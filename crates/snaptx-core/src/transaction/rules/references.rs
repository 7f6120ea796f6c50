//! Reference code extraction from transaction text.

use regex::Regex;

use super::patterns::{REF_ATM, REF_FT, REF_LABELED};
use super::FieldExtractor;

/// Minimum length of an acceptable reference code.
const MIN_CODE_LEN: usize = 4;

/// Reference field extractor.
pub struct ReferenceExtractor;

impl ReferenceExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ReferenceExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Reference patterns in priority order: labeled codes, then ATM codes,
/// then FT (fund transfer) codes.
fn reference_patterns() -> [&'static Regex; 3] {
    [&REF_LABELED, &REF_ATM, &REF_FT]
}

impl FieldExtractor for ReferenceExtractor {
    type Output = String;

    fn extract(&self, text: &str) -> Option<String> {
        for pattern in reference_patterns() {
            if let Some(caps) = pattern.captures(text) {
                let code = caps[1].trim();
                if code.len() >= MIN_CODE_LEN {
                    return Some(code.to_string());
                }
                // Too short: move on to the next pattern.
            }
        }
        None
    }

    fn extract_all(&self, text: &str) -> Vec<String> {
        let mut results = Vec::new();
        for pattern in reference_patterns() {
            for caps in pattern.captures_iter(text) {
                let code = caps[1].trim();
                if code.len() >= MIN_CODE_LEN && !results.iter().any(|r| r == code) {
                    results.push(code.to_string());
                }
            }
        }
        results
    }
}
