//! Common regex patterns for transaction field extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Date patterns, in priority order. Word boundaries keep digit runs
    // from bleeding into each other (a two-digit-year pattern must not
    // carve "24-03-15" out of "2024-03-15").
    pub static ref DATE_DMY_FULL: Regex = Regex::new(
        r"\b(\d{1,2})[/-](\d{1,2})[/-](\d{4})\b"
    ).unwrap();

    pub static ref DATE_DMY_SHORT: Regex = Regex::new(
        r"\b(\d{1,2})[/-](\d{1,2})[/-](\d{2})\b"
    ).unwrap();

    pub static ref DATE_YMD: Regex = Regex::new(
        r"\b(\d{4})-(\d{1,2})-(\d{1,2})\b"
    ).unwrap();

    pub static ref DATE_DOTTED: Regex = Regex::new(
        r"\b(\d{1,2})\.(\d{1,2})\.(\d{4})\b"
    ).unwrap();

    // Vietnamese verbose form: "ngày 25 tháng 12 năm 2023"
    pub static ref DATE_VI_VERBOSE: Regex = Regex::new(
        r"(?i)ngày\s+(\d{1,2})\s+tháng\s+(\d{1,2})\s+năm\s+(\d{4})"
    ).unwrap();

    // Amount patterns, in priority order.
    pub static ref AMOUNT_VND: Regex = Regex::new(
        r"(?i)([\d.,]+)\s*(?:VND|VNĐ|đ)"
    ).unwrap();

    pub static ref AMOUNT_SYMBOL: Regex = Regex::new(
        r"[$€£¥]\s*([\d.,]+)"
    ).unwrap();

    pub static ref AMOUNT_ISO: Regex = Regex::new(
        r"(?i)([\d.,]+)\s*(?:USD|EUR|GBP|JPY)"
    ).unwrap();

    pub static ref AMOUNT_BARE: Regex = Regex::new(
        r"[+-]?\s*([\d.,]+)"
    ).unwrap();

    // Reference patterns. The length floor is part of the pattern: a label
    // followed by a too-short token is a non-match, so scanning continues
    // instead of burning the pattern's single shot on it. Longer label
    // alternatives come first so "reference" is not matched as "ref".
    pub static ref REF_LABELED: Regex = Regex::new(
        r"(?i)(?:reference|ref|transaction|trans|mã gd|id)[\s:]*([A-Z0-9]{4,})"
    ).unwrap();

    pub static ref REF_ATM: Regex = Regex::new(
        r"(?i)ATM[\s:]*([A-Z0-9]{4,})"
    ).unwrap();

    pub static ref REF_FT: Regex = Regex::new(
        r"(?i)FT[\s:]*([A-Z0-9]{4,})"
    ).unwrap();

    // Description labels, capturing the remainder of the line.
    pub static ref DESC_LABEL_VI: Regex = Regex::new(
        r"(?i)(?:mo ta|mô tả|noi dung|nội dung)[\s:]*([^\n]+)"
    ).unwrap();

    pub static ref DESC_LABEL_EN: Regex = Regex::new(
        r"(?i)(?:description|desc)[\s:]*([^\n]+)"
    ).unwrap();

    pub static ref DESC_LABEL_NOTE: Regex = Regex::new(
        r"(?i)(?:remark|note)[\s:]*([^\n]+)"
    ).unwrap();

    // Line filters for the description fallback.
    pub static ref LINE_DATELIKE: Regex = Regex::new(
        r"\d{1,2}[/-]\d{1,2}[/-]\d{2,4}"
    ).unwrap();

    pub static ref LINE_AMOUNTLIKE: Regex = Regex::new(
        r"(?i)[\d.,]+\s*(?:VND|VNĐ|đ|\$)"
    ).unwrap();

    pub static ref LINE_CODE: Regex = Regex::new(
        r"^[A-Z0-9]{6,}$"
    ).unwrap();
}
