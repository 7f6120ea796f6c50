//! CSV and JSON serialization of transaction records.

use std::path::Path;

use tracing::info;

use snaptx_core::TransactionRecord;

/// Column layout of the persisted CSV artifact.
const CSV_HEADER: [&str; 9] = [
    "date",
    "amount",
    "description",
    "account",
    "category",
    "reference",
    "balance",
    "source_file",
    "confidence",
];

/// Write records as CSV rows. Absent optional fields serialize as empty
/// strings, dates as YYYY-MM-DD, amounts as plain decimal text without
/// currency symbols or grouping separators.
pub fn write_csv(records: &[TransactionRecord], path: &Path) -> anyhow::Result<()> {
    ensure_parent_dir(path)?;

    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(CSV_HEADER)?;
    for record in records {
        wtr.write_record(record_to_row(record))?;
    }
    wtr.flush()?;

    info!("exported {} transactions to {}", records.len(), path.display());
    Ok(())
}

/// Write records as a pretty-printed JSON array.
pub fn write_json(records: &[TransactionRecord], path: &Path) -> anyhow::Result<()> {
    ensure_parent_dir(path)?;

    let json = serde_json::to_string_pretty(records)?;
    std::fs::write(path, json)?;

    info!("exported {} transactions to {}", records.len(), path.display());
    Ok(())
}

fn ensure_parent_dir(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

fn record_to_row(record: &TransactionRecord) -> [String; 9] {
    [
        record
            .date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default(),
        record.amount.map(|a| a.to_string()).unwrap_or_default(),
        record.description.clone().unwrap_or_default(),
        record.account.clone().unwrap_or_default(),
        record.category.clone().unwrap_or_default(),
        record.reference.clone().unwrap_or_default(),
        record.balance.map(|b| b.to_string()).unwrap_or_default(),
        record.source_file.clone(),
        record
            .confidence
            .map(|c| format!("{:.2}", c))
            .unwrap_or_default(),
    ]
}
