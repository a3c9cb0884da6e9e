//! CSV serialization of the normalized records.

use crate::error::Result;
use crate::normalize::ExportRecord;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

/// Output columns, in order. Interest earned is consumed during
/// normalization and has no column here.
pub const OUTPUT_COLUMNS: [&str; 5] = [
    "Date",
    "Transaction description",
    "Money in (RM)",
    "Money out (RM)",
    "Closing balance (RM)",
];

/// Writes the records as UTF-8 CSV.
///
/// The header row is always written, so an empty record set still produces
/// a well-formed file.
pub fn write_csv<W: Write>(records: &[ExportRecord], writer: W) -> Result<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    csv_writer.write_record(OUTPUT_COLUMNS)?;
    for record in records {
        csv_writer.serialize(record)?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Writes the records to `path`, creating the output directory if needed.
pub fn export_to_path(records: &[ExportRecord], path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    write_csv(records, File::create(path)?)
}

/// Renders the first `limit` records, one per line, for the run summary
/// printed after a successful export.
pub fn preview(records: &[ExportRecord], limit: usize) -> String {
    records
        .iter()
        .take(limit)
        .map(|record| {
            format!(
                "{} | {} | {} | {} | {}",
                record.date,
                record.description,
                record.money_in,
                record.money_out,
                record.closing_balance
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
