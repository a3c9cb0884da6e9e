//! Normalization of reconstructed records into the export schema.
//!
//! Coerces the two inbound money columns, folds interest into `Money in`,
//! and drops the header row the reconstruction pass kept.

use crate::amount::Amount;
use crate::error::{ExportError, Result};
use crate::row::{LogicalRecord, HEADER_LABELS};
use log::debug;
use serde::Serialize;

/// One transaction in the shape written to the output CSV.
///
/// `Money out` and `Closing balance` pass through as statement text;
/// `Money in` is numeric and already includes the interest earned, which
/// has no column of its own in the output.
#[derive(Debug, Clone, Serialize)]
pub struct ExportRecord {
    #[serde(rename = "Date")]
    pub date: String,

    #[serde(rename = "Transaction description")]
    pub description: String,

    #[serde(rename = "Money in (RM)")]
    pub money_in: Amount,

    #[serde(rename = "Money out (RM)")]
    pub money_out: String,

    #[serde(rename = "Closing balance (RM)")]
    pub closing_balance: String,
}

fn parse_amount(
    cell: Option<&str>,
    row: usize,
    column: &'static str,
) -> Result<Amount> {
    Amount::parse_cell(cell).map_err(|_| ExportError::InvalidAmount {
        row,
        column,
        value: cell.unwrap_or("").to_string(),
    })
}

/// Normalizes reconstructed records, preserving input order.
///
/// Header-label records are dropped, as is any record without a date; a
/// money cell that fails to parse after comma removal aborts the run.
pub fn normalize(records: Vec<LogicalRecord>) -> Result<Vec<ExportRecord>> {
    let mut normalized = Vec::with_capacity(records.len());

    for record in records {
        if record
            .date
            .as_deref()
            .is_some_and(|date| HEADER_LABELS.contains(&date))
        {
            debug!("row {}: dropping header record", record.source_row);
            continue;
        }

        let money_in = parse_amount(record.money_in.as_deref(), record.source_row, "Money in (RM)")?;
        let interest = parse_amount(
            record.interest_earned.as_deref(),
            record.source_row,
            "Interest earned (RM)",
        )?;

        let Some(date) = record.date else {
            debug!("row {}: dropping record without a date", record.source_row);
            continue;
        };

        normalized.push(ExportRecord {
            date,
            description: record.description.unwrap_or_default(),
            money_in: money_in + interest,
            money_out: record.money_out.unwrap_or_default(),
            closing_balance: record.closing_balance.unwrap_or_default(),
        });
    }

    Ok(normalized)
}
