//! Row reconstruction: raw table lines to logical transactions.
//!
//! The extraction output fragments a transaction across a date line, a time
//! line, and sometimes a description line. This pass folds those fragments
//! back together with an explicit two-state machine: no open record, or
//! exactly one record accumulating.

use crate::error::{ExportError, Result};
use crate::row::{LogicalRecord, RawRow, RowKind};
use log::debug;

/// The reconstruction state machine.
///
/// Rows are pushed in extraction order; [`Reconstructor::finish`] yields the
/// logical records in order of first appearance of each transaction's date
/// row. Exactly one page header is kept for downstream filtering; every
/// repeat produced by multi-page extraction is suppressed.
#[derive(Debug, Default)]
pub struct Reconstructor {
    /// The record currently accumulating, if any.
    open: Option<LogicalRecord>,

    /// Finalized records, in input order.
    merged: Vec<LogicalRecord>,

    /// Whether the single kept header has been seen.
    header_seen: bool,

    /// 1-based count of rows pushed so far, for error context.
    row: usize,
}

impl Reconstructor {
    /// Creates an empty reconstructor.
    pub fn new() -> Self {
        Reconstructor::default()
    }

    /// Consumes one raw row.
    ///
    /// Fails if a time continuation arrives while no record is open; the
    /// statement format guarantees a time line only ever follows its date
    /// line, so this indicates malformed input.
    pub fn push(&mut self, row: RawRow) -> Result<()> {
        self.row += 1;

        match row.classify() {
            RowKind::Header => {
                if self.header_seen {
                    debug!("row {}: suppressing repeated page header", self.row);
                } else {
                    self.header_seen = true;
                    self.merged.push(LogicalRecord::open(&row, self.row));
                }
            }
            RowKind::TimeContinuation => {
                let open = self
                    .open
                    .as_mut()
                    .ok_or(ExportError::OrphanTimeRow { row: self.row })?;
                open.merge_time(row.date.as_deref().unwrap_or_default());
            }
            RowKind::TransactionStart => {
                if let Some(done) = self.open.take() {
                    self.merged.push(done);
                }
                self.open = Some(LogicalRecord::open(&row, self.row));
            }
            RowKind::Continuation => match (self.open.as_mut(), row.description.as_deref()) {
                (Some(open), Some(description)) if open.description_is_blank() => {
                    open.fill_description(description);
                }
                _ => debug!("row {}: dropping unclassified row", self.row),
            },
        }

        Ok(())
    }

    /// Finalizes a still-open record and returns the merged sequence.
    pub fn finish(mut self) -> Vec<LogicalRecord> {
        if let Some(done) = self.open.take() {
            self.merged.push(done);
        }
        self.merged
    }
}
