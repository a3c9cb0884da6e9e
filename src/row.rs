//! Row models for statement reconstruction.
//!
//! The extractor yields positionally typed six-cell rows; this module gives
//! the cells names, classifies each row, and defines the logical record that
//! accumulates one transaction across its continuation rows.

use regex::Regex;
use std::sync::OnceLock;

/// Column-header labels the statement repeats on every page.
pub const HEADER_LABELS: [&str; 2] = ["Date", "Tarikh"];

fn date_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // Matches date cells like "9 Sep"
    RE.get_or_init(|| Regex::new(r"^\d{1,2} [A-Za-z]{3}").expect("hardcoded pattern is valid"))
}

fn time_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // Matches time cells like "02:10 PM"
    RE.get_or_init(|| {
        Regex::new(r"^\d{1,2}:\d{2} [APMapm]{2}").expect("hardcoded pattern is valid")
    })
}

/// One extracted table line, prior to semantic interpretation.
///
/// Cells are `None` when the extractor found nothing under the column.
#[derive(Debug, Clone, Default)]
pub struct RawRow {
    pub date: Option<String>,
    pub description: Option<String>,
    pub money_in: Option<String>,
    pub money_out: Option<String>,
    pub interest_earned: Option<String>,
    pub closing_balance: Option<String>,
}

impl RawRow {
    /// Builds a row from the six cells in statement column order.
    pub fn from_cells(cells: [Option<String>; 6]) -> Self {
        let [date, description, money_in, money_out, interest_earned, closing_balance] = cells;
        RawRow {
            date,
            description,
            money_in,
            money_out,
            interest_earned,
            closing_balance,
        }
    }

    /// Classifies this row for the reconstruction state machine.
    ///
    /// The header check runs first; the date and time shapes are mutually
    /// exclusive, and both match on a prefix of the cell only.
    pub fn classify(&self) -> RowKind {
        let Some(date) = self.date.as_deref() else {
            return RowKind::Continuation;
        };

        if HEADER_LABELS.contains(&date) {
            RowKind::Header
        } else if time_pattern().is_match(date) {
            RowKind::TimeContinuation
        } else if date_pattern().is_match(date) {
            RowKind::TransactionStart
        } else {
            RowKind::Continuation
        }
    }
}

/// What a raw row means to the reconstruction pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    /// A repeated page header (date cell is a recognized column label).
    Header,

    /// Starts a new transaction (date cell like "9 Sep").
    TransactionStart,

    /// Carries the transaction time (date cell like "02:10 PM").
    TimeContinuation,

    /// Anything else; at most fills a blank description.
    Continuation,
}

/// One reconstructed transaction spanning one or more raw rows.
#[derive(Debug, Clone)]
pub struct LogicalRecord {
    /// 1-based input row where this record was opened, for error context.
    pub source_row: usize,

    pub date: Option<String>,
    pub description: Option<String>,
    pub money_in: Option<String>,
    pub money_out: Option<String>,
    pub interest_earned: Option<String>,
    pub closing_balance: Option<String>,
}

impl LogicalRecord {
    /// Opens a record by copying all six cells of a row.
    pub fn open(row: &RawRow, source_row: usize) -> Self {
        LogicalRecord {
            source_row,
            date: row.date.clone(),
            description: row.description.clone(),
            money_in: row.money_in.clone(),
            money_out: row.money_out.clone(),
            interest_earned: row.interest_earned.clone(),
            closing_balance: row.closing_balance.clone(),
        }
    }

    /// Appends a time token to the date, producing `"<date> <time>"`.
    pub fn merge_time(&mut self, time: &str) {
        let date = self.date.take().unwrap_or_default();
        self.date = Some(format!("{} {}", date, time));
    }

    /// Returns `true` while the description is empty after trimming.
    pub fn description_is_blank(&self) -> bool {
        self.description
            .as_deref()
            .map(|d| d.trim().is_empty())
            .unwrap_or(true)
    }

    /// Fills a blank description from a continuation row.
    pub fn fill_description(&mut self, text: &str) {
        self.description = Some(text.trim().to_string());
    }
}
