//! Stream-mode table extraction from the statement PDF.
//!
//! `pdf_extract` yields plain text per page. The statement repeats its
//! column header on every page; the header labels' positions define the
//! column cut points, and every line from the header down is split at those
//! points into six cells. Letterhead above the header is not table content.

use crate::error::{ExportError, Result};
use crate::row::{RawRow, HEADER_LABELS};
use log::{debug, warn};
use std::fs;
use std::path::Path;

/// Column labels after the date column, in statement order.
const BODY_LABELS: [&str; 5] = [
    "Transaction description",
    "Money in (RM)",
    "Money out (RM)",
    "Interest earned (RM)",
    "Closing balance (RM)",
];

/// The extracted table of one statement page.
#[derive(Debug)]
pub struct PageTable {
    /// 1-based page number.
    pub page: usize,

    /// Six-cell rows in page order, header line included.
    pub rows: Vec<RawRow>,
}

/// Reads the statement PDF and extracts one table per page.
pub fn read_statement(path: &Path) -> Result<Vec<PageTable>> {
    let bytes = fs::read(path)?;
    let pages = pdf_extract::extract_text_from_mem_by_pages(&bytes)?;
    page_tables(&pages)
}

/// Extracts tables from per-page text.
///
/// Pages without a recognizable header are skipped; a statement with no
/// table pages at all is an extraction failure.
pub fn page_tables(pages: &[String]) -> Result<Vec<PageTable>> {
    let mut tables = Vec::new();

    for (index, text) in pages.iter().enumerate() {
        let page = index + 1;
        match page_table(text) {
            Some(rows) => {
                debug!("page {}: extracted {} table rows", page, rows.len());
                tables.push(PageTable { page, rows });
            }
            None => warn!("page {}: no statement table header found, skipping", page),
        }
    }

    if tables.is_empty() {
        return Err(ExportError::NoTables);
    }
    Ok(tables)
}

fn page_table(text: &str) -> Option<Vec<RawRow>> {
    let lines: Vec<&str> = text.lines().collect();
    let (header_index, cuts) = lines
        .iter()
        .enumerate()
        .find_map(|(index, line)| header_cuts(line).map(|cuts| (index, cuts)))?;

    let rows = lines[header_index..]
        .iter()
        .filter(|line| !line.trim().is_empty())
        .map(|line| split_row(line, &cuts))
        .collect();
    Some(rows)
}

/// Locates all six column labels in a candidate header line and returns the
/// char offsets where each column starts. The date column always starts at
/// the left edge.
fn header_cuts(line: &str) -> Option<[usize; 6]> {
    let date_at = HEADER_LABELS
        .iter()
        .filter_map(|label| line.find(label))
        .min()?;

    let mut cuts = [0usize; 6];
    let mut previous = date_at;
    for (i, label) in BODY_LABELS.iter().enumerate() {
        let at = line.find(label)?;
        if at <= previous {
            return None;
        }
        cuts[i + 1] = char_offset(line, at);
        previous = at;
    }
    Some(cuts)
}

/// Converts a byte offset into a char offset, so that multibyte text in a
/// description never splits a cell mid-character.
fn char_offset(line: &str, byte_offset: usize) -> usize {
    line[..byte_offset].chars().count()
}

fn split_row(line: &str, cuts: &[usize; 6]) -> RawRow {
    let chars: Vec<char> = line.chars().collect();
    let mut cells: [Option<String>; 6] = Default::default();

    for (i, cell) in cells.iter_mut().enumerate() {
        let start = cuts[i].min(chars.len());
        let end = cuts
            .get(i + 1)
            .copied()
            .unwrap_or(chars.len())
            .min(chars.len());
        let text: String = chars[start..end].iter().collect();
        let trimmed = text.trim();
        if !trimmed.is_empty() {
            *cell = Some(trimmed.to_string());
        }
    }

    RawRow::from_cells(cells)
}
