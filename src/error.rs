//! Error types for the statement exporter.

use thiserror::Error;

/// Result type alias for exporter operations
pub type Result<T> = std::result::Result<T, ExportError>;

/// Errors that can occur while converting a statement.
#[derive(Error, Debug)]
pub enum ExportError {
    /// Failed to read the input PDF or write the output CSV
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// PDF text extraction failed
    #[error("PDF extraction error: {0}")]
    Pdf(#[from] pdf_extract::OutputError),

    /// CSV serialization error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// No page of the PDF contained a statement table
    #[error("no statement table found in the PDF")]
    NoTables,

    /// A time continuation row appeared before any transaction row
    #[error("row {row}: time continuation with no transaction to attach to")]
    OrphanTimeRow { row: usize },

    /// A money cell did not parse as a decimal amount
    #[error("row {row}: invalid amount in '{column}': {value:?}")]
    InvalidAmount {
        row: usize,
        column: &'static str,
        value: String,
    },
}
