//! # GX Bank Statement Exporter
//!
//! Converts a GX Bank statement PDF into a cleaned CSV of transactions.
//!
//! ## Design Principles
//!
//! - **Explicit state machine**: row reconstruction carries one optional
//!   open record with three transitions (start, time-merge, description-fill)
//! - **Exact money arithmetic**: 2 decimal places via `rust_decimal`
//! - **Named cells**: the six-column extraction contract is a typed record,
//!   not positional strings
//! - **Fail once, at the top**: every pipeline error surfaces as a single
//!   printed line
//!
//! ## Example
//!
//! ```
//! use gxbank_exporter::{normalize, RawRow, Reconstructor};
//!
//! let rows = vec![
//!     RawRow::from_cells([
//!         Some("9 Sep".into()),
//!         Some("Grocery".into()),
//!         Some("50.00".into()),
//!         None,
//!         None,
//!         Some("950.00".into()),
//!     ]),
//!     RawRow::from_cells([Some("02:10 PM".into()), None, None, None, None, None]),
//! ];
//!
//! let mut reconstructor = Reconstructor::new();
//! for row in rows {
//!     reconstructor.push(row).unwrap();
//! }
//! let records = normalize::normalize(reconstructor.finish()).unwrap();
//!
//! assert_eq!(records[0].date, "9 Sep 02:10 PM");
//! assert_eq!(records[0].money_in.to_string(), "50.00");
//! ```

pub mod amount;
pub mod error;
pub mod export;
pub mod extract;
pub mod normalize;
pub mod paths;
pub mod reconstruct;
pub mod row;

pub use amount::Amount;
pub use error::{ExportError, Result};
pub use normalize::ExportRecord;
pub use paths::RunPaths;
pub use reconstruct::Reconstructor;
pub use row::{LogicalRecord, RawRow, RowKind};
