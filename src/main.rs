//! GX Bank Statement Exporter CLI
//!
//! Reads `data/gxbank-statement.pdf` and writes a cleaned, timestamped CSV
//! under `output/`.
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` or `warn` to control logging verbosity

use chrono::Local;
use gxbank_exporter::{export, extract, normalize, reconstruct::Reconstructor, Result, RunPaths};

/// How many exported rows to echo after a successful run.
const PREVIEW_ROWS: usize = 5;

fn main() {
    env_logger::init();

    // Failures surface as a single printed line; the process still exits
    // normally.
    if let Err(e) = run() {
        println!("An error occurred: {}", e);
    }
}

fn run() -> Result<()> {
    let paths = RunPaths::resolve(Local::now().naive_local());

    let tables = extract::read_statement(&paths.input)?;

    let mut reconstructor = Reconstructor::new();
    for table in tables {
        for row in table.rows {
            reconstructor.push(row)?;
        }
    }

    let records = normalize::normalize(reconstructor.finish())?;
    export::export_to_path(&records, &paths.output)?;

    println!("Exported data to: {}", paths.output.display());
    let head = export::preview(&records, PREVIEW_ROWS);
    if !head.is_empty() {
        println!("{}", head);
    }

    Ok(())
}
