//! End-to-end pipeline tests: page text through reconstruction,
//! normalization, and CSV export.

use gxbank_exporter::{export, extract, normalize, RawRow, Reconstructor};

/// Lays out six cells the way stream extraction sees a statement line.
fn line(cells: [&str; 6]) -> String {
    format!(
        "{:<11}{:<30}{:<16}{:<17}{:<23}{}",
        cells[0], cells[1], cells[2], cells[3], cells[4], cells[5]
    )
}

fn header_line() -> String {
    line([
        "Date",
        "Transaction description",
        "Money in (RM)",
        "Money out (RM)",
        "Interest earned (RM)",
        "Closing balance (RM)",
    ])
}

fn raw(cells: [&str; 6]) -> RawRow {
    RawRow::from_cells(cells.map(|c| {
        if c.is_empty() {
            None
        } else {
            Some(c.to_string())
        }
    }))
}

/// Runs raw rows through reconstruction and normalization, returning the
/// final CSV text.
fn export_rows(rows: Vec<RawRow>) -> String {
    let mut reconstructor = Reconstructor::new();
    for row in rows {
        reconstructor.push(row).unwrap();
    }
    let records = normalize::normalize(reconstructor.finish()).unwrap();

    let mut output = Vec::new();
    export::write_csv(&records, &mut output).unwrap();
    String::from_utf8(output).unwrap()
}

// ==================== FULL SCENARIO ====================

#[test]
fn test_statement_scenario_exports_two_rows() {
    let csv = export_rows(vec![
        raw([
            "Date",
            "Transaction description",
            "Money in (RM)",
            "Money out (RM)",
            "Interest earned (RM)",
            "Closing balance (RM)",
        ]),
        raw(["9 Sep", "Grocery", "50.00", "", "", "950.00"]),
        raw(["02:10 PM", "", "", "", "", ""]),
        raw(["10 Sep", "Salary", "2000.00", "", "10.00", "2960.00"]),
    ]);

    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(
        lines[0],
        "Date,Transaction description,Money in (RM),Money out (RM),Closing balance (RM)"
    );
    assert_eq!(lines[1], "9 Sep 02:10 PM,Grocery,50.00,,950.00");
    assert_eq!(lines[2], "10 Sep,Salary,2010.00,,2960.00");
}

#[test]
fn test_multi_page_statement_from_page_text() {
    let page_one = [
        "GX Bank Berhad".to_string(),
        header_line(),
        line(["9 Sep", "Grocery Store", "", "50.00", "", "950.00"]),
        line(["02:10 PM", "", "", "", "", ""]),
    ]
    .join("\n");
    let page_two = [
        "GX Bank Berhad".to_string(),
        header_line(),
        line(["10 Sep", "Salary", "2,000.00", "", "10.00", "2960.00"]),
        line(["09:00 AM", "", "", "", "", ""]),
    ]
    .join("\n");

    let tables = extract::page_tables(&[page_one, page_two]).unwrap();
    let rows: Vec<RawRow> = tables.into_iter().flat_map(|t| t.rows).collect();
    let csv = export_rows(rows);

    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[1], "9 Sep 02:10 PM,Grocery Store,0.00,50.00,950.00");
    assert_eq!(lines[2], "10 Sep 09:00 AM,Salary,2010.00,,2960.00");
}

// ==================== EXPORT SHAPE ====================

#[test]
fn test_every_exported_row_has_a_date_and_five_columns() {
    let csv = export_rows(vec![
        raw(["Date", "Transaction description", "", "", "", ""]),
        raw(["9 Sep", "", "", "12.00", "", "938.00"]),
        raw(["", "Late description", "", "", "", ""]),
        raw(["10 Sep", "Transfer", "1,000.00", "", "", "1938.00"]),
        raw(["", "", "", "", "", ""]),
    ]);

    for row in csv.lines().skip(1) {
        let cells: Vec<&str> = row.split(',').collect();
        assert_eq!(cells.len(), 5, "unexpected shape in: {row}");
        assert!(!cells[0].is_empty(), "missing date in: {row}");
    }
}

#[test]
fn test_no_surviving_rows_still_produces_header_only_csv() {
    let csv = export_rows(vec![raw([
        "Date",
        "Transaction description",
        "",
        "",
        "",
        "",
    ])]);

    assert_eq!(
        csv.trim_end(),
        "Date,Transaction description,Money in (RM),Money out (RM),Closing balance (RM)"
    );
}

// ==================== FAILURE PATHS ====================

#[test]
fn test_orphan_time_row_aborts_reconstruction() {
    let mut reconstructor = Reconstructor::new();
    let err = reconstructor
        .push(raw(["02:10 PM", "", "", "", "", ""]))
        .unwrap_err();

    assert!(err.to_string().contains("row 1"));
    assert!(err.to_string().contains("time continuation"));
}

#[test]
fn test_non_numeric_money_cell_aborts_normalization() {
    let mut reconstructor = Reconstructor::new();
    reconstructor
        .push(raw(["9 Sep", "Grocery", "RM50", "", "", "950.00"]))
        .unwrap();

    let err = normalize::normalize(reconstructor.finish()).unwrap_err();
    assert!(err.to_string().contains("Money in (RM)"));
    assert!(err.to_string().contains("RM50"));
}
