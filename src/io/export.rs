//! Export the ranked records to CSV and XLSX.
//!
//! Both files carry the same columns in the same order and are meant to be
//! easy to consume in spreadsheets or downstream scripts. Quantity and value
//! are exported in their display representation (grouping separators,
//! currency), matching the terminal report.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use rust_xlsxwriter::{Workbook, XlsxError};

use crate::domain::FailRecord;
use crate::error::AppError;
use crate::report::{fmt_currency, fmt_thousands};

const COLUMNS: [&str; 7] = [
    "SettlementDate",
    "Symbol",
    "Company",
    "CUSIP",
    "Price",
    "QuantityFails",
    "FTD_Value",
];

/// File stem shared by the CSV and XLSX exports, e.g. `FTD_Top200_20240112`.
pub fn export_stem(count: usize, latest_date: &str) -> String {
    format!("FTD_Top{count}_{latest_date}")
}

/// Write the ranked records to a CSV file.
pub fn write_top_csv(path: &Path, records: &[FailRecord]) -> Result<(), AppError> {
    let mut file = File::create(path).map_err(|e| {
        AppError::new(
            2,
            format!("Failed to create export CSV '{}': {e}", path.display()),
        )
    })?;

    writeln!(file, "{}", COLUMNS.join(","))
        .map_err(|e| AppError::new(2, format!("Failed to write export CSV header: {e}")))?;

    for r in records {
        writeln!(
            file,
            "{},{},{},{},{:.2},{},{}",
            csv_field(&r.settlement_date),
            csv_field(&r.symbol),
            csv_field(&r.company),
            csv_field(&r.cusip),
            r.price,
            csv_field(&fmt_thousands(r.quantity_fails as i64)),
            csv_field(&fmt_currency(r.ftd_value)),
        )
        .map_err(|e| AppError::new(2, format!("Failed to write export CSV row: {e}")))?;
    }

    Ok(())
}

/// Write the ranked records to an XLSX workbook.
pub fn write_top_xlsx(path: &Path, records: &[FailRecord]) -> Result<(), AppError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (col, name) in COLUMNS.iter().enumerate() {
        worksheet
            .write_string(0, col as u16, *name)
            .map_err(xlsx_err)?;
    }

    for (idx, r) in records.iter().enumerate() {
        let row = (idx + 1) as u32;
        worksheet
            .write_string(row, 0, &r.settlement_date)
            .map_err(xlsx_err)?;
        worksheet.write_string(row, 1, &r.symbol).map_err(xlsx_err)?;
        worksheet.write_string(row, 2, &r.company).map_err(xlsx_err)?;
        worksheet.write_string(row, 3, &r.cusip).map_err(xlsx_err)?;
        worksheet.write_number(row, 4, r.price).map_err(xlsx_err)?;
        worksheet
            .write_string(row, 5, fmt_thousands(r.quantity_fails as i64))
            .map_err(xlsx_err)?;
        worksheet
            .write_string(row, 6, fmt_currency(r.ftd_value))
            .map_err(xlsx_err)?;
    }

    workbook.save(path).map_err(xlsx_err)?;
    Ok(())
}

fn xlsx_err(e: XlsxError) -> AppError {
    AppError::new(2, format!("Failed to write export XLSX: {e}"))
}

/// Quote a CSV field when it contains a delimiter, quote, or newline.
fn csv_field(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
