//! Numeric normalization and latest-date selection.
//!
//! Design goals:
//! - **Row-level tolerance**: a row with a bad number is dropped, not fatal
//! - **One required-field check**: missing fields surface here, not in parsing
//! - **Deterministic behavior**: output depends only on the input rows

use crate::domain::{FailRecord, RawRecord};
use crate::error::AppError;

/// Normalizer output: the surviving records plus ingest statistics.
#[derive(Debug, Clone)]
pub struct NormalizedData {
    /// Records on the latest settlement date, both numeric fields valid.
    pub records: Vec<FailRecord>,
    /// Maximum settlement date among rows that survived numeric coercion;
    /// `None` when no row survived.
    pub latest_date: Option<String>,
    /// Data rows in the decoded file.
    pub rows_read: usize,
    /// Rows remaining after coercion and the latest-date filter.
    pub rows_used: usize,
}

/// Coerce numeric fields, drop unusable rows, and keep only the latest
/// settlement date present.
///
/// Rows whose quantity or price is absent or non-numeric are dropped entirely,
/// never zero-filled. `ftd_value` is computed for survivors. The latest date
/// is the maximum over the *surviving* rows (the `YYYYMMDD` format makes the
/// string maximum correct), and the working set is then filtered to that date.
///
/// An empty input is fatal (exit 3). An empty *result* — every row dropped or
/// filtered — is a valid degenerate outcome, not an error.
pub fn normalize(rows: &[RawRecord]) -> Result<NormalizedData, AppError> {
    if rows.is_empty() {
        return Err(AppError::new(3, "Decoded fails file contained no data rows."));
    }

    let rows_read = rows.len();
    let mut survivors: Vec<FailRecord> = Vec::with_capacity(rows.len());
    for row in rows {
        let Some(quantity_fails) = parse_opt_f64(row.quantity_fails.as_deref()) else {
            continue;
        };
        let Some(price) = parse_opt_f64(row.price.as_deref()) else {
            continue;
        };

        survivors.push(FailRecord {
            settlement_date: row.settlement_date.clone().unwrap_or_default(),
            cusip: row.cusip.clone().unwrap_or_default(),
            symbol: row.symbol.clone().unwrap_or_default(),
            quantity_fails,
            company: row.company.clone().unwrap_or_default(),
            price,
            ftd_value: quantity_fails * price,
        });
    }

    let latest_date = survivors
        .iter()
        .map(|r| r.settlement_date.clone())
        .max();

    let records: Vec<FailRecord> = match &latest_date {
        Some(latest) => survivors
            .into_iter()
            .filter(|r| &r.settlement_date == latest)
            .collect(),
        None => Vec::new(),
    };
    let rows_used = records.len();

    Ok(NormalizedData {
        records,
        latest_date,
        rows_read,
        rows_used,
    })
}

fn parse_opt_f64(s: Option<&str>) -> Option<f64> {
    let v = s?.trim().parse::<f64>().ok()?;
    if v.is_finite() { Some(v) } else { None }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(date: &str, symbol: &str, qty: &str, company: &str, price: &str) -> RawRecord {
        RawRecord {
            settlement_date: Some(date.to_string()),
            cusip: Some("037833100".to_string()),
            symbol: Some(symbol.to_string()),
            quantity_fails: Some(qty.to_string()),
            company: Some(company.to_string()),
            price: Some(price.to_string()),
            extras: Vec::new(),
        }
    }

    #[test]
    fn computes_ftd_value_from_raw_numbers() {
        let rows = vec![raw("20240112", "AAPL", "1000", "APPLE INC", "2.50")];
        let data = normalize(&rows).unwrap();

        assert_eq!(data.records.len(), 1);
        assert!((data.records[0].ftd_value - 2500.0).abs() < 1e-9);
        assert_eq!(data.latest_date.as_deref(), Some("20240112"));
    }

    #[test]
    fn drops_rows_with_bad_numerics_without_failing() {
        let mut short = raw("20240112", "SHRT", "10", "SHORT ROW CO", "1.0");
        short.price = None;
        let rows = vec![
            raw("20240112", "AAPL", "1000", "APPLE INC", "2.50"),
            raw("20240112", "BADQ", "n/a", "BAD QUANTITY CO", "5.00"),
            raw("20240112", "BADP", "500", "BAD PRICE CO", "."),
            short,
        ];

        let data = normalize(&rows).unwrap();
        assert_eq!(data.rows_read, 4);
        assert_eq!(data.rows_used, 1);
        assert_eq!(data.records[0].symbol, "AAPL");
    }

    #[test]
    fn filters_to_latest_settlement_date_among_survivors() {
        let rows = vec![
            raw("20240111", "OLD1", "100", "OLDER DAY CO", "1.00"),
            raw("20240112", "NEW1", "200", "NEWER DAY CO", "1.00"),
            // The only row for the newest date fails coercion, so the latest
            // date is taken over survivors, not the unfiltered input.
            raw("20240113", "BAD1", "oops", "BROKEN ROW CO", "1.00"),
            raw("20240112", "NEW2", "300", "NEWER DAY TWO CO", "1.00"),
        ];

        let data = normalize(&rows).unwrap();
        assert_eq!(data.latest_date.as_deref(), Some("20240112"));
        let symbols: Vec<&str> = data.records.iter().map(|r| r.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["NEW1", "NEW2"]);
    }

    #[test]
    fn empty_input_is_fatal() {
        let err = normalize(&[]).unwrap_err();
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn all_rows_dropped_is_a_valid_empty_result() {
        let rows = vec![raw("20240112", "BAD", "x", "NO NUMBERS CO", "y")];
        let data = normalize(&rows).unwrap();

        assert!(data.records.is_empty());
        assert_eq!(data.latest_date, None);
        assert_eq!(data.rows_read, 1);
        assert_eq!(data.rows_used, 0);
    }
}
