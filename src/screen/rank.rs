//! Ranking of fail records by derived value.

use crate::domain::FailRecord;
use crate::error::AppError;

/// Top-`n` records by `ftd_value` descending; stable for exact ties.
///
/// Operates on the raw numeric field — any string formatting happens later, in
/// the report layer. The CLI validates the requested count before the pipeline
/// runs, but the contract is enforced here too: `n == 0` is an error.
pub fn rank_by_value(records: &[FailRecord], n: usize) -> Result<Vec<FailRecord>, AppError> {
    if n == 0 {
        return Err(AppError::new(2, "Result count must be greater than 0."));
    }

    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| {
        b.ftd_value
            .partial_cmp(&a.ftd_value)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    sorted.truncate(n);
    Ok(sorted)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(symbol: &str, quantity: f64, price: f64) -> FailRecord {
        FailRecord {
            settlement_date: "20240112".to_string(),
            cusip: "000000000".to_string(),
            symbol: symbol.to_string(),
            quantity_fails: quantity,
            company: format!("{symbol} CO"),
            price,
            ftd_value: quantity * price,
        }
    }

    #[test]
    fn returns_top_n_in_strictly_descending_order() {
        let records = vec![
            record("A", 100.0, 1.0),
            record("B", 500.0, 1.0),
            record("C", 300.0, 1.0),
            record("D", 400.0, 1.0),
            record("E", 200.0, 1.0),
        ];

        let top = rank_by_value(&records, 3).unwrap();
        let symbols: Vec<&str> = top.iter().map(|r| r.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["B", "D", "C"]);
    }

    #[test]
    fn exact_ties_preserve_original_relative_order() {
        let records = vec![
            record("FIRST", 100.0, 2.0),
            record("SECOND", 200.0, 1.0),
            record("THIRD", 50.0, 4.0),
        ];

        let top = rank_by_value(&records, 3).unwrap();
        let symbols: Vec<&str> = top.iter().map(|r| r.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["FIRST", "SECOND", "THIRD"]);
    }

    #[test]
    fn truncates_to_available_records() {
        let records = vec![record("A", 1.0, 1.0)];
        let top = rank_by_value(&records, 10).unwrap();
        assert_eq!(top.len(), 1);
    }

    #[test]
    fn zero_count_is_an_error() {
        let err = rank_by_value(&[], 0).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }
}
