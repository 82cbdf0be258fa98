//! Shared screening pipeline used by the CLI front-end and tests.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! resolve candidates -> download -> parse -> normalize -> classify -> rank
//!
//! The front-end then focuses on presentation (printing and exports).

use crate::data::period::resolve_candidates;
use crate::data::sec::SecClient;
use crate::domain::{FailRecord, ScreenConfig};
use crate::error::AppError;
use crate::screen::classify::is_single_stock;
use crate::screen::normalize::normalize;
use crate::screen::rank::rank_by_value;

/// All computed outputs of a single screening run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    /// URL the payload was downloaded from.
    pub url: String,
    /// Latest settlement date in the file; `None` when nothing survived
    /// numeric coercion.
    pub latest_date: Option<String>,
    /// Data rows in the decoded file.
    pub rows_read: usize,
    /// Rows on the latest settlement date, before classification.
    pub rows_used: usize,
    /// Top records, ranked by `ftd_value` descending.
    pub top: Vec<FailRecord>,
}

/// Execute the full pipeline, downloading the current fails file.
pub fn run_screen(config: &ScreenConfig) -> Result<RunOutput, AppError> {
    // Enforced again here so a bad count can never reach the network.
    if config.count == 0 {
        return Err(AppError::new(2, "Result count must be greater than 0."));
    }

    let candidates = resolve_candidates(config.as_of);
    let client = SecClient::from_env()?;
    let (payload, url) = client.download_first_available(&candidates)?;

    run_screen_with_payload(config, &payload, url)
}

/// Execute the pipeline on an already-downloaded payload.
///
/// Useful for tests and for re-screening a saved payload without re-fetching.
pub fn run_screen_with_payload(
    config: &ScreenConfig,
    payload: &[u8],
    url: String,
) -> Result<RunOutput, AppError> {
    let rows = crate::io::archive::parse_archive(payload)?;
    let normalized = normalize(&rows)?;

    let kept: Vec<FailRecord> = normalized
        .records
        .into_iter()
        .filter(|r| is_single_stock(Some(&r.symbol), Some(&r.company)))
        .collect();

    let top = rank_by_value(&kept, config.count)?;

    Ok(RunOutput {
        url,
        latest_date: normalized.latest_date,
        rows_read: normalized.rows_read,
        rows_used: normalized.rows_used,
        top,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::io::{Cursor, Write};
    use zip::write::SimpleFileOptions;

    fn config(count: usize) -> ScreenConfig {
        ScreenConfig {
            count,
            as_of: NaiveDate::from_ymd_opt(2024, 1, 20).unwrap(),
            export: false,
        }
    }

    fn payload() -> Vec<u8> {
        let text = "\
SETTLEMENT DATE|CUSIP|SYMBOL|QUANTITY (FAILS)|DESCRIPTION|PRICE
20240112|037833100|AAPL|1000|APPLE INC|2.50
20240112|78462F103|SPY|2000|SPDR S&P 500 ETF TRUST|10.00
20240112|12345X999|XBF|9999|XYZ MUNICIPAL BOND FUND|50.00
20240111|594918104|MSFT|500|MICROSOFT CORP|100.00
20240112|11111Y111|BAD|n/a|BADCO INC|5.00
";
        let mut cursor = Cursor::new(Vec::new());
        {
            let mut writer = zip::ZipWriter::new(&mut cursor);
            writer
                .start_file("cnsfails202401a.txt", SimpleFileOptions::default())
                .unwrap();
            writer.write_all(text.as_bytes()).unwrap();
            writer.finish().unwrap();
        }
        cursor.into_inner()
    }

    #[test]
    fn end_to_end_screening_matches_hand_computation() {
        let run =
            run_screen_with_payload(&config(2), &payload(), "file://test".to_string()).unwrap();

        assert_eq!(run.latest_date.as_deref(), Some("20240112"));
        // 5 data rows read; the bad-quantity row is dropped and MSFT is on an
        // older settlement date, leaving AAPL, SPY, and the bond fund.
        assert_eq!(run.rows_read, 5);
        assert_eq!(run.rows_used, 3);

        // The bond fund is classified out; SPY survives via the whitelist and
        // outranks AAPL (20_000 vs 2_500).
        let symbols: Vec<&str> = run.top.iter().map(|r| r.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["SPY", "AAPL"]);
        assert!((run.top[0].ftd_value - 20_000.0).abs() < 1e-9);
        assert!((run.top[1].ftd_value - 2_500.0).abs() < 1e-9);
    }

    #[test]
    fn zero_count_fails_before_any_fetch() {
        let err = run_screen(&config(0)).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn header_only_payload_is_empty_payload_error() {
        let mut cursor = Cursor::new(Vec::new());
        {
            let mut writer = zip::ZipWriter::new(&mut cursor);
            writer
                .start_file("empty.txt", SimpleFileOptions::default())
                .unwrap();
            writer
                .write_all(b"SETTLEMENT DATE|CUSIP|SYMBOL|QUANTITY (FAILS)|DESCRIPTION|PRICE\n")
                .unwrap();
            writer.finish().unwrap();
        }

        let err = run_screen_with_payload(&config(5), &cursor.into_inner(), String::new())
            .unwrap_err();
        assert_eq!(err.exit_code(), 3);
    }
}
