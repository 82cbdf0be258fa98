//! Candidate period resolution.
//!
//! Pure date arithmetic only; no network access happens here. The reference
//! date is an explicit parameter so the resolver stays deterministic and
//! testable.

use chrono::{Datelike, NaiveDate};

use crate::domain::{Half, PeriodCandidate};

pub const BASE_URL: &str = "https://www.sec.gov/files/data/fails-deliver-data";

/// Candidate periods to try for `today`, most-likely-current first.
///
/// Publication timing can lag by several weeks, so this returns the four
/// plausible half-month windows rather than a single best guess: the current
/// month (first half, then second), then the previous month (second half
/// before first). A December-to-January rollover decrements the year.
pub fn resolve_candidates(today: NaiveDate) -> Vec<PeriodCandidate> {
    let year = today.year();
    let month = today.month();
    let (prev_year, prev_month) = if month == 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    };

    vec![
        PeriodCandidate {
            year,
            month,
            half: Half::First,
        },
        PeriodCandidate {
            year,
            month,
            half: Half::Second,
        },
        PeriodCandidate {
            year: prev_year,
            month: prev_month,
            half: Half::Second,
        },
        PeriodCandidate {
            year: prev_year,
            month: prev_month,
            half: Half::First,
        },
    ]
}
