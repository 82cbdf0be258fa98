//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can
//! be:
//!
//! - used in-memory during screening
//! - exported to CSV/XLSX
//! - inspected in tests without setup ceremony

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Which half of a month a published fails file covers.
///
/// The SEC publishes CNS fails-to-deliver data in half-month chunks; the first
/// half maps to an `a` suffix in the file name, the second half to `b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Half {
    First,
    Second,
}

impl Half {
    pub fn url_code(self) -> char {
        match self {
            Half::First => 'a',
            Half::Second => 'b',
        }
    }
}

/// A half-month reporting window that may hold the latest published file.
///
/// Constructed by the resolver; maps deterministically onto a remote resource
/// identifier via [`PeriodCandidate::url`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PeriodCandidate {
    pub year: i32,
    /// 1-12.
    pub month: u32,
    pub half: Half,
}

impl PeriodCandidate {
    /// File stem of the published archive, e.g. `cnsfails202406a`.
    pub fn file_stem(&self) -> String {
        format!(
            "cnsfails{}{:02}{}",
            self.year,
            self.month,
            self.half.url_code()
        )
    }

    pub fn url(&self, base: &str) -> String {
        format!("{base}/{}.zip", self.file_stem())
    }
}

/// One tokenized line of the decoded payload.
///
/// The first six tokens map positionally onto the named fields; a short line
/// keeps only the available prefix (`None` for the rest). Tokens beyond six
/// are preserved as unnamed extras but never used downstream. Whether the
/// named fields actually hold usable values is decided once, in the
/// normalizer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRecord {
    pub settlement_date: Option<String>,
    pub cusip: Option<String>,
    pub symbol: Option<String>,
    pub quantity_fails: Option<String>,
    pub company: Option<String>,
    pub price: Option<String>,
    pub extras: Vec<String>,
}

/// A normalized settlement-fail record.
///
/// Exists only when both `quantity_fails` and `price` parsed to valid numbers;
/// rows failing that check are dropped before classification or ranking.
/// Read-only after normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FailRecord {
    /// `YYYYMMDD` as published; kept as a string, never reparsed into a
    /// calendar type.
    pub settlement_date: String,
    pub cusip: String,
    pub symbol: String,
    pub quantity_fails: f64,
    pub company: String,
    pub price: f64,
    /// Always recomputed as `quantity_fails * price`, never parsed from input.
    pub ftd_value: f64,
}

/// Resolved configuration for a single screening run.
#[derive(Debug, Clone)]
pub struct ScreenConfig {
    /// How many top records to report. Must be > 0; validated before any
    /// network access.
    pub count: usize,
    /// Reference date for period resolution. Read from the wall clock exactly
    /// once, in the app layer, unless overridden with `--as-of`.
    pub as_of: NaiveDate,
    /// Whether to write the CSV/XLSX export files.
    pub export: bool,
}
