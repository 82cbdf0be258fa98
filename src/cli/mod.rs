//! Command-line parsing for the fails screener.
//!
//! The goal of this module is to keep **argument parsing** separate from the
//! pipeline code.

use chrono::NaiveDate;
use clap::Parser;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "ftd",
    version,
    about = "Top fails-to-deliver screener (SEC CNS data)"
)]
pub struct Cli {
    /// Number of top results to report (must be > 0).
    ///
    /// Parsed as a signed integer so that a zero or negative count produces
    /// the input-validation error rather than a parse failure.
    #[arg(allow_negative_numbers = true)]
    pub count: i64,

    /// Skip writing the CSV/XLSX export files.
    #[arg(long)]
    pub no_export: bool,

    /// Reference date for period resolution (YYYY-MM-DD; defaults to today).
    #[arg(long, value_name = "DATE")]
    pub as_of: Option<NaiveDate>,
}
