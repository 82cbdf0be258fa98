//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - validates the requested count before any network access
//! - runs the screening pipeline
//! - prints the report
//! - writes optional exports

use std::path::PathBuf;

use clap::Parser;

use crate::cli::Cli;
use crate::domain::ScreenConfig;
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `ftd` binary.
pub fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = screen_config_from_args(&cli)?;

    let run = pipeline::run_screen(&config)?;

    println!("Downloaded {}", run.url);
    println!(
        "Rows: {} read, {} on latest settlement date",
        run.rows_read, run.rows_used
    );
    println!();
    println!(
        "{}",
        crate::report::format_top_report(&run.top, config.count, run.latest_date.as_deref())
    );

    if config.export {
        if let Some(date) = run.latest_date.as_deref() {
            let stem = crate::io::export::export_stem(config.count, date);
            let csv_path = PathBuf::from(format!("{stem}.csv"));
            let xlsx_path = PathBuf::from(format!("{stem}.xlsx"));
            crate::io::export::write_top_csv(&csv_path, &run.top)?;
            crate::io::export::write_top_xlsx(&xlsx_path, &run.top)?;
            println!("Exported: {} and {}", csv_path.display(), xlsx_path.display());
        }
    }

    Ok(())
}

/// Validate CLI input and resolve the run configuration.
///
/// The count check happens here, before any network access, so `ftd 0` and
/// `ftd -1` fail immediately with the input-validation exit code. The wall
/// clock is read exactly once, and only when `--as-of` is absent.
pub fn screen_config_from_args(cli: &Cli) -> Result<ScreenConfig, AppError> {
    if cli.count <= 0 {
        return Err(AppError::new(2, "Result count must be greater than 0."));
    }

    Ok(ScreenConfig {
        count: cli.count as usize,
        as_of: cli
            .as_of
            .unwrap_or_else(|| chrono::Local::now().date_naive()),
        export: !cli.no_export,
    })
}
