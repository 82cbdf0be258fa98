//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - candidate reporting periods (`PeriodCandidate`, `Half`)
//! - raw and normalized settlement-fail records (`RawRecord`, `FailRecord`)
//! - the resolved run configuration (`ScreenConfig`)

pub mod types;

pub use types::*;
