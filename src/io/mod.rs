//! Input/output helpers.
//!
//! - zip payload decoding into raw records (`archive`)
//! - ranked-result exports (CSV/XLSX) (`export`)

pub mod archive;
pub mod export;

pub use archive::*;
pub use export::*;
