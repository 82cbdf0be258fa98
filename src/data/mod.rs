//! Remote data access.
//!
//! - candidate period resolution (`period`)
//! - SEC flat-file download with fallback (`sec`)

pub mod period;
pub mod sec;

pub use period::*;
pub use sec::*;
