//! The screening core.
//!
//! - numeric normalization and latest-date selection (`normalize`)
//! - single-stock vs fund-like classification (`classify`)
//! - ranking by derived FTD value (`rank`)

pub mod classify;
pub mod normalize;
pub mod rank;

pub use classify::*;
pub use normalize::*;
pub use rank::*;
