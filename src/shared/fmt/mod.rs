//! Human-readable number formatting for fill estimates.

pub mod decimal;
pub mod num;
