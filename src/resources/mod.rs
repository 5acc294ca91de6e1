//! Lookup tables.
//!
//! Tables are computed once, on first access, and are read-only afterwards.

pub mod asin;
pub mod atan2;
