#![doc = include_str!("../README.md")]
#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod error;
pub mod resources;
pub mod utils;

pub use error::Error;
pub use utils::atan::{atan2_linear, atan2_lookup, fast_atan2, try_fast_atan2};
pub use utils::rsqrt::{fast_rsqrt, rsqrt};

/// Builds all shared lookup tables.
///
/// Tables are otherwise built lazily by the first call that needs them. Calling
/// this at startup keeps that cost out of time-critical code. Repeated calls
/// are cheap.
pub fn init() {
    resources::atan2::atan2_tables();
    resources::asin::asin_tables();
}
