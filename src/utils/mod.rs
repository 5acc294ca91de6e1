//! Fast approximations of transcendental functions.

pub mod atan;
pub mod bits;
pub mod rsqrt;
