//! Error type of the checked entry points.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Both inputs are zero or NaN, or their squared magnitude is outside the
    /// normal floating-point range.
    DegenerateInput,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::DegenerateInput => write!(f, "degenerate input: no defined angle"),
        }
    }
}

impl core::error::Error for Error {}
