//! Error type for civil time validation.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from birth input validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum TimeError {
    /// Calendar date component out of range (month, day, leap rules).
    InvalidDate(&'static str),
    /// Clock time component out of range.
    InvalidTime(&'static str),
    /// Latitude, longitude, or timezone offset out of range.
    InvalidLocation(&'static str),
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate(msg) => write!(f, "invalid date: {msg}"),
            Self::InvalidTime(msg) => write!(f, "invalid time: {msg}"),
            Self::InvalidLocation(msg) => write!(f, "invalid location: {msg}"),
        }
    }
}

impl Error for TimeError {}
