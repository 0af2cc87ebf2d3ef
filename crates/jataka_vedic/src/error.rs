//! Error type for Vedic derivations.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from pure Vedic calculations.
///
/// These indicate caller bugs (out-of-range indices), not astronomical
/// conditions; nothing here is recovered silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum VedicError {
    /// A nakshatra index outside [0, 26] reached the dasha engine.
    /// Longitude normalization upstream makes this unreachable from
    /// chart assembly; hitting it means a bug, not bad birth data.
    UnknownNakshatra(u8),
    /// A dasha level outside the supported depth was requested.
    InvalidDashaLevel(u8),
}

impl Display for VedicError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownNakshatra(idx) => write!(f, "unknown nakshatra index {idx}"),
            Self::InvalidDashaLevel(level) => write!(f, "invalid dasha level {level}"),
        }
    }
}

impl Error for VedicError {}
