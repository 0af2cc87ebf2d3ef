//! Gateway error taxonomy.

use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::body::Body;

/// Which gateway operation failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatewayOp {
    /// A position query for a specific body.
    Position(Body),
    /// The house-cusp computation.
    Houses,
}

impl Display for GatewayOp {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Position(body) => write!(f, "position({})", body.name()),
            Self::Houses => write!(f, "houses"),
        }
    }
}

/// Errors from an ephemeris gateway implementation.
///
/// Both variants carry the failing operation so callers can report which
/// body or computation broke. Neither is ever masked with substitute
/// data: a gateway failure fails the whole chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum GatewayError {
    /// Ephemeris data missing or the date is outside its coverage.
    Unavailable { op: GatewayOp, detail: &'static str },
    /// Inputs produced degenerate geometry (e.g. polar latitudes for a
    /// time-based house system) or an out-of-range argument.
    Calculation { op: GatewayOp, detail: &'static str },
}

impl GatewayError {
    /// The operation that failed.
    pub fn op(&self) -> GatewayOp {
        match self {
            Self::Unavailable { op, .. } | Self::Calculation { op, .. } => *op,
        }
    }
}

impl Display for GatewayError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unavailable { op, detail } => {
                write!(f, "ephemeris unavailable in {op}: {detail}")
            }
            Self::Calculation { op, detail } => {
                write!(f, "ephemeris calculation failed in {op}: {detail}")
            }
        }
    }
}

impl Error for GatewayError {}
