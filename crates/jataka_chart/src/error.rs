//! Chart assembly errors and warnings.

use std::error::Error;
use std::fmt::{Display, Formatter};

use jataka_ephem::GatewayError;
use jataka_time::TimeError;
use jataka_vedic::{Graha, VedicError};

/// The assembly stage a failure originated in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartStage {
    /// Parsing/validating the external birth record.
    BirthInput,
    /// Resolving planet positions through the gateway.
    Positions,
    /// House cusp computation and assignment.
    Houses,
    /// Moon nakshatra location.
    Nakshatra,
    /// Tithi computation.
    Tithi,
    /// Vimshottari timeline generation.
    Dasha,
}

impl ChartStage {
    pub const fn name(self) -> &'static str {
        match self {
            Self::BirthInput => "birth-input",
            Self::Positions => "positions",
            Self::Houses => "houses",
            Self::Nakshatra => "nakshatra",
            Self::Tithi => "tithi",
            Self::Dasha => "dasha",
        }
    }
}

/// What went wrong inside a stage.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ChartErrorKind {
    /// Malformed birth record field (bad date/time string shape, or an
    /// unresolvable timezone spec).
    Parse(&'static str),
    /// Birth components out of calendar/coordinate range.
    Input(TimeError),
    /// The ephemeris gateway failed; carries the failing body/operation.
    Gateway(GatewayError),
    /// A Vedic derivation rejected its input (bug-class).
    Vedic(VedicError),
}

/// A chart assembly failure: the originating error plus the stage it
/// happened in. No partial chart accompanies this.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartError {
    stage: ChartStage,
    kind: ChartErrorKind,
}

impl ChartError {
    pub fn new(stage: ChartStage, kind: ChartErrorKind) -> Self {
        Self { stage, kind }
    }

    /// The stage that failed.
    pub fn stage(&self) -> ChartStage {
        self.stage
    }

    /// The originating error.
    pub fn kind(&self) -> &ChartErrorKind {
        &self.kind
    }
}

impl Display for ChartError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "chart computation failed at {}: ", self.stage.name())?;
        match &self.kind {
            ChartErrorKind::Parse(msg) => write!(f, "{msg}"),
            ChartErrorKind::Input(e) => write!(f, "{e}"),
            ChartErrorKind::Gateway(e) => write!(f, "{e}"),
            ChartErrorKind::Vedic(e) => write!(f, "{e}"),
        }
    }
}

impl Error for ChartError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.kind {
            ChartErrorKind::Parse(_) => None,
            ChartErrorKind::Input(e) => Some(e),
            ChartErrorKind::Gateway(e) => Some(e),
            ChartErrorKind::Vedic(e) => Some(e),
        }
    }
}

/// Non-fatal conditions observed during assembly.
///
/// Warnings ride inside the chart result (and its JSON form); the
/// computation still succeeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ChartWarning {
    /// No cusp interval claimed this graha's longitude; the defined
    /// house-1 fallback was applied.
    AmbiguousHouse(Graha),
    /// Same condition for the ascendant.
    AmbiguousAscendantHouse,
}

impl Display for ChartWarning {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AmbiguousHouse(graha) => {
                write!(
                    f,
                    "ambiguous house assignment for {}; defaulted to house 1",
                    graha.english_name()
                )
            }
            Self::AmbiguousAscendantHouse => {
                write!(f, "ambiguous house assignment for ascendant; defaulted to house 1")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jataka_ephem::{Body, GatewayOp};

    #[test]
    fn display_names_stage() {
        let e = ChartError::new(
            ChartStage::Positions,
            ChartErrorKind::Gateway(GatewayError::Unavailable {
                op: GatewayOp::Position(Body::Moon),
                detail: "no data files",
            }),
        );
        let msg = e.to_string();
        assert!(msg.contains("positions"), "got: {msg}");
        assert!(msg.contains("Moon"), "got: {msg}");
    }

    #[test]
    fn source_chains_to_origin() {
        let e = ChartError::new(
            ChartStage::BirthInput,
            ChartErrorKind::Input(TimeError::InvalidDate("month must be 1-12")),
        );
        assert!(e.source().is_some());
        assert_eq!(e.stage(), ChartStage::BirthInput);
    }

    #[test]
    fn warning_display() {
        let w = ChartWarning::AmbiguousHouse(Graha::Shani);
        assert!(w.to_string().contains("Saturn"));
    }
}
