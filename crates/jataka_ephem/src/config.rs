//! Engine configuration: house system, ayanamsa, node variant, data path.
//!
//! Built once before the first chart computation and read-only after
//! that. This replaces mutable module-level ephemeris initialization with
//! an explicit value handed to the gateway's constructor.

use std::path::PathBuf;

/// House division system, identified by its conventional letter code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HouseSystem {
    /// Placidus ('P') — time-based semi-arc trisection.
    #[default]
    Placidus,
    /// Whole sign ('W') — each house is one full rashi.
    WholeSign,
    /// Equal ('E') — 30-degree houses from the ascendant.
    Equal,
    /// Koch ('K').
    Koch,
}

impl HouseSystem {
    /// Conventional single-letter code.
    pub const fn code(self) -> char {
        match self {
            Self::Placidus => 'P',
            Self::WholeSign => 'W',
            Self::Equal => 'E',
            Self::Koch => 'K',
        }
    }

    /// Parse from a single-letter code.
    pub fn from_code(code: char) -> Option<Self> {
        match code.to_ascii_uppercase() {
            'P' => Some(Self::Placidus),
            'W' => Some(Self::WholeSign),
            'E' => Some(Self::Equal),
            'K' => Some(Self::Koch),
            _ => None,
        }
    }
}

/// Ayanamsa (sidereal correction) variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Ayanamsa {
    #[default]
    Lahiri,
    Raman,
    KrishnamurtiKP,
}

impl Ayanamsa {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Lahiri => "Lahiri",
            Self::Raman => "Raman",
            Self::KrishnamurtiKP => "Krishnamurti-KP",
        }
    }
}

/// Which lunar node position stands in for Rahu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NodeKind {
    #[default]
    Mean,
    True,
}

/// Immutable engine configuration.
#[derive(Debug, Clone, Default)]
pub struct EphemerisConfig {
    /// House division system for cusp computation.
    pub house_system: HouseSystem,
    /// Sidereal correction variant the gateway must apply.
    pub ayanamsa: Ayanamsa,
    /// Node variant queried for Rahu.
    pub node: NodeKind,
    /// Directory of ephemeris data files, for gateway implementations
    /// that load them. `None` for table-driven gateways.
    pub data_path: Option<PathBuf>,
}
