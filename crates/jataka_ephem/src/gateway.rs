//! The ephemeris gateway trait and its wire types.

use crate::body::Body;
use crate::config::HouseSystem;
use crate::error::GatewayError;

/// Sidereal position of one body at one instant.
///
/// The gateway applies the configured ayanamsa before returning, so
/// `longitude_deg` is already sidereal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyPosition {
    /// Sidereal ecliptic longitude, degrees [0, 360).
    pub longitude_deg: f64,
    /// Ecliptic latitude, degrees.
    pub latitude_deg: f64,
    /// Geocentric distance, AU.
    pub distance_au: f64,
    /// Longitudinal speed, degrees per day. Negative means retrograde.
    pub speed_lon: f64,
}

/// Ascendant and the 12 house cusps for one instant and place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HouseFrame {
    /// Sidereal longitude of the ascendant, degrees [0, 360).
    pub ascendant_deg: f64,
    /// Sidereal cusp longitudes, `cusps_deg[0]` = house 1.
    pub cusps_deg: [f64; 12],
}

/// The external astronomical collaborator.
///
/// Implementations are synchronous, in-process lookups against data
/// loaded before first use; they perform no mutation afterwards, so a
/// single gateway may serve concurrent chart computations (`Send + Sync`
/// is part of the contract).
pub trait EphemerisGateway: Send + Sync {
    /// Sidereal position of `body` at the given UT Julian Day.
    fn position(&self, jd_ut: f64, body: Body) -> Result<BodyPosition, GatewayError>;

    /// Ascendant and house cusps for the given instant, place, and
    /// house system.
    fn houses(
        &self,
        jd_ut: f64,
        latitude_deg: f64,
        longitude_deg: f64,
        system: HouseSystem,
    ) -> Result<HouseFrame, GatewayError>;
}
