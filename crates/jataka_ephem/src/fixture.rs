//! Deterministic table-driven gateway for tests.
//!
//! Positions and cusps come from a frozen table, loosely modeled on an
//! early-1990 epoch, and never depend on the query instant. Builder
//! methods override individual entries so a test can pin exactly the
//! geometry it needs, and failure injection lets error-propagation paths
//! be exercised without a broken data directory.

use jataka_math::normalize_360;

use crate::body::{ALL_QUERY_BODIES, Body};
use crate::config::HouseSystem;
use crate::error::GatewayError;
use crate::gateway::{BodyPosition, EphemerisGateway, HouseFrame};

/// Deterministic fixture gateway.
#[derive(Debug, Clone)]
pub struct FixtureGateway {
    positions: [BodyPosition; 9],
    ascendant_deg: f64,
    quadrant_cusps_deg: [f64; 12],
    fail_position: Option<(Body, GatewayError)>,
    fail_houses: Option<GatewayError>,
}

fn slot(body: Body) -> usize {
    ALL_QUERY_BODIES
        .iter()
        .position(|&b| b == body)
        .unwrap_or(0)
}

impl Default for FixtureGateway {
    fn default() -> Self {
        // Sidereal longitudes; Jupiter is the one retrograde body in the
        // default table so speed-sign handling is always exercised.
        let table = [
            (256.9, 0.0, 0.983, 1.019),    // Sun
            (309.5, -4.1, 0.0025, 13.176), // Moon
            (212.4, 1.2, 1.51, 0.631),     // Mars
            (250.2, -1.8, 1.43, 1.424),    // Mercury
            (71.3, 0.1, 4.23, -0.083),     // Jupiter
            (283.7, 1.5, 1.22, 1.231),     // Venus
            (261.8, 0.4, 10.05, 0.112),    // Saturn
            (312.6, 0.0, 0.0025, -0.053),  // MeanNode
            (311.9, 0.0, 0.0025, -0.061),  // TrueNode
        ];
        let positions = table.map(|(lon, lat, dist, speed)| BodyPosition {
            longitude_deg: lon,
            latitude_deg: lat,
            distance_au: dist,
            speed_lon: speed,
        });

        // Uneven cusps standing in for a quadrant system's output.
        let quadrant_cusps_deg = [
            5.5, 38.2, 67.9, 95.5, 122.8, 152.4, 185.5, 218.2, 247.9, 275.5, 302.8, 332.4,
        ];

        Self {
            positions,
            ascendant_deg: 5.5,
            quadrant_cusps_deg,
            fail_position: None,
            fail_houses: None,
        }
    }
}

impl FixtureGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace one body's full position entry.
    pub fn with_position(mut self, body: Body, position: BodyPosition) -> Self {
        self.positions[slot(body)] = position;
        self
    }

    /// Replace one body's longitude, keeping the rest of its entry.
    pub fn with_longitude(mut self, body: Body, longitude_deg: f64) -> Self {
        self.positions[slot(body)].longitude_deg = normalize_360(longitude_deg);
        self
    }

    /// Replace the ascendant (quadrant cusp 1 follows it).
    pub fn with_ascendant(mut self, ascendant_deg: f64) -> Self {
        self.ascendant_deg = normalize_360(ascendant_deg);
        self.quadrant_cusps_deg[0] = self.ascendant_deg;
        self
    }

    /// Replace the full quadrant cusp table.
    ///
    /// Tests use this to feed deliberately corrupt cusp geometry into the
    /// house assigner.
    pub fn with_quadrant_cusps(mut self, cusps_deg: [f64; 12]) -> Self {
        self.quadrant_cusps_deg = cusps_deg;
        self
    }

    /// Make position queries for `body` fail.
    pub fn failing_position(mut self, body: Body, error: GatewayError) -> Self {
        self.fail_position = Some((body, error));
        self
    }

    /// Make house queries fail.
    pub fn failing_houses(mut self, error: GatewayError) -> Self {
        self.fail_houses = Some(error);
        self
    }
}

impl EphemerisGateway for FixtureGateway {
    fn position(&self, _jd_ut: f64, body: Body) -> Result<BodyPosition, GatewayError> {
        if let Some((failing, error)) = self.fail_position {
            if failing == body {
                return Err(error);
            }
        }
        Ok(self.positions[slot(body)])
    }

    fn houses(
        &self,
        _jd_ut: f64,
        _latitude_deg: f64,
        _longitude_deg: f64,
        system: HouseSystem,
    ) -> Result<HouseFrame, GatewayError> {
        if let Some(error) = self.fail_houses {
            return Err(error);
        }

        let cusps_deg = match system {
            HouseSystem::WholeSign => {
                // Cusp 1 at the start of the rising sign.
                let first = (self.ascendant_deg / 30.0).floor() * 30.0;
                std::array::from_fn(|i| normalize_360(first + i as f64 * 30.0))
            }
            HouseSystem::Equal => {
                std::array::from_fn(|i| normalize_360(self.ascendant_deg + i as f64 * 30.0))
            }
            HouseSystem::Placidus | HouseSystem::Koch => self.quadrant_cusps_deg,
        };

        Ok(HouseFrame {
            ascendant_deg: self.ascendant_deg,
            cusps_deg,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GatewayOp;

    #[test]
    fn default_positions_are_stable() {
        let gw = FixtureGateway::new();
        let a = gw.position(2_447_893.0, Body::Moon).unwrap();
        let b = gw.position(2_451_545.0, Body::Moon).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn jupiter_default_is_retrograde() {
        let gw = FixtureGateway::new();
        let jup = gw.position(0.0, Body::Jupiter).unwrap();
        assert!(jup.speed_lon < 0.0);
    }

    #[test]
    fn longitude_override() {
        let gw = FixtureGateway::new().with_longitude(Body::Moon, 400.0);
        let moon = gw.position(0.0, Body::Moon).unwrap();
        assert!((moon.longitude_deg - 40.0).abs() < 1e-12);
    }

    #[test]
    fn whole_sign_cusps_follow_ascendant() {
        let gw = FixtureGateway::new().with_ascendant(95.0);
        let frame = gw.houses(0.0, 0.0, 0.0, HouseSystem::WholeSign).unwrap();
        assert!((frame.cusps_deg[0] - 90.0).abs() < 1e-12);
        assert!((frame.cusps_deg[11] - 60.0).abs() < 1e-12);
    }

    #[test]
    fn equal_cusps_start_at_ascendant() {
        let gw = FixtureGateway::new().with_ascendant(95.0);
        let frame = gw.houses(0.0, 0.0, 0.0, HouseSystem::Equal).unwrap();
        assert!((frame.cusps_deg[0] - 95.0).abs() < 1e-12);
        assert!((frame.cusps_deg[6] - 275.0).abs() < 1e-12);
    }

    #[test]
    fn injected_position_failure() {
        let err = GatewayError::Unavailable {
            op: GatewayOp::Position(Body::Saturn),
            detail: "no data files",
        };
        let gw = FixtureGateway::new().failing_position(Body::Saturn, err);
        assert_eq!(gw.position(0.0, Body::Saturn), Err(err));
        assert!(gw.position(0.0, Body::Sun).is_ok());
    }

    #[test]
    fn injected_houses_failure() {
        let err = GatewayError::Calculation {
            op: GatewayOp::Houses,
            detail: "degenerate latitude",
        };
        let gw = FixtureGateway::new().failing_houses(err);
        assert_eq!(
            gw.houses(0.0, 89.0, 0.0, HouseSystem::Placidus),
            Err(err)
        );
    }
}
