//! Planet position value objects and Ketu synthesis.

use jataka_ephem::BodyPosition;
use jataka_math::{deg_to_dms, normalize_360, sign_index};

use crate::graha::Graha;
use crate::rashi::ALL_RASHIS;

/// Resolved sidereal position of one graha.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanetPosition {
    /// Which graha this is.
    pub graha: Graha,
    /// Sidereal ecliptic longitude, degrees [0, 360).
    pub longitude_deg: f64,
    /// Ecliptic latitude, degrees.
    pub latitude_deg: f64,
    /// Geocentric distance, AU.
    pub distance_au: f64,
    /// Longitudinal speed, degrees per day.
    pub speed_lon: f64,
    /// Strictly `speed_lon < 0`; no other retrograde heuristic exists.
    pub retrograde: bool,
    /// 0-based rashi index, floor(longitude/30).
    pub rashi_index: u8,
}

impl PlanetPosition {
    /// Build from a gateway position.
    pub fn from_body_position(graha: Graha, raw: &BodyPosition) -> Self {
        let longitude_deg = normalize_360(raw.longitude_deg);
        Self {
            graha,
            longitude_deg,
            latitude_deg: raw.latitude_deg,
            distance_au: raw.distance_au,
            speed_lon: raw.speed_lon,
            retrograde: raw.speed_lon < 0.0,
            rashi_index: sign_index(longitude_deg),
        }
    }
}

impl std::fmt::Display for PlanetPosition {
    /// "Surya 16 deg 51' 10.8" Dhanu", with an R marker when retrograde.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let in_rashi = self.longitude_deg - self.rashi_index as f64 * 30.0;
        let dms = deg_to_dms(in_rashi);
        write!(
            f,
            "{} {}\u{b0}{:02}'{:04.1}\" {}{}",
            self.graha.name(),
            dms.degrees,
            dms.minutes,
            dms.seconds,
            ALL_RASHIS[self.rashi_index as usize].name(),
            if self.retrograde { " (R)" } else { "" }
        )
    }
}

/// Synthesize Ketu from a resolved Rahu position.
///
/// Ketu is the descending node: 180 deg opposite Rahu, latitude and
/// longitudinal speed negated, distance shared. It is never queried from
/// the ephemeris.
pub fn ketu_from_rahu(rahu: &PlanetPosition) -> PlanetPosition {
    let longitude_deg = normalize_360(rahu.longitude_deg + 180.0);
    PlanetPosition {
        graha: Graha::Ketu,
        longitude_deg,
        latitude_deg: -rahu.latitude_deg,
        distance_au: rahu.distance_au,
        speed_lon: -rahu.speed_lon,
        retrograde: -rahu.speed_lon < 0.0,
        rashi_index: sign_index(longitude_deg),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(lon: f64, speed: f64) -> BodyPosition {
        BodyPosition {
            longitude_deg: lon,
            latitude_deg: 1.5,
            distance_au: 0.0025,
            speed_lon: speed,
        }
    }

    #[test]
    fn direct_motion() {
        let p = PlanetPosition::from_body_position(Graha::Surya, &raw(256.9, 1.019));
        assert!(!p.retrograde);
        assert_eq!(p.rashi_index, 8);
    }

    #[test]
    fn retrograde_is_speed_sign_only() {
        let p = PlanetPosition::from_body_position(Graha::Guru, &raw(71.3, -0.083));
        assert!(p.retrograde);
        // Zero speed is direct, not retrograde.
        let p = PlanetPosition::from_body_position(Graha::Guru, &raw(71.3, 0.0));
        assert!(!p.retrograde);
    }

    #[test]
    fn longitude_normalized() {
        let p = PlanetPosition::from_body_position(Graha::Chandra, &raw(-20.0, 13.0));
        assert!((p.longitude_deg - 340.0).abs() < 1e-12);
        assert_eq!(p.rashi_index, 11);
    }

    #[test]
    fn ketu_opposes_rahu_exactly() {
        let rahu = PlanetPosition::from_body_position(Graha::Rahu, &raw(312.6, -0.053));
        let ketu = ketu_from_rahu(&rahu);
        assert_eq!(ketu.graha, Graha::Ketu);
        assert!((ketu.longitude_deg - normalize_360(rahu.longitude_deg + 180.0)).abs() < 1e-12);
        assert!((ketu.latitude_deg + rahu.latitude_deg).abs() < 1e-12);
        assert!((ketu.distance_au - rahu.distance_au).abs() < 1e-12);
        assert!((ketu.speed_lon + rahu.speed_lon).abs() < 1e-12);
    }

    #[test]
    fn ketu_wraps_through_zero() {
        let rahu = PlanetPosition::from_body_position(Graha::Rahu, &raw(200.0, -0.05));
        let ketu = ketu_from_rahu(&rahu);
        assert!((ketu.longitude_deg - 20.0).abs() < 1e-12);
        assert_eq!(ketu.rashi_index, 0);
    }

    #[test]
    fn display_renders_dms_in_rashi() {
        let p = PlanetPosition::from_body_position(Graha::Guru, &raw(71.3, -0.083));
        let s = p.to_string();
        assert!(s.starts_with("Guru 11"), "got: {s}");
        assert!(s.contains("Mithuna"));
        assert!(s.ends_with("(R)"));
    }

    #[test]
    fn ketu_motion_mirrors_rahu() {
        // Mean node regresses, so mean Ketu regresses too.
        let rahu = PlanetPosition::from_body_position(Graha::Rahu, &raw(312.6, -0.053));
        assert!(ketu_from_rahu(&rahu).retrograde);
        // A momentarily direct true node gives a retrograde-free Ketu.
        let rahu = PlanetPosition::from_body_position(Graha::Rahu, &raw(312.6, 0.02));
        assert!(!ketu_from_rahu(&rahu).retrograde);
    }
}
