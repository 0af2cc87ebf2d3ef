//! Bhava (house) cusps and planet-to-house assignment.
//!
//! House N spans the forward circular interval from cusp N to cusp N+1
//! (wrapping from cusp 12 back to cusp 1). Cusps are not required to be
//! 30 deg apart; quadrant systems produce uneven spans.

use jataka_ephem::HouseFrame;
use jataka_math::{in_forward_interval, normalize_360, sign_index};

/// One house cusp.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HouseCusp {
    /// House number, 1-12.
    pub number: u8,
    /// Sidereal cusp longitude, degrees [0, 360).
    pub cusp_deg: f64,
    /// 0-based rashi index of the cusp.
    pub rashi_index: u8,
}

/// The ascendant (lagna).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ascendant {
    /// Sidereal longitude, degrees [0, 360).
    pub longitude_deg: f64,
    /// 0-based rashi index.
    pub rashi_index: u8,
}

/// Result of assigning a longitude to a house.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HousePlacement {
    /// House number, 1-12.
    pub house: u8,
    /// True when no interval claimed the longitude and the defined
    /// house-1 fallback was used. Only possible with corrupt cusp data;
    /// callers must surface it, never swallow it.
    pub ambiguous: bool,
}

/// Build the cusp table and ascendant from a gateway house frame.
pub fn house_cusps_from_frame(frame: &HouseFrame) -> (Ascendant, [HouseCusp; 12]) {
    let ascendant = Ascendant {
        longitude_deg: normalize_360(frame.ascendant_deg),
        rashi_index: sign_index(frame.ascendant_deg),
    };
    let cusps = std::array::from_fn(|i| {
        let cusp_deg = normalize_360(frame.cusps_deg[i]);
        HouseCusp {
            number: i as u8 + 1,
            cusp_deg,
            rashi_index: sign_index(cusp_deg),
        }
    });
    (ascendant, cusps)
}

/// Assign a longitude to exactly one house.
///
/// House `i` claims the longitude when it lies in the forward interval
/// from cusp `i` to cusp `i+1` (mod 12), including the 0-deg wrap case.
/// With a well-formed cusp table the 12 intervals partition the circle;
/// if none claims the longitude, house 1 is the explicit fallback and
/// the placement is marked ambiguous.
pub fn assign_house(longitude_deg: f64, cusps: &[HouseCusp; 12]) -> HousePlacement {
    for i in 0..12 {
        let start = cusps[i].cusp_deg;
        let end = cusps[(i + 1) % 12].cusp_deg;
        if in_forward_interval(longitude_deg, start, end) {
            return HousePlacement {
                house: i as u8 + 1,
                ambiguous: false,
            };
        }
    }
    HousePlacement {
        house: 1,
        ambiguous: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(asc: f64, cusps: [f64; 12]) -> HouseFrame {
        HouseFrame {
            ascendant_deg: asc,
            cusps_deg: cusps,
        }
    }

    fn equal_cusps(start: f64) -> [f64; 12] {
        std::array::from_fn(|i| normalize_360(start + i as f64 * 30.0))
    }

    #[test]
    fn cusp_numbers_and_signs() {
        let (asc, cusps) = house_cusps_from_frame(&frame(95.0, equal_cusps(95.0)));
        assert!((asc.longitude_deg - 95.0).abs() < 1e-12);
        assert_eq!(asc.rashi_index, 3);
        assert_eq!(cusps[0].number, 1);
        assert_eq!(cusps[11].number, 12);
        assert_eq!(cusps[11].rashi_index, sign_index(95.0 + 330.0));
    }

    #[test]
    fn normal_interval_assignment() {
        let (_, cusps) = house_cusps_from_frame(&frame(10.0, equal_cusps(10.0)));
        assert_eq!(assign_house(15.0, &cusps), HousePlacement { house: 1, ambiguous: false });
        assert_eq!(assign_house(45.0, &cusps).house, 2);
        assert_eq!(assign_house(5.0, &cusps).house, 12);
    }

    #[test]
    fn cusp_longitude_belongs_to_its_house() {
        let (_, cusps) = house_cusps_from_frame(&frame(10.0, equal_cusps(10.0)));
        // Exactly on cusp 2: house 2, not house 1.
        assert_eq!(assign_house(40.0, &cusps).house, 2);
    }

    #[test]
    fn wrap_through_zero() {
        // Cusp 12 at 350, cusp 1 at 20: house 12 spans [350, 20).
        let cusps_deg: [f64; 12] = std::array::from_fn(|i| normalize_360(20.0 + i as f64 * 30.0));
        let (_, cusps) = house_cusps_from_frame(&frame(20.0, cusps_deg));
        assert!((cusps[11].cusp_deg - 350.0).abs() < 1e-12);
        let p = assign_house(5.0, &cusps);
        assert_eq!(p.house, 12);
        assert!(!p.ambiguous);
        assert_eq!(assign_house(355.0, &cusps).house, 12);
        assert_eq!(assign_house(25.0, &cusps).house, 1);
    }

    #[test]
    fn partition_every_longitude_claimed_once() {
        // Uneven quadrant-style cusps.
        let cusps_deg = [
            5.5, 38.2, 67.9, 95.5, 122.8, 152.4, 185.5, 218.2, 247.9, 275.5, 302.8, 332.4,
        ];
        let (_, cusps) = house_cusps_from_frame(&frame(5.5, cusps_deg));
        for probe in 0..1440 {
            let lon = probe as f64 * 0.25;
            let mut claims = 0;
            for i in 0..12 {
                if in_forward_interval(lon, cusps[i].cusp_deg, cusps[(i + 1) % 12].cusp_deg) {
                    claims += 1;
                }
            }
            assert_eq!(claims, 1, "longitude {lon}");
            assert!(!assign_house(lon, &cusps).ambiguous);
        }
    }

    #[test]
    fn duplicated_cusp_empties_one_house() {
        let mut cusps_deg = equal_cusps(0.0);
        cusps_deg[3] = cusps_deg[4]; // house 4 collapses to [120, 120)
        let (_, cusps) = house_cusps_from_frame(&frame(0.0, cusps_deg));
        // House 3 widens to [60, 120); nothing lands in house 4 anymore,
        // but every longitude still resolves unambiguously.
        assert_eq!(assign_house(110.0, &cusps).house, 3);
        assert_eq!(assign_house(125.0, &cusps).house, 5);
        assert!(!assign_house(110.0, &cusps).ambiguous);
    }

    #[test]
    fn corrupt_cusps_fall_back_to_house_1_flagged() {
        // Fully degenerate cusp table: every interval is empty, so no
        // house claims anything and the explicit fallback kicks in.
        let (_, cusps) = house_cusps_from_frame(&frame(0.0, [0.0; 12]));
        for lon in [0.0, 5.0, 123.4, 359.9] {
            let p = assign_house(lon, &cusps);
            assert_eq!(p.house, 1);
            assert!(p.ambiguous, "longitude {lon} must be flagged");
        }
    }
}
