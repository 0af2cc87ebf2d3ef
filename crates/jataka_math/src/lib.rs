//! Pure angle arithmetic shared by the chart derivation crates.
//!
//! Everything here operates on ecliptic longitudes in decimal degrees.
//! The circle is [0, 360); every public function normalizes its inputs,
//! so callers may pass raw differences or negative angles.

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    if r < 0.0 { r + 360.0 } else { r }
}

/// 0-based zodiac sign index for a longitude: floor(lon/30), clamped to [0, 11].
///
/// The clamp absorbs the floating-point edge where a normalized longitude
/// lands exactly on 360.0.
pub fn sign_index(lon_deg: f64) -> u8 {
    let lon = normalize_360(lon_deg);
    ((lon / 30.0).floor() as u8).min(11)
}

/// Forward (counterclockwise) arc from `from` to `to`, in [0, 360).
pub fn arc_forward(from_deg: f64, to_deg: f64) -> f64 {
    normalize_360(to_deg - from_deg)
}

/// Circular-interval membership: does `lon` fall in [start, end) going forward?
///
/// Handles the wrap case where the interval crosses 0 deg (`end < start`):
/// there the interval is the union [start, 360) ∪ [0, end).
/// An empty interval (`start == end`) claims nothing.
pub fn in_forward_interval(lon_deg: f64, start_deg: f64, end_deg: f64) -> bool {
    let lon = normalize_360(lon_deg);
    let start = normalize_360(start_deg);
    let end = normalize_360(end_deg);

    if start == end {
        false
    } else if start < end {
        start <= lon && lon < end
    } else {
        lon >= start || lon < end
    }
}

/// Degrees-minutes-seconds representation of a non-negative angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dms {
    /// Whole degrees.
    pub degrees: u16,
    /// Arc-minutes (0..59).
    pub minutes: u8,
    /// Arc-seconds (0.0..60.0), may include fractional part.
    pub seconds: f64,
}

/// Convert decimal degrees to degrees-minutes-seconds.
///
/// Negative input is folded to its absolute value.
pub fn deg_to_dms(deg: f64) -> Dms {
    let d = deg.abs();
    let degrees = d.floor() as u16;
    let remainder = (d - degrees as f64) * 60.0;
    let minutes = remainder.floor() as u8;
    let seconds = (remainder - minutes as f64) * 60.0;
    Dms {
        degrees,
        minutes,
        seconds,
    }
}

/// Convert DMS back to decimal degrees.
pub fn dms_to_deg(dms: &Dms) -> f64 {
    dms.degrees as f64 + dms.minutes as f64 / 60.0 + dms.seconds / 3600.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_identity() {
        assert!((normalize_360(45.0) - 45.0).abs() < 1e-15);
    }

    #[test]
    fn normalize_full_circle() {
        assert!(normalize_360(360.0).abs() < 1e-15);
    }

    #[test]
    fn normalize_negative() {
        assert!((normalize_360(-10.0) - 350.0).abs() < 1e-15);
    }

    #[test]
    fn normalize_multiple_turns() {
        assert!((normalize_360(730.0) - 10.0).abs() < 1e-10);
        assert!((normalize_360(-370.0) - 350.0).abs() < 1e-10);
    }

    #[test]
    fn sign_index_boundaries() {
        for i in 0..12u8 {
            assert_eq!(sign_index(i as f64 * 30.0), i, "boundary at sign {i}");
        }
    }

    #[test]
    fn sign_index_wraps() {
        assert_eq!(sign_index(365.0), 0);
        assert_eq!(sign_index(-5.0), 11);
    }

    #[test]
    fn arc_forward_simple() {
        assert!((arc_forward(10.0, 40.0) - 30.0).abs() < 1e-12);
    }

    #[test]
    fn arc_forward_wrapping() {
        assert!((arc_forward(350.0, 20.0) - 30.0).abs() < 1e-12);
    }

    #[test]
    fn interval_normal_case() {
        assert!(in_forward_interval(15.0, 10.0, 40.0));
        assert!(in_forward_interval(10.0, 10.0, 40.0)); // start inclusive
        assert!(!in_forward_interval(40.0, 10.0, 40.0)); // end exclusive
        assert!(!in_forward_interval(5.0, 10.0, 40.0));
    }

    #[test]
    fn interval_wrap_case() {
        // [350, 20) crosses 0 deg
        assert!(in_forward_interval(355.0, 350.0, 20.0));
        assert!(in_forward_interval(5.0, 350.0, 20.0));
        assert!(in_forward_interval(0.0, 350.0, 20.0));
        assert!(!in_forward_interval(20.0, 350.0, 20.0));
        assert!(!in_forward_interval(180.0, 350.0, 20.0));
    }

    #[test]
    fn interval_empty() {
        assert!(!in_forward_interval(100.0, 100.0, 100.0));
    }

    #[test]
    fn interval_partition_of_circle() {
        // Twelve 30-degree intervals claim every probe exactly once.
        let cusps: Vec<f64> = (0..12).map(|i| i as f64 * 30.0 + 7.5).collect();
        for probe in 0..720 {
            let lon = probe as f64 * 0.5;
            let claims = (0..12)
                .filter(|&i| in_forward_interval(lon, cusps[i], cusps[(i + 1) % 12]))
                .count();
            assert_eq!(claims, 1, "longitude {lon} claimed {claims} times");
        }
    }

    #[test]
    fn dms_roundtrip() {
        let dms = deg_to_dms(23.853);
        assert_eq!(dms.degrees, 23);
        assert_eq!(dms.minutes, 51);
        assert!((dms.seconds - 10.8).abs() < 0.01);
        assert!((dms_to_deg(&dms) - 23.853).abs() < 1e-9);
    }

    #[test]
    fn dms_exact_minutes() {
        let dms = deg_to_dms(10.5);
        assert_eq!(dms.degrees, 10);
        assert_eq!(dms.minutes, 30);
        assert!(dms.seconds.abs() < 1e-9);
    }
}
