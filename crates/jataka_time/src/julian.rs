//! Gregorian calendar <-> Julian Day conversion.
//!
//! Standard Meeus formulation. Dates before the Gregorian reform are not
//! a concern for birth charts, so the Gregorian correction is applied
//! unconditionally.

/// Convert a Gregorian calendar date to Julian Day.
///
/// `day_fraction` carries the time of day: `15.5` is noon on the 15th.
/// The result is on the same time scale as the input (no UT correction
/// happens here).
pub fn calendar_to_jd(year: i32, month: u32, day_fraction: f64) -> f64 {
    let y = year as f64;
    let m = month as f64;

    let (y2, m2) = if m <= 2.0 {
        (y - 1.0, m + 12.0)
    } else {
        (y, m)
    };
    let a = (y2 / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();

    (365.25 * (y2 + 4716.0)).floor() + (30.6001 * (m2 + 1.0)).floor() + day_fraction + b - 1524.5
}

/// Convert a Julian Day back to a Gregorian calendar date.
///
/// Returns `(year, month, day_fraction)`; the inverse of
/// [`calendar_to_jd`] up to floating-point round-off.
pub fn jd_to_calendar(jd: f64) -> (i32, u32, f64) {
    let z = (jd + 0.5).floor();
    let f = jd + 0.5 - z;

    let a = if z < 2_299_161.0 {
        z
    } else {
        let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
        z + 1.0 + alpha - (alpha / 4.0).floor()
    };

    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day_fraction = b - d - (30.6001 * e).floor() + f;
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
    let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };

    (year as i32, month as u32, day_fraction)
}
