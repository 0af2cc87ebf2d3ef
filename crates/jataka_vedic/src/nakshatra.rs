//! Nakshatra (lunar mansion) locator.
//!
//! The ecliptic divides into 27 equal nakshatras of 13 deg 20' each;
//! every nakshatra divides into 4 padas of 3 deg 20'. Boundary
//! longitudes belong to the upper segment: a longitude exactly at
//! `k * 13deg20'` is nakshatra `k`, pada 1.

use jataka_math::normalize_360;

/// Span of one nakshatra: 360/27 deg.
pub const NAKSHATRA_SPAN: f64 = 360.0 / 27.0;

/// Span of one pada: a quarter nakshatra.
pub const PADA_SPAN: f64 = NAKSHATRA_SPAN / 4.0;

/// The 27 nakshatras from Ashwini to Revati.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Nakshatra {
    Ashwini = 0,
    Bharani = 1,
    Krittika = 2,
    Rohini = 3,
    Mrigashira = 4,
    Ardra = 5,
    Punarvasu = 6,
    Pushya = 7,
    Ashlesha = 8,
    Magha = 9,
    PurvaPhalguni = 10,
    UttaraPhalguni = 11,
    Hasta = 12,
    Chitra = 13,
    Swati = 14,
    Vishakha = 15,
    Anuradha = 16,
    Jyeshtha = 17,
    Mula = 18,
    PurvaAshadha = 19,
    UttaraAshadha = 20,
    Shravana = 21,
    Dhanishtha = 22,
    Shatabhisha = 23,
    PurvaBhadrapada = 24,
    UttaraBhadrapada = 25,
    Revati = 26,
}

/// All 27 nakshatras in order (index 0 = Ashwini).
pub const ALL_NAKSHATRAS: [Nakshatra; 27] = [
    Nakshatra::Ashwini,
    Nakshatra::Bharani,
    Nakshatra::Krittika,
    Nakshatra::Rohini,
    Nakshatra::Mrigashira,
    Nakshatra::Ardra,
    Nakshatra::Punarvasu,
    Nakshatra::Pushya,
    Nakshatra::Ashlesha,
    Nakshatra::Magha,
    Nakshatra::PurvaPhalguni,
    Nakshatra::UttaraPhalguni,
    Nakshatra::Hasta,
    Nakshatra::Chitra,
    Nakshatra::Swati,
    Nakshatra::Vishakha,
    Nakshatra::Anuradha,
    Nakshatra::Jyeshtha,
    Nakshatra::Mula,
    Nakshatra::PurvaAshadha,
    Nakshatra::UttaraAshadha,
    Nakshatra::Shravana,
    Nakshatra::Dhanishtha,
    Nakshatra::Shatabhisha,
    Nakshatra::PurvaBhadrapada,
    Nakshatra::UttaraBhadrapada,
    Nakshatra::Revati,
];

const NAMES: [&str; 27] = [
    "Ashwini",
    "Bharani",
    "Krittika",
    "Rohini",
    "Mrigashira",
    "Ardra",
    "Punarvasu",
    "Pushya",
    "Ashlesha",
    "Magha",
    "Purva Phalguni",
    "Uttara Phalguni",
    "Hasta",
    "Chitra",
    "Swati",
    "Vishakha",
    "Anuradha",
    "Jyeshtha",
    "Mula",
    "Purva Ashadha",
    "Uttara Ashadha",
    "Shravana",
    "Dhanishtha",
    "Shatabhisha",
    "Purva Bhadrapada",
    "Uttara Bhadrapada",
    "Revati",
];

impl Nakshatra {
    /// 0-based index (Ashwini = 0, Revati = 26).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Traditional name.
    pub const fn name(self) -> &'static str {
        NAMES[self as usize]
    }
}

/// A longitude located within the nakshatra scheme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NakshatraPlacement {
    /// The nakshatra.
    pub nakshatra: Nakshatra,
    /// 0-based nakshatra index [0, 26].
    pub index: u8,
    /// Pada (quarter) within the nakshatra, 1-4.
    pub pada: u8,
    /// Decimal degrees traversed within the nakshatra [0, 13.33...).
    pub degrees_in_nakshatra: f64,
}

/// Locate a sidereal longitude in the 27-nakshatra scheme.
///
/// Pure function; out-of-range input is normalized, never rejected.
pub fn nakshatra_from_longitude(sidereal_lon_deg: f64) -> NakshatraPlacement {
    let lon = normalize_360(sidereal_lon_deg);
    let index = ((lon / NAKSHATRA_SPAN).floor() as u8).min(26);
    let degrees_in_nakshatra = lon - index as f64 * NAKSHATRA_SPAN;
    let pada = ((degrees_in_nakshatra / PADA_SPAN).floor() as u8).min(3) + 1;

    NakshatraPlacement {
        nakshatra: ALL_NAKSHATRAS[index as usize],
        index,
        pada,
        degrees_in_nakshatra,
    }
}
