//! Pure Vedic chart derivations.
//!
//! Everything in this crate is deterministic math over sidereal
//! longitudes already obtained from the ephemeris gateway: graha and
//! rashi tables, nakshatra and tithi locators, planet position value
//! objects (including Ketu synthesis), house assignment, and the
//! Vimshottari dasha engine. No I/O, no shared state.

pub mod bhava;
pub mod dasha;
pub mod error;
pub mod graha;
pub mod nakshatra;
pub mod position;
pub mod rashi;
pub mod tithi;

pub use bhava::{Ascendant, HouseCusp, HousePlacement, assign_house, house_cusps_from_frame};
pub use error::VedicError;
pub use graha::{ALL_GRAHAS, Graha};
pub use nakshatra::{
    ALL_NAKSHATRAS, NAKSHATRA_SPAN, Nakshatra, NakshatraPlacement, PADA_SPAN,
    nakshatra_from_longitude,
};
pub use position::{PlanetPosition, ketu_from_rahu};
pub use rashi::{ALL_RASHIS, Rashi, rashi_from_longitude};
pub use tithi::{Paksha, Tithi, tithi_from_longitudes};
