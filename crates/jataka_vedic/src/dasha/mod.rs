//! Vimshottari dasha (planetary period) engine.
//!
//! The 120-year Vimshottari cycle anchored at the Moon's nakshatra at
//! birth, subdivided through three levels: Mahadasha, Antardasha,
//! Pratyantardasha. All computation is over Julian Days with a fixed
//! 365.25-day year, applied identically at every level so sibling
//! periods always sum exactly to their parent.

pub mod balance;
pub mod subperiod;
pub mod types;
pub mod vimshottari;

pub use balance::{BirthBalance, birth_balance};
pub use types::{
    DAYS_PER_YEAR, DashaHierarchy, DashaLevel, DashaPeriod, DashaSnapshot, MAX_DASHA_LEVEL,
};
pub use vimshottari::{
    VIMSHOTTARI_GRAHAS, VIMSHOTTARI_TOTAL_YEARS, VIMSHOTTARI_YEARS, antardashas, hierarchy,
    mahadashas, pratyantardashas, ruler_for_nakshatra, snapshot_at,
};
