//! The Vimshottari system: sequence tables and timeline generation.
//!
//! Fixed 120-year cycle of 9 grahas. The Moon's nakshatra selects the
//! starting ruler (the 9 rulers repeat across the 27 nakshatras), and
//! the Moon's fractional progress through that nakshatra shortens the
//! first mahadasha. Nothing else about the cycle depends on the birth
//! chart: the order and the year weights never change.

use crate::error::VedicError;
use crate::graha::Graha;

use super::balance::birth_balance;
use super::subperiod::{find_active_period, proportional_children};
use super::types::{
    DAYS_PER_YEAR, DashaHierarchy, DashaLevel, DashaPeriod, DashaSnapshot, MAX_DASHA_LEVEL,
};

/// Vimshottari graha sequence, Ketu first.
pub const VIMSHOTTARI_GRAHAS: [Graha; 9] = [
    Graha::Ketu,
    Graha::Shukra,
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Rahu,
    Graha::Guru,
    Graha::Shani,
    Graha::Buddh,
];

/// Full mahadasha years per graha, same order as [`VIMSHOTTARI_GRAHAS`].
pub const VIMSHOTTARI_YEARS: [f64; 9] = [7.0, 20.0, 6.0, 10.0, 7.0, 18.0, 16.0, 19.0, 17.0];

/// Total cycle length: 120 years.
pub const VIMSHOTTARI_TOTAL_YEARS: f64 = 120.0;

/// The (graha, years) sequence as proportional-subdivision input.
fn sequence() -> [(Graha, f64); 9] {
    let mut seq = [(Graha::Ketu, 0.0); 9];
    for i in 0..9 {
        seq[i] = (VIMSHOTTARI_GRAHAS[i], VIMSHOTTARI_YEARS[i]);
    }
    seq
}

/// The mahadasha ruler for a nakshatra.
///
/// The 9 rulers cycle three times across the 27 nakshatras: Ashwini,
/// Magha, and Mula all start a Ketu mahadasha, and so on around the
/// sequence.
pub fn ruler_for_nakshatra(nakshatra_index: u8) -> Result<Graha, VedicError> {
    if nakshatra_index > 26 {
        return Err(VedicError::UnknownNakshatra(nakshatra_index));
    }
    Ok(VIMSHOTTARI_GRAHAS[(nakshatra_index % 9) as usize])
}

/// Generate the 9 mahadashas from birth — one full 120-year cycle.
///
/// The first period belongs to the Moon-nakshatra ruler, shortened to
/// its remaining birth balance; the rest follow the fixed cycle at full
/// length.
pub fn mahadashas(birth_jd: f64, moon_sidereal_lon: f64) -> Vec<DashaPeriod> {
    let balance = birth_balance(moon_sidereal_lon);
    // Index is clamped to [0, 26] by birth_balance, so the table lookup
    // cannot fail.
    let start = (balance.nakshatra_index % 9) as usize;

    let mut periods = Vec::with_capacity(9);
    let mut cursor = birth_jd;

    for offset in 0..9 {
        let idx = (start + offset) % 9;
        let full_days = VIMSHOTTARI_YEARS[idx] * DAYS_PER_YEAR;
        let duration = if offset == 0 {
            balance.remaining_fraction * full_days
        } else {
            full_days
        };
        let end = cursor + duration;
        periods.push(DashaPeriod {
            graha: VIMSHOTTARI_GRAHAS[idx],
            start_jd: cursor,
            end_jd: end,
            level: DashaLevel::Mahadasha,
            order: offset as u16 + 1,
            parent_idx: 0,
        });
        cursor = end;
    }

    periods
}

/// The 9 antardashas of a mahadasha.
pub fn antardashas(parent: &DashaPeriod) -> Vec<DashaPeriod> {
    children_of(parent, DashaLevel::Antardasha, 0)
}

/// The 9 pratyantardashas of an antardasha.
pub fn pratyantardashas(parent: &DashaPeriod) -> Vec<DashaPeriod> {
    children_of(parent, DashaLevel::Pratyantardasha, 0)
}

fn children_of(parent: &DashaPeriod, child_level: DashaLevel, parent_idx: u32) -> Vec<DashaPeriod> {
    proportional_children(
        parent,
        &sequence(),
        VIMSHOTTARI_TOTAL_YEARS,
        child_level,
        parent_idx,
    )
}

/// Generate the full timeline down to `max_level` (0..=2).
pub fn hierarchy(
    birth_jd: f64,
    moon_sidereal_lon: f64,
    max_level: u8,
) -> Result<DashaHierarchy, VedicError> {
    if max_level > MAX_DASHA_LEVEL {
        return Err(VedicError::InvalidDashaLevel(max_level));
    }

    let mut levels = vec![mahadashas(birth_jd, moon_sidereal_lon)];
    for depth in 1..=max_level {
        let child_level = DashaLevel::from_u8(depth).ok_or(VedicError::InvalidDashaLevel(depth))?;
        let parents = &levels[(depth - 1) as usize];
        let mut children = Vec::with_capacity(parents.len() * 9);
        for (pidx, parent) in parents.iter().enumerate() {
            children.extend(children_of(parent, child_level, pidx as u32));
        }
        levels.push(children);
    }

    Ok(DashaHierarchy { birth_jd, levels })
}

/// The chain of active periods at `query_jd`, without materializing the
/// whole tree.
pub fn snapshot_at(
    birth_jd: f64,
    moon_sidereal_lon: f64,
    query_jd: f64,
    max_level: u8,
) -> DashaSnapshot {
    let max_level = max_level.min(MAX_DASHA_LEVEL);
    let level0 = mahadashas(birth_jd, moon_sidereal_lon);
    let mut periods = Vec::with_capacity(max_level as usize + 1);

    let Some(active) = find_active_period(&level0, query_jd) else {
        return DashaSnapshot { query_jd, periods };
    };
    periods.push(level0[active]);

    let mut parent = level0[active];
    for depth in 1..=max_level {
        let child_level = match DashaLevel::from_u8(depth) {
            Some(l) => l,
            None => break,
        };
        let children = children_of(&parent, child_level, 0);
        match find_active_period(&children, query_jd) {
            Some(idx) => {
                periods.push(children[idx]);
                parent = children[idx];
            }
            None => break,
        }
    }

    DashaSnapshot { query_jd, periods }
}
