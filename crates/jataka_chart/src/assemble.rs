//! Chart assembly: the dependency-ordered derivation pipeline.

use jataka_ephem::{EphemerisConfig, EphemerisGateway};
use jataka_time::BirthMoment;
use jataka_vedic::bhava::{
    Ascendant, HouseCusp, HousePlacement, assign_house, house_cusps_from_frame,
};
use jataka_vedic::dasha::{self, DashaHierarchy, MAX_DASHA_LEVEL};
use jataka_vedic::{
    Graha, NakshatraPlacement, PlanetPosition, Tithi, nakshatra_from_longitude,
    tithi_from_longitudes,
};

use crate::error::{ChartError, ChartErrorKind, ChartStage, ChartWarning};
use crate::input::BirthRecord;
use crate::resolve::resolve_positions;

/// One fully derived, immutable birth chart.
#[derive(Debug, Clone)]
pub struct VedicChart {
    /// Birth instant, JD UT.
    pub birth_jd_ut: f64,
    /// The ascendant (lagna).
    pub ascendant: Ascendant,
    /// House the ascendant falls in (house 1 under every convention
    /// this engine supports, but assigned rather than assumed).
    pub ascendant_placement: HousePlacement,
    /// All 9 grahas, indexed by `Graha::index()`.
    pub planets: [PlanetPosition; 9],
    /// House placements, same indexing as `planets`.
    pub placements: [HousePlacement; 9],
    /// The 12 house cusps.
    pub houses: [HouseCusp; 12],
    /// The Moon's nakshatra and pada.
    pub moon_nakshatra: NakshatraPlacement,
    /// Lunar day at birth.
    pub tithi: Tithi,
    /// Vimshottari timeline: mahadashas, antardashas, pratyantardashas.
    pub dashas: DashaHierarchy,
    /// Non-fatal conditions observed during assembly.
    pub warnings: Vec<ChartWarning>,
}

/// Compute a chart from a validated birth moment.
///
/// Stages run in dependency order; the first failure aborts the whole
/// computation with its stage named. Nothing is retried here — retry
/// policy belongs to the caller.
pub fn compute_chart(
    gateway: &dyn EphemerisGateway,
    config: &EphemerisConfig,
    birth: &BirthMoment,
) -> Result<VedicChart, ChartError> {
    let birth_jd_ut = birth.to_jd_ut();

    let planets = resolve_positions(gateway, config, birth_jd_ut)?;

    let frame = gateway
        .houses(
            birth_jd_ut,
            birth.latitude_deg(),
            birth.longitude_deg(),
            config.house_system,
        )
        .map_err(|e| ChartError::new(ChartStage::Houses, ChartErrorKind::Gateway(e)))?;
    let (ascendant, houses) = house_cusps_from_frame(&frame);

    let mut warnings = Vec::new();
    let mut placements = [HousePlacement {
        house: 1,
        ambiguous: false,
    }; 9];
    for planet in &planets {
        let placement = assign_house(planet.longitude_deg, &houses);
        if placement.ambiguous {
            warnings.push(ChartWarning::AmbiguousHouse(planet.graha));
        }
        placements[planet.graha.index() as usize] = placement;
    }
    let ascendant_placement = assign_house(ascendant.longitude_deg, &houses);
    if ascendant_placement.ambiguous {
        warnings.push(ChartWarning::AmbiguousAscendantHouse);
    }

    let moon = &planets[Graha::Chandra.index() as usize];
    let sun = &planets[Graha::Surya.index() as usize];
    let moon_nakshatra = nakshatra_from_longitude(moon.longitude_deg);
    let tithi = tithi_from_longitudes(moon.longitude_deg, sun.longitude_deg);

    let dashas = dasha::hierarchy(birth_jd_ut, moon.longitude_deg, MAX_DASHA_LEVEL)
        .map_err(|e| ChartError::new(ChartStage::Dasha, ChartErrorKind::Vedic(e)))?;

    Ok(VedicChart {
        birth_jd_ut,
        ascendant,
        ascendant_placement,
        planets,
        placements,
        houses,
        moon_nakshatra,
        tithi,
        dashas,
        warnings,
    })
}

/// Convenience: parse, validate, and compute in one call.
pub fn compute_chart_from_record(
    gateway: &dyn EphemerisGateway,
    config: &EphemerisConfig,
    record: &BirthRecord,
) -> Result<VedicChart, ChartError> {
    let birth = record.to_birth_moment()?;
    compute_chart(gateway, config, &birth)
}
