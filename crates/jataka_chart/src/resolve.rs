//! Planet position resolution through the gateway.

use jataka_ephem::{EphemerisConfig, EphemerisGateway};
use jataka_vedic::{ALL_GRAHAS, Graha, PlanetPosition, ketu_from_rahu};

use crate::error::{ChartError, ChartErrorKind, ChartStage};

/// Resolve all 9 graha positions at a UT Julian Day.
///
/// The 7 planets and Rahu (mean or true node per configuration) come
/// from the gateway; Ketu is synthesized from Rahu afterwards. The
/// result is indexed by `Graha::index()`. Any gateway failure aborts
/// resolution, tagged with the failing body.
pub fn resolve_positions(
    gateway: &dyn EphemerisGateway,
    config: &EphemerisConfig,
    jd_ut: f64,
) -> Result<[PlanetPosition; 9], ChartError> {
    let mut resolved: [Option<PlanetPosition>; 9] = [None; 9];

    for graha in ALL_GRAHAS {
        let Some(body) = graha.query_body(config.node) else {
            continue; // Ketu, synthesized below
        };
        let raw = gateway
            .position(jd_ut, body)
            .map_err(|e| ChartError::new(ChartStage::Positions, ChartErrorKind::Gateway(e)))?;
        resolved[graha.index() as usize] = Some(PlanetPosition::from_body_position(graha, &raw));
    }

    let rahu = resolved[Graha::Rahu.index() as usize].expect("Rahu resolved above");
    resolved[Graha::Ketu.index() as usize] = Some(ketu_from_rahu(&rahu));

    Ok(resolved.map(|p| p.expect("all grahas resolved")))
}
