//! JSON wire shape of a computed chart.
//!
//! Mirrors what the web boundary expects: camelCase fields, planets in
//! graha order, houses 1-12, and the dasha timeline nested three levels
//! deep with calendar dates.

use serde::Serialize;

use jataka_time::jd_to_calendar;
use jataka_vedic::dasha::DashaPeriod;

use crate::assemble::VedicChart;

/// Serialized chart aggregate.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartJson {
    pub ascendant: AscendantJson,
    pub planets: Vec<PlanetJson>,
    pub houses: Vec<HouseJson>,
    pub moon_nakshatra: MoonNakshatraJson,
    pub tithi: u8,
    pub dashas: DashaTimelineJson,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AscendantJson {
    pub longitude: f64,
    pub sign_index: u8,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanetJson {
    pub id: u8,
    pub name: &'static str,
    pub longitude: f64,
    pub latitude: f64,
    pub sign_index: u8,
    pub house: u8,
    pub retrograde: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HouseJson {
    pub number: u8,
    pub cusp_longitude: f64,
    pub sign_index: u8,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoonNakshatraJson {
    pub name: &'static str,
    pub pada: u8,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashaTimelineJson {
    pub mahadashas: Vec<MahadashaJson>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MahadashaJson {
    pub planet: &'static str,
    pub start_date: String,
    pub end_date: String,
    pub years: f64,
    pub antardashas: Vec<AntardashaJson>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AntardashaJson {
    pub planet: &'static str,
    pub start_date: String,
    pub end_date: String,
    pub years: f64,
    pub pratyantardashas: Vec<PeriodJson>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodJson {
    pub planet: &'static str,
    pub start_date: String,
    pub end_date: String,
    pub years: f64,
}

/// Render a JD UT as "YYYY-MM-DD".
fn jd_to_date_string(jd: f64) -> String {
    let (year, month, day_fraction) = jd_to_calendar(jd);
    format!("{:04}-{:02}-{:02}", year, month, day_fraction.floor() as u32)
}

fn period_json(p: &DashaPeriod) -> PeriodJson {
    PeriodJson {
        planet: p.graha.english_name(),
        start_date: jd_to_date_string(p.start_jd),
        end_date: jd_to_date_string(p.end_jd),
        years: p.duration_years(),
    }
}

/// Build the serializable aggregate from a computed chart.
pub fn chart_to_json(chart: &VedicChart) -> ChartJson {
    let planets = chart
        .planets
        .iter()
        .map(|p| PlanetJson {
            id: p.graha.index(),
            name: p.graha.english_name(),
            longitude: p.longitude_deg,
            latitude: p.latitude_deg,
            sign_index: p.rashi_index,
            house: chart.placements[p.graha.index() as usize].house,
            retrograde: p.retrograde,
        })
        .collect();

    let houses = chart
        .houses
        .iter()
        .map(|h| HouseJson {
            number: h.number,
            cusp_longitude: h.cusp_deg,
            sign_index: h.rashi_index,
        })
        .collect();

    // Nest the flat hierarchy levels back into a tree via parent_idx.
    let levels = &chart.dashas.levels;
    let antar_level: &[DashaPeriod] = levels.get(1).map(Vec::as_slice).unwrap_or(&[]);
    let pratyantar_level: &[DashaPeriod] = levels.get(2).map(Vec::as_slice).unwrap_or(&[]);

    let mahadashas = levels[0]
        .iter()
        .enumerate()
        .map(|(maha_idx, maha)| {
            let antardashas = antar_level
                .iter()
                .enumerate()
                .filter(|(_, a)| a.parent_idx as usize == maha_idx)
                .map(|(antar_idx, antar)| {
                    let pratyantardashas = pratyantar_level
                        .iter()
                        .filter(|p| p.parent_idx as usize == antar_idx)
                        .map(period_json)
                        .collect();
                    AntardashaJson {
                        planet: antar.graha.english_name(),
                        start_date: jd_to_date_string(antar.start_jd),
                        end_date: jd_to_date_string(antar.end_jd),
                        years: antar.duration_years(),
                        pratyantardashas,
                    }
                })
                .collect();
            MahadashaJson {
                planet: maha.graha.english_name(),
                start_date: jd_to_date_string(maha.start_jd),
                end_date: jd_to_date_string(maha.end_jd),
                years: maha.duration_years(),
                antardashas,
            }
        })
        .collect();

    ChartJson {
        ascendant: AscendantJson {
            longitude: chart.ascendant.longitude_deg,
            sign_index: chart.ascendant.rashi_index,
        },
        planets,
        houses,
        moon_nakshatra: MoonNakshatraJson {
            name: chart.moon_nakshatra.nakshatra.name(),
            pada: chart.moon_nakshatra.pada,
        },
        tithi: chart.tithi.number,
        dashas: DashaTimelineJson { mahadashas },
        warnings: chart.warnings.iter().map(|w| w.to_string()).collect(),
    }
}

/// Serialize a chart to a JSON string.
pub fn chart_to_json_string(chart: &VedicChart) -> Result<String, serde_json::Error> {
    serde_json::to_string(&chart_to_json(chart))
}
