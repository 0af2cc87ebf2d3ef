//! The JSON-shaped birth record boundary.
//!
//! External callers submit `{"birthDate": "YYYY-MM-DD", "birthTime":
//! "HH:MM", "latitude": .., "longitude": .., "timezone": ..}`. The
//! timezone is either a numeric hour offset or an offset string
//! ("+05:30", "-3", "5.5"). IANA zone names must be resolved to an
//! offset before reaching this boundary; they are rejected here, never
//! guessed.

use serde::Deserialize;

use jataka_time::BirthMoment;

use crate::error::{ChartError, ChartErrorKind, ChartStage};

/// Raw birth record as received from the caller.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BirthRecord {
    /// "YYYY-MM-DD".
    pub birth_date: String,
    /// "HH:MM" or "HH:MM:SS".
    pub birth_time: String,
    /// Degrees north, [-90, 90].
    pub latitude: f64,
    /// Degrees east, [-180, 180].
    pub longitude: f64,
    /// Hour offset from UTC, numeric or string form.
    pub timezone: TimezoneSpec,
}

/// Timezone field: a number (`5.5`) or a string (`"+05:30"`, `"5.5"`).
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TimezoneSpec {
    Offset(f64),
    Text(String),
}

impl TimezoneSpec {
    /// Resolve to an hour offset, rejecting anything that is not an
    /// explicit offset.
    pub fn offset_hours(&self) -> Result<f64, ChartError> {
        match self {
            Self::Offset(hours) => Ok(*hours),
            Self::Text(text) => parse_offset_text(text),
        }
    }
}

fn parse_error(msg: &'static str) -> ChartError {
    ChartError::new(ChartStage::BirthInput, ChartErrorKind::Parse(msg))
}

/// Parse "+05:30", "-03:00", "5.5", "7" into hours.
fn parse_offset_text(text: &str) -> Result<f64, ChartError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(parse_error("timezone offset is empty"));
    }
    if trimmed
        .chars()
        .any(|c| !c.is_ascii_digit() && !matches!(c, '+' | '-' | ':' | '.'))
    {
        return Err(parse_error(
            "timezone must be a numeric offset; resolve zone names to an offset first",
        ));
    }

    let (sign, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1.0, rest),
        None => (1.0, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    if let Some((hours_part, minutes_part)) = rest.split_once(':') {
        let hours: f64 = hours_part
            .parse()
            .map_err(|_| parse_error("malformed timezone hours"))?;
        let minutes: f64 = minutes_part
            .parse()
            .map_err(|_| parse_error("malformed timezone minutes"))?;
        if minutes >= 60.0 {
            return Err(parse_error("timezone minutes must be below 60"));
        }
        Ok(sign * (hours + minutes / 60.0))
    } else {
        rest.parse::<f64>()
            .map(|h| sign * h)
            .map_err(|_| parse_error("malformed timezone offset"))
    }
}

/// Parse "YYYY-MM-DD".
fn parse_date(text: &str) -> Result<(i32, u32, u32), ChartError> {
    let mut parts = text.splitn(3, '-');
    let year = parts
        .next()
        .and_then(|p| p.parse::<i32>().ok())
        .ok_or_else(|| parse_error("birthDate must be YYYY-MM-DD"))?;
    let month = parts
        .next()
        .and_then(|p| p.parse::<u32>().ok())
        .ok_or_else(|| parse_error("birthDate must be YYYY-MM-DD"))?;
    let day = parts
        .next()
        .and_then(|p| p.parse::<u32>().ok())
        .ok_or_else(|| parse_error("birthDate must be YYYY-MM-DD"))?;
    Ok((year, month, day))
}

/// Parse "HH:MM" or "HH:MM:SS".
fn parse_time(text: &str) -> Result<(u32, u32, f64), ChartError> {
    let mut parts = text.splitn(3, ':');
    let hour = parts
        .next()
        .and_then(|p| p.parse::<u32>().ok())
        .ok_or_else(|| parse_error("birthTime must be HH:MM or HH:MM:SS"))?;
    let minute = parts
        .next()
        .and_then(|p| p.parse::<u32>().ok())
        .ok_or_else(|| parse_error("birthTime must be HH:MM or HH:MM:SS"))?;
    let second = match parts.next() {
        Some(p) => p
            .parse::<f64>()
            .map_err(|_| parse_error("malformed birthTime seconds"))?,
        None => 0.0,
    };
    Ok((hour, minute, second))
}

impl BirthRecord {
    /// Validate into a [`BirthMoment`].
    ///
    /// Format errors and range errors both surface as `BirthInput`-stage
    /// chart errors.
    pub fn to_birth_moment(&self) -> Result<BirthMoment, ChartError> {
        let (year, month, day) = parse_date(&self.birth_date)?;
        let (hour, minute, second) = parse_time(&self.birth_time)?;
        let tz_offset_hours = self.timezone.offset_hours()?;

        BirthMoment::new(
            year,
            month,
            day,
            hour,
            minute,
            second,
            tz_offset_hours,
            self.latitude,
            self.longitude,
        )
        .map_err(|e| ChartError::new(ChartStage::BirthInput, ChartErrorKind::Input(e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ChartStage;

    fn record(date: &str, time: &str, tz: TimezoneSpec) -> BirthRecord {
        BirthRecord {
            birth_date: date.to_string(),
            birth_time: time.to_string(),
            latitude: 21.0285,
            longitude: 105.8542,
            timezone: tz,
        }
    }

    #[test]
    fn valid_record_parses() {
        let r = record("1990-01-01", "12:00", TimezoneSpec::Offset(0.0));
        let m = r.to_birth_moment().unwrap();
        assert_eq!(m.year(), 1990);
        assert_eq!(m.hour(), 12);
        assert!((m.latitude_deg() - 21.0285).abs() < 1e-12);
    }

    #[test]
    fn seconds_are_optional() {
        let r = record("1990-01-01", "12:00:30", TimezoneSpec::Offset(0.0));
        let m = r.to_birth_moment().unwrap();
        assert!((m.second() - 30.0).abs() < 1e-12);
    }

    #[test]
    fn offset_string_hh_mm() {
        assert!(
            (TimezoneSpec::Text("+05:30".into()).offset_hours().unwrap() - 5.5).abs() < 1e-12
        );
        assert!(
            (TimezoneSpec::Text("-03:00".into()).offset_hours().unwrap() + 3.0).abs() < 1e-12
        );
    }

    #[test]
    fn offset_string_decimal() {
        assert!((TimezoneSpec::Text("5.5".into()).offset_hours().unwrap() - 5.5).abs() < 1e-12);
        assert!((TimezoneSpec::Text("7".into()).offset_hours().unwrap() - 7.0).abs() < 1e-12);
    }

    #[test]
    fn negative_half_hour_offset() {
        // Sign must apply to the minutes too: -9:30 is -9.5, not -8.5.
        let got = TimezoneSpec::Text("-09:30".into()).offset_hours().unwrap();
        assert!((got + 9.5).abs() < 1e-12);
    }

    #[test]
    fn iana_name_rejected() {
        let err = TimezoneSpec::Text("Asia/Kolkata".into())
            .offset_hours()
            .unwrap_err();
        assert_eq!(err.stage(), ChartStage::BirthInput);
    }

    #[test]
    fn malformed_date_rejected() {
        let r = record("1990/01/01", "12:00", TimezoneSpec::Offset(0.0));
        assert!(r.to_birth_moment().is_err());
    }

    #[test]
    fn out_of_range_date_rejected_with_stage() {
        let r = record("1990-13-01", "12:00", TimezoneSpec::Offset(0.0));
        let err = r.to_birth_moment().unwrap_err();
        assert_eq!(err.stage(), ChartStage::BirthInput);
    }

    #[test]
    fn deserializes_numeric_and_string_timezone() {
        let json = r#"{"birthDate":"1990-01-01","birthTime":"12:00",
            "latitude":21.0285,"longitude":105.8542,"timezone":7}"#;
        let r: BirthRecord = serde_json::from_str(json).unwrap();
        assert!((r.timezone.offset_hours().unwrap() - 7.0).abs() < 1e-12);

        let json = r#"{"birthDate":"1990-01-01","birthTime":"12:00",
            "latitude":21.0285,"longitude":105.8542,"timezone":"+07:00"}"#;
        let r: BirthRecord = serde_json::from_str(json).unwrap();
        assert!((r.timezone.offset_hours().unwrap() - 7.0).abs() < 1e-12);
    }
}
