//! Validated birth moment value object.

use crate::error::TimeError;
use crate::julian::calendar_to_jd;

/// Largest timezone offset in use (UTC+14, Line Islands).
const MAX_TZ_OFFSET_HOURS: f64 = 14.0;

/// A validated civil birth moment: calendar date, local clock time,
/// timezone offset, and geographic coordinates.
///
/// Constructed once from external input via [`BirthMoment::new`]; all
/// fields are read-only thereafter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BirthMoment {
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: f64,
    tz_offset_hours: f64,
    latitude_deg: f64,
    longitude_deg: f64,
}

impl BirthMoment {
    /// Validate and build a birth moment.
    ///
    /// Rejects out-of-range calendar dates (including day-per-month and
    /// leap-year rules), clock times, coordinates, and timezone offsets.
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: f64,
        tz_offset_hours: f64,
        latitude_deg: f64,
        longitude_deg: f64,
    ) -> Result<Self, TimeError> {
        if !(1..=12).contains(&month) {
            return Err(TimeError::InvalidDate("month must be 1-12"));
        }
        if day < 1 || day > days_in_month(year, month) {
            return Err(TimeError::InvalidDate("day out of range for month"));
        }
        if hour >= 24 {
            return Err(TimeError::InvalidTime("hour must be 0-23"));
        }
        if minute >= 60 {
            return Err(TimeError::InvalidTime("minute must be 0-59"));
        }
        if !(0.0..60.0).contains(&second) {
            return Err(TimeError::InvalidTime("second must be in [0, 60)"));
        }
        if !tz_offset_hours.is_finite() || tz_offset_hours.abs() > MAX_TZ_OFFSET_HOURS {
            return Err(TimeError::InvalidLocation("timezone offset out of range"));
        }
        if !latitude_deg.is_finite() || latitude_deg.abs() > 90.0 {
            return Err(TimeError::InvalidLocation("latitude must be in [-90, 90]"));
        }
        if !longitude_deg.is_finite() || longitude_deg.abs() > 180.0 {
            return Err(TimeError::InvalidLocation(
                "longitude must be in [-180, 180]",
            ));
        }

        Ok(Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            tz_offset_hours,
            latitude_deg,
            longitude_deg,
        })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    pub fn second(&self) -> f64 {
        self.second
    }

    pub fn tz_offset_hours(&self) -> f64 {
        self.tz_offset_hours
    }

    pub fn latitude_deg(&self) -> f64 {
        self.latitude_deg
    }

    pub fn longitude_deg(&self) -> f64 {
        self.longitude_deg
    }

    /// The UT Julian Day of this birth moment.
    ///
    /// Civil JD minus `tz_offset_hours / 24`. Every ephemeris lookup uses
    /// this instant; civil local time never leaves this crate.
    pub fn to_jd_ut(&self) -> f64 {
        let day_fraction = self.day as f64
            + self.hour as f64 / 24.0
            + self.minute as f64 / 1440.0
            + self.second / 86_400.0;
        calendar_to_jd(self.year, self.month, day_fraction) - self.tz_offset_hours / 24.0
    }
}

impl std::fmt::Display for BirthMoment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02} UTC{:+}",
            self.year, self.month, self.day, self.hour, self.minute, self.tz_offset_hours
        )
    }
}

/// Number of days in a Gregorian month.
fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

/// Gregorian leap year rule.
fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}
