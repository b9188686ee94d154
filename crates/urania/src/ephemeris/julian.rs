//! Julian Day conversion for UTC timestamps.

use crate::error::EngineError;
use chrono::{DateTime, Datelike, Timelike, Utc};

/// Julian Day of the J2000.0 epoch (2000-01-01 12:00 TT)
pub const J2000_JD: f64 = 2451545.0;

/// Days per Julian century
pub const DAYS_PER_CENTURY: f64 = 36525.0;

/// Inclusive range of calendar years accepted by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearRange {
    pub min_year: i32,
    pub max_year: i32,
}

impl YearRange {
    pub fn contains(&self, year: i32) -> bool {
        (self.min_year..=self.max_year).contains(&year)
    }
}

/// Gregorian calendar date to Julian Day.
///
/// `hour` is the fractional UT hour of the day.
pub fn calendar_to_julian_day(year: i32, month: u32, day: u32, hour: f64) -> f64 {
    let (mut y, mut m) = (year, month as i32);
    if m <= 2 {
        y -= 1;
        m += 12;
    }
    let a = (y as f64 / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();

    (365.25 * (y + 4716) as f64).floor()
        + (30.6001 * (m + 1) as f64).floor()
        + day as f64
        + hour / 24.0
        + b
        - 1524.5
}

/// Julian Day for a UTC instant, rejecting years outside `range`
pub fn datetime_to_julian_day(dt: DateTime<Utc>, range: YearRange) -> Result<f64, EngineError> {
    let year = dt.year();
    if !range.contains(year) {
        return Err(EngineError::UnsupportedDate {
            datetime: dt,
            year,
            min_year: range.min_year,
            max_year: range.max_year,
        });
    }

    let hour_decimal = dt.hour() as f64
        + dt.minute() as f64 / 60.0
        + dt.second() as f64 / 3600.0
        + dt.nanosecond() as f64 / 3.6e12;

    Ok(calendar_to_julian_day(year, dt.month(), dt.day(), hour_decimal))
}

/// Julian centuries elapsed since J2000.0
pub fn centuries_since_j2000(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_CENTURY
}
