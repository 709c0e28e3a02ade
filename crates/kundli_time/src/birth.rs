//! Validated UTC birth moment.
//!
//! [`BirthMoment`] is the engine's only time input. It is always UTC with
//! minute resolution; converting a local civil time is the caller's job
//! (see the `--utc-offset` flag of the CLI).

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::error::TimeError;
use crate::julian::{JulianDay, calendar_to_jd};

/// Earliest supported year (Julian Day 0 epoch).
pub const MIN_YEAR: i32 = -4712;
/// Latest supported year.
pub const MAX_YEAR: i32 = 9999;

/// UTC calendar date and time of birth, minute resolution.
///
/// Fields are private so that every value in circulation has passed
/// calendar validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawBirthMoment")]
pub struct BirthMoment {
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
}

#[derive(Deserialize)]
struct RawBirthMoment {
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
}

impl TryFrom<RawBirthMoment> for BirthMoment {
    type Error = TimeError;

    fn try_from(raw: RawBirthMoment) -> Result<Self, Self::Error> {
        Self::new(raw.year, raw.month, raw.day, raw.hour, raw.minute)
    }
}

impl BirthMoment {
    /// Validate and construct a birth moment.
    ///
    /// Rejects impossible calendar dates (including Feb 29 in common years),
    /// hours outside 0..=23, minutes outside 0..=59, and years outside
    /// [`MIN_YEAR`]..=[`MAX_YEAR`].
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Result<Self, TimeError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(TimeError::YearOutOfRange(year));
        }
        if NaiveDate::from_ymd_opt(year, month, day).is_none() {
            return Err(TimeError::InvalidDate { year, month, day });
        }
        if NaiveTime::from_hms_opt(hour, minute, 0).is_none() {
            return Err(TimeError::InvalidTime { hour, minute });
        }
        Ok(Self {
            year,
            month,
            day,
            hour,
            minute,
        })
    }

    /// Parse separate `YYYY-MM-DD` and `HH:MM` strings.
    pub fn from_date_and_time(date: &str, time: &str) -> Result<Self, TimeError> {
        let d = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
            .map_err(|e| TimeError::Parse(format!("date {date:?}: {e}")))?;
        let t = NaiveTime::parse_from_str(time.trim(), "%H:%M")
            .map_err(|e| TimeError::Parse(format!("time {time:?}: {e}")))?;
        Self::try_from(NaiveDateTime::new(d, t))
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

    /// Day of month plus the time of day as a fraction.
    pub fn day_fraction(&self) -> f64 {
        self.day as f64 + (self.hour as f64 + self.minute as f64 / 60.0) / 24.0
    }

    /// Julian Day of this moment.
    pub fn julian_day(&self) -> JulianDay {
        JulianDay::new(calendar_to_jd(self.year, self.month, self.day_fraction()))
    }
}

impl TryFrom<NaiveDateTime> for BirthMoment {
    type Error = TimeError;

    /// Seconds are truncated.
    fn try_from(dt: NaiveDateTime) -> Result<Self, Self::Error> {
        Self::new(dt.year(), dt.month(), dt.day(), dt.hour(), dt.minute())
    }
}

impl TryFrom<DateTime<Utc>> for BirthMoment {
    type Error = TimeError;

    fn try_from(dt: DateTime<Utc>) -> Result<Self, Self::Error> {
        Self::try_from(dt.naive_utc())
    }
}

impl FromStr for BirthMoment {
    type Err = TimeError;

    /// Accepts `YYYY-MM-DD HH:MM` or `YYYY-MM-DDTHH:MM`, optionally
    /// followed by `Z`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_suffix('Z').unwrap_or(s);
        let dt = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M")
            .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M"))
            .map_err(|e| TimeError::Parse(format!("{s:?}: {e}")))?;
        Self::try_from(dt)
    }
}

impl Display for BirthMoment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}Z",
            self.year, self.month, self.day, self.hour, self.minute
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn new_constructor() {
        let m = BirthMoment::new(1990, 1, 15, 10, 30).unwrap();
        assert_eq!(m.year(), 1990);
        assert_eq!(m.month(), 1);
        assert_eq!(m.day(), 15);
        assert_eq!(m.hour(), 10);
        assert_eq!(m.minute(), 30);
    }

    #[test]
    fn rejects_impossible_dates() {
        assert!(matches!(
            BirthMoment::new(1990, 2, 30, 0, 0),
            Err(TimeError::InvalidDate { .. })
        ));
        assert!(matches!(
            BirthMoment::new(1990, 13, 1, 0, 0),
            Err(TimeError::InvalidDate { .. })
        ));
        assert!(matches!(
            BirthMoment::new(2023, 2, 29, 0, 0),
            Err(TimeError::InvalidDate { .. })
        ));
        assert!(BirthMoment::new(2024, 2, 29, 0, 0).is_ok());
    }

    #[test]
    fn rejects_bad_times() {
        assert_eq!(
            BirthMoment::new(1990, 1, 15, 24, 0),
            Err(TimeError::InvalidTime { hour: 24, minute: 0 })
        );
        assert_eq!(
            BirthMoment::new(1990, 1, 15, 10, 60),
            Err(TimeError::InvalidTime { hour: 10, minute: 60 })
        );
    }

    #[test]
    fn rejects_far_years() {
        assert_eq!(
            BirthMoment::new(12000, 1, 1, 0, 0),
            Err(TimeError::YearOutOfRange(12000))
        );
    }

    #[test]
    fn julian_day_of_reference_birth() {
        // 1990-01-15 00:00 = 2447906.5, plus 10.5 h
        let m = BirthMoment::new(1990, 1, 15, 10, 30).unwrap();
        assert_abs_diff_eq!(m.julian_day().value(), 2_447_906.5 + 10.5 / 24.0, epsilon = 1e-9);
    }

    #[test]
    fn parse_variants() {
        let expected = BirthMoment::new(1990, 1, 15, 10, 30).unwrap();
        assert_eq!("1990-01-15 10:30".parse::<BirthMoment>().unwrap(), expected);
        assert_eq!("1990-01-15T10:30".parse::<BirthMoment>().unwrap(), expected);
        assert_eq!("1990-01-15T10:30Z".parse::<BirthMoment>().unwrap(), expected);
        assert_eq!(BirthMoment::from_date_and_time("1990-01-15", "10:30").unwrap(), expected);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(matches!("yesterday".parse::<BirthMoment>(), Err(TimeError::Parse(_))));
        assert!(matches!(
            BirthMoment::from_date_and_time("1990-02-30", "10:30"),
            Err(TimeError::Parse(_))
        ));
        assert!(BirthMoment::from_date_and_time("1990-01-15", "25:00").is_err());
    }

    #[test]
    fn display_round_trips() {
        let m = BirthMoment::new(1990, 1, 15, 10, 30).unwrap();
        assert_eq!(m.to_string(), "1990-01-15T10:30Z");
        assert_eq!(m.to_string().parse::<BirthMoment>().unwrap(), m);
    }
}
