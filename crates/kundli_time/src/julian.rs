//! Julian Day <-> proleptic Gregorian calendar conversion.
//!
//! Source: Meeus, *Astronomical Algorithms* (2nd ed.), chapter 7.
//! The Gregorian correction term is applied to every date, so dates before
//! 1582-10-15 are interpreted on the proleptic Gregorian calendar.

use serde::{Deserialize, Serialize};

/// Julian Day of the J2000.0 epoch (2000-01-01 12:00 TT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Days in a Julian century.
pub const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Julian Day of a calendar date.
///
/// `day_fraction` carries the time of day, e.g. 15.4375 = 15th at 10:30.
/// January and February count as months 13 and 14 of the previous year.
pub fn calendar_to_jd(year: i32, month: u32, day_fraction: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year as f64 - 1.0, month as f64 + 12.0)
    } else {
        (year as f64, month as f64)
    };
    let a = (y / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + day_fraction + b - 1524.5
}

/// Calendar date of a Julian Day: `(year, month, day_fraction)`.
pub fn jd_to_calendar(jd: f64) -> (i32, u32, f64) {
    let shifted = jd + 0.5;
    let z = shifted.floor();
    let f = shifted - z;
    let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
    let a = z + 1.0 + alpha - (alpha / 4.0).floor();
    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day = b - d - (30.6001 * e).floor() + f;
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
    let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };
    (year as i32, month as u32, day)
}

/// A Julian Day number, the engine's canonical time axis.
///
/// Derived once from a [`crate::BirthMoment`]; every later stage takes it by
/// value.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JulianDay(f64);

impl JulianDay {
    /// Wrap a raw Julian Day value.
    pub const fn new(jd: f64) -> Self {
        Self(jd)
    }

    /// The J2000.0 epoch.
    pub const J2000: Self = Self(J2000_JD);

    /// Raw Julian Day.
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Julian centuries since J2000.0: `(jd - 2451545.0) / 36525`.
    pub fn centuries_since_j2000(self) -> f64 {
        (self.0 - J2000_JD) / DAYS_PER_CENTURY
    }

    /// Days since J2000.0.
    pub fn days_since_j2000(self) -> f64 {
        self.0 - J2000_JD
    }
}

impl From<JulianDay> for f64 {
    fn from(jd: JulianDay) -> Self {
        jd.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn j2000_noon() {
        assert_abs_diff_eq!(calendar_to_jd(2000, 1, 1.5), J2000_JD, epsilon = 1e-9);
    }

    #[test]
    fn sputnik_launch() {
        // Meeus example 7.a: 1957 October 4.81
        assert_abs_diff_eq!(calendar_to_jd(1957, 10, 4.81), 2_436_116.31, epsilon = 1e-9);
    }

    #[test]
    fn january_uses_previous_year() {
        // 1990-01-15 00:00 UTC
        assert_abs_diff_eq!(calendar_to_jd(1990, 1, 15.0), 2_447_906.5, epsilon = 1e-9);
    }

    #[test]
    fn leap_day() {
        let feb29 = calendar_to_jd(2024, 2, 29.0);
        let mar1 = calendar_to_jd(2024, 3, 1.0);
        assert_abs_diff_eq!(mar1 - feb29, 1.0, epsilon = 1e-9);
    }

    #[test]
    fn calendar_round_trip() {
        for &(y, m, d) in &[(2000, 1, 1.5), (1990, 1, 15.4375), (1857, 9, 3.25), (2100, 12, 31.0)] {
            let jd = calendar_to_jd(y, m, d);
            let (y2, m2, d2) = jd_to_calendar(jd);
            assert_eq!((y2, m2), (y, m), "jd {jd}");
            assert_abs_diff_eq!(d2, d, epsilon = 1e-6);
        }
    }

    #[test]
    fn centuries() {
        assert_eq!(JulianDay::J2000.centuries_since_j2000(), 0.0);
        let jd = JulianDay::new(J2000_JD + DAYS_PER_CENTURY);
        assert_abs_diff_eq!(jd.centuries_since_j2000(), 1.0, epsilon = 1e-15);
    }
}
