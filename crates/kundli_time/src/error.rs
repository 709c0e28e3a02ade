//! Error types for birth-moment validation and parsing.

use thiserror::Error;

/// Errors from constructing or parsing a [`crate::BirthMoment`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// Calendar date does not exist (e.g. 1990-02-30, month 13).
    #[error("invalid calendar date {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },
    /// Time of day outside 00:00..23:59.
    #[error("invalid time of day {hour:02}:{minute:02}")]
    InvalidTime { hour: u32, minute: u32 },
    /// Year outside the supported range.
    #[error("year {0} outside supported range -4712..=9999")]
    YearOutOfRange(i32),
    /// Free-form date/time text could not be parsed.
    #[error("could not parse date/time: {0}")]
    Parse(String),
}
