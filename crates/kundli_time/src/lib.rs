//! Time handling for the kundli engine.
//!
//! This crate provides:
//! - [`BirthMoment`], a validated UTC calendar date and time of birth
//! - Julian Day <-> calendar conversions and the [`JulianDay`] newtype
//! - Greenwich and local sidereal time, and the RAMC
//!
//! Every downstream module works from a single [`JulianDay`] derived once
//! from the birth moment.

pub mod birth;
pub mod error;
pub mod julian;
pub mod sidereal;

pub use birth::BirthMoment;
pub use error::TimeError;
pub use julian::{DAYS_PER_CENTURY, J2000_JD, JulianDay, calendar_to_jd, jd_to_calendar};
pub use sidereal::{
    equation_of_equinoxes_deg, greenwich_sidereal_time_hours, local_sidereal_time_hours,
    ramc_deg, ramc_for,
};
