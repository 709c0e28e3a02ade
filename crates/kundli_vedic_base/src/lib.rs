//! Vedic building blocks for the kundli engine.
//!
//! This crate provides:
//! - Ayanamsa for four sidereal reference systems
//! - Rashi (sign) and nakshatra/pada lookup from a sidereal longitude
//! - The [`Graha`] enum and tropical longitude models for all nine grahas
//! - Mean and true lunar nodes (Rahu/Ketu)
//! - Lagna (ascendant) and whole-sign bhavas
//! - [`GeoLocation`] with range validation
//!
//! Everything here is a pure function of its inputs.

pub mod ayanamsha;
pub mod bhava;
pub mod error;
pub mod geo;
pub mod graha;
pub mod lagna;
pub mod lunar_nodes;
pub mod nakshatra;
pub mod planets;
pub mod rashi;

pub use ayanamsha::{
    AYANAMSHA_EPOCH_JD, AyanamshaSystem, PRECESSION_ARCSEC_PER_YEAR, ayanamsha_deg,
    lahiri_ayanamsha_deg, tropical_to_sidereal,
};
pub use bhava::{Bhava, bhava_of_rashi, whole_sign_bhavas};
pub use error::VedicError;
pub use geo::GeoLocation;
pub use graha::{ALL_GRAHAS, Graha, SAPTA_GRAHAS, rashi_lord};
pub use lagna::{lagna_from_ramc, lagna_tropical};
pub use lunar_nodes::{NodeMode, mean_rahu, rahu, true_rahu};
pub use nakshatra::{
    ALL_NAKSHATRAS, NAKSHATRA_SPAN, Nakshatra, NakshatraInfo, PADA_SPAN,
    nakshatra_from_longitude,
};
pub use planets::{
    OrbitalElements, moon_longitude, planet_longitude, sun_longitude, tropical_longitude,
};
pub use rashi::{ALL_RASHIS, Dms, Rashi, RashiInfo, deg_to_dms, rashi_from_longitude};
