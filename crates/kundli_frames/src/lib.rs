//! Angle and frame helpers shared by every layer of the kundli engine.
//!
//! This crate provides:
//! - Angle normalization to [0, 360) and the [`Longitude`] newtype that
//!   can only hold a normalized ecliptic longitude
//! - Wrap-aware arc and separation tests
//! - Mean obliquity of the ecliptic
//! - Low-order nutation in longitude and the lunisolar fundamental arguments

pub mod angle;
pub mod nutation;
pub mod obliquity;

pub use angle::{Longitude, angular_separation, is_within_arc, normalize_360, normalize_hours};
pub use nutation::{
    fundamental_arguments, mean_node_linear_deg, moon_mean_longitude_deg,
    nutation_in_longitude_arcsec, nutation_in_longitude_at, sun_mean_longitude_deg,
};
pub use obliquity::{mean_obliquity_deg, mean_obliquity_rad};
