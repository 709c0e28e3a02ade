//! Lagna (Ascendant) computation.
//!
//! Standard spherical astronomy formula for the ecliptic longitude rising
//! on the eastern horizon (Meeus, "Astronomical Algorithms" 2nd ed, ch. 14):
//!
//! `Asc = atan2(-cos(RAMC), sin(RAMC)*cos(eps) + tan(phi)*sin(eps))`
//!
//! With this argument order atan2 lands on the western intersection of the
//! ecliptic and horizon (Meeus adds 180 deg). The engine's charts are
//! defined by this exact expression, so it is applied unchanged.

use kundli_frames::{Longitude, mean_obliquity_deg};
use kundli_time::{JulianDay, ramc_for};

use crate::geo::GeoLocation;

/// Tropical ascendant from RAMC, geographic latitude, and obliquity, all in
/// degrees.
pub fn lagna_from_ramc(ramc_deg: f64, latitude_deg: f64, obliquity_deg: f64) -> Longitude {
    let ramc = ramc_deg.to_radians();
    let phi = latitude_deg.to_radians();
    let eps = obliquity_deg.to_radians();

    let asc = f64::atan2(-ramc.cos(), ramc.sin() * eps.cos() + phi.tan() * eps.sin());
    Longitude::from_radians(asc)
}

/// Tropical ascendant for a moment and place, using the mean obliquity of
/// date.
pub fn lagna_tropical(jd: JulianDay, location: &GeoLocation) -> Longitude {
    let ramc = ramc_for(jd, location.longitude_deg);
    let eps = mean_obliquity_deg(jd.centuries_since_j2000());
    lagna_from_ramc(ramc, location.latitude_deg, eps)
}
