//! Greenwich and local sidereal time, and the RAMC.
//!
//! Mean sidereal time follows the IAU 1982 expression in days and Julian
//! centuries from J2000.0 (Meeus eq. 12.4), plus a low-order equation of the
//! equinoxes built from [`kundli_frames::nutation_in_longitude_at`].
//!
//! The birth moment is treated as UT; the UT1 - UTC difference (< 0.9 s)
//! is below the resolution of the chart.

use kundli_frames::{mean_obliquity_deg, normalize_360, normalize_hours, nutation_in_longitude_at};

use crate::julian::JulianDay;

/// Equation of the equinoxes term added to mean sidereal time, in degrees.
///
/// `dpsi * cos(eps) / 15` with `dpsi` in arcseconds, added to the mean
/// sidereal angle as degrees. Chart goldens depend on this exact scaling.
pub fn equation_of_equinoxes_deg(t: f64) -> f64 {
    let dpsi = nutation_in_longitude_at(t);
    let eps = mean_obliquity_deg(t).to_radians();
    dpsi * eps.cos() / 15.0
}

/// Greenwich sidereal time in hours, [0, 24).
pub fn greenwich_sidereal_time_hours(jd: JulianDay) -> f64 {
    let t = jd.centuries_since_j2000();
    let du = jd.days_since_j2000();
    let t2 = t * t;
    let t3 = t2 * t;

    let mean_deg = 280.460_618_37 + 360.985_647_366_29 * du + 0.000_387_933 * t2
        - t3 / 38_710_000.0;
    let theta = normalize_360(mean_deg + equation_of_equinoxes_deg(t));
    normalize_hours(theta / 15.0)
}

/// Local sidereal time in hours from GST and observer east longitude.
///
/// `LST = GST + longitude / 15`, wrapped to [0, 24).
pub fn local_sidereal_time_hours(gst_hours: f64, longitude_east_deg: f64) -> f64 {
    normalize_hours(gst_hours + longitude_east_deg / 15.0)
}

/// Right Ascension of the Midheaven in degrees, [0, 360).
///
/// By definition RAMC is the local sidereal time expressed as an angle.
pub fn ramc_deg(lst_hours: f64) -> f64 {
    normalize_360(lst_hours * 15.0)
}

/// RAMC in degrees for a Julian Day and observer east longitude.
pub fn ramc_for(jd: JulianDay, longitude_east_deg: f64) -> f64 {
    let gst = greenwich_sidereal_time_hours(jd);
    ramc_deg(local_sidereal_time_hours(gst, longitude_east_deg))
}
