//! Low-order nutation in longitude and lunisolar fundamental arguments.
//!
//! The nutation series keeps only the three largest lunisolar terms
//! (18.6-year node term, semi-annual solar term, fortnightly lunar term).
//! It feeds both the equation of the equinoxes in sidereal time and the
//! apparent mean lunar node.
//!
//! Fundamental arguments follow Meeus, *Astronomical Algorithms* (2nd ed.),
//! chapter 47, in degrees.

use crate::angle::normalize_360;

/// Mean longitude of the Sun in degrees, linear in `t`.
///
/// `t` = Julian centuries since J2000.0.
pub fn sun_mean_longitude_deg(t: f64) -> f64 {
    280.4665 + 36000.7698 * t
}

/// Mean longitude of the Moon in degrees, linear in `t`.
pub fn moon_mean_longitude_deg(t: f64) -> f64 {
    218.3165 + 481267.8813 * t
}

/// Mean longitude of the Moon's ascending node in degrees, linear in `t`.
///
/// Retrograde: the node regresses about 19.34 deg per year.
pub fn mean_node_linear_deg(t: f64) -> f64 {
    125.04452 - 1934.136261 * t
}

/// Nutation in longitude (delta psi) in arcseconds.
///
/// `node_deg`, `sun_lon_deg`, `moon_lon_deg` are the mean longitudes of the
/// lunar node, Sun, and Moon in degrees.
///
/// `dpsi = -17.2 sin(node) - 1.32 sin(2 L_sun) - 0.23 sin(2 L_moon)`
pub fn nutation_in_longitude_arcsec(node_deg: f64, sun_lon_deg: f64, moon_lon_deg: f64) -> f64 {
    let node = normalize_360(node_deg).to_radians();
    let two_sun = normalize_360(2.0 * sun_lon_deg).to_radians();
    let two_moon = normalize_360(2.0 * moon_lon_deg).to_radians();
    -17.2 * node.sin() - 1.32 * two_sun.sin() - 0.23 * two_moon.sin()
}

/// Nutation in longitude in arcseconds at `t`, using the linear mean
/// arguments above.
pub fn nutation_in_longitude_at(t: f64) -> f64 {
    nutation_in_longitude_arcsec(
        mean_node_linear_deg(t),
        sun_mean_longitude_deg(t),
        moon_mean_longitude_deg(t),
    )
}

/// Compute the five lunisolar fundamental arguments in radians.
///
/// `t` = Julian centuries since J2000.0.
///
/// Returns `[l, l', F, D, Omega]` where:
/// - `l`  = mean anomaly of the Moon
/// - `l'` = mean anomaly of the Sun
/// - `F`  = Moon's argument of latitude
/// - `D`  = mean elongation of the Moon from the Sun
/// - `Omega` = mean longitude of the Moon's ascending node
///
/// Each is reduced to [0, 360) degrees before conversion.
pub fn fundamental_arguments(t: f64) -> [f64; 5] {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;

    let l = 134.963_396_4 + 477_198.867_505_5 * t + 0.008_741_4 * t2 + t3 / 69_699.0
        - t4 / 14_712_000.0;
    let lp = 357.529_109_2 + 35_999.050_290_9 * t - 0.000_153_6 * t2 + t3 / 24_490_000.0;
    let f = 93.272_095_0 + 483_202.017_523_3 * t - 0.003_653_9 * t2 - t3 / 3_526_000.0
        + t4 / 863_310_000.0;
    let d = 297.850_192_1 + 445_267.111_403_4 * t - 0.001_881_9 * t2 + t3 / 545_868.0
        - t4 / 113_065_000.0;
    let om = 125.044_52 - 1_934.136_261 * t + 0.002_070_8 * t2 + t3 / 450_000.0;

    [
        normalize_360(l).to_radians(),
        normalize_360(lp).to_radians(),
        normalize_360(f).to_radians(),
        normalize_360(d).to_radians(),
        normalize_360(om).to_radians(),
    ]
}
