//! Mean obliquity of the ecliptic.
//!
//! Cubic polynomial in Julian centuries from J2000.0 (Laskar-style
//! truncation, Meeus ch. 22). Good to a few hundredths of an arcsecond over
//! the historical range the engine serves.

/// Mean obliquity of the ecliptic in degrees.
///
/// `t` = Julian centuries since J2000.0.
pub fn mean_obliquity_deg(t: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;
    23.439_291_11 - 0.013_004_166_67 * t - 0.000_000_163_89 * t2 + 0.000_000_503_61 * t3
}

/// Mean obliquity of the ecliptic in radians.
pub fn mean_obliquity_rad(t: f64) -> f64 {
    mean_obliquity_deg(t).to_radians()
}
