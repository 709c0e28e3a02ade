//! Low-order tropical longitude models for the grahas.
//!
//! Every model is a short series in Julian centuries `t` since J2000.0 and
//! returns a tropical [`Longitude`]:
//!
//! - Sun: mean longitude + 3-term equation of center + aberration/nutation
//!   (Meeus ch. 25, low accuracy)
//! - Moon: mean longitude + the 13 largest periodic terms of ELP-2000/82
//!   (Meeus ch. 47)
//! - Mercury..Saturn: per-body mean elements and a 3-term equation of
//!   center; Jupiter and Saturn add a great-inequality style term. This is the
//!   longitude in the planet's own orbit; no Earth-to-planet reduction is
//!   applied, so inner planets can appear far from the Sun.
//!
//! The series are truncated and the coefficients are fixed: adding terms
//! changes every chart.

use kundli_frames::{Longitude, fundamental_arguments};

use crate::graha::Graha;
use crate::lunar_nodes::{NodeMode, rahu};

/// Apparent longitude of the Sun.
pub fn sun_longitude(t: f64) -> Longitude {
    let t2 = t * t;
    let l0 = 280.46646 + 36000.76983 * t + 0.0003032 * t2;
    let m = (357.52911 + 35999.05029 * t - 0.0001537 * t2).to_radians();

    let c = (1.914602 - 0.004817 * t - 0.000014 * t2) * m.sin()
        + (0.019993 - 0.000101 * t) * (2.0 * m).sin()
        + 0.000289 * (3.0 * m).sin();

    let omega = (125.04 - 1934.136 * t).to_radians();
    Longitude::new(l0 + c - 0.00569 - 0.00478 * omega.sin())
}

/// Mean longitude of the Moon in degrees (quartic, unnormalized).
fn moon_mean_longitude_quartic_deg(t: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    218.316_447_7 + 481_267.881_234_21 * t - 0.001_578_6 * t2 + t3 / 538_841.0
        - t4 / 65_194_000.0
}

/// Longitude of the Moon.
pub fn moon_longitude(t: f64) -> Longitude {
    // [l, l', F, D, Omega]: Moon anomaly, Sun anomaly, latitude arg, elongation
    let [m, ms, f, d, _] = fundamental_arguments(t);

    let dl = 6.288774 * m.sin()
        + 1.274027 * (2.0 * d - m).sin()
        + 0.658314 * (2.0 * d).sin()
        + 0.213618 * (2.0 * m).sin()
        - 0.185116 * ms.sin()
        - 0.114332 * (2.0 * f).sin()
        + 0.058793 * (2.0 * d - 2.0 * m).sin()
        + 0.057066 * (2.0 * d - ms - m).sin()
        + 0.053322 * (2.0 * d + m).sin()
        + 0.045758 * (2.0 * d - ms).sin()
        - 0.040923 * (ms - m).sin()
        - 0.034720 * d.sin()
        - 0.030383 * (ms + m).sin();

    Longitude::new(moon_mean_longitude_quartic_deg(t) + dl)
}

/// Mean orbital elements of a planet as polynomials in `t`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalElements {
    /// Mean longitude, `[c0, c1]` in degrees.
    pub mean_longitude: [f64; 2],
    /// Mean anomaly, `[c0, c1]` in degrees.
    pub mean_anomaly: [f64; 2],
    /// Eccentricity, `[c0, c1, c2]`.
    pub eccentricity: [f64; 3],
    /// Longitude of perihelion, `[c0, c1, c2]` in degrees.
    ///
    /// Not used by [`planet_longitude`], which works from the tabulated mean
    /// anomaly directly.
    pub perihelion: [f64; 3],
}

impl OrbitalElements {
    pub const MERCURY: Self = Self {
        mean_longitude: [252.250906, 149472.6746358],
        mean_anomaly: [48.33076593, 149472.67486623],
        eccentricity: [0.20563175, 0.000020407, -0.0000000283],
        perihelion: [77.45611904, 0.16047689, -0.00004976],
    };

    pub const VENUS: Self = Self {
        mean_longitude: [181.979801, 58517.8156760],
        mean_anomaly: [212.60322776, 58517.80387664],
        eccentricity: [0.00677192, -0.000047765, 0.0000000981],
        perihelion: [131.56370300, 0.00000010, -0.00000001],
    };

    pub const MARS: Self = Self {
        mean_longitude: [355.433000, 19140.2993039],
        mean_anomaly: [319.51913365, 19139.85475499],
        eccentricity: [0.09340065, 0.000090484, -0.0000000806],
        perihelion: [336.04084100, 0.44020758, -0.00000038],
    };

    pub const JUPITER: Self = Self {
        mean_longitude: [34.351519, 3034.9056606],
        mean_anomaly: [225.32833132, 3034.69202376],
        eccentricity: [0.04849793, 0.000163225, -0.0000004714],
        perihelion: [14.33120687, 0.21252668, 0.00000208],
    };

    pub const SATURN: Self = Self {
        mean_longitude: [50.077444, 1222.1138488],
        mean_anomaly: [175.46622542, 1221.55147488],
        eccentricity: [0.05550825, -0.000346818, -0.0000006456],
        perihelion: [92.43194399, 0.54179478, -0.00000037],
    };

    /// Elements for Mercury, Venus, Mars, Jupiter, or Saturn.
    pub const fn of(graha: Graha) -> Option<&'static OrbitalElements> {
        match graha {
            Graha::Buddh => Some(&Self::MERCURY),
            Graha::Shukra => Some(&Self::VENUS),
            Graha::Mangal => Some(&Self::MARS),
            Graha::Guru => Some(&Self::JUPITER),
            Graha::Shani => Some(&Self::SATURN),
            Graha::Surya | Graha::Chandra | Graha::Rahu | Graha::Ketu => None,
        }
    }

    pub fn mean_longitude_deg(&self, t: f64) -> f64 {
        self.mean_longitude[0] + self.mean_longitude[1] * t
    }

    pub fn mean_anomaly_deg(&self, t: f64) -> f64 {
        self.mean_anomaly[0] + self.mean_anomaly[1] * t
    }

    pub fn perihelion_deg(&self, t: f64) -> f64 {
        self.perihelion[0] + self.perihelion[1] * t + self.perihelion[2] * t * t
    }

    pub fn eccentricity_at(&self, t: f64) -> f64 {
        let [e0, e1, e2] = self.eccentricity;
        e0 + e1 * t + e2 * t * t
    }
}

/// Three-term equation of center.
///
/// `C = (2e - e^3/4) sin M + 5/4 e^2 sin 2M + 13/12 e^3 sin 3M`. The series
/// is in radians; the models add it to degrees unscaled.
fn equation_of_center(e: f64, mean_anomaly_deg: f64) -> f64 {
    let m = mean_anomaly_deg.to_radians();
    let e2 = e * e;
    let e3 = e2 * e;
    (2.0 * e - 0.25 * e3) * m.sin() + 1.25 * e2 * (2.0 * m).sin() + 1.08333 * e3 * (3.0 * m).sin()
}

/// Mean anomaly of the Sun in degrees, as used by Jupiter's perturbation.
fn sun_mean_anomaly_deg(t: f64) -> f64 {
    357.529_109_2 + 35_999.050_290_9 * t
}

/// Great inequality correction in degrees for Jupiter and Saturn, zero for
/// every other graha.
///
/// Saturn's term is `2 M_J - 5 M_Sat` in the two planets' mean anomalies.
/// Jupiter's term pairs its own anomaly with the Sun's, `2 M_J - 5 M_Sun`.
fn great_inequality_deg(graha: Graha, t: f64) -> f64 {
    let mj = OrbitalElements::JUPITER.mean_anomaly_deg(t);
    match graha {
        Graha::Guru => {
            let msun = sun_mean_anomaly_deg(t);
            0.332 * (2.0 * mj - 5.0 * msun - 67.6).to_radians().sin()
        }
        Graha::Shani => {
            let msat = OrbitalElements::SATURN.mean_anomaly_deg(t);
            0.812 * (2.0 * mj - 5.0 * msat - 33.2).to_radians().sin()
        }
        _ => 0.0,
    }
}

fn kepler_longitude(graha: Graha, elements: &OrbitalElements, t: f64) -> Longitude {
    let e = elements.eccentricity_at(t);
    let c = equation_of_center(e, elements.mean_anomaly_deg(t));
    Longitude::new(elements.mean_longitude_deg(t) + c + great_inequality_deg(graha, t))
}

/// Longitude of Mercury, Venus, Mars, Jupiter, or Saturn.
///
/// Returns `None` for the Sun, Moon, and the nodes.
pub fn planet_longitude(graha: Graha, t: f64) -> Option<Longitude> {
    OrbitalElements::of(graha).map(|el| kepler_longitude(graha, el, t))
}

/// Tropical longitude of any graha.
///
/// Ketu is derived as the point opposite Rahu.
pub fn tropical_longitude(graha: Graha, t: f64, node_mode: NodeMode) -> Longitude {
    match graha {
        Graha::Surya => sun_longitude(t),
        Graha::Chandra => moon_longitude(t),
        Graha::Buddh => kepler_longitude(graha, &OrbitalElements::MERCURY, t),
        Graha::Shukra => kepler_longitude(graha, &OrbitalElements::VENUS, t),
        Graha::Mangal => kepler_longitude(graha, &OrbitalElements::MARS, t),
        Graha::Guru => kepler_longitude(graha, &OrbitalElements::JUPITER, t),
        Graha::Shani => kepler_longitude(graha, &OrbitalElements::SATURN, t),
        Graha::Rahu => rahu(t, node_mode),
        Graha::Ketu => rahu(t, node_mode).opposite(),
    }
}
