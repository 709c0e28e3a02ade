//! Lunar node (Rahu/Ketu) longitude computation.
//!
//! Mean node: the retrograde polynomial for the Moon's ascending node,
//! Omega = 125.04452 - 1934.136261 T + 0.0020708 T^2 + T^3 / 450000,
//! plus the low-order nutation in longitude evaluated at that Omega.
//!
//! True node: mean + short-period perturbation corrections (13 sinusoidal
//! terms from Meeus, *Astronomical Algorithms* 2nd ed., Chapter 47).
//!
//! Ketu is always exactly opposite Rahu; callers derive it with
//! [`Longitude::opposite`].

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use kundli_frames::{
    Longitude, fundamental_arguments, moon_mean_longitude_deg, nutation_in_longitude_arcsec,
    sun_mean_longitude_deg,
};
use serde::{Deserialize, Serialize};

use crate::error::VedicError;

/// Mean or true (perturbed) node position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NodeMode {
    /// Mean node: smooth polynomial motion plus nutation.
    #[default]
    Mean,
    /// True node: mean + short-period perturbation corrections.
    True,
}

/// Array of all node mode variants.
pub const ALL_MODES: [NodeMode; 2] = [NodeMode::Mean, NodeMode::True];

impl NodeMode {
    /// All mode variants.
    pub const fn all() -> &'static [NodeMode] {
        &ALL_MODES
    }

    pub const fn id(self) -> &'static str {
        match self {
            Self::Mean => "mean",
            Self::True => "true",
        }
    }
}

impl Display for NodeMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for NodeMode {
    type Err = VedicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mean" => Ok(Self::Mean),
            "true" => Ok(Self::True),
            _ => Err(VedicError::UnknownName {
                kind: "node mode",
                name: s.to_string(),
            }),
        }
    }
}

/// Mean longitude of the ascending node in degrees, cubic in `t`, unnormalized.
fn mean_node_polynomial_deg(t: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;
    125.04452 - 1934.136261 * t + 0.0020708 * t2 + t3 / 450_000.0
}

/// Mean Rahu (ascending node), tropical.
///
/// `t` = Julian centuries since J2000.0.
pub fn mean_rahu(t: f64) -> Longitude {
    let omega = mean_node_polynomial_deg(t);
    let dpsi = nutation_in_longitude_arcsec(
        omega,
        sun_mean_longitude_deg(t),
        moon_mean_longitude_deg(t),
    );
    Longitude::new(omega + dpsi / 3600.0)
}

/// Short-period perturbation correction for the true node, in degrees.
///
/// `args` = `[l, l', F, D, Omega]` in radians (from `fundamental_arguments`).
fn node_perturbation_deg(args: &[f64; 5]) -> f64 {
    // [nl, nl', nF, nD, nOmega, amplitude_deg]
    #[rustfmt::skip]
    static TERMS: [[f64; 6]; 13] = [
        // nl   nl'   nF    nD    nOm   amplitude (deg)
        [ 0.0,  0.0,  0.0,  0.0,  1.0, -1.4979],
        [ 0.0,  0.0,  2.0, -2.0,  0.0,  0.1500],
        [ 0.0,  0.0,  2.0,  0.0,  0.0, -0.1226],
        [ 0.0,  0.0,  0.0,  0.0,  2.0,  0.1176],
        [ 1.0,  0.0,  0.0,  0.0,  0.0, -0.0801],
        [ 0.0,  1.0,  0.0,  0.0,  0.0,  0.0056],
        [ 0.0,  0.0,  2.0,  0.0, -2.0, -0.0047],
        [ 1.0,  0.0,  2.0,  0.0,  0.0, -0.0043],
        [ 0.0,  0.0,  2.0, -2.0,  2.0,  0.0040],
        [ 0.0,  1.0,  0.0,  0.0, -1.0,  0.0037],
        [ 0.0,  0.0,  0.0,  2.0,  0.0, -0.0030],
        [ 2.0,  0.0,  0.0,  0.0,  0.0, -0.0020],
        [ 0.0,  1.0,  2.0, -2.0,  0.0,  0.0015],
    ];

    TERMS
        .iter()
        .map(|term| {
            let angle = term[0] * args[0]
                + term[1] * args[1]
                + term[2] * args[2]
                + term[3] * args[3]
                + term[4] * args[4];
            term[5] * angle.sin()
        })
        .sum()
}

/// True Rahu (ascending node), tropical: mean node + perturbations.
pub fn true_rahu(t: f64) -> Longitude {
    let args = fundamental_arguments(t);
    mean_rahu(t).offset(node_perturbation_deg(&args))
}

/// Rahu for the given mode.
pub fn rahu(t: f64, mode: NodeMode) -> Longitude {
    match mode {
        NodeMode::Mean => mean_rahu(t),
        NodeMode::True => true_rahu(t),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn mean_rahu_at_j2000() {
        // 125.04452 deg, shifted by about -14 arcsec of nutation
        let deg = mean_rahu(0.0).deg();
        assert_abs_diff_eq!(deg, 125.0406, epsilon = 0.002);
    }

    #[test]
    fn ketu_is_opposite_rahu() {
        for &t in &[0.0, 0.1, -0.5, 1.0] {
            for &mode in NodeMode::all() {
                let r = rahu(t, mode);
                let k = r.opposite();
                assert_abs_diff_eq!(k.minus(r.deg()).deg(), 180.0, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn mean_node_retrograde_rate() {
        // Mean node regresses ~19.34 deg/year
        let r1 = mean_rahu(0.0).deg();
        let r2 = mean_rahu(0.01).deg();
        let per_year = r2 - r1;
        assert_abs_diff_eq!(per_year, -19.34, epsilon = 0.1);
    }

    #[test]
    fn true_node_stays_near_mean() {
        for i in -20..=20 {
            let t = i as f64 * 0.05;
            let sep = mean_rahu(t).separation(true_rahu(t));
            assert!(sep < 2.0, "t={t}: true-mean separation {sep}");
        }
    }

    #[test]
    fn parse_modes() {
        assert_eq!("Mean".parse::<NodeMode>().unwrap(), NodeMode::Mean);
        assert_eq!("true".parse::<NodeMode>().unwrap(), NodeMode::True);
        assert!("osculating".parse::<NodeMode>().is_err());
    }
}
