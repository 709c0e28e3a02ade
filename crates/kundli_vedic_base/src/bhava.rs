//! Whole-sign bhavas (houses).
//!
//! Bhava 1 is the lagna's rashi and bhava k is the rashi k-1 signs further
//! on. Each bhava spans its whole rashi, so cusps are the sign boundaries.

use kundli_frames::{Longitude, normalize_360};
use serde::{Deserialize, Serialize};

use crate::rashi::Rashi;

/// One whole-sign house.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bhava {
    /// House number, 1-12.
    #[serde(rename = "house")]
    pub number: u8,
    /// The rashi occupying the house.
    #[serde(rename = "sign")]
    pub rashi: Rashi,
    /// Start of the house in sidereal degrees.
    #[serde(rename = "startDegree")]
    pub start_deg: f64,
    /// End of the house in sidereal degrees, normalized (Meena ends at 0).
    #[serde(rename = "endDegree")]
    pub end_deg: f64,
}

impl Bhava {
    /// Whether a sidereal longitude falls in this house.
    pub fn contains(&self, lon: Longitude) -> bool {
        let d = lon.deg();
        d >= self.start_deg && d < self.start_deg + 30.0
    }
}

/// The 12 whole-sign houses for a lagna rashi.
pub fn whole_sign_bhavas(lagna: Rashi) -> [Bhava; 12] {
    std::array::from_fn(|i| {
        let rashi = lagna.nth_forward(i as u8);
        let start = rashi.start_deg();
        Bhava {
            number: i as u8 + 1,
            rashi,
            start_deg: start,
            end_deg: normalize_360(start + 30.0),
        }
    })
}

/// House number (1-12) of a rashi given the lagna rashi.
pub const fn bhava_of_rashi(lagna: Rashi, rashi: Rashi) -> u8 {
    (rashi.index() + 12 - lagna.index()) % 12 + 1
}
