//! Types for assembled charts and their configuration.

use std::fmt::{Display, Formatter};

use kundli_frames::Longitude;
use kundli_time::JulianDay;
use kundli_vedic_base::{
    AyanamshaSystem, Bhava, Dms, Graha, Nakshatra, NodeMode, Rashi,
};
use serde::{Deserialize, Serialize};

use crate::error::ComputationError;

/// Default orb for the Grahan dosha, in degrees.
pub const DEFAULT_GRAHAN_ORB_DEG: f64 = 10.0;

/// Knobs for chart computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChartConfig {
    /// Sidereal reference system.
    pub ayanamsha: AyanamshaSystem,
    /// Mean or true lunar node for Rahu/Ketu.
    pub node_mode: NodeMode,
    /// Maximum Sun/Moon distance from a node for the Grahan dosha.
    pub grahan_orb_deg: f64,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            ayanamsha: AyanamshaSystem::Lahiri,
            node_mode: NodeMode::Mean,
            grahan_orb_deg: DEFAULT_GRAHAN_ORB_DEG,
        }
    }
}

impl ChartConfig {
    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ComputationError> {
        if !self.grahan_orb_deg.is_finite() {
            return Err(ComputationError::InvalidConfig("grahan_orb_deg must be finite"));
        }
        if self.grahan_orb_deg <= 0.0 || self.grahan_orb_deg > 90.0 {
            return Err(ComputationError::InvalidConfig(
                "grahan_orb_deg must be in (0, 90]",
            ));
        }
        Ok(())
    }
}

/// Sidereal longitudes of all 9 grahas.
///
/// Ketu is never stored independently: it is always the point opposite
/// Rahu.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrahaLongitudes {
    longitudes: [Longitude; 9],
}

impl GrahaLongitudes {
    /// Build from the seven classical grahas (in `SAPTA_GRAHAS` order) and
    /// Rahu.
    pub fn new(sapta: [Longitude; 7], rahu: Longitude) -> Self {
        let mut longitudes = [Longitude::ZERO; 9];
        longitudes[..7].copy_from_slice(&sapta);
        longitudes[Graha::Rahu.index() as usize] = rahu;
        longitudes[Graha::Ketu.index() as usize] = rahu.opposite();
        Self { longitudes }
    }

    /// Sidereal longitude of a graha.
    pub fn longitude(&self, graha: Graha) -> Longitude {
        self.longitudes[graha.index() as usize]
    }
}

/// The rising sign and degree.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ascendant {
    #[serde(rename = "sign")]
    pub rashi: Rashi,
    /// Sidereal longitude.
    pub longitude: Longitude,
    pub tropical_longitude: Longitude,
    /// Degrees within the rashi, [0, 30).
    pub degree: f64,
    pub nakshatra: Nakshatra,
    pub pada: u8,
}

/// A graha placed in the chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrahaPlacement {
    #[serde(rename = "name")]
    pub graha: Graha,
    /// Sidereal longitude.
    pub longitude: Longitude,
    #[serde(rename = "sign")]
    pub rashi: Rashi,
    /// Degrees within the rashi, [0, 30).
    pub degree: f64,
    pub dms: Dms,
    /// Whole-sign house number, 1-12.
    pub house: u8,
    pub nakshatra: Nakshatra,
    /// Pada within the nakshatra, 1-4.
    pub pada: u8,
    /// Ruler of the nakshatra.
    pub ruler: Graha,
}

/// Kaal Sarpa variant, selected by Rahu's house.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KaalSarpaType {
    Anant,
    Kulik,
    Vasuki,
    Shankhpal,
    Padma,
    Mahapadma,
    Takshak,
    Karkotak,
}

/// All 8 types, indexed by `rahu_house % 8`.
pub const ALL_KAAL_SARPA_TYPES: [KaalSarpaType; 8] = [
    KaalSarpaType::Anant,
    KaalSarpaType::Kulik,
    KaalSarpaType::Vasuki,
    KaalSarpaType::Shankhpal,
    KaalSarpaType::Padma,
    KaalSarpaType::Mahapadma,
    KaalSarpaType::Takshak,
    KaalSarpaType::Karkotak,
];

impl KaalSarpaType {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Anant => "Anant",
            Self::Kulik => "Kulik",
            Self::Vasuki => "Vasuki",
            Self::Shankhpal => "Shankhpal",
            Self::Padma => "Padma",
            Self::Mahapadma => "Mahapadma",
            Self::Takshak => "Takshak",
            Self::Karkotak => "Karkotak",
        }
    }

    /// Type for Rahu in the given house (1-12).
    pub const fn for_rahu_house(house: u8) -> Self {
        ALL_KAAL_SARPA_TYPES[(house % 8) as usize]
    }
}

impl Display for KaalSarpaType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Phase of Sade Sati, by Saturn's sign relative to the natal Moon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SadeSatiPhase {
    /// Saturn in the 12th sign from the Moon.
    Beginning,
    /// Saturn in the Moon's sign.
    Peak,
    /// Saturn in the 2nd sign from the Moon.
    Ending,
}

impl SadeSatiPhase {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Beginning => "Beginning Phase",
            Self::Peak => "Peak Phase",
            Self::Ending => "Ending Phase",
        }
    }
}

impl Display for SadeSatiPhase {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Dosha flags derived from a chart.
///
/// Each `Option` is `Some` exactly when its flag is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Doshas {
    pub mangal_dosha: bool,
    pub kaal_sarpa_dosha: bool,
    pub kaal_sarpa_type: Option<KaalSarpaType>,
    pub sade_sati: bool,
    pub sade_sati_phase: Option<SadeSatiPhase>,
    pub grahan_dosha: bool,
}

/// A complete sidereal birth chart.
///
/// Built once by [`crate::compute_chart`]; the dosha and interpretation
/// stages only read it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chart {
    pub julian_day: JulianDay,
    /// Ayanamsha applied, in degrees.
    pub ayanamsha: f64,
    pub config: ChartConfig,
    pub ascendant: Ascendant,
    /// Whole-sign houses 1-12.
    pub houses: [Bhava; 12],
    /// Placements indexed by `Graha::index()`.
    pub planets: [GrahaPlacement; 9],
    pub doshas: Doshas,
}

impl Chart {
    /// Placement of a graha.
    pub fn placement(&self, graha: Graha) -> &GrahaPlacement {
        &self.planets[graha.index() as usize]
    }

    /// Rashi of the lagna (house 1).
    pub fn lagna_rashi(&self) -> Rashi {
        self.ascendant.rashi
    }

    /// House by number, 1-12.
    pub fn house(&self, number: u8) -> Option<&Bhava> {
        self.houses.get(usize::from(number).checked_sub(1)?)
    }

    /// Grahas occupying a house.
    pub fn planets_in_bhava(&self, number: u8) -> impl Iterator<Item = &GrahaPlacement> {
        self.planets.iter().filter(move |p| p.house == number)
    }
}
