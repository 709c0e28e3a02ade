//! Vedic chart assembly, doshas and interpretation.
//!
//! This crate provides:
//! - [`compute_chart`]: birth moment and place to a complete sidereal
//!   [`Chart`] (lagna, whole-sign bhavas, nine graha placements)
//! - The dosha rule engine (Mangal, Kaal Sarpa, Sade Sati, Grahan)
//! - [`interpret`]: template-based descriptive reading of a chart
//!
//! All computation is synchronous and free of shared state.

pub mod chart;
pub mod chart_types;
pub mod dosha;
pub mod error;
pub mod interpretation;
pub mod tables;

pub use chart::{
    assemble_chart, compute_chart, compute_chart_with_config, place_graha, sidereal_longitudes,
};
pub use chart_types::{
    ALL_KAAL_SARPA_TYPES, Ascendant, Chart, ChartConfig, DEFAULT_GRAHAN_ORB_DEG, Doshas,
    GrahaLongitudes, GrahaPlacement, KaalSarpaType, SadeSatiPhase,
};
pub use dosha::{evaluate_doshas, grahan_dosha, kaal_sarpa_dosha, mangal_dosha, sade_sati};
pub use error::ComputationError;
pub use interpretation::{DASHA_NOTE, Interpretation, NO_ASPECTS, focus_bhavas, interpret};
pub use tables::{BhavaTheme, RashiTraits, bhava_theme, nakshatra_traits, rashi_traits};
