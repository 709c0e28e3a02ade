//! Dosha rule engine.
//!
//! Each rule is an independent predicate over the nine graha placements,
//! indexed by `Graha::index()`. Rules read only `rashi`, `house` and
//! `longitude`, so placements built by [`crate::place_graha`] from
//! synthetic longitudes exercise them exactly as computed ones do.

use kundli_vedic_base::{Graha, SAPTA_GRAHAS, rashi_lord};

use crate::chart_types::{ChartConfig, Doshas, GrahaPlacement, KaalSarpaType, SadeSatiPhase};

/// Houses in which Mars raises Mangal dosha.
const MANGAL_HOUSES: [u8; 5] = [1, 4, 7, 8, 12];

fn at(planets: &[GrahaPlacement; 9], graha: Graha) -> &GrahaPlacement {
    &planets[graha.index() as usize]
}

/// Mangal (Kuja) dosha.
///
/// Mars in house 1, 4, 7, 8 or 12, cancelled when Mars sits in a rashi
/// ruled by itself (Mesha, Vrischika) or by Jupiter (Dhanu, Meena), or
/// shares a house with Jupiter.
pub fn mangal_dosha(planets: &[GrahaPlacement; 9]) -> bool {
    let mars = at(planets, Graha::Mangal);
    if !MANGAL_HOUSES.contains(&mars.house) {
        return false;
    }
    let mitigated = matches!(rashi_lord(mars.rashi), Graha::Mangal | Graha::Guru)
        || mars.house == at(planets, Graha::Guru).house;
    !mitigated
}

/// Kaal Sarpa dosha: all seven classical grahas on the forward arc from
/// Rahu to Ketu, ends inclusive.
///
/// Returns the variant selected by Rahu's house, or `None`.
pub fn kaal_sarpa_dosha(planets: &[GrahaPlacement; 9]) -> Option<KaalSarpaType> {
    let rahu = at(planets, Graha::Rahu);
    let ketu = at(planets, Graha::Ketu).longitude;
    let hemmed = SAPTA_GRAHAS
        .iter()
        .all(|&g| at(planets, g).longitude.is_within_arc(rahu.longitude, ketu));
    hemmed.then(|| KaalSarpaType::for_rahu_house(rahu.house))
}

/// Sade Sati phase from Saturn's rashi counted from the Moon's.
pub fn sade_sati(planets: &[GrahaPlacement; 9]) -> Option<SadeSatiPhase> {
    let moon = at(planets, Graha::Chandra).rashi.index();
    let saturn = at(planets, Graha::Shani).rashi.index();
    match (saturn + 12 - moon) % 12 {
        11 => Some(SadeSatiPhase::Beginning),
        0 => Some(SadeSatiPhase::Peak),
        1 => Some(SadeSatiPhase::Ending),
        _ => None,
    }
}

/// Grahan dosha: both luminaries closer than `orb_deg` to a node.
pub fn grahan_dosha(planets: &[GrahaPlacement; 9], orb_deg: f64) -> bool {
    let rahu = at(planets, Graha::Rahu).longitude;
    let ketu = at(planets, Graha::Ketu).longitude;
    let near_node = |g: Graha| {
        let lon = at(planets, g).longitude;
        lon.separation(rahu) < orb_deg || lon.separation(ketu) < orb_deg
    };
    near_node(Graha::Surya) && near_node(Graha::Chandra)
}

/// Evaluate every dosha rule.
pub fn evaluate_doshas(planets: &[GrahaPlacement; 9], config: &ChartConfig) -> Doshas {
    let kaal_sarpa_type = kaal_sarpa_dosha(planets);
    let sade_sati_phase = sade_sati(planets);
    Doshas {
        mangal_dosha: mangal_dosha(planets),
        kaal_sarpa_dosha: kaal_sarpa_type.is_some(),
        kaal_sarpa_type,
        sade_sati: sade_sati_phase.is_some(),
        sade_sati_phase,
        grahan_dosha: grahan_dosha(planets, config.grahan_orb_deg),
    }
}
