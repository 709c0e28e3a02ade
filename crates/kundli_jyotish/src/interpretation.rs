//! Interpretation synthesizer: turns a [`Chart`] into descriptive text.
//!
//! Output is a pure function of the chart's placements, so the same chart
//! always yields the same sentences in the same order.

use kundli_vedic_base::Graha;
use serde::{Deserialize, Serialize};

use crate::chart_types::Chart;
use crate::tables::{bhava_theme, nakshatra_traits, rashi_traits};

/// Line used when no aspect rule fires.
pub const NO_ASPECTS: &str = "No major aspects of significance were detected.";

/// Fixed note on dasha predictions.
pub const DASHA_NOTE: &str = "For accurate Dasha predictions, a professional Vedic astrologer \
should be consulted. Dasha calculations require exact birth time and additional considerations.";

/// Conjunction pairs and what sharing a bhava signifies.
const CONJUNCTIONS: [(Graha, Graha, &str, &str); 4] = [
    (
        Graha::Surya,
        Graha::Chandra,
        "Sun-Moon",
        "integration of conscious and unconscious drives",
    ),
    (
        Graha::Surya,
        Graha::Buddh,
        "Sun-Mercury",
        "intellectual identity and communication",
    ),
    (
        Graha::Shukra,
        Graha::Mangal,
        "Venus-Mars",
        "romantic and passionate energies",
    ),
    (
        Graha::Guru,
        Graha::Shani,
        "Jupiter-Saturn",
        "balance between expansion and limitation",
    ),
];

/// Order of the key-position lines.
const KEY_POSITION_ORDER: [Graha; 9] = [
    Graha::Surya,
    Graha::Chandra,
    Graha::Buddh,
    Graha::Shukra,
    Graha::Mangal,
    Graha::Guru,
    Graha::Shani,
    Graha::Rahu,
    Graha::Ketu,
];

const SUN_STRONG_HOUSES: [u8; 4] = [1, 5, 9, 10];
const MOON_FOCUS_HOUSES: [u8; 4] = [1, 2, 4, 7];

/// Descriptive reading of a chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Interpretation {
    pub personality: String,
    pub emotions: String,
    pub nakshatra: String,
    pub ascendant: String,
    pub life_themes: String,
    pub key_planetary_positions: Vec<String>,
    pub notable_aspects: Vec<String>,
    pub dasha: String,
}

/// Build the interpretation of a chart.
pub fn interpret(chart: &Chart) -> Interpretation {
    let sun = chart.placement(Graha::Surya);
    let moon = chart.placement(Graha::Chandra);
    let sun_sign = rashi_traits(sun.rashi);
    let moon_sign = rashi_traits(moon.rashi);
    let lagna = chart.lagna_rashi();

    Interpretation {
        personality: format!(
            "As a {} Sun, you tend to be {}, with natural {}.",
            sun.rashi, sun_sign.qualities, sun_sign.positive
        ),
        emotions: format!(
            "With Moon in {}, your emotional nature is {}, showing {} in feelings and instincts.",
            moon.rashi, moon_sign.qualities, moon_sign.positive
        ),
        nakshatra: format!(
            "Your Moon is in {} Nakshatra (pada {}), giving you qualities of being {}.",
            moon.nakshatra,
            moon.pada,
            nakshatra_traits(moon.nakshatra)
        ),
        ascendant: format!(
            "Your Ascendant (Lagna) is {lagna}, giving you {} qualities in how you present \
             yourself to the world.",
            rashi_traits(lagna).qualities
        ),
        life_themes: life_themes(chart),
        key_planetary_positions: key_positions(chart),
        notable_aspects: notable_aspects(chart),
        dasha: DASHA_NOTE.to_string(),
    }
}

/// Up to three occupied bhavas, most grahas first, ties to the lower number.
pub fn focus_bhavas(chart: &Chart) -> Vec<u8> {
    let mut counts = [0usize; 12];
    for p in &chart.planets {
        counts[usize::from(p.house - 1)] += 1;
    }
    let mut houses: Vec<u8> = (1..=12).filter(|&h| counts[usize::from(h - 1)] > 0).collect();
    // stable sort keeps ascending house order among ties
    houses.sort_by_key(|&h| std::cmp::Reverse(counts[usize::from(h - 1)]));
    houses.truncate(3);
    houses
}

fn life_themes(chart: &Chart) -> String {
    let meanings: Vec<&str> = focus_bhavas(chart)
        .into_iter()
        .filter_map(|h| bhava_theme(h).map(|t| t.meaning))
        .collect();
    let areas = if meanings.is_empty() {
        "various areas of life".to_string()
    } else {
        meanings.join(", ")
    };
    format!("The position of planets in your chart suggests focus in the areas of {areas}.")
}

fn bhava_name(house: u8) -> &'static str {
    bhava_theme(house).map_or("house", |t| t.name)
}

fn key_positions(chart: &Chart) -> Vec<String> {
    KEY_POSITION_ORDER
        .iter()
        .map(|&g| {
            let p = chart.placement(g);
            let line = format!("{g} in {} ({})", p.rashi, bhava_name(p.house));
            if g == Graha::Chandra {
                format!("{line} - Nakshatra: {}", p.nakshatra)
            } else {
                line
            }
        })
        .collect()
}

fn notable_aspects(chart: &Chart) -> Vec<String> {
    let mut aspects: Vec<String> = CONJUNCTIONS
        .iter()
        .filter(|(a, b, _, _)| chart.placement(*a).house == chart.placement(*b).house)
        .map(|(_, _, name, meaning)| format!("The {name} conjunction suggests {meaning}."))
        .collect();

    let sun = chart.placement(Graha::Surya);
    if SUN_STRONG_HOUSES.contains(&sun.house) {
        if let Some(theme) = bhava_theme(sun.house) {
            aspects.push(format!(
                "Sun in {} indicates strong self-expression through {}.",
                theme.name,
                theme.primary_concern()
            ));
        }
    }
    let moon = chart.placement(Graha::Chandra);
    if MOON_FOCUS_HOUSES.contains(&moon.house) {
        if let Some(theme) = bhava_theme(moon.house) {
            aspects.push(format!(
                "Moon in {} shows emotional focus on {}.",
                theme.name,
                theme.primary_concern()
            ));
        }
    }

    if aspects.is_empty() {
        aspects.push(NO_ASPECTS.to_string());
    }
    aspects
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::assemble_chart;
    use crate::chart_types::{ChartConfig, GrahaLongitudes};
    use kundli_frames::Longitude;
    use kundli_time::JulianDay;

    fn chart_with(lagna: f64, sapta: [f64; 7], rahu: f64) -> Chart {
        let longs = GrahaLongitudes::new(sapta.map(Longitude::new), Longitude::new(rahu));
        assemble_chart(
            JulianDay::J2000,
            0.0,
            Longitude::new(lagna),
            &longs,
            &ChartConfig::default(),
        )
    }

    #[test]
    fn conjunctions_and_house_rules() {
        // Lagna Mesha; Sun+Moon+Mercury in house 1, Venus+Mars in house 5
        let c = chart_with(0.0, [10.0, 12.0, 125.0, 15.0, 200.0, 130.0, 300.0], 60.0);
        let aspects = notable_aspects(&c);
        assert_eq!(
            aspects,
            vec![
                "The Sun-Moon conjunction suggests integration of conscious and \
                 unconscious drives.",
                "The Sun-Mercury conjunction suggests intellectual identity and communication.",
                "The Venus-Mars conjunction suggests romantic and passionate energies.",
                "Sun in Tanu Bhava indicates strong self-expression through personality.",
                "Moon in Tanu Bhava shows emotional focus on personality.",
            ]
        );
    }

    #[test]
    fn placeholder_when_nothing_fires() {
        // Sun house 2, Moon house 3, no shared pairs
        let c = chart_with(0.0, [40.0, 70.0, 100.0, 130.0, 160.0, 190.0, 220.0], 250.0);
        assert_eq!(notable_aspects(&c), vec![NO_ASPECTS.to_string()]);
    }

    #[test]
    fn focus_ties_break_low() {
        // two each in houses 1, 4, 7; Rahu/Ketu in 10/4
        let c = chart_with(0.0, [10.0, 12.0, 95.0, 200.0, 205.0, 100.0, 300.0], 280.0);
        assert_eq!(focus_bhavas(&c), vec![4, 1, 7]);
    }

    #[test]
    fn key_positions_order_and_moon_suffix() {
        let c = chart_with(0.0, [10.0, 12.0, 95.0, 200.0, 205.0, 100.0, 300.0], 280.0);
        let lines = key_positions(&c);
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "Sun in Aries (Tanu Bhava)");
        assert_eq!(lines[1], "Moon in Aries (Tanu Bhava) - Nakshatra: Ashwini");
        assert!(lines[2].starts_with("Mercury in Libra"));
        assert!(lines[8].starts_with("Ketu in Cancer"));
    }

    #[test]
    fn interpretation_fields() {
        let c = chart_with(0.0, [10.0, 12.0, 95.0, 200.0, 205.0, 100.0, 300.0], 280.0);
        let i = interpret(&c);
        assert_eq!(
            i.personality,
            "As a Aries Sun, you tend to be energetic, confident, and impulsive, with natural \
             leadership, courage, enthusiasm."
        );
        assert_eq!(
            i.ascendant,
            "Your Ascendant (Lagna) is Aries, giving you energetic, confident, and impulsive \
             qualities in how you present yourself to the world."
        );
        assert_eq!(i.dasha, DASHA_NOTE);
        let json = serde_json::to_value(&i).unwrap();
        assert!(json.get("notableAspects").is_some());
        assert!(json.get("keyPlanetaryPositions").is_some());
    }
}
