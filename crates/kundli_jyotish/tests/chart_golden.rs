//! End-to-end chart regression for 1990-01-15 10:30 UTC, New Delhi.

use approx::assert_abs_diff_eq;
use kundli_jyotish::{
    ChartConfig, ComputationError, SadeSatiPhase, compute_chart, compute_chart_with_config,
    interpret,
};
use kundli_time::{BirthMoment, TimeError};
use kundli_vedic_base::{GeoLocation, Graha, Nakshatra, NodeMode, Rashi};

fn delhi() -> GeoLocation {
    GeoLocation::new(28.6139, 77.2090)
}

fn reference_moment() -> BirthMoment {
    BirthMoment::from_date_and_time("1990-01-15", "10:30").unwrap()
}

#[test]
fn reference_chart_ascendant() {
    let chart = compute_chart(reference_moment(), delhi()).unwrap();
    assert_abs_diff_eq!(chart.julian_day.value(), 2_447_906.9375, epsilon = 1e-9);
    assert_abs_diff_eq!(chart.ayanamsha, 23.622_454, epsilon = 1e-6);
    assert_abs_diff_eq!(chart.ascendant.tropical_longitude.deg(), 273.4437, epsilon = 1e-3);
    assert_abs_diff_eq!(chart.ascendant.longitude.deg(), 249.8212, epsilon = 1e-3);
    assert_eq!(chart.lagna_rashi(), Rashi::Dhanu);
    assert_eq!(chart.ascendant.nakshatra, Nakshatra::Mula);
    assert_eq!(chart.ascendant.pada, 3);
    assert_eq!(chart.houses[0].rashi, Rashi::Dhanu);
    assert_eq!(chart.houses[11].rashi, Rashi::Vrischika);
}

#[test]
fn reference_chart_placements() {
    let chart = compute_chart(reference_moment(), delhi()).unwrap();
    let expected = [
        (Graha::Surya, 271.3964, Rashi::Makara, 2, Nakshatra::UttaraAshadha, 2),
        (Graha::Chandra, 143.0727, Rashi::Simha, 9, Nakshatra::PurvaPhalguni, 3),
        (Graha::Mangal, 225.2536, Rashi::Vrischika, 12, Nakshatra::Anuradha, 4),
        (Graha::Buddh, 100.0312, Rashi::Karka, 8, Nakshatra::Pushya, 3),
        (Graha::Guru, 68.6687, Rashi::Mithuna, 7, Nakshatra::Ardra, 1),
        (Graha::Shukra, 89.7145, Rashi::Mithuna, 7, Nakshatra::Punarvasu, 3),
        (Graha::Shani, 264.0125, Rashi::Dhanu, 1, Nakshatra::PurvaAshadha, 4),
        (Graha::Rahu, 294.0747, Rashi::Makara, 2, Nakshatra::Dhanishtha, 1),
        (Graha::Ketu, 114.0747, Rashi::Karka, 8, Nakshatra::Ashlesha, 3),
    ];
    for (graha, lon, rashi, house, nakshatra, pada) in expected {
        let p = chart.placement(graha);
        assert_abs_diff_eq!(p.longitude.deg(), lon, epsilon = 1e-3);
        assert_eq!(p.rashi, rashi, "{graha} rashi");
        assert_eq!(p.house, house, "{graha} house");
        assert_eq!(p.nakshatra, nakshatra, "{graha} nakshatra");
        assert_eq!(p.pada, pada, "{graha} pada");
    }
    assert_eq!(chart.placement(Graha::Chandra).ruler, Graha::Shukra);
}

#[test]
fn reference_chart_doshas() {
    let chart = compute_chart(reference_moment(), delhi()).unwrap();
    // Mars in house 12 but in Vrischika
    assert!(!chart.doshas.mangal_dosha);
    assert!(!chart.doshas.kaal_sarpa_dosha);
    assert!(chart.doshas.kaal_sarpa_type.is_none());
    assert!(!chart.doshas.sade_sati);
    assert!(chart.doshas.sade_sati_phase.is_none());
    assert!(!chart.doshas.grahan_dosha);
}

#[test]
fn reference_interpretation() {
    let chart = compute_chart(reference_moment(), delhi()).unwrap();
    let i = interpret(&chart);
    assert_eq!(
        i.personality,
        "As a Capricorn Sun, you tend to be disciplined, responsible, and reserved, with \
         natural discipline, responsibility, ambition."
    );
    assert_eq!(
        i.emotions,
        "With Moon in Leo, your emotional nature is dramatic, confident, and generous, showing \
         creativity, generosity, loyalty in feelings and instincts."
    );
    assert_eq!(
        i.nakshatra,
        "Your Moon is in Purva Phalguni Nakshatra (pada 3), giving you qualities of being \
         playful, creative, indulgent, passionate."
    );
    assert_eq!(
        i.ascendant,
        "Your Ascendant (Lagna) is Sagittarius, giving you optimistic, freedom-loving, and \
         philosophical qualities in how you present yourself to the world."
    );
    assert_eq!(
        i.life_themes,
        "The position of planets in your chart suggests focus in the areas of finances, \
         personal resources, and speech, partnerships, marriage, and business relationships, \
         transformation, joint resources, and mysteries."
    );
    assert_eq!(
        i.key_planetary_positions,
        vec![
            "Sun in Capricorn (Dhana Bhava)",
            "Moon in Leo (Dharma Bhava) - Nakshatra: Purva Phalguni",
            "Mercury in Cancer (Randhra Bhava)",
            "Venus in Gemini (Yuvati Bhava)",
            "Mars in Scorpio (Vyaya Bhava)",
            "Jupiter in Gemini (Yuvati Bhava)",
            "Saturn in Sagittarius (Tanu Bhava)",
            "Rahu in Capricorn (Dhana Bhava)",
            "Ketu in Cancer (Randhra Bhava)",
        ]
    );
    assert_eq!(
        i.notable_aspects,
        vec!["No major aspects of significance were detected."]
    );
}

#[test]
fn repeated_runs_serialize_identically() {
    let a = compute_chart(reference_moment(), delhi()).unwrap();
    let b = compute_chart(reference_moment(), delhi()).unwrap();
    assert_eq!(a, b);
    assert_eq!(
        serde_json::to_string(&a).unwrap(),
        serde_json::to_string(&b).unwrap()
    );
    assert_eq!(
        serde_json::to_string(&interpret(&a)).unwrap(),
        serde_json::to_string(&interpret(&b)).unwrap()
    );
}

#[test]
fn chart_json_shape() {
    let chart = compute_chart(reference_moment(), delhi()).unwrap();
    let json = serde_json::to_value(&chart).unwrap();
    assert_eq!(json["ascendant"]["sign"], "Sagittarius");
    assert_eq!(json["planets"][0]["name"], "Sun");
    assert_eq!(json["planets"][0]["sign"], "Capricorn");
    assert_eq!(json["planets"][0]["house"], 2);
    assert_eq!(json["planets"][1]["nakshatra"], "Purva Phalguni");
    assert_eq!(json["houses"][0]["house"], 1);
    assert_eq!(json["doshas"]["mangalDosha"], false);
    assert!(json["doshas"]["kaalSarpaType"].is_null());
    assert_eq!(json["config"]["nodeMode"], "mean");
}

#[test]
fn json_round_trip_preserves_chart() {
    let chart = compute_chart(reference_moment(), delhi()).unwrap();
    let text = serde_json::to_string(&chart).unwrap();
    let back: kundli_jyotish::Chart = serde_json::from_str(&text).unwrap();
    assert_eq!(back.lagna_rashi(), chart.lagna_rashi());
    assert_eq!(back.doshas, chart.doshas);
    assert_eq!(back.planets.map(|p| p.house), chart.planets.map(|p| p.house));
}

#[test]
fn true_node_moves_rahu_only() {
    let cfg = ChartConfig {
        node_mode: NodeMode::True,
        ..ChartConfig::default()
    };
    let mean = compute_chart(reference_moment(), delhi()).unwrap();
    let tru = compute_chart_with_config(reference_moment(), delhi(), &cfg).unwrap();
    assert_abs_diff_eq!(
        tru.placement(Graha::Rahu).longitude.deg(),
        318.3173 - 23.622_454,
        epsilon = 1e-3
    );
    assert_eq!(
        tru.placement(Graha::Surya).longitude,
        mean.placement(Graha::Surya).longitude
    );
    assert_eq!(tru.ascendant, mean.ascendant);
}

#[test]
fn sade_sati_peak_when_moon_joins_saturn() {
    // 1990-01-24 12:00 UTC: Moon and Saturn both in Dhanu
    let moment = BirthMoment::new(1990, 1, 24, 12, 0).unwrap();
    let chart = compute_chart(moment, delhi()).unwrap();
    assert_eq!(chart.placement(Graha::Chandra).rashi, Rashi::Dhanu);
    assert_eq!(chart.placement(Graha::Shani).rashi, Rashi::Dhanu);
    assert!(chart.doshas.sade_sati);
    assert_eq!(chart.doshas.sade_sati_phase, Some(SadeSatiPhase::Peak));
    assert_eq!(chart.lagna_rashi(), Rashi::Makara);
    assert_eq!(chart.placement(Graha::Chandra).house, 12);
}

#[test]
fn jupiter_in_simha_on_1991_09_29() {
    // Jupiter sits 0.014 deg past the Karka/Simha cusp
    let moment = BirthMoment::new(1991, 9, 29, 0, 0).unwrap();
    let chart = compute_chart(moment, delhi()).unwrap();
    assert_abs_diff_eq!(chart.julian_day.value(), 2_448_528.5, epsilon = 1e-9);
    assert_abs_diff_eq!(chart.ascendant.longitude.deg(), 332.3463, epsilon = 1e-3);
    assert_eq!(chart.lagna_rashi(), Rashi::Meena);

    let expected = [
        (Graha::Surya, 161.7119, Rashi::Kanya, 7, Nakshatra::Hasta, 1),
        (Graha::Chandra, 45.3843, Rashi::Vrishabha, 3, Nakshatra::Rohini, 2),
        (Graha::Mangal, 191.0452, Rashi::Tula, 8, Nakshatra::Swati, 2),
        (Graha::Buddh, 123.6740, Rashi::Simha, 6, Nakshatra::Magha, 2),
        (Graha::Guru, 120.0139, Rashi::Simha, 6, Nakshatra::Magha, 1),
        (Graha::Shukra, 5.5188, Rashi::Mesha, 2, Nakshatra::Ashwini, 2),
        (Graha::Shani, 284.8026, Rashi::Makara, 11, Nakshatra::Shravana, 2),
        (Graha::Rahu, 261.1378, Rashi::Dhanu, 10, Nakshatra::PurvaAshadha, 3),
        (Graha::Ketu, 81.1378, Rashi::Mithuna, 4, Nakshatra::Punarvasu, 1),
    ];
    for (graha, lon, rashi, house, nakshatra, pada) in expected {
        let p = chart.placement(graha);
        assert_abs_diff_eq!(p.longitude.deg(), lon, epsilon = 1e-3);
        assert_eq!(p.rashi, rashi, "{graha} rashi");
        assert_eq!(p.house, house, "{graha} house");
        assert_eq!(p.nakshatra, nakshatra, "{graha} nakshatra");
        assert_eq!(p.pada, pada, "{graha} pada");
    }

    // Mars in house 8 in Tula, Jupiter in house 6
    assert!(chart.doshas.mangal_dosha);
    assert!(!chart.doshas.kaal_sarpa_dosha);
    assert!(!chart.doshas.sade_sati);
    assert!(!chart.doshas.grahan_dosha);
    assert!(
        interpret(&chart)
            .key_planetary_positions
            .contains(&"Jupiter in Leo (Ari Bhava)".to_string())
    );
}

#[test]
fn invalid_date_is_input_error() {
    let err = (|| -> Result<_, ComputationError> {
        let m = BirthMoment::from_date_and_time("1990-02-30", "10:30")?;
        compute_chart(m, delhi())
    })()
    .unwrap_err();
    assert!(matches!(err, ComputationError::InvalidInput(TimeError::Parse(_))));
}

#[test]
fn invalid_time_is_input_error() {
    let err = (|| -> Result<_, ComputationError> {
        let m = BirthMoment::new(1990, 1, 15, 24, 0)?;
        compute_chart(m, delhi())
    })()
    .unwrap_err();
    assert_eq!(
        err,
        ComputationError::InvalidInput(TimeError::InvalidTime { hour: 24, minute: 0 })
    );
}

#[test]
fn invalid_latitude_is_coordinate_error() {
    let err = compute_chart(reference_moment(), GeoLocation::new(91.0, 77.2)).unwrap_err();
    assert!(matches!(err, ComputationError::InvalidCoordinate(_)));
    assert!(err.to_string().starts_with("invalid coordinate"));
}
