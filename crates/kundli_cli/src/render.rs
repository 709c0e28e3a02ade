//! Plain-text rendering of charts and interpretations.

use std::fmt::Write;

use kundli_jyotish::{Chart, Doshas, Interpretation};

fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}

pub fn chart_text(chart: &Chart) -> String {
    let mut out = String::new();
    let asc = &chart.ascendant;
    let _ = writeln!(out, "Julian Day: {:.6}", chart.julian_day.value());
    let _ = writeln!(
        out,
        "Ayanamsha ({}): {:.6} deg",
        chart.config.ayanamsha, chart.ayanamsha
    );
    let _ = writeln!(
        out,
        "Lagna: {} ({}) {:.4} deg, {} pada {}",
        asc.rashi.name(),
        asc.rashi.western_name(),
        asc.degree,
        asc.nakshatra,
        asc.pada
    );
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "{:<8} {:>9}  {:<12} {:>12}  {:>5}  {:<18} {:>4}  {:<8}",
        "Graha", "Lon", "Sign", "Degree", "House", "Nakshatra", "Pada", "Ruler"
    );
    for p in &chart.planets {
        let _ = writeln!(
            out,
            "{:<8} {:>9.4}  {:<12} {:>12}  {:>5}  {:<18} {:>4}  {:<8}",
            p.graha.english_name(),
            p.longitude.deg(),
            p.rashi.western_name(),
            p.dms.to_string(),
            p.house,
            p.nakshatra.name(),
            p.pada,
            p.ruler.english_name()
        );
    }
    let _ = writeln!(out);
    out.push_str(&doshas_text(&chart.doshas));
    out
}

pub fn doshas_text(d: &Doshas) -> String {
    let mut out = String::from("Doshas:\n");
    let _ = writeln!(out, "  Mangal:     {}", yes_no(d.mangal_dosha));
    match d.kaal_sarpa_type {
        Some(t) => {
            let _ = writeln!(out, "  Kaal Sarpa: yes ({t})");
        }
        None => {
            let _ = writeln!(out, "  Kaal Sarpa: no");
        }
    }
    match d.sade_sati_phase {
        Some(p) => {
            let _ = writeln!(out, "  Sade Sati:  yes ({p})");
        }
        None => {
            let _ = writeln!(out, "  Sade Sati:  no");
        }
    }
    let _ = writeln!(out, "  Grahan:     {}", yes_no(d.grahan_dosha));
    out
}

pub fn interpretation_text(i: &Interpretation) -> String {
    let mut out = String::from("Interpretation:\n");
    for line in [
        &i.personality,
        &i.emotions,
        &i.nakshatra,
        &i.ascendant,
        &i.life_themes,
    ] {
        let _ = writeln!(out, "  {line}");
    }
    out.push_str("\nKey positions:\n");
    for line in &i.key_planetary_positions {
        let _ = writeln!(out, "  - {line}");
    }
    out.push_str("\nNotable aspects:\n");
    for line in &i.notable_aspects {
        let _ = writeln!(out, "  - {line}");
    }
    let _ = writeln!(out, "\n{}", i.dasha);
    out
}
