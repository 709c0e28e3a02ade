//! Chart assembler: birth moment and place in, complete [`Chart`] out.
//!
//! Pipeline: validate -> Julian Day -> ayanamsha -> tropical longitudes ->
//! sidereal longitudes -> lagna and whole-sign bhavas -> placements ->
//! doshas. Every stage is a pure function; nothing is cached between calls.

use kundli_frames::Longitude;
use kundli_time::{BirthMoment, JulianDay};
use kundli_vedic_base::{
    ALL_GRAHAS, GeoLocation, Graha, SAPTA_GRAHAS, ayanamsha_deg, bhava_of_rashi,
    lagna_tropical, nakshatra_from_longitude, rashi_from_longitude, tropical_longitude,
    tropical_to_sidereal, whole_sign_bhavas,
};
use log::{debug, trace};

use crate::chart_types::{Ascendant, Chart, ChartConfig, GrahaLongitudes, GrahaPlacement};
use crate::dosha::evaluate_doshas;
use crate::error::ComputationError;

/// Compute a chart with [`ChartConfig::default`] (Lahiri, mean node).
pub fn compute_chart(
    moment: BirthMoment,
    location: GeoLocation,
) -> Result<Chart, ComputationError> {
    compute_chart_with_config(moment, location, &ChartConfig::default())
}

/// Compute a chart with an explicit configuration.
pub fn compute_chart_with_config(
    moment: BirthMoment,
    location: GeoLocation,
    config: &ChartConfig,
) -> Result<Chart, ComputationError> {
    location.validate()?;
    config.validate()?;

    let jd = moment.julian_day();
    let t = jd.centuries_since_j2000();
    let aya = ayanamsha_deg(config.ayanamsha, jd);
    debug!("chart for {moment}: jd={:.6} t={t:.9} ayanamsha={aya:.6}", jd.value());

    let sidereal = sidereal_longitudes(t, aya, config);
    let lagna = lagna_tropical(jd, &location);
    debug!("lagna tropical={:.6}", lagna.deg());

    Ok(assemble_chart(jd, aya, lagna, &sidereal, config))
}

/// Sidereal longitudes of all grahas at `t` Julian centuries.
///
/// Ketu is derived from sidereal Rahu so the two are exactly opposite.
pub fn sidereal_longitudes(t: f64, ayanamsha_deg: f64, config: &ChartConfig) -> GrahaLongitudes {
    let sapta = SAPTA_GRAHAS.map(|g| {
        tropical_to_sidereal(tropical_longitude(g, t, config.node_mode), ayanamsha_deg)
    });
    let rahu = tropical_to_sidereal(
        tropical_longitude(Graha::Rahu, t, config.node_mode),
        ayanamsha_deg,
    );
    GrahaLongitudes::new(sapta, rahu)
}

/// Place every graha and evaluate doshas.
///
/// `lagna_tropical` is shifted by `ayanamsha_deg`; `sidereal` is used as
/// given. This is the whole assembly step and can be fed synthetic
/// positions.
pub fn assemble_chart(
    jd: JulianDay,
    ayanamsha_deg: f64,
    lagna_tropical: Longitude,
    sidereal: &GrahaLongitudes,
    config: &ChartConfig,
) -> Chart {
    let lagna_sidereal = tropical_to_sidereal(lagna_tropical, ayanamsha_deg);
    let lagna_info = rashi_from_longitude(lagna_sidereal);
    let lagna_nak = nakshatra_from_longitude(lagna_sidereal);
    debug!(
        "lagna sidereal={:.6} rashi={}",
        lagna_sidereal.deg(),
        lagna_info.rashi.name()
    );

    let ascendant = Ascendant {
        rashi: lagna_info.rashi,
        longitude: lagna_sidereal,
        tropical_longitude: lagna_tropical,
        degree: lagna_info.degrees_in_rashi,
        nakshatra: lagna_nak.nakshatra,
        pada: lagna_nak.pada,
    };
    let houses = whole_sign_bhavas(ascendant.rashi);
    let planets = ALL_GRAHAS.map(|g| place_graha(g, sidereal.longitude(g), &ascendant));
    let doshas = evaluate_doshas(&planets, config);
    debug!("doshas: {doshas:?}");

    Chart {
        julian_day: jd,
        ayanamsha: ayanamsha_deg,
        config: *config,
        ascendant,
        houses,
        planets,
        doshas,
    }
}

/// Place one graha: rashi, degree, house, nakshatra, pada, ruler.
pub fn place_graha(graha: Graha, sidereal: Longitude, ascendant: &Ascendant) -> GrahaPlacement {
    let rashi = rashi_from_longitude(sidereal);
    let nak = nakshatra_from_longitude(sidereal);
    let placement = GrahaPlacement {
        graha,
        longitude: sidereal,
        rashi: rashi.rashi,
        degree: rashi.degrees_in_rashi,
        dms: rashi.dms,
        house: bhava_of_rashi(ascendant.rashi, rashi.rashi),
        nakshatra: nak.nakshatra,
        pada: nak.pada,
        ruler: nak.ruler(),
    };
    trace!(
        "{} {:.6} {} house {} {} pada {}",
        graha.english_name(),
        sidereal.deg(),
        rashi.rashi.western_name(),
        placement.house,
        nak.nakshatra.name(),
        nak.pada
    );
    placement
}
