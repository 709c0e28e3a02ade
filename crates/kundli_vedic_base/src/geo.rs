//! Observer location on the Earth.

use serde::{Deserialize, Serialize};

use crate::error::VedicError;

/// Geographic location of the birth place.
///
/// Supplied by the caller (a geocoder, a CLI flag); the engine never
/// resolves place names.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoLocation {
    /// Geodetic latitude in degrees, north positive. Range: [-90, 90].
    pub latitude_deg: f64,
    /// Geodetic longitude in degrees, east positive. Range: [-180, 180].
    pub longitude_deg: f64,
}

impl GeoLocation {
    /// Create a new geographic location. Not validated; see [`Self::validate`].
    pub const fn new(latitude_deg: f64, longitude_deg: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
        }
    }

    /// Check that both coordinates are finite and in range.
    pub fn validate(&self) -> Result<(), VedicError> {
        if !self.latitude_deg.is_finite() {
            return Err(VedicError::InvalidLocation("latitude must be finite"));
        }
        if !self.longitude_deg.is_finite() {
            return Err(VedicError::InvalidLocation("longitude must be finite"));
        }
        if self.latitude_deg.abs() > 90.0 {
            return Err(VedicError::InvalidLocation("latitude outside [-90, 90]"));
        }
        if self.longitude_deg.abs() > 180.0 {
            return Err(VedicError::InvalidLocation("longitude outside [-180, 180]"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn poles_and_antimeridian_are_valid() {
        assert!(GeoLocation::new(90.0, 180.0).validate().is_ok());
        assert!(GeoLocation::new(-90.0, -180.0).validate().is_ok());
    }

    #[test]
    fn out_of_range_rejected() {
        assert!(GeoLocation::new(91.0, 0.0).validate().is_err());
        assert!(GeoLocation::new(0.0, -180.5).validate().is_err());
        assert!(GeoLocation::new(f64::NAN, 0.0).validate().is_err());
        assert!(GeoLocation::new(0.0, f64::INFINITY).validate().is_err());
    }

    #[test]
    fn serde_camel_case() {
        let json = serde_json::to_string(&GeoLocation::new(1.5, 2.5)).unwrap();
        assert_eq!(json, r#"{"latitudeDeg":1.5,"longitudeDeg":2.5}"#);
    }
}
