//! Angle normalization and wrap-aware comparisons.
//!
//! Every angle-producing operation in the engine passes through
//! [`normalize_360`], usually by way of [`Longitude`]. A single routine keeps
//! sign, house, and nakshatra boundaries resolving identically everywhere.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Normalize an angle to [0, 360) degrees.
///
/// Tiny negative inputs would round up to exactly 360.0 after the shift, and
/// `-0.0` would survive the remainder; both are folded to `0.0`. NaN in,
/// NaN out.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    let r = if r < 0.0 { r + 360.0 } else { r };
    if r >= 360.0 || r == 0.0 { 0.0 } else { r }
}

/// Normalize a time-angle to [0, 24) hours.
pub fn normalize_hours(hours: f64) -> f64 {
    let r = hours % 24.0;
    let r = if r < 0.0 { r + 24.0 } else { r };
    if r >= 24.0 || r == 0.0 { 0.0 } else { r }
}

/// Smallest angle between two longitudes, in [0, 180] degrees.
pub fn angular_separation(a_deg: f64, b_deg: f64) -> f64 {
    let d = normalize_360(a_deg - b_deg);
    if d > 180.0 { 360.0 - d } else { d }
}

/// Whether `deg` lies on the forward (increasing longitude) arc from
/// `start_deg` to `end_deg`, both ends inclusive.
///
/// When `start > end` the arc crosses 0 deg, e.g. 350 -> 170 contains 355,
/// 0, and 100 but not 200.
pub fn is_within_arc(deg: f64, start_deg: f64, end_deg: f64) -> bool {
    let x = normalize_360(deg);
    let start = normalize_360(start_deg);
    let end = normalize_360(end_deg);
    if start > end {
        x >= start || x <= end
    } else {
        x >= start && x <= end
    }
}

/// Ecliptic longitude in degrees, always in [0, 360).
///
/// The only constructors normalize, so a `Longitude` held anywhere in the
/// engine is already wrapped. Serializes as a bare number.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct Longitude(f64);

impl Longitude {
    /// 0 deg (start of Mesha / Aries).
    pub const ZERO: Self = Self(0.0);

    /// Construct from any angle in degrees, normalizing to [0, 360).
    pub fn new(deg: f64) -> Self {
        Self(normalize_360(deg))
    }

    /// Construct from an angle in radians.
    pub fn from_radians(rad: f64) -> Self {
        Self::new(rad.to_degrees())
    }

    /// Degrees in [0, 360).
    pub const fn deg(self) -> f64 {
        self.0
    }

    /// Radians in [0, 2*pi).
    pub fn rad(self) -> f64 {
        self.0.to_radians()
    }

    /// Shift by `delta_deg` (either sign), re-normalized.
    pub fn offset(self, delta_deg: f64) -> Self {
        Self::new(self.0 + delta_deg)
    }

    /// Subtract `deg`, re-normalized. Used for tropical -> sidereal.
    pub fn minus(self, deg: f64) -> Self {
        Self::new(self.0 - deg)
    }

    /// The diametrically opposite point (`self + 180`).
    pub fn opposite(self) -> Self {
        self.offset(180.0)
    }

    /// Smallest angle to `other`, in [0, 180].
    pub fn separation(self, other: Longitude) -> f64 {
        angular_separation(self.0, other.0)
    }

    /// Whether this longitude lies on the inclusive forward arc `start -> end`.
    pub fn is_within_arc(self, start: Longitude, end: Longitude) -> bool {
        is_within_arc(self.0, start.0, end.0)
    }
}

impl From<f64> for Longitude {
    fn from(deg: f64) -> Self {
        Self::new(deg)
    }
}

impl From<Longitude> for f64 {
    fn from(lon: Longitude) -> Self {
        lon.0
    }
}

impl Display for Longitude {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.4} deg", self.0)
    }
}
