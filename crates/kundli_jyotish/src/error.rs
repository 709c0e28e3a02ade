//! Error type for chart computation.

use kundli_time::TimeError;
use kundli_vedic_base::VedicError;
use thiserror::Error;

/// Errors from [`crate::compute_chart`] and friends.
///
/// There is no partial-result mode: either a complete chart is produced or
/// one of these is returned.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ComputationError {
    /// Birth moment could not be built or parsed.
    #[error("invalid birth moment: {0}")]
    InvalidInput(#[from] TimeError),
    /// Latitude or longitude out of range or not finite.
    #[error("invalid coordinate: {0}")]
    InvalidCoordinate(String),
    /// [`crate::ChartConfig`] failed validation.
    #[error("invalid chart config: {0}")]
    InvalidConfig(&'static str),
    /// Any other error from the Vedic base layer.
    #[error(transparent)]
    Vedic(VedicError),
}

impl From<VedicError> for ComputationError {
    fn from(e: VedicError) -> Self {
        match e {
            VedicError::InvalidLocation(msg) => Self::InvalidCoordinate(msg.to_string()),
            other => Self::Vedic(other),
        }
    }
}
