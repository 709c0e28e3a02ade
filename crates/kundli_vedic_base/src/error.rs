//! Error types for Vedic calculations.

use thiserror::Error;

/// Errors from Vedic base calculations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum VedicError {
    /// Invalid geographic location parameter.
    #[error("invalid location: {0}")]
    InvalidLocation(&'static str),
    /// Name of an ayanamsha system or node mode was not recognized.
    #[error("unknown {kind}: {name:?}")]
    UnknownName { kind: &'static str, name: String },
}
