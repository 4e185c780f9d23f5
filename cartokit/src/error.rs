//! Error types used by the crate.

use cartokit_types::error::CartoTypesError;
use cartokit_types::geo::MapUnit;
use thiserror::Error;

/// Cartokit error type.
#[derive(Debug, Error)]
pub enum CartokitError {
    /// The map unit has no known length in meters.
    #[error("unsupported map unit: {0}")]
    UnsupportedUnit(MapUnit),
    /// Scale or DPI is not a positive number.
    #[error("scale and dpi must be positive, got scale {scale} and dpi {dpi}")]
    InvalidScaleOrDpi {
        /// Scale value that was given.
        scale: f64,
        /// DPI value that was given.
        dpi: f64,
    },
    /// Geometry cannot be represented as a parsed point feature.
    #[error("unsupported geometry: {0}")]
    Geometry(String),
    /// Error in a geographic primitive.
    #[error(transparent)]
    Types(#[from] CartoTypesError),
    /// Failed to serialize features.
    #[error("failed to serialize features")]
    Serialization(#[from] serde_json::Error),
}
