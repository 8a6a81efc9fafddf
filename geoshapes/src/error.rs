//! Error type used by the crate.

use thiserror::Error;

/// Error enum.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeoShapesError {
    /// Shape coordinate sequence is too short or has an odd number of values.
    #[error("invalid shape: expected an even number of at least 2 coordinates, got {len}")]
    InvalidShape {
        /// Number of scalar values in the rejected sequence.
        len: usize,
    },
    /// Coordinate is not finite or latitude is out of `[-90, 90]` range.
    #[error("invalid coordinate: lat {lat}, lon {lon}")]
    InvalidCoordinate {
        /// Latitude in degrees.
        lat: f64,
        /// Longitude in degrees.
        lon: f64,
    },
    /// Geodesic solver failed to produce a finite result.
    #[error("geodesic solver failed: {0}")]
    Solver(String),
}

/// Result type with [`GeoShapesError`].
pub type Result<T> = std::result::Result<T, GeoShapesError>;
