//! Distance and initial bearing between points given by latitude and longitude.
//!
//! Short spans far from the poles are computed with a fast planar approximation (see [`approximate`]), everything
//! else is delegated to an exact [`InverseSolver`]. [`distance`], [`bearing`] and [`inverse`] use the WGS84
//! ellipsoid; use [`Geodesic`] directly to plug in a different solver.

mod engine;
mod fast;
mod point;
mod solver;

pub use engine::{Geodesic, FAST_PATH_MAX_DISTANCE, FAST_PATH_MAX_LATITUDE};
pub use fast::{approximate, distance_sq};
pub use point::GeoPoint2d;
pub use solver::{InverseRequest, InverseSolution, InverseSolver, Wgs84Solver};

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Distance and initial azimuth of the geodesic between two points.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeodesicResult {
    /// Distance in meters.
    pub distance: f64,
    /// Initial azimuth at the first point, degrees clockwise from north in `[0, 360)`.
    pub azimuth: f64,
}

/// Geodesic distance in meters between two points on the WGS84 ellipsoid.
pub fn distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> Result<f64> {
    Geodesic::wgs84().distance(lat1, lon1, lat2, lon2)
}

/// Initial bearing in degrees (clockwise from north, `[0, 360)`) of the geodesic from the first point to the
/// second one on the WGS84 ellipsoid.
pub fn bearing(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> Result<f64> {
    Geodesic::wgs84().bearing(lat1, lon1, lat2, lon2)
}

/// Both distance and initial bearing between two points on the WGS84 ellipsoid.
pub fn inverse(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> Result<GeodesicResult> {
    Geodesic::wgs84().inverse(lat1, lon1, lat2, lon2)
}

/// Brings azimuth in degrees into `[0, 360)` range. Expects input in `[-360, 360)`.
pub(crate) fn normalize_azimuth(azimuth: f64) -> f64 {
    (azimuth + 360.0) % 360.0
}
