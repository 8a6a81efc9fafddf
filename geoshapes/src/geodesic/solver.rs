//! Exact solution of the inverse geodesic problem.

use super::{GeoPoint2d, GeodesicResult};
use crate::error::{GeoShapesError, Result};
use geo::{GeodesicBearing, GeodesicDistance, Point};

/// What the caller needs from an inverse solution.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum InverseRequest {
    /// Distance only.
    Distance,
    /// Initial azimuth only.
    Azimuth,
    /// Both distance and initial azimuth.
    All,
}

/// Answer to an [`InverseRequest`].
///
/// Azimuths are degrees clockwise from north, but solvers are not required to normalize them into `[0, 360)`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum InverseSolution {
    /// Distance in meters.
    Distance(f64),
    /// Initial azimuth in degrees.
    Azimuth(f64),
    /// Both values.
    All(GeodesicResult),
}

impl InverseSolution {
    /// Distance in meters, if it was requested.
    pub fn distance(&self) -> Option<f64> {
        match self {
            Self::Distance(distance) => Some(*distance),
            Self::All(result) => Some(result.distance),
            Self::Azimuth(_) => None,
        }
    }

    /// Initial azimuth in degrees, if it was requested.
    pub fn azimuth(&self) -> Option<f64> {
        match self {
            Self::Azimuth(azimuth) => Some(*azimuth),
            Self::All(result) => Some(result.azimuth),
            Self::Distance(_) => None,
        }
    }

    /// Keeps only the values that were asked for by the `request`.
    pub fn from_result(result: GeodesicResult, request: InverseRequest) -> Self {
        match request {
            InverseRequest::Distance => Self::Distance(result.distance),
            InverseRequest::Azimuth => Self::Azimuth(result.azimuth),
            InverseRequest::All => Self::All(result),
        }
    }

    fn is_finite(&self) -> bool {
        self.distance().map_or(true, f64::is_finite) && self.azimuth().map_or(true, f64::is_finite)
    }
}

/// Solver of the inverse geodesic problem: finds the distance and the initial azimuth of the shortest path between
/// two points on an ellipsoid.
pub trait InverseSolver {
    /// Solves the inverse problem between two valid points, computing only what the `request` asks for.
    fn solve(
        &self,
        from: &GeoPoint2d,
        to: &GeoPoint2d,
        request: InverseRequest,
    ) -> Result<InverseSolution>;
}

impl<T: InverseSolver + ?Sized> InverseSolver for &T {
    fn solve(
        &self,
        from: &GeoPoint2d,
        to: &GeoPoint2d,
        request: InverseRequest,
    ) -> Result<InverseSolution> {
        (**self).solve(from, to, request)
    }
}

/// Inverse solver on the WGS84 ellipsoid, backed by the GeographicLib algorithms of the `geo` crate.
#[derive(Debug, Copy, Clone, Default)]
pub struct Wgs84Solver;

impl InverseSolver for Wgs84Solver {
    fn solve(
        &self,
        from: &GeoPoint2d,
        to: &GeoPoint2d,
        request: InverseRequest,
    ) -> Result<InverseSolution> {
        let from = Point::new(from.lon(), from.lat());
        let to = Point::new(to.lon(), to.lat());

        let solution = match request {
            InverseRequest::Distance => InverseSolution::Distance(from.geodesic_distance(&to)),
            InverseRequest::Azimuth => InverseSolution::Azimuth(from.geodesic_bearing(to)),
            InverseRequest::All => {
                let (azimuth, distance) = from.geodesic_bearing_distance(to);
                InverseSolution::All(GeodesicResult { distance, azimuth })
            }
        };

        if solution.is_finite() {
            Ok(solution)
        } else {
            Err(GeoShapesError::Solver(format!(
                "no finite solution between {from:?} and {to:?}: {solution:?}"
            )))
        }
    }
}
