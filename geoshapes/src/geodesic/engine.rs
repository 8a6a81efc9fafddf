use super::fast;
use super::{
    normalize_azimuth, GeoPoint2d, GeodesicResult, InverseRequest, InverseSolution, InverseSolver,
    Wgs84Solver,
};
use crate::error::{GeoShapesError, Result};

/// Latitude (degrees) beyond which the planar approximation is never used. The longitude scale of the
/// approximation degrades towards the poles.
pub const FAST_PATH_MAX_LATITUDE: f64 = 75.0;

/// Approximate distance (meters) beyond which the planar approximation is never used.
///
/// Tuned empirically so that the approximation error stays under ~0.1%.
pub const FAST_PATH_MAX_DISTANCE: f64 = 330_000.0;

/// Geodesic calculator that picks between the fast planar approximation and the exact `solver`.
///
/// The approximation is used when both points are closer to the equator than [`FAST_PATH_MAX_LATITUDE`] and the
/// approximate distance is less than [`FAST_PATH_MAX_DISTANCE`]. Otherwise the solver is asked for exactly the
/// values the caller needs.
#[derive(Debug, Clone, Default)]
pub struct Geodesic<S = Wgs84Solver> {
    solver: S,
}

impl Geodesic {
    /// Calculator on the WGS84 ellipsoid.
    pub const fn wgs84() -> Self {
        Self {
            solver: Wgs84Solver,
        }
    }
}

impl<S: InverseSolver> Geodesic<S> {
    /// Creates a calculator delegating long and polar geodesics to the given solver.
    pub fn new(solver: S) -> Self {
        Self { solver }
    }

    /// Exact solver used by the calculator.
    pub fn solver(&self) -> &S {
        &self.solver
    }

    /// Distance in meters between two points.
    pub fn distance(&self, lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> Result<f64> {
        self.solve(lat1, lon1, lat2, lon2, InverseRequest::Distance)?
            .distance()
            .ok_or_else(|| missing("distance"))
    }

    /// Initial bearing in degrees `[0, 360)` clockwise from north.
    pub fn bearing(&self, lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> Result<f64> {
        self.solve(lat1, lon1, lat2, lon2, InverseRequest::Azimuth)?
            .azimuth()
            .ok_or_else(|| missing("azimuth"))
    }

    /// Distance and initial bearing.
    pub fn inverse(&self, lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> Result<GeodesicResult> {
        let solution = self.solve(lat1, lon1, lat2, lon2, InverseRequest::All)?;
        Ok(GeodesicResult {
            distance: solution.distance().ok_or_else(|| missing("distance"))?,
            azimuth: solution.azimuth().ok_or_else(|| missing("azimuth"))?,
        })
    }

    /// Validates the coordinates and computes the requested values with the fast or exact method.
    ///
    /// The azimuth of the returned solution is always normalized into `[0, 360)`.
    pub fn solve(
        &self,
        lat1: f64,
        lon1: f64,
        lat2: f64,
        lon2: f64,
        request: InverseRequest,
    ) -> Result<InverseSolution> {
        let from = GeoPoint2d::try_latlon(lat1, lon1)?;
        let to = GeoPoint2d::try_latlon(lat2, lon2)?;

        if from == to {
            let result = GeodesicResult {
                distance: 0.0,
                azimuth: 0.0,
            };
            return Ok(InverseSolution::from_result(result, request));
        }

        if Self::is_fast_path(&from, &to) {
            let result = fast::approximate(lat1, lon1, lat2, lon2);
            return Ok(InverseSolution::from_result(result, request));
        }

        log::trace!("Using exact solver for {from:?} -> {to:?}");
        let solution = match self.solver.solve(&from, &to, request)? {
            InverseSolution::Azimuth(azimuth) => InverseSolution::Azimuth(normalize_azimuth(azimuth)),
            InverseSolution::All(result) => InverseSolution::All(GeodesicResult {
                distance: result.distance,
                azimuth: normalize_azimuth(result.azimuth),
            }),
            solution @ InverseSolution::Distance(_) => solution,
        };

        Ok(solution)
    }

    fn is_fast_path(from: &GeoPoint2d, to: &GeoPoint2d) -> bool {
        from.lat().abs().max(to.lat().abs()) < FAST_PATH_MAX_LATITUDE
            && fast::distance_sq(from.lat(), from.lon(), to.lat(), to.lon())
                < FAST_PATH_MAX_DISTANCE * FAST_PATH_MAX_DISTANCE
    }
}

fn missing(value: &str) -> GeoShapesError {
    GeoShapesError::Solver(format!("solver did not return requested {value}"))
}
