//! Planar approximation of short geodesics.
//!
//! Distances along the meridian and the parallel are scaled with the meters-per-degree formula from
//! 47 CFR §73.208, which includes second order ellipsoidal corrections. The approximation is only good for spans of
//! a few hundred kilometers away from the poles, see [`Geodesic`](super::Geodesic) for the dispatch rules.

use super::GeodesicResult;

/// Offsets `(d_lat, d_lon)` in meters between two points on the local tangent plane at their mean latitude.
fn planar_offsets(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> (f64, f64) {
    // cos(k·m) for the mean latitude m by the Chebyshev recurrence.
    let cos_0m = 1.0;
    let cos_1m = ((lat1 + lat2) * (std::f64::consts::PI / 360.0)).cos();
    let cos_2m = 2.0 * cos_1m * cos_1m - cos_0m;
    let cos_3m = 2.0 * cos_1m * cos_2m - cos_1m;
    let cos_4m = 2.0 * cos_1m * cos_3m - cos_2m;
    let cos_5m = 2.0 * cos_1m * cos_4m - cos_3m;

    let k_lat = 111_132.09 * cos_0m - 566.05 * cos_2m + 1.20 * cos_4m;
    let k_lon = 111_415.13 * cos_1m - 94.55 * cos_3m + 0.12 * cos_5m;

    (k_lat * (lat2 - lat1), k_lon * (lon2 - lon1))
}

/// Approximate distance (meters) and initial bearing (degrees in `[0, 360)`) between two points.
///
/// The inputs are not validated.
pub fn approximate(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> GeodesicResult {
    let (d_lat, d_lon) = planar_offsets(lat1, lon1, lat2, lon2);
    GeodesicResult {
        distance: d_lon.hypot(d_lat),
        azimuth: super::normalize_azimuth(d_lon.atan2(d_lat).to_degrees()),
    }
}

/// Squared approximate distance in square meters. Cheaper than [`approximate`], suitable for comparisons.
pub fn distance_sq(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let (d_lat, d_lon) = planar_offsets(lat1, lon1, lat2, lon2);
    d_lat * d_lat + d_lon * d_lon
}
