//! Great-circle distance and bearing on a spherical Earth.
//!
//! The spherical model is cheaper than the ellipsoidal one from [`geodesic`](crate::geodesic), but its errors reach
//! ~0.5% of the distance. The inputs are not validated.

/// Mean radius of the Earth in meters.
pub const EARTH_RADIUS: f64 = 6_371_008.8;

/// Great-circle distance in meters between two points given in degrees.
pub fn distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let (lat1, lat2) = (lat1.to_radians(), lat2.to_radians());
    let d_lon = (lon2 - lon1).to_radians();

    let (sin_lat1, cos_lat1) = lat1.sin_cos();
    let (sin_lat2, cos_lat2) = lat2.sin_cos();
    let (sin_d_lon, cos_d_lon) = d_lon.sin_cos();

    let a = cos_lat2 * sin_d_lon;
    let b = cos_lat1 * sin_lat2 - sin_lat1 * cos_lat2 * cos_d_lon;

    EARTH_RADIUS
        * a.hypot(b)
            .atan2(sin_lat1 * sin_lat2 + cos_lat1 * cos_lat2 * cos_d_lon)
}

/// Initial great-circle bearing in degrees `[0, 360)` from the first point to the second one.
pub fn bearing(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let (lat1, lat2) = (lat1.to_radians(), lat2.to_radians());
    let d_lon = (lon2 - lon1).to_radians();

    let y = d_lon.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * d_lon.cos();

    crate::geodesic::normalize_azimuth(y.atan2(x).to_degrees())
}
