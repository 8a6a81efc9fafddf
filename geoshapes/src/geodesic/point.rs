use crate::error::{GeoShapesError, Result};
use serde::{Deserialize, Serialize};

/// 2d point on the surface of the Earth.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Deserialize, Serialize)]
pub struct GeoPoint2d {
    lat: f64,
    lon: f64,
}

impl GeoPoint2d {
    /// Creates a new point from latitude and longitude values (in degrees) without any checks.
    pub fn latlon(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Creates a new point, checking that both values are finite and the latitude is within `[-90, 90]`.
    pub fn try_latlon(lat: f64, lon: f64) -> Result<Self> {
        if lat.is_finite() && lon.is_finite() && (-90.0..=90.0).contains(&lat) {
            Ok(Self { lat, lon })
        } else {
            log::debug!("Rejecting coordinate lat: {lat}, lon: {lon}");
            Err(GeoShapesError::InvalidCoordinate { lat, lon })
        }
    }

    /// Latitude in degrees.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in degrees.
    pub fn lon(&self) -> f64 {
        self.lon
    }
}
