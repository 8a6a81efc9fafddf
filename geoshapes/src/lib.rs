//! Overlap tests for points, boxes and polygons, and geodesic distance and bearing between coordinates.
//!
//! Shapes are flat sequences of coordinates, see [`shape`] module for the encoding. All functions are pure and
//! independent from each other:
//!
//! * [`overlaps`] and [`overlaps_any`] test whether shapes have common points,
//! * [`distance`], [`bearing`] and [`inverse`] compute geodesics on the WGS84 ellipsoid, using a fast planar
//!   approximation for short spans,
//! * [`centroid`], [`distance_any`] and [`nearest`] reduce shapes to their representative points.
//!
//! ```
//! use geoshapes::{bearing, distance, overlaps};
//!
//! let square = [0.0, 0.0, 2.0, 0.0, 2.0, 2.0, 0.0, 2.0];
//! assert!(overlaps(&square, &[1.0, 1.0]).unwrap());
//! assert!(!overlaps(&square, &[-1.0, -1.0, -0.5, -0.5]).unwrap());
//!
//! let meters = distance(36.12, -86.67, 33.94, -118.4).unwrap();
//! assert!((meters - 2_892_777.0).abs() < 1.0);
//!
//! let degrees = bearing(35.0, 45.0, 35.0, 135.0).unwrap();
//! assert!((degrees - 60.0).abs() < 1.0);
//! ```

pub mod batch;
pub mod cartesian;
pub mod error;
pub mod geodesic;
pub mod overlap;
pub mod shape;
pub mod sphere;
#[cfg(test)]
mod tests;

pub use batch::{distance_any, nearest, overlaps_any, MAX_DISTANCE};
pub use error::{GeoShapesError, Result};
pub use geodesic::{bearing, distance, inverse, GeodesicResult};
pub use overlap::overlaps;
pub use shape::{centroid, Shape};
