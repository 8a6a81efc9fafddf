//! Shapes encoded as flat coordinate sequences.
//!
//! A shape is a sequence of `f64` values where every two consecutive values form a point. The kind of the shape
//! is defined by the length of the sequence:
//!
//! * 2 values - a point `[x, y]`,
//! * 4 values - an axis-aligned box `[x_min, y_min, x_max, y_max]`,
//! * more than 4 values - a polygon, which is an implicitly closed ring of points.
//!
//! The library does not care whether `x` is longitude or latitude as long as all the shapes agree. Functions that
//! compute geodesic distances between shapes read the coordinates as `[lat, lon]`.

use crate::cartesian::{Point2d, Rect, Ring};
use crate::error::{GeoShapesError, Result};

/// A borrowed view of a flat coordinate sequence, classified by its length.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Shape<'a> {
    /// Single point.
    Point(Point2d),
    /// Axis-aligned box.
    Box(Rect),
    /// Closed polygon ring.
    Polygon(Ring<'a>),
}

impl<'a> Shape<'a> {
    /// Classifies the coordinate sequence.
    ///
    /// Returns [`GeoShapesError::InvalidShape`] if the sequence has an odd number of values or is empty.
    pub fn new(coords: &'a [f64]) -> Result<Self> {
        match coords {
            [x, y] => Ok(Self::Point(Point2d::new(*x, *y))),
            [x_min, y_min, x_max, y_max] => Ok(Self::Box(Rect::new(*x_min, *y_min, *x_max, *y_max))),
            _ if coords.len() > 4 && coords.len() % 2 == 0 => Ok(Self::Polygon(Ring::new(coords))),
            _ => {
                log::debug!("Rejecting shape with {} coordinates", coords.len());
                Err(GeoShapesError::InvalidShape { len: coords.len() })
            }
        }
    }

    /// Arithmetic mean of all points the shape is defined by. For a box this is its center.
    ///
    /// The mean is accumulated as a running average, so the error does not grow with the magnitude of a sum of
    /// many coordinates.
    pub fn centroid(&self) -> Point2d {
        match self {
            Self::Point(p) => *p,
            Self::Box(rect) => running_mean([
                Point2d::new(rect.x_min, rect.y_min),
                Point2d::new(rect.x_max, rect.y_max),
            ]),
            Self::Polygon(ring) => running_mean(ring.iter_points()),
        }
    }
}

fn running_mean(points: impl IntoIterator<Item = Point2d>) -> Point2d {
    let mut mean = Point2d::origin();
    for (i, p) in points.into_iter().enumerate() {
        let n = (i + 1) as f64;
        mean.x += (p.x - mean.x) / n;
        mean.y += (p.y - mean.y) / n;
    }

    mean
}

/// Representative point of a shape, see [`Shape::centroid`].
pub fn centroid(shape: &[f64]) -> Result<Point2d> {
    Ok(Shape::new(shape)?.centroid())
}
