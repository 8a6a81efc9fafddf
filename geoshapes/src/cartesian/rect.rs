use crate::cartesian::Point2d;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle.
///
/// The rectangle does not normalize its bounds: if constructed with `x_min > x_max` it will not contain or
/// intersect anything.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Left boundary.
    pub x_min: f64,
    /// Bottom boundary.
    pub y_min: f64,
    /// Right boundary.
    pub x_max: f64,
    /// Top boundary.
    pub y_max: f64,
}

impl Rect {
    pub fn new(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Self {
        Self {
            x_min,
            y_min,
            x_max,
            y_max,
        }
    }

    /// Degenerate rectangle with both corners at the given point.
    pub fn from_point(p: &Point2d) -> Self {
        Self {
            x_min: p.x,
            x_max: p.x,
            y_min: p.y,
            y_max: p.y,
        }
    }

    pub fn contains(&self, point: &Point2d) -> bool {
        self.x_min <= point.x
            && self.x_max >= point.x
            && self.y_min <= point.y
            && self.y_max >= point.y
    }

    /// Returns true if the rectangles have at least one common point, boundaries included.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x_min <= other.x_max
            && self.y_min <= other.y_max
            && self.x_max >= other.x_min
            && self.y_max >= other.y_min
    }

    /// Flat coordinates of the rectangle corners, suitable to construct a [`Ring`](super::Ring).
    pub fn into_ring_coords(self) -> [f64; 8] {
        [
            self.x_min, self.y_min, //
            self.x_max, self.y_min, //
            self.x_max, self.y_max, //
            self.x_min, self.y_max,
        ]
    }
}
