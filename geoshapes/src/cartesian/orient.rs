use crate::cartesian::Point2d;
use serde::{Deserialize, Serialize};

/// Orientation of a triplet of points.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    /// Clockwise
    Clockwise,
    /// Counterclockwise
    Counterclockwise,
    /// Collinear. Also returned when the sign cannot be determined (NaN coordinates).
    Collinear,
}

impl Orientation {
    /// Determines orientation of the turn `p -> q -> r` from the sign of the cross product
    /// `(q - p) x (r - p)`.
    pub fn triplet(p: &Point2d, q: &Point2d, r: &Point2d) -> Self {
        match (q.x - p.x) * (r.y - p.y) - (q.y - p.y) * (r.x - p.x) {
            v if v > 0.0 => Self::Counterclockwise,
            v if v < 0.0 => Self::Clockwise,
            _ => Self::Collinear,
        }
    }

    /// True for a strict left turn.
    pub fn is_counterclockwise(self) -> bool {
        self == Self::Counterclockwise
    }
}
