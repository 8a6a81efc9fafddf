use crate::cartesian::{Orientation, Point2d};

/// A straight line segment between two points.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Segment(pub Point2d, pub Point2d);

impl Segment {
    /// Returns true if the segments cross each other: the endpoints of each segment lie on different sides of the
    /// line through the other one.
    ///
    /// "Different sides" is decided by a strict left turn test only, so an endpoint lying exactly on the other line
    /// is counted together with the points to its right. Collinear overlapping segments are therefore not
    /// guaranteed to be reported as crossing.
    pub fn crosses(&self, other: &Segment) -> bool {
        let left = |s: &Segment, p: &Point2d| Orientation::triplet(&s.0, &s.1, p).is_counterclockwise();

        left(self, &other.0) != left(self, &other.1) && left(other, &self.0) != left(other, &self.1)
    }

    /// If the horizontal line through `y` is crossed by the segment, returns `x` of the crossing point.
    ///
    /// The lower end of the segment is included and the upper end is excluded, so a vertex shared by two edges of
    /// a ring is counted exactly once. Horizontal segments never cross.
    pub fn horizontal_crossing(&self, y: f64) -> Option<f64> {
        let Segment(p1, p2) = self;
        if (p1.y <= y && y < p2.y) || (p2.y <= y && y < p1.y) {
            Some((p2.x - p1.x) * (y - p1.y) / (p2.y - p1.y) + p1.x)
        } else {
            None
        }
    }
}
