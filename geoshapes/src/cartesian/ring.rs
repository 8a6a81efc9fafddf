//! Closed ring of points stored as a flat coordinate sequence.
//!
//! The ring is implicitly closed: the last point is connected to the first one, and there is no need to duplicate
//! the first point at the end of the sequence. A duplicated closing point is harmless though, it only adds a
//! zero-length segment.

use crate::cartesian::{Point2d, Segment};

/// A closed ring borrowing flat `[x0, y0, x1, y1, ...]` coordinates.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ring<'a> {
    coords: &'a [f64],
}

impl<'a> Ring<'a> {
    /// Wraps flat coordinates. A trailing odd value is ignored.
    pub fn new(coords: &'a [f64]) -> Self {
        Self { coords }
    }

    /// Number of points in the ring.
    pub fn len(&self) -> usize {
        self.coords.len() / 2
    }

    /// True if the ring has no points.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over the points of the ring.
    pub fn iter_points(&self) -> impl Iterator<Item = Point2d> + 'a {
        let coords: &'a [f64] = self.coords;
        coords
            .chunks_exact(2)
            .map(|pair| Point2d::new(pair[0], pair[1]))
    }

    /// Iterates over segments of the ring, including the one between the last and the first points.
    pub fn iter_segments(&self) -> impl Iterator<Item = Segment> + 'a {
        let closing = self.iter_points().take(1);
        self.iter_points()
            .zip(self.iter_points().skip(1).chain(closing))
            .map(|(from, to)| Segment(from, to))
    }

    /// Even-odd containment test by casting a horizontal ray from the `point` to positive `x` direction.
    ///
    /// Self-intersecting rings are supported: areas covered an even number of times are outside.
    ///
    /// Points exactly on the boundary are not treated specially. For an axis-aligned rectangle this means that the
    /// left and bottom sides are inside while the right and top sides are outside.
    pub fn contains_point(&self, point: &Point2d) -> bool {
        let mut contains = false;
        for segment in self.iter_segments() {
            if let Some(x) = segment.horizontal_crossing(point.y) {
                if point.x < x {
                    contains = !contains;
                }
            }
        }

        contains
    }

    /// Returns true if any segment of this ring crosses any segment of the `other` ring.
    pub fn crosses(&self, other: &Ring) -> bool {
        self.iter_segments().any(|segment| {
            other
                .iter_segments()
                .any(|other_segment| segment.crosses(&other_segment))
        })
    }
}
