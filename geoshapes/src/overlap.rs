//! Overlap tests between points, boxes and polygons.
//!
//! All tests are planar. Coordinates of all the shapes must use the same axis order.

use crate::cartesian::{Rect, Ring};
use crate::error::Result;
use crate::shape::Shape;

/// Returns true if two shapes have at least one common point.
///
/// The operation is symmetric. Shapes are tested with the cheapest applicable method:
///
/// * point or box against point or box - bounds comparison, boundaries included;
/// * point against polygon - ray casting (see [`Ring::contains_point`]);
/// * box against polygon - the box is converted into a four point polygon;
/// * polygon against polygon - a vertex of one polygon lies inside the other, or any of their edges cross.
///
/// Returns an error if any of the shapes is malformed (see [`Shape::new`]).
pub fn overlaps(a: &[f64], b: &[f64]) -> Result<bool> {
    let a = Shape::new(a)?;
    let b = Shape::new(b)?;
    Ok(shapes_overlap(&a, &b))
}

/// Same as [`overlaps`] for already classified shapes.
pub fn shapes_overlap<'a>(a: &Shape<'a>, b: &Shape<'a>) -> bool {
    match (a, b) {
        (Shape::Point(p), Shape::Point(q)) => Rect::from_point(p).intersects(&Rect::from_point(q)),
        (Shape::Box(rect), Shape::Point(p)) | (Shape::Point(p), Shape::Box(rect)) => {
            rect.contains(p)
        }
        (Shape::Box(a), Shape::Box(b)) => a.intersects(b),
        (Shape::Polygon(ring), Shape::Point(p)) | (Shape::Point(p), Shape::Polygon(ring)) => {
            ring.contains_point(p)
        }
        (Shape::Polygon(ring), Shape::Box(rect)) | (Shape::Box(rect), Shape::Polygon(ring)) => {
            let corners = rect.into_ring_coords();
            polygon_polygon(ring, &Ring::new(&corners))
        }
        (Shape::Polygon(a), Shape::Polygon(b)) => polygon_polygon(a, b),
    }
}

fn polygon_polygon(a: &Ring, b: &Ring) -> bool {
    let has_point_inside = |outer: &Ring, inner: &Ring| {
        inner
            .iter_points()
            .any(|p| outer.contains_point(&p))
    };

    has_point_inside(a, b) || has_point_inside(b, a) || a.crosses(b)
}
