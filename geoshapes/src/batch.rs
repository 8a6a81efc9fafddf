//! Queries of a single shape against a collection of shapes.
//!
//! All queries are linear scans over the collection.

use crate::error::Result;
use crate::geodesic::Geodesic;
use crate::overlap::shapes_overlap;
use crate::shape::Shape;

/// Distance returned by [`distance_any`] for an empty collection. Not smaller than any real distance.
pub const MAX_DISTANCE: f64 = f64::MAX;

/// Returns true if the `shape` overlaps at least one of the `shapes`.
///
/// Stops at the first overlapping member. Members after it are not validated.
pub fn overlaps_any<I>(shape: &[f64], shapes: I) -> Result<bool>
where
    I: IntoIterator,
    I::Item: AsRef<[f64]>,
{
    let shape = Shape::new(shape)?;
    for other in shapes {
        if shapes_overlap(&shape, &Shape::new(other.as_ref())?) {
            return Ok(true);
        }
    }

    Ok(false)
}

/// Finds the member of `shapes` closest to the `shape`.
///
/// Shapes are compared by the geodesic distance between their centroids, with coordinates read as `[lat, lon]`.
/// Returns the index of the closest member together with the distance in meters, or `None` if the collection is
/// empty. If several members are equally close, the first one wins.
pub fn nearest<I>(shape: &[f64], shapes: I) -> Result<Option<(usize, f64)>>
where
    I: IntoIterator,
    I::Item: AsRef<[f64]>,
{
    let geodesic = Geodesic::wgs84();
    let from = Shape::new(shape)?.centroid();

    let mut nearest: Option<(usize, f64)> = None;
    for (index, other) in shapes.into_iter().enumerate() {
        let to = Shape::new(other.as_ref())?.centroid();
        let distance = geodesic.distance(from.x, from.y, to.x, to.y)?;
        if nearest.map_or(true, |(_, min)| distance < min) {
            nearest = Some((index, distance));
        }
    }

    Ok(nearest)
}

/// Geodesic distance in meters from the `shape` to the closest member of `shapes`, see [`nearest`].
///
/// Returns [`MAX_DISTANCE`] if the collection is empty.
pub fn distance_any<I>(shape: &[f64], shapes: I) -> Result<f64>
where
    I: IntoIterator,
    I::Item: AsRef<[f64]>,
{
    Ok(nearest(shape, shapes)?.map_or(MAX_DISTANCE, |(_, distance)| distance))
}
