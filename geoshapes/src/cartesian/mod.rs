//! Primitives in planar cartesian coordinates used by the overlap tests.

mod orient;
mod rect;
mod ring;
mod segment;

pub use nalgebra::Point2;
pub use orient::Orientation;
pub use rect::Rect;
pub use ring::Ring;
pub use segment::Segment;

/// Two dimensional point with `f64` coordinates.
pub type Point2d = Point2<f64>;
