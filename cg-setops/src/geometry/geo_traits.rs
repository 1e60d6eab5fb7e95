use crate::geometry::primitives::{Point, Rectangle};

/// Trait for types that can detect collisions between `Self` and `T`.
pub trait CollidesWith<T> {
    fn collides_with(&self, other: &T) -> bool;
}

/// Trait for shared properties of areal primitives.
pub trait Shape {
    /// Area of the interior of the shape
    fn area(&self) -> f64;

    /// Total length of the boundary of the shape
    fn perimeter(&self) -> f64;

    /// Bounding box of the shape
    fn bbox(&self) -> Rectangle;

    /// All vertices of the shape, flattened over its parts
    fn vertices(&self) -> Vec<Point>;
}
