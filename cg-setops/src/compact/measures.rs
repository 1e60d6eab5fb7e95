use anyhow::Result;

use crate::PI;
use crate::compact::mbc::{MbcError, minimum_bounding_circle};
use crate::geometry::convex_hull::convex_hull_from_points;
use crate::geometry::geo_traits::Shape;
use crate::geometry::primitives::Ring;

/// Isoperimetric quotient: the ratio of the shape's area to the area of the circle with the same
/// perimeter, `4π·area / perimeter²`.
pub fn ipq<S: Shape>(shape: &S) -> f64 {
    (4.0 * PI * shape.area()) / shape.perimeter().powi(2)
}

/// Isoareal quotient: the ratio of the perimeter of the circle with the same area to the shape's
/// perimeter, `2π·sqrt(area/π) / perimeter`.
pub fn iaq<S: Shape>(shape: &S) -> f64 {
    (2.0 * PI * (shape.area() / PI).sqrt()) / shape.perimeter()
}

/// Alternative name for the [isoperimetric quotient](ipq)
pub fn polsby_popper<S: Shape>(shape: &S) -> f64 {
    ipq(shape)
}

/// Alternative name for the [isoareal quotient](iaq)
pub fn schwartzberg<S: Shape>(shape: &S) -> f64 {
    iaq(shape)
}

/// Ratio of the shape's area to the area of its convex hull
pub fn convex_hull_ratio<S: Shape>(shape: &S) -> Result<f64> {
    let hull = Ring::new(convex_hull_from_points(shape.vertices()))?;
    Ok(shape.area() / hull.area())
}

/// Reock measure: ratio of the shape's area to the area of its minimum bounding circle
pub fn reock<S: Shape>(shape: &S) -> Result<f64, MbcError> {
    let circle = minimum_bounding_circle(&shape.vertices())?;
    Ok(shape.area() / circle.area())
}
