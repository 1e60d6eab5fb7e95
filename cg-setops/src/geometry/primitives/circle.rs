use crate::PI;
use crate::geometry::geo_traits::CollidesWith;
use crate::geometry::primitives::Point;

/// Geometric primitive representing a circle
#[derive(Clone, Debug, PartialEq, Copy)]
#[cfg_attr(feature = "shape-serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
}

impl Circle {
    pub fn new(center: Point, radius: f64) -> Self {
        debug_assert!(
            radius.is_finite() && radius >= 0.0,
            "invalid circle radius: {radius}"
        );
        debug_assert!(
            center.0.is_finite() && center.1.is_finite(),
            "invalid circle center: {center:?}"
        );

        Self { center, radius }
    }

    pub fn area(&self) -> f64 {
        self.radius * self.radius * PI
    }
}

impl From<Circle> for (f64, (f64, f64)) {
    fn from(c: Circle) -> Self {
        (c.radius, c.center.into())
    }
}

impl CollidesWith<Point> for Circle {
    fn collides_with(&self, point: &Point) -> bool {
        point.sq_distance(&self.center) <= self.radius.powi(2)
    }
}
