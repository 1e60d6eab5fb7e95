use anyhow::{Result, ensure};

use crate::geometry::geo_traits::{CollidesWith, Shape};
use crate::geometry::primitives::Point;

///Axis-aligned rectangle
#[derive(Clone, Debug, PartialEq, Copy)]
#[cfg_attr(feature = "shape-serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rectangle {
    pub left: f64,
    pub lower: f64,
    pub right: f64,
    pub upper: f64,
    /// `false` when the rectangle represents the open box (its sides excluded)
    pub closed: bool,
}

impl Rectangle {
    pub fn try_new(left: f64, lower: f64, right: f64, upper: f64) -> Result<Self> {
        ensure!(
            [left, lower, right, upper].iter().all(|v| v.is_finite()),
            "non-finite rectangle, left: {left}, lower: {lower}, right: {right}, upper: {upper}"
        );
        ensure!(
            left <= right && lower <= upper,
            "invalid rectangle, left: {left}, right: {right}, lower: {lower}, upper: {upper}"
        );
        Ok(Rectangle::from_bounds(left, lower, right, upper))
    }

    /// Closed rectangle from already ordered bounds
    pub fn from_bounds(left: f64, lower: f64, right: f64, upper: f64) -> Self {
        debug_assert!(
            left <= right && lower <= upper,
            "invalid rectangle, left: {left}, right: {right}, lower: {lower}, upper: {upper}"
        );
        Rectangle {
            left,
            lower,
            right,
            upper,
            closed: true,
        }
    }

    /// Smallest rectangle containing all `points`, `None` for an empty iterator
    pub fn bounding<'a>(points: impl IntoIterator<Item = &'a Point>) -> Option<Self> {
        let mut points = points.into_iter();
        let first = points.next()?;
        let (mut left, mut lower) = (first.0, first.1);
        let (mut right, mut upper) = (first.0, first.1);
        for p in points {
            left = left.min(p.0);
            lower = lower.min(p.1);
            right = right.max(p.0);
            upper = upper.max(p.1);
        }
        Some(Rectangle::from_bounds(left, lower, right, upper))
    }

    /// Copy of `self` with its sides excluded
    pub fn open(mut self) -> Self {
        self.closed = false;
        self
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Corners in the order (left,lower), (left,upper), (right,upper), (right,lower)
    pub fn corners(&self) -> [Point; 4] {
        [
            Point(self.left, self.lower),
            Point(self.left, self.upper),
            Point(self.right, self.upper),
            Point(self.right, self.lower),
        ]
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.upper - self.lower
    }

    pub fn centroid(&self) -> Point {
        Point(
            (self.left + self.right) / 2.0,
            (self.lower + self.upper) / 2.0,
        )
    }
}

impl Shape for Rectangle {
    fn area(&self) -> f64 {
        self.width() * self.height()
    }

    fn perimeter(&self) -> f64 {
        2.0 * (self.width() + self.height())
    }

    fn bbox(&self) -> Rectangle {
        *self
    }

    fn vertices(&self) -> Vec<Point> {
        self.corners().to_vec()
    }
}

impl CollidesWith<Rectangle> for Rectangle {
    #[inline(always)]
    fn collides_with(&self, other: &Rectangle) -> bool {
        f64::max(self.left, other.left) <= f64::min(self.right, other.right)
            && f64::max(self.lower, other.lower) <= f64::min(self.upper, other.upper)
    }
}

impl CollidesWith<Point> for Rectangle {
    #[inline(always)]
    fn collides_with(&self, point: &Point) -> bool {
        let Point(x, y) = *point;
        x >= self.left && x <= self.right && y >= self.lower && y <= self.upper
    }
}

#[cfg(test)]
mod tests {
    use super::Rectangle;
    use crate::geometry::geo_traits::{CollidesWith, Shape};
    use crate::geometry::primitives::Point;

    #[test]
    fn rejects_inverted_bounds() {
        assert!(Rectangle::try_new(1.0, 0.0, 0.0, 1.0).is_err());
        assert!(Rectangle::try_new(0.0, 0.0, f64::NAN, 1.0).is_err());
    }

    #[test]
    fn measures_and_overlap() {
        let r = Rectangle::try_new(0.0, 0.0, 2.0, 1.0).unwrap();
        assert_eq!(r.area(), 2.0);
        assert_eq!(r.perimeter(), 6.0);
        assert!(r.collides_with(&Point(2.0, 1.0)));
        assert!(!r.collides_with(&Point(2.1, 1.0)));

        let touching = Rectangle::try_new(2.0, 1.0, 3.0, 3.0).unwrap();
        let apart = Rectangle::try_new(2.5, 0.0, 3.0, 1.0).unwrap();
        assert!(r.collides_with(&touching));
        assert!(!r.collides_with(&apart));
    }

    #[test]
    fn bounding_rectangle() {
        let pts = [Point(1.0, 5.0), Point(-2.0, 3.0), Point(4.0, -1.0)];
        let bb = Rectangle::bounding(&pts).unwrap();
        assert_eq!(bb, Rectangle::from_bounds(-2.0, -1.0, 4.0, 5.0));
        assert!(Rectangle::bounding(&[]).is_none());
    }
}
