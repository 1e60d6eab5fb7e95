use anyhow::{Result, ensure};
use itertools::Itertools;
use num_integer::Integer;

use crate::geometry::geo_enums::{GeoPosition, Turn};
use crate::geometry::geo_traits::{CollidesWith, Shape};
use crate::geometry::primitives::{LineSegment, Point, Rectangle};

/// Closed simple polyline. The vertex list always repeats its first vertex at the end.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "shape-serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ring {
    vertices: Vec<Point>,
}

impl Ring {
    /// Creates a ring, appending the first vertex if the input is not explicitly closed
    pub fn new(mut vertices: Vec<Point>) -> Result<Self> {
        ensure!(
            vertices.iter().unique().count() >= 3,
            "ring needs at least 3 distinct vertices: {vertices:?}"
        );
        if vertices.first() != vertices.last() {
            vertices.push(vertices[0]);
        }
        Ok(Ring { vertices })
    }

    /// Vertices including the closing repetition of the first vertex
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    pub fn segments(&self) -> impl Iterator<Item = LineSegment> + '_ {
        self.vertices
            .iter()
            .tuple_windows()
            .map(|(p1, p2)| LineSegment::new(*p1, *p2))
    }

    //https://en.wikipedia.org/wiki/Shoelace_formula
    //counterclockwise = positive area, clockwise = negative area
    pub fn signed_area(&self) -> f64 {
        0.5 * self
            .vertices
            .iter()
            .tuple_windows()
            .map(|(Point(x_i, y_i), Point(x_j, y_j))| (y_i + y_j) * (x_i - x_j))
            .sum::<f64>()
    }

    pub fn is_clockwise(&self) -> bool {
        self.signed_area() < 0.0
    }

    /// Position of `point` relative to the region enclosed by the ring
    pub fn position_of(&self, point: &Point) -> GeoPosition {
        if !self.bbox().collides_with(point) {
            return GeoPosition::Exterior;
        }
        if self.segments().any(|s| s.sw_ccw(point) == Turn::Collinear) {
            return GeoPosition::Boundary;
        }
        //ray casting: count the edges crossed by a horizontal ray shot to the right
        //each edge is treated as half-open in y so shared vertices are counted once
        let Point(px, py) = *point;
        let n_crossings = self
            .segments()
            .filter(|s| {
                let (Point(x1, y1), Point(x2, y2)) = (s.p1, s.p2);
                if (y1 > py) == (y2 > py) {
                    return false;
                }
                let x_cross = x1 + (py - y1) * (x2 - x1) / (y2 - y1);
                x_cross > px
            })
            .count();

        match n_crossings.is_odd() {
            true => GeoPosition::Interior,
            false => GeoPosition::Exterior,
        }
    }

    /// Closed containment test, points on the ring itself are contained
    pub fn contains_point(&self, point: &Point) -> bool {
        self.position_of(point) != GeoPosition::Exterior
    }
}

impl Shape for Ring {
    fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    fn perimeter(&self) -> f64 {
        self.segments().map(|s| s.length()).sum()
    }

    fn bbox(&self) -> Rectangle {
        Rectangle::bounding(&self.vertices).expect("ring has at least 3 vertices")
    }

    fn vertices(&self) -> Vec<Point> {
        self.vertices.clone()
    }
}

impl CollidesWith<Point> for Ring {
    fn collides_with(&self, point: &Point) -> bool {
        self.contains_point(point)
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::Ring;
    use crate::geometry::geo_enums::GeoPosition;
    use crate::geometry::geo_traits::Shape;
    use crate::geometry::primitives::Point;

    fn unit_square() -> Ring {
        Ring::new(vec![
            Point(0.0, 0.0),
            Point(1.0, 0.0),
            Point(1.0, 1.0),
            Point(0.0, 1.0),
        ])
        .unwrap()
    }

    #[test]
    fn closes_itself() {
        let ring = unit_square();
        assert_eq!(ring.vertices().len(), 5);
        assert_eq!(ring.vertices().first(), ring.vertices().last());
    }

    #[test]
    fn rejects_degenerate() {
        assert!(Ring::new(vec![Point(0.0, 0.0), Point(1.0, 0.0), Point(0.0, 0.0)]).is_err());
    }

    #[test]
    fn area_perimeter_orientation() {
        let ring = unit_square();
        assert_eq!(ring.area(), 1.0);
        assert_eq!(ring.perimeter(), 4.0);
        assert!(!ring.is_clockwise());

        let cw = Ring::new(ring.vertices().iter().rev().copied().collect()).unwrap();
        assert!(cw.is_clockwise());
        assert_eq!(cw.area(), 1.0);
    }

    #[test_case(Point(0.5, 0.5), GeoPosition::Interior; "center")]
    #[test_case(Point(0.0, 0.5), GeoPosition::Boundary; "left side")]
    #[test_case(Point(1.0, 1.0), GeoPosition::Boundary; "corner")]
    #[test_case(Point(1.5, 0.5), GeoPosition::Exterior; "right of")]
    #[test_case(Point(-0.5, 1.0), GeoPosition::Exterior; "level with a vertex")]
    fn position(point: Point, expected: GeoPosition) {
        assert_eq!(unit_square().position_of(&point), expected);
    }
}
