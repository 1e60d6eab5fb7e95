use anyhow::{Result, ensure};

use crate::geometry::geo_enums::GeoPosition;
use crate::geometry::geo_traits::{CollidesWith, Shape};
use crate::geometry::primitives::{Point, Rectangle, Ring};

/// Polygon made up of one or more exterior rings and zero or more hole rings.
/// An empty `holes` list means the polygon has no holes.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "shape-serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Polygon {
    parts: Vec<Ring>,
    holes: Vec<Ring>,
    /// `false` for the interior of a polygon (its boundary excluded)
    pub closed: bool,
}

impl Polygon {
    pub fn new(parts: Vec<Vec<Point>>, holes: Vec<Vec<Point>>) -> Result<Self> {
        let parts = parts.into_iter().map(Ring::new).collect::<Result<Vec<_>>>()?;
        let holes = holes.into_iter().map(Ring::new).collect::<Result<Vec<_>>>()?;
        Polygon::from_rings(parts, holes)
    }

    pub fn from_rings(parts: Vec<Ring>, holes: Vec<Ring>) -> Result<Self> {
        ensure!(!parts.is_empty(), "polygon needs at least one exterior ring");
        Ok(Polygon {
            parts,
            holes,
            closed: true,
        })
    }

    /// Copy of `self` flagged as an open set
    pub fn open(mut self) -> Self {
        self.closed = false;
        self
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn parts(&self) -> &[Ring] {
        &self.parts
    }

    pub fn holes(&self) -> &[Ring] {
        &self.holes
    }

    pub fn has_holes(&self) -> bool {
        !self.holes.is_empty()
    }

    /// Position of `point` relative to the polygon, holes excluded from the interior
    pub fn position_of(&self, point: &Point) -> GeoPosition {
        let in_rings = |rings: &[Ring]| {
            rings
                .iter()
                .map(|r| r.position_of(point))
                .max_by_key(|pos| match pos {
                    GeoPosition::Exterior => 0,
                    GeoPosition::Interior => 1,
                    GeoPosition::Boundary => 2,
                })
                .unwrap_or(GeoPosition::Exterior)
        };
        match (in_rings(&self.parts), in_rings(&self.holes)) {
            (GeoPosition::Boundary, _) | (_, GeoPosition::Boundary) => GeoPosition::Boundary,
            (GeoPosition::Interior, GeoPosition::Interior) => GeoPosition::Exterior,
            (part_pos, _) => part_pos,
        }
    }

    /// Closed containment test, points on any ring of the polygon are contained
    pub fn contains_point(&self, point: &Point) -> bool {
        self.position_of(point) != GeoPosition::Exterior
    }
}

impl Shape for Polygon {
    fn area(&self) -> f64 {
        let exterior: f64 = self.parts.iter().map(|r| r.area()).sum();
        let holes: f64 = self.holes.iter().map(|r| r.area()).sum();
        exterior - holes
    }

    fn perimeter(&self) -> f64 {
        self.parts
            .iter()
            .chain(self.holes.iter())
            .map(|r| r.perimeter())
            .sum()
    }

    fn bbox(&self) -> Rectangle {
        Rectangle::bounding(self.parts.iter().flat_map(|r| r.vertices()))
            .expect("polygon has at least one exterior ring")
    }

    fn vertices(&self) -> Vec<Point> {
        self.parts
            .iter()
            .flat_map(|r| r.vertices().iter().copied())
            .collect()
    }
}

impl CollidesWith<Point> for Polygon {
    fn collides_with(&self, point: &Point) -> bool {
        self.contains_point(point)
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::Polygon;
    use crate::geometry::geo_enums::GeoPosition;
    use crate::geometry::geo_traits::Shape;
    use crate::geometry::primitives::Point;

    fn square(x: f64, y: f64, size: f64) -> Vec<Point> {
        vec![
            Point(x, y),
            Point(x + size, y),
            Point(x + size, y + size),
            Point(x, y + size),
        ]
    }

    fn framed() -> Polygon {
        Polygon::new(vec![square(0.0, 0.0, 4.0)], vec![square(1.0, 1.0, 2.0)]).unwrap()
    }

    #[test]
    fn area_and_perimeter_account_for_holes() {
        let p = framed();
        assert_eq!(p.area(), 12.0);
        assert_eq!(p.perimeter(), 24.0);
        assert!(p.has_holes());
        assert_eq!(p.vertices().len(), 5);
    }

    #[test_case(Point(0.5, 0.5), GeoPosition::Interior; "in the frame")]
    #[test_case(Point(2.0, 2.0), GeoPosition::Exterior; "in the hole")]
    #[test_case(Point(1.0, 2.0), GeoPosition::Boundary; "on the hole")]
    #[test_case(Point(4.0, 0.0), GeoPosition::Boundary; "exterior corner")]
    #[test_case(Point(5.0, 5.0), GeoPosition::Exterior; "outside")]
    fn position(point: Point, expected: GeoPosition) {
        assert_eq!(framed().position_of(&point), expected);
    }

    #[test]
    fn needs_an_exterior_ring() {
        assert!(Polygon::new(vec![], vec![]).is_err());
    }
}
