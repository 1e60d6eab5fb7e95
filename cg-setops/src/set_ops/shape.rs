use crate::geometry::primitives::{
    Chain, Line, LineSegment, Point, Polygon, Ray, Rectangle, Ring, VerticalLine,
};

/// Any shape accepted by the set operations
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "shape-serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Geometry {
    Point(Point),
    LineSegment(LineSegment),
    Ray(Ray),
    Line(Line),
    VerticalLine(VerticalLine),
    Chain(Chain),
    Ring(Ring),
    Rectangle(Rectangle),
    Polygon(Polygon),
    /// Bare coordinate pair, not yet validated as a [`Point`]
    Coordinates(f64, f64),
}

/// Discriminant of [`Geometry`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Point,
    LineSegment,
    Ray,
    Line,
    VerticalLine,
    Chain,
    Ring,
    Rectangle,
    Polygon,
    Coordinates,
}

impl Geometry {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Geometry::Point(_) => ShapeKind::Point,
            Geometry::LineSegment(_) => ShapeKind::LineSegment,
            Geometry::Ray(_) => ShapeKind::Ray,
            Geometry::Line(_) => ShapeKind::Line,
            Geometry::VerticalLine(_) => ShapeKind::VerticalLine,
            Geometry::Chain(_) => ShapeKind::Chain,
            Geometry::Ring(_) => ShapeKind::Ring,
            Geometry::Rectangle(_) => ShapeKind::Rectangle,
            Geometry::Polygon(_) => ShapeKind::Polygon,
            Geometry::Coordinates(..) => ShapeKind::Coordinates,
        }
    }
}

/// A shape normalized into one of the three OGC-conformal families
#[derive(Clone, Debug, PartialEq)]
pub enum Canonical {
    Point(Point),
    Chain(Chain),
    Polygon(Polygon),
}

/// Discriminant of [`Canonical`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Family {
    Point,
    Chain,
    Polygon,
}

impl Canonical {
    pub fn family(&self) -> Family {
        match self {
            Canonical::Point(_) => Family::Point,
            Canonical::Chain(_) => Family::Chain,
            Canonical::Polygon(_) => Family::Polygon,
        }
    }
}

impl From<Canonical> for Geometry {
    fn from(c: Canonical) -> Self {
        match c {
            Canonical::Point(p) => Geometry::Point(p),
            Canonical::Chain(c) => Geometry::Chain(c),
            Canonical::Polygon(p) => Geometry::Polygon(p),
        }
    }
}

macro_rules! impl_from_primitive {
    ($($variant:ident),*) => {
        $(
            impl From<$variant> for Geometry {
                fn from(shape: $variant) -> Self {
                    Geometry::$variant(shape)
                }
            }
        )*
    };
}

impl_from_primitive!(
    Point,
    LineSegment,
    Ray,
    Line,
    VerticalLine,
    Chain,
    Ring,
    Rectangle,
    Polygon
);

impl From<(f64, f64)> for Geometry {
    fn from((x, y): (f64, f64)) -> Self {
        Geometry::Coordinates(x, y)
    }
}

#[cfg(all(test, feature = "shape-serde"))]
mod tests {
    use super::Geometry;
    use crate::geometry::primitives::{Chain, Point, Polygon, Rectangle};

    #[test]
    fn json_round_trip() {
        let shapes = vec![
            Geometry::Point(Point(0.5, -2.0)),
            Geometry::Coordinates(1.0, 2.0),
            Geometry::Chain(
                Chain::new(vec![
                    vec![Point(0.0, 0.0), Point(1.0, 0.0)],
                    vec![Point(2.0, 2.0), Point(3.0, 2.0), Point(3.0, 4.0)],
                ])
                .unwrap()
                .open(),
            ),
            Geometry::Rectangle(Rectangle::try_new(0.0, 0.0, 2.0, 1.0).unwrap()),
            Geometry::Polygon(
                Polygon::new(
                    vec![vec![Point(0.0, 0.0), Point(4.0, 0.0), Point(4.0, 4.0), Point(0.0, 4.0)]],
                    vec![vec![Point(1.0, 1.0), Point(2.0, 1.0), Point(2.0, 2.0), Point(1.0, 2.0)]],
                )
                .unwrap(),
            ),
        ];

        let json = serde_json::to_string(&shapes).unwrap();
        let restored: Vec<Geometry> = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, shapes);
    }
}
