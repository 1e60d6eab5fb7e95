use log::trace;

use crate::geometry::primitives::{Chain, LineSegment, Polygon, Ray, Rectangle};
use crate::set_ops::Geometry;

/// Topological (open) interior of a shape
#[derive(Clone, Debug, PartialEq)]
pub enum Interior {
    Polygon(Polygon),
    /// One entry per part of the chain, `None` for parts that close onto themselves
    Chains(Vec<Option<Chain>>),
    LineSegment(LineSegment),
    Ray(Ray),
    Rectangle(Rectangle),
}

/// Computes the OGC interior of `shape`. Derived shapes are copies flagged as open sets,
/// the input is never modified.
///
/// * Polygon, LineSegment, Rectangle -> open copy
/// * Chain -> per part, an open single-part chain or `None` when the part is a ring
/// * Ray -> copy with its origin excluded
/// * Point, Ring, Line, VerticalLine, Coordinates -> `None`
pub fn interior(shape: &Geometry) -> Option<Interior> {
    match shape {
        Geometry::Polygon(polygon) => Some(Interior::Polygon(polygon.clone().open())),
        Geometry::Chain(chain) => {
            let parts = (0..chain.parts().len())
                .map(|i| match chain.part_is_ring(i) {
                    true => None,
                    false => Chain::from_vertices(chain.parts()[i].clone())
                        .ok()
                        .map(Chain::open),
                })
                .collect();
            Some(Interior::Chains(parts))
        }
        Geometry::LineSegment(segment) => Some(Interior::LineSegment(segment.open())),
        Geometry::Ray(ray) => Some(Interior::Ray(ray.exclusive())),
        Geometry::Rectangle(rect) => Some(Interior::Rectangle(rect.open())),
        Geometry::Point(_)
        | Geometry::Ring(_)
        | Geometry::Line(_)
        | Geometry::VerticalLine(_)
        | Geometry::Coordinates(..) => {
            trace!("no interior defined for a {:?}", shape.kind());
            None
        }
    }
}
