use log::{debug, trace};

use crate::geometry::primitives::{Chain, Point, Polygon, Ring};
use crate::set_ops::{Canonical, Geometry};

/// Coerces `shape` into one of the canonical families Point, Chain or Polygon.
///
/// * Point, Chain, Polygon -> unchanged
/// * Ring -> Chain over the ring's vertices
/// * LineSegment -> two-vertex Chain
/// * Rectangle -> Polygon when closed, otherwise the Chain over its corner ring
/// * Coordinates -> Point, `None` if the coordinates are not finite
/// * Line, VerticalLine, Ray -> `None`
pub fn coerce(shape: &Geometry) -> Option<Canonical> {
    let coerced = match shape {
        Geometry::Point(p) => Some(Canonical::Point(*p)),
        Geometry::Chain(c) => Some(Canonical::Chain(c.clone())),
        Geometry::Polygon(p) => Some(Canonical::Polygon(p.clone())),
        Geometry::Ring(ring) => ring_to_chain(ring),
        Geometry::LineSegment(s) => Chain::from_vertices(vec![s.p1, s.p2])
            .ok()
            .map(Canonical::Chain),
        Geometry::Rectangle(rect) => {
            let corners = rect.corners().to_vec();
            match rect.is_closed() {
                true => Polygon::new(vec![corners], vec![])
                    .ok()
                    .map(Canonical::Polygon),
                false => Ring::new(corners).ok().and_then(|r| ring_to_chain(&r)),
            }
        }
        Geometry::Coordinates(x, y) => match Point::try_new(*x, *y) {
            Ok(p) => Some(Canonical::Point(p)),
            Err(err) => {
                debug!("coordinates do not form a point: {err}");
                None
            }
        },
        Geometry::Line(_) | Geometry::VerticalLine(_) | Geometry::Ray(_) => None,
    };
    trace!(
        "coerced {:?} into {:?}",
        shape.kind(),
        coerced.as_ref().map(|c| c.family())
    );
    coerced
}

fn ring_to_chain(ring: &Ring) -> Option<Canonical> {
    Chain::from_vertices(ring.vertices().to_vec())
        .ok()
        .map(Canonical::Chain)
}
