use std::collections::HashMap;

use log::warn;
use num_integer::Integer;

use crate::geometry::primitives::{Chain, Point, Ring};
use crate::set_ops::Geometry;

/// Topological boundary of a shape
#[derive(Clone, Debug, PartialEq)]
pub enum Boundary {
    /// A single boundary point (a ray's origin, or a multi-part chain with one odd-order endpoint)
    Point(Point),
    /// Endpoints of a segment or an open chain, possibly empty for a multi-part chain
    Points(Vec<Point>),
    /// The ring around a rectangle
    Ring(Ring),
    /// Exterior rings of a polygon followed by its hole rings
    Rings(Vec<Ring>),
}

/// Computes the OGC boundary of `shape`.
///
/// * Polygon -> one ring per exterior part, then one ring per hole
/// * LineSegment -> both endpoints
/// * Chain -> the part endpoints with odd order across all parts
/// * Ray -> its origin
/// * Rectangle -> the ring through its corners
/// * Point, Ring, Line, VerticalLine, Coordinates -> `None`
///
/// A single-part chain that closes onto itself has an empty boundary: a warning is logged and
/// `None` is returned.
pub fn boundary(shape: &Geometry) -> Option<Boundary> {
    match shape {
        Geometry::Polygon(polygon) => {
            let rings = polygon
                .parts()
                .iter()
                .chain(polygon.holes())
                .cloned()
                .collect();
            Some(Boundary::Rings(rings))
        }
        Geometry::LineSegment(segment) => Some(Boundary::Points(vec![segment.p1, segment.p2])),
        Geometry::Chain(chain) => chain_boundary(chain),
        Geometry::Ray(ray) => Some(Boundary::Point(ray.o)),
        Geometry::Rectangle(rect) => {
            let corners = vec![
                Point(rect.left, rect.lower),
                Point(rect.right, rect.lower),
                Point(rect.right, rect.upper),
                Point(rect.left, rect.upper),
            ];
            match Ring::new(corners) {
                Ok(ring) => Some(Boundary::Ring(ring)),
                Err(err) => {
                    warn!("rectangle {rect:?} has no boundary ring: {err}");
                    None
                }
            }
        }
        Geometry::Point(_)
        | Geometry::Ring(_)
        | Geometry::Line(_)
        | Geometry::VerticalLine(_)
        | Geometry::Coordinates(..) => None,
    }
}

fn chain_boundary(chain: &Chain) -> Option<Boundary> {
    if let [part] = chain.parts() {
        let (head, tail) = head_tail(part);
        return match head == tail {
            true => {
                warn!("the boundary of {chain:?} is empty");
                None
            }
            false => Some(Boundary::Points(vec![head, tail])),
        };
    }
    let mut points = odd_order_endpoints(chain);
    match points.len() {
        1 => points.pop().map(Boundary::Point),
        _ => Some(Boundary::Points(points)),
    }
}

/// Endpoints appearing an odd number of times as head or tail of a part, in first-seen order
fn odd_order_endpoints(chain: &Chain) -> Vec<Point> {
    let mut order: HashMap<Point, usize> = HashMap::new();
    let mut first_seen = vec![];
    for part in chain.parts() {
        let (head, tail) = head_tail(part);
        for endpoint in [head, tail] {
            let count = order.entry(endpoint).or_insert_with(|| {
                first_seen.push(endpoint);
                0
            });
            *count += 1;
        }
    }
    first_seen
        .into_iter()
        .filter(|p| order[p].is_odd())
        .collect()
}

fn head_tail(part: &[Point]) -> (Point, Point) {
    //chain parts always hold at least 2 vertices
    (part[0], part[part.len() - 1])
}

/// For every part of `chain`, whether its (head, tail) belongs to the boundary of the chain
pub fn chain_exterior_indices(chain: &Chain) -> Vec<(bool, bool)> {
    let boundary_points = match boundary(&Geometry::Chain(chain.clone())) {
        Some(Boundary::Point(p)) => vec![p],
        Some(Boundary::Points(points)) => points,
        _ => vec![],
    };
    chain
        .parts()
        .iter()
        .map(|part| {
            let (head, tail) = head_tail(part);
            (boundary_points.contains(&head), boundary_points.contains(&tail))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{Boundary, boundary, chain_exterior_indices};
    use crate::geometry::primitives::{Chain, Point};
    use crate::set_ops::Geometry;

    #[test]
    fn exterior_indices_follow_parity() {
        //two parts joined end to start, plus a detached segment
        let chain = Chain::new(vec![
            vec![Point(0.0, 0.0), Point(1.0, 0.0)],
            vec![Point(1.0, 0.0), Point(1.0, 1.0)],
            vec![Point(5.0, 5.0), Point(6.0, 5.0)],
        ])
        .unwrap();

        assert_eq!(
            chain_exterior_indices(&chain),
            vec![(true, false), (false, true), (true, true)]
        );
    }

    #[test]
    fn closed_single_part_has_no_exterior() {
        let chain = Chain::from_vertices(vec![
            Point(0.0, 0.0),
            Point(1.0, 0.0),
            Point(0.0, 1.0),
            Point(0.0, 0.0),
        ])
        .unwrap();
        assert_eq!(chain_exterior_indices(&chain), vec![(false, false)]);
        assert_eq!(boundary(&Geometry::Chain(chain)), None);
    }

    #[test]
    fn doubled_back_arm_cancels() {
        //the first two parts retrace the same arm, only the third arm's endpoints keep odd order
        let chain = Chain::new(vec![
            vec![Point(0.0, 0.0), Point(1.0, 0.0)],
            vec![Point(1.0, 0.0), Point(0.0, 0.0)],
            vec![Point(0.0, 0.0), Point(0.0, 2.0)],
        ])
        .unwrap();
        assert_eq!(
            boundary(&Geometry::Chain(chain)),
            Some(Boundary::Points(vec![Point(0.0, 0.0), Point(0.0, 2.0)]))
        );
    }
}
