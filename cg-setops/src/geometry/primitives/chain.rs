use anyhow::{Result, ensure};
use itertools::Itertools;

use crate::geometry::primitives::{LineSegment, Point, Rectangle};

/// Ordered multi-part polyline. A part whose first and last vertex coincide is a ring.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "shape-serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Chain {
    parts: Vec<Vec<Point>>,
    /// `false` for the open chain produced by [`crate::set_ops::interior`]
    pub closed: bool,
}

impl Chain {
    pub fn new(parts: Vec<Vec<Point>>) -> Result<Self> {
        ensure!(!parts.is_empty(), "chain needs at least one part");
        for (i, part) in parts.iter().enumerate() {
            ensure!(
                part.len() >= 2,
                "part {i} of chain has fewer than 2 vertices: {part:?}"
            );
        }
        Ok(Chain {
            parts,
            closed: true,
        })
    }

    /// Single-part chain
    pub fn from_vertices(vertices: Vec<Point>) -> Result<Self> {
        Chain::new(vec![vertices])
    }

    /// Copy of `self` flagged as an open set
    pub fn open(mut self) -> Self {
        self.closed = false;
        self
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn parts(&self) -> &[Vec<Point>] {
        &self.parts
    }

    /// All vertices of all parts, in order
    pub fn vertices(&self) -> Vec<Point> {
        self.parts.iter().flatten().copied().collect()
    }

    /// Whether the part at `index` starts and ends at the same vertex
    pub fn part_is_ring(&self, index: usize) -> bool {
        let part = &self.parts[index];
        part.first() == part.last()
    }

    /// Consecutive-vertex segments, one list per part
    pub fn segments(&self) -> Vec<Vec<LineSegment>> {
        self.parts
            .iter()
            .map(|part| {
                part.iter()
                    .tuple_windows()
                    .map(|(p1, p2)| LineSegment::new(*p1, *p2))
                    .collect()
            })
            .collect()
    }

    /// Total length of all parts
    pub fn arc_length(&self) -> f64 {
        self.segments().iter().flatten().map(|s| s.length()).sum()
    }

    pub fn bbox(&self) -> Rectangle {
        Rectangle::bounding(self.parts.iter().flatten()).expect("chain has at least one vertex")
    }
}

#[cfg(test)]
mod tests {
    use super::Chain;
    use crate::geometry::primitives::Point;

    #[test]
    fn validation() {
        assert!(Chain::new(vec![]).is_err());
        assert!(Chain::new(vec![vec![Point(0.0, 0.0)]]).is_err());
        assert!(Chain::from_vertices(vec![Point(0.0, 0.0), Point(1.0, 0.0)]).is_ok());
    }

    #[test]
    fn segments_per_part() {
        let chain = Chain::new(vec![
            vec![Point(0.0, 0.0), Point(3.0, 0.0), Point(3.0, 4.0)],
            vec![Point(10.0, 0.0), Point(10.0, 1.0)],
        ])
        .unwrap();

        let segs = chain.segments();
        assert_eq!(segs.len(), 2);
        assert_eq!(segs[0].len(), 2);
        assert_eq!(segs[1].len(), 1);
        assert_eq!(chain.arc_length(), 8.0);
        assert_eq!(chain.vertices().len(), 5);
        assert!(!chain.part_is_ring(0));
    }
}
