use anyhow::{Result, ensure};

use crate::geometry::primitives::Point;

/// Half-line starting at origin `o` and passing through `p`
#[derive(Clone, Debug, PartialEq, Copy)]
#[cfg_attr(feature = "shape-serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ray {
    pub o: Point,
    pub p: Point,
    /// `false` when the origin itself is excluded
    pub origin_inclusive: bool,
}

impl Ray {
    pub fn new(o: Point, p: Point) -> Self {
        Ray {
            o,
            p,
            origin_inclusive: true,
        }
    }

    /// Copy of `self` with the origin excluded
    pub fn exclusive(mut self) -> Self {
        self.origin_inclusive = false;
        self
    }

    /// Unsigned angle in `[0, π]` between `self` and `other`, both rays must share their origin
    pub fn angle_between(&self, other: &Ray) -> Result<f64> {
        ensure!(
            self.o == other.o,
            "rays do not share an origin: {:?} != {:?}",
            self.o,
            other.o
        );
        Ok(Ray::angle_at(self.o, self.p, other.p))
    }

    /// Unsigned angle in `[0, π]` formed at `vertex` by the rays towards `p` and `r`
    pub fn angle_at(vertex: Point, p: Point, r: Point) -> f64 {
        let (ux, uy) = (p.0 - vertex.0, p.1 - vertex.1);
        let (vx, vy) = (r.0 - vertex.0, r.1 - vertex.1);

        let cross = ux * vy - uy * vx;
        let dot = ux * vx + uy * vy;
        f64::atan2(cross, dot).abs()
    }
}
