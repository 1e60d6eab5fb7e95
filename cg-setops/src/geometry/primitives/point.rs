use std::hash::{Hash, Hasher};

use anyhow::{Result, ensure};

use crate::geometry::geo_traits::CollidesWith;

/// Geometric primitive representing a point
#[derive(Debug, Clone, PartialEq, Copy)]
#[cfg_attr(feature = "shape-serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point(pub f64, pub f64);

impl Point {
    /// Creates a point, rejecting NaN and infinite coordinates
    pub fn try_new(x: f64, y: f64) -> Result<Self> {
        ensure!(
            x.is_finite() && y.is_finite(),
            "invalid point coordinates: ({x}, {y})"
        );
        Ok(Point(x, y))
    }

    pub fn x(&self) -> f64 {
        self.0
    }

    pub fn y(&self) -> f64 {
        self.1
    }

    pub fn distance(&self, other: &Point) -> f64 {
        self.sq_distance(other).sqrt()
    }

    pub fn sq_distance(&self, other: &Point) -> f64 {
        (self.0 - other.0).powi(2) + (self.1 - other.1).powi(2)
    }

    /// Bit pattern used for hashing, `-0.0` and `0.0` collapse onto the same key
    fn hash_bits(v: f64) -> u64 {
        if v == 0.0 { 0.0f64.to_bits() } else { v.to_bits() }
    }
}

impl Eq for Point {}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        Point::hash_bits(self.0).hash(state);
        Point::hash_bits(self.1).hash(state);
    }
}

impl From<Point> for (f64, f64) {
    fn from(p: Point) -> Self {
        (p.0, p.1)
    }
}

impl From<(f64, f64)> for Point {
    fn from(p: (f64, f64)) -> Self {
        Point(p.0, p.1)
    }
}

impl CollidesWith<Point> for Point {
    fn collides_with(&self, other: &Point) -> bool {
        self == other
    }
}
