use crate::geometry::geo_enums::Turn;
use crate::geometry::geo_traits::CollidesWith;
use crate::geometry::primitives::{Point, Rectangle};

/// Line segment between two [`Point`]s
#[derive(Clone, Debug, PartialEq, Copy)]
#[cfg_attr(feature = "shape-serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineSegment {
    pub p1: Point,
    pub p2: Point,
    /// `false` for the open segment (endpoints excluded)
    pub closed: bool,
}

impl LineSegment {
    pub fn new(p1: Point, p2: Point) -> Self {
        LineSegment {
            p1,
            p2,
            closed: true,
        }
    }

    /// Copy of `self` with the endpoints excluded
    pub fn open(mut self) -> Self {
        self.closed = false;
        self
    }

    /// Sedgewick's counter-clockwise test of `pt` against the directed segment `p1 -> p2`.
    /// Returns [`Turn::Collinear`] only when `pt` lies on the closed segment, collinear points
    /// beyond either endpoint report a turn.
    pub fn sw_ccw(&self, pt: &Point) -> Turn {
        let Point(x0, y0) = self.p1;
        let Point(x1, y1) = self.p2;
        let Point(x2, y2) = *pt;

        let (dx1, dy1) = (x1 - x0, y1 - y0);
        let (dx2, dy2) = (x2 - x0, y2 - y0);

        if dy1 * dx2 < dy2 * dx1 {
            return Turn::CounterClockwise;
        }
        if dy1 * dx2 > dy2 * dx1 {
            return Turn::Clockwise;
        }
        //collinear from here on
        if dx1 * dx2 < 0.0 || dy1 * dy2 < 0.0 {
            //pt lies behind p1
            return Turn::Clockwise;
        }
        if dx1 * dx1 + dy1 * dy1 >= dx2 * dx2 + dy2 * dy2 {
            Turn::Collinear
        } else {
            //pt lies beyond p2
            Turn::CounterClockwise
        }
    }

    /// True when both segments share at least one point (touching and overlapping included)
    pub fn intersects(&self, other: &LineSegment) -> bool {
        let ccw1 = self.sw_ccw(&other.p2).signum();
        let ccw2 = self.sw_ccw(&other.p1).signum();
        let ccw3 = other.sw_ccw(&self.p1).signum();
        let ccw4 = other.sw_ccw(&self.p2).signum();

        ccw1 * ccw2 <= 0 && ccw3 * ccw4 <= 0
    }

    pub fn length(&self) -> f64 {
        self.p1.distance(&self.p2)
    }

    pub fn x_min(&self) -> f64 {
        f64::min(self.p1.0, self.p2.0)
    }

    pub fn y_min(&self) -> f64 {
        f64::min(self.p1.1, self.p2.1)
    }

    pub fn x_max(&self) -> f64 {
        f64::max(self.p1.0, self.p2.0)
    }

    pub fn y_max(&self) -> f64 {
        f64::max(self.p1.1, self.p2.1)
    }

    pub fn bbox(&self) -> Rectangle {
        Rectangle::from_bounds(self.x_min(), self.y_min(), self.x_max(), self.y_max())
    }

    pub fn centroid(&self) -> Point {
        Point((self.p1.0 + self.p2.0) / 2.0, (self.p1.1 + self.p2.1) / 2.0)
    }
}

impl CollidesWith<LineSegment> for LineSegment {
    #[inline(always)]
    fn collides_with(&self, other: &LineSegment) -> bool {
        if f64::max(self.x_min(), other.x_min()) > f64::min(self.x_max(), other.x_max())
            || f64::max(self.y_min(), other.y_min()) > f64::min(self.y_max(), other.y_max())
        {
            //bounding boxes do not overlap
            return false;
        }
        self.intersects(other)
    }
}

impl CollidesWith<Point> for LineSegment {
    #[inline(always)]
    fn collides_with(&self, point: &Point) -> bool {
        self.sw_ccw(point) == Turn::Collinear
    }
}
