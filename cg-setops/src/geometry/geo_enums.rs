/// Outcome of the signed-turn test of a point against a directed segment
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Turn {
    Clockwise,
    /// The point lies on the (closed) segment
    Collinear,
    CounterClockwise,
}

impl Turn {
    /// The classic `-1 / 0 / 1` encoding of the turn
    pub fn signum(self) -> i8 {
        match self {
            Turn::Clockwise => -1,
            Turn::Collinear => 0,
            Turn::CounterClockwise => 1,
        }
    }
}

/// Position of a point relative to a closed region
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GeoPosition {
    Exterior,
    Boundary,
    Interior,
}
