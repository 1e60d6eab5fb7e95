/// Infinite non-vertical line `y = m * x + b`
#[derive(Clone, Debug, PartialEq, Copy)]
#[cfg_attr(feature = "shape-serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Line {
    pub m: f64,
    pub b: f64,
}

impl Line {
    pub fn new(m: f64, b: f64) -> Self {
        Line { m, b }
    }

    pub fn y(&self, x: f64) -> f64 {
        self.m * x + self.b
    }
}

/// Infinite vertical line `x = c`
#[derive(Clone, Debug, PartialEq, Copy)]
#[cfg_attr(feature = "shape-serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VerticalLine {
    pub x: f64,
}

impl VerticalLine {
    pub fn new(x: f64) -> Self {
        VerticalLine { x }
    }
}
