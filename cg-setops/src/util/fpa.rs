use std::cmp::Ordering;
use std::fmt::{Debug, Display};

///Wrapper around the [`float_cmp::approx_eq!()`] macro for easy comparison of floats with a certain tolerance.
///Two FPAs are considered equal if they are within a certain tolerance of each other.
#[derive(Debug, Clone, Copy)]
pub struct FPA(pub f64);

impl FPA {
    /// Tolerance in ulps used for every comparison
    pub const ULPS: i64 = 4;

    /// Absolute tolerance of [`FPA::close`]
    pub const ATOL: f64 = 1e-8;
    /// Relative tolerance of [`FPA::close`], scaled by `|b|`
    pub const RTOL: f64 = 1e-5;

    /// Mixed absolute/relative closeness: `|a - b| <= ATOL + RTOL * |b|`.
    /// Coarser than the ulps comparison, used where nearly degenerate input must be caught.
    pub fn close(a: f64, b: f64) -> bool {
        (a - b).abs() <= FPA::ATOL + FPA::RTOL * b.abs()
    }

    /// [`FPA::close`] applied to both coordinates
    pub fn coords_close(a: (f64, f64), b: (f64, f64)) -> bool {
        FPA::close(a.0, b.0) && FPA::close(a.1, b.1)
    }
}

impl<T> From<T> for FPA
where
    T: Into<f64>,
{
    fn from(n: T) -> Self {
        FPA(n.into())
    }
}

impl PartialEq<Self> for FPA {
    fn eq(&self, other: &Self) -> bool {
        float_cmp::approx_eq!(f64, self.0, other.0, ulps = FPA::ULPS)
    }
}

impl PartialOrd<Self> for FPA {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.eq(other) {
            true => Some(Ordering::Equal),
            false => self.0.partial_cmp(&other.0),
        }
    }
}

impl Display for FPA {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}
