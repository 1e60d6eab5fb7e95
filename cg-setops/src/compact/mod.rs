/// Skyum's minimum bounding circle
pub mod mbc;

/// Shape-compactness ratios
pub mod measures;

#[doc(inline)]
pub use mbc::{MbcError, minimum_bounding_circle, minimum_bounding_circle_with};
#[doc(inline)]
pub use measures::{convex_hull_ratio, iaq, ipq, polsby_popper, reock, schwartzberg};
