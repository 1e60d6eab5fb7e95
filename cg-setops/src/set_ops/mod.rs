mod boundary;
mod coerce;
mod dispatch;
mod error;
mod interior;
mod shape;

#[doc(inline)]
pub use boundary::{Boundary, boundary, chain_exterior_indices};
#[doc(inline)]
pub use coerce::coerce;
#[doc(inline)]
pub use dispatch::{intersection, intersects};
#[doc(inline)]
pub use error::SetOpError;
#[doc(inline)]
pub use interior::{Interior, interior};
#[doc(inline)]
pub use shape::{Canonical, Family, Geometry, ShapeKind};
