use itertools::Itertools;
use log::trace;

use crate::geometry::geo_enums::Turn;
use crate::geometry::geo_traits::CollidesWith;
use crate::geometry::primitives::{Chain, Point, Polygon};
use crate::set_ops::{Boundary, Canonical, Family, Geometry, SetOpError, boundary, coerce};

/// Whether `a` and `b` share at least one point.
///
/// Both shapes are coerced first, then dispatched on their pair of canonical families.
/// Chain x Polygon and Polygon x Polygon are not supported and fail with
/// [`SetOpError::NotImplemented`]; shapes without a canonical form fail with
/// [`SetOpError::Unsupported`].
pub fn intersects(a: &Geometry, b: &Geometry) -> Result<bool, SetOpError> {
    let a = coerce_or_fail(a)?;
    let b = coerce_or_fail(b)?;
    trace!("intersects: {:?} x {:?}", a.family(), b.family());
    canonical_intersects(&a, &b)
}

/// The intersection geometry of `a` and `b`.
///
/// Dispatches the same way as [`intersects`]. None of the pairs have a handler yet, every
/// supported pair fails with [`SetOpError::NotImplemented`].
pub fn intersection(a: &Geometry, b: &Geometry) -> Result<Vec<Canonical>, SetOpError> {
    let a = coerce_or_fail(a)?;
    let b = coerce_or_fail(b)?;
    trace!("intersection: {:?} x {:?}", a.family(), b.family());
    canonical_intersection(&a, &b)
}

fn coerce_or_fail(shape: &Geometry) -> Result<Canonical, SetOpError> {
    coerce(shape).ok_or(SetOpError::Unsupported(shape.kind()))
}

fn canonical_intersects(a: &Canonical, b: &Canonical) -> Result<bool, SetOpError> {
    use Canonical as C;
    match (a, b) {
        (C::Point(a), C::Point(b)) => point_ints_point(a, b),
        (C::Point(a), C::Chain(b)) => point_ints_chain(a, b),
        (C::Point(a), C::Polygon(b)) => point_ints_polygon(a, b),
        (C::Chain(a), C::Point(b)) => point_ints_chain(b, a),
        (C::Chain(a), C::Chain(b)) => chain_ints_chain(a, b),
        (C::Chain(a), C::Polygon(b)) => chain_ints_polygon(a, b),
        (C::Polygon(a), C::Point(b)) => point_ints_polygon(b, a),
        (C::Polygon(a), C::Chain(b)) => chain_ints_polygon(b, a),
        (C::Polygon(a), C::Polygon(b)) => polygon_ints_polygon(a, b),
    }
}

fn point_ints_point(a: &Point, b: &Point) -> Result<bool, SetOpError> {
    Ok(a.0 == b.0 && a.1 == b.1)
}

fn point_ints_chain(a: &Point, b: &Chain) -> Result<bool, SetOpError> {
    let hit = b
        .segments()
        .iter()
        .any(|part| part.iter().any(|seg| seg.sw_ccw(a) == Turn::Collinear));
    Ok(hit)
}

fn point_ints_polygon(a: &Point, b: &Polygon) -> Result<bool, SetOpError> {
    if b.is_closed() {
        return Ok(b.contains_point(a));
    }
    //an open polygon only meets the point on its boundary rings
    let Some(Boundary::Rings(rings)) = boundary(&Geometry::Polygon(b.clone())) else {
        return Ok(false);
    };
    let point = Canonical::Point(*a);
    for ring in rings {
        let ring = coerce_or_fail(&Geometry::Ring(ring))?;
        if canonical_intersects(&point, &ring)? {
            return Ok(true);
        }
    }
    Ok(false)
}

fn chain_ints_chain(a: &Chain, b: &Chain) -> Result<bool, SetOpError> {
    if !a.bbox().collides_with(&b.bbox()) {
        return Ok(false);
    }
    let (a_segs, b_segs) = (a.segments(), b.segments());
    let hit = a_segs
        .iter()
        .flatten()
        .cartesian_product(b_segs.iter().flatten())
        .any(|(sa, sb)| sa.collides_with(sb));
    Ok(hit)
}

fn chain_ints_polygon(_a: &Chain, _b: &Polygon) -> Result<bool, SetOpError> {
    Err(not_implemented("intersects", Family::Chain, Family::Polygon))
}

fn polygon_ints_polygon(_a: &Polygon, _b: &Polygon) -> Result<bool, SetOpError> {
    Err(not_implemented("intersects", Family::Polygon, Family::Polygon))
}

fn canonical_intersection(a: &Canonical, b: &Canonical) -> Result<Vec<Canonical>, SetOpError> {
    use Canonical as C;
    match (a, b) {
        (C::Point(a), C::Point(b)) => point_intn_point(a, b),
        (C::Point(a), C::Chain(b)) => point_intn_chain(a, b),
        (C::Point(a), C::Polygon(b)) => point_intn_polygon(a, b),
        (C::Chain(a), C::Point(b)) => point_intn_chain(b, a),
        (C::Chain(a), C::Chain(b)) => chain_intn_chain(a, b),
        (C::Chain(a), C::Polygon(b)) => chain_intn_polygon(a, b),
        (C::Polygon(a), C::Point(b)) => point_intn_polygon(b, a),
        (C::Polygon(a), C::Chain(b)) => chain_intn_polygon(b, a),
        (C::Polygon(a), C::Polygon(b)) => polygon_intn_polygon(a, b),
    }
}

fn point_intn_point(_a: &Point, _b: &Point) -> Result<Vec<Canonical>, SetOpError> {
    Err(not_implemented("intersection", Family::Point, Family::Point))
}

fn point_intn_chain(_a: &Point, _b: &Chain) -> Result<Vec<Canonical>, SetOpError> {
    Err(not_implemented("intersection", Family::Point, Family::Chain))
}

fn point_intn_polygon(_a: &Point, _b: &Polygon) -> Result<Vec<Canonical>, SetOpError> {
    Err(not_implemented("intersection", Family::Point, Family::Polygon))
}

fn chain_intn_chain(_a: &Chain, _b: &Chain) -> Result<Vec<Canonical>, SetOpError> {
    Err(not_implemented("intersection", Family::Chain, Family::Chain))
}

fn chain_intn_polygon(_a: &Chain, _b: &Polygon) -> Result<Vec<Canonical>, SetOpError> {
    Err(not_implemented("intersection", Family::Chain, Family::Polygon))
}

fn polygon_intn_polygon(_a: &Polygon, _b: &Polygon) -> Result<Vec<Canonical>, SetOpError> {
    Err(not_implemented("intersection", Family::Polygon, Family::Polygon))
}

fn not_implemented(op: &'static str, a: Family, b: Family) -> SetOpError {
    SetOpError::NotImplemented { op, a, b }
}
