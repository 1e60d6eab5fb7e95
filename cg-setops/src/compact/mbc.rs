use std::f64::consts::FRAC_PI_2;

use log::{debug, warn};
use ordered_float::OrderedFloat;

use crate::geometry::convex_hull::convex_hull_clockwise;
use crate::geometry::primitives::{Circle, Point, Ray};
use crate::util::{FPA, MbcConfig};

#[derive(thiserror::Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum MbcError {
    #[error("at least 2 distinct points are needed, the convex hull holds {0}")]
    InsufficientPoints(usize),
    #[error("construction of the minimum bounding circle failed after {iterations} iterations")]
    ConstructionFailed { iterations: usize },
}

/// Minimum bounding circle of `points` with the default [`MbcConfig`]
pub fn minimum_bounding_circle(points: &[Point]) -> Result<Circle, MbcError> {
    minimum_bounding_circle_with(points, &MbcConfig::default())
}

/// Skyum's algorithm (1990) for the smallest circle enclosing `points`.
///
/// The points are reduced to their convex hull, ordered clockwise. Every round, the hull vertex
/// `p` maximizing (angle, radius) of its triangle `(prec(p), p, succ(p))` is selected
/// lexicographically. If its angle does not exceed 90°, the circle through the triangle is the
/// answer. Otherwise `p` is removed from the cycle and the next round starts.
pub fn minimum_bounding_circle_with(
    points: &[Point],
    config: &MbcConfig,
) -> Result<Circle, MbcError> {
    let mut cycle = convex_hull_clockwise(points.to_vec());
    if cycle.len() < 2 {
        return Err(MbcError::InsufficientPoints(cycle.len()));
    }

    //every round either converges or removes a vertex, a cycle of 2 always converges
    let max_rounds = config.max_iterations.min(cycle.len());
    for iteration in 0..max_rounds {
        let n = cycle.len();

        //(angle, radius, center) for every vertex in the cycle
        let candidates = (0..n)
            .map(|i| {
                let (prec, p, succ) = (cycle[(i + n - 1) % n], cycle[i], cycle[(i + 1) % n]);
                let (radius, center) = circumcircle(prec, p, succ);
                (Ray::angle_at(p, prec, succ), radius, center)
            })
            .collect::<Vec<_>>();

        //ties are resolved in favour of the last candidate
        let (lexmax, &(angle, radius, center)) = candidates
            .iter()
            .enumerate()
            .max_by_key(|(_, (angle, radius, _))| (OrderedFloat(*angle), OrderedFloat(*radius)))
            .ok_or(MbcError::ConstructionFailed { iterations: iteration })?;

        let acute = match config.approx_right_angle {
            true => FPA(angle) <= FPA(FRAC_PI_2),
            false => angle <= FRAC_PI_2,
        };
        if acute && !radius.is_finite() {
            //the converging triangle is (nearly) collinear, no circle can be built from it
            warn!(
                "[MBC] degenerate triangle around {:?} after {iteration} eliminations",
                cycle[lexmax]
            );
            return Err(MbcError::ConstructionFailed { iterations: iteration });
        }
        if acute {
            debug!(
                "[MBC] converged after {iteration} eliminations, radius: {radius}, center: {center:?}"
            );
            return Ok(Circle::new(center, radius));
        }

        let removed = cycle.remove(lexmax);
        debug!("[MBC] removed {removed:?} (angle: {angle:.4} rad), {} left", cycle.len());
    }

    Err(MbcError::ConstructionFailed {
        iterations: max_rounds,
    })
}

/// Radius and center of the circle circumscribed by the triangle `pqr`.
///
/// When two of the points coincide (or `p` and `r` lie in the same direction from `q`) the circle
/// degenerates to the one with the remaining pair as diameter. Collinear triangles have no finite
/// circle, signalled by a negative infinite radius and center. All three checks use
/// [`FPA::close`], so nearly degenerate triangles are treated as degenerate.
pub fn circumcircle(p: Point, q: Point, r: Point) -> (f64, Point) {
    let coincide = |a: Point, b: Point| FPA::coords_close(a.into(), b.into());

    let diameter = if coincide(p, q) {
        Some((p, r))
    } else if coincide(q, r) || FPA::close(Ray::angle_at(q, p, r), 0.0) {
        Some((p, q))
    } else {
        None
    };
    if let Some((a, b)) = diameter {
        let center = Point((a.0 + b.0) / 2.0, (a.1 + b.1) / 2.0);
        return (a.distance(&b) / 2.0, center);
    }

    let (Point(px, py), Point(qx, qy), Point(rx, ry)) = (p, q, r);
    if FPA::close((qy - py) * (rx - qx), (ry - qy) * (qx - px)) {
        return (f64::NEG_INFINITY, Point(f64::NEG_INFINITY, f64::NEG_INFINITY));
    }

    let d = 2.0 * (px * (qy - ry) + qx * (ry - py) + rx * (py - qy));
    let (sq_p, sq_q, sq_r) = (px * px + py * py, qx * qx + qy * qy, rx * rx + ry * ry);
    let center_x = (sq_p * (qy - ry) + sq_q * (ry - py) + sq_r * (py - qy)) / d;
    let center_y = (sq_p * (rx - qx) + sq_q * (px - rx) + sq_r * (qx - px)) / d;
    let center = Point(center_x, center_y);

    (center.distance(&p), center)
}

#[cfg(test)]
mod tests {
    use float_cmp::approx_eq;

    use super::{MbcError, circumcircle, minimum_bounding_circle};
    use crate::geometry::primitives::Point;

    #[test]
    fn right_triangle_circumcircle() {
        let (radius, center) = circumcircle(Point(0.0, 0.0), Point(2.0, 0.0), Point(2.0, 2.0));
        assert!(approx_eq!(f64, radius, 2f64.sqrt(), epsilon = 1e-12));
        assert!(approx_eq!(f64, center.0, 1.0, epsilon = 1e-12));
        assert!(approx_eq!(f64, center.1, 1.0, epsilon = 1e-12));
    }

    #[test]
    fn coinciding_points_give_diameter_circle() {
        let (radius, center) = circumcircle(Point(0.0, 0.0), Point(0.0, 0.0), Point(4.0, 0.0));
        assert_eq!((radius, center), (2.0, Point(2.0, 0.0)));

        //a two-point cycle: prec and succ are the same vertex
        let (radius, center) = circumcircle(Point(0.0, 4.0), Point(0.0, 0.0), Point(0.0, 4.0));
        assert_eq!((radius, center), (2.0, Point(0.0, 2.0)));
    }

    #[test]
    fn nearly_collinear_triangle_has_no_finite_circle() {
        let (radius, center) = circumcircle(Point(0.0, 0.0), Point(1.0, 1e-10), Point(2.0, 0.0));
        assert_eq!(radius, f64::NEG_INFINITY);
        assert_eq!(center, Point(f64::NEG_INFINITY, f64::NEG_INFINITY));
    }

    #[test]
    fn nearly_coinciding_points_give_diameter_circle() {
        let (radius, center) = circumcircle(Point(0.0, 0.0), Point(1e-9, 0.0), Point(0.0, 4.0));
        assert_eq!((radius, center), (2.0, Point(0.0, 2.0)));
    }

    #[test]
    fn degenerate_converging_triangle_fails() {
        //at this scale every triple falls within the collinearity tolerance
        let points = [Point(0.0, 0.0), Point(1e-5, 0.0), Point(0.0, 1e-5)];
        assert_eq!(
            minimum_bounding_circle(&points),
            Err(MbcError::ConstructionFailed { iterations: 0 })
        );
    }

    #[test]
    fn collinear_triangle_has_no_finite_circle() {
        let (radius, center) = circumcircle(Point(0.0, 0.0), Point(1.0, 1.0), Point(2.0, 2.0));
        assert_eq!(radius, f64::NEG_INFINITY);
        assert_eq!(center, Point(f64::NEG_INFINITY, f64::NEG_INFINITY));
    }
}
