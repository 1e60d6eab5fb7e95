use ordered_float::OrderedFloat;

use crate::geometry::primitives::Point;

/// Filters a set of points to only include those that are part of the convex hull.
/// The hull is returned counterclockwise, without repeating the first point.
/// Duplicate and collinear points are dropped.
pub fn convex_hull_from_points(mut points: Vec<Point>) -> Vec<Point> {
    //https://en.wikibooks.org/wiki/Algorithm_Implementation/Geometry/Convex_hull/Monotone_chain

    //sort the points lexicographically by x, then y
    points.sort_by_key(|p| (OrderedFloat(p.0), OrderedFloat(p.1)));
    points.dedup();

    if points.len() < 3 {
        return points;
    }

    let mut lower_hull = points
        .iter()
        .fold(vec![], |hull, p| grow_convex_hull(hull, *p));
    let mut upper_hull = points
        .iter()
        .rev()
        .fold(vec![], |hull, p| grow_convex_hull(hull, *p));

    //First and last element of both hull parts are the same point
    upper_hull.pop();
    lower_hull.pop();

    lower_hull.append(&mut upper_hull);
    lower_hull
}

/// Convex hull ordered clockwise
pub fn convex_hull_clockwise(points: Vec<Point>) -> Vec<Point> {
    let mut hull = convex_hull_from_points(points);
    hull.reverse();
    hull
}

fn grow_convex_hull(mut h: Vec<Point>, next: Point) -> Vec<Point> {
    //pop all points from the hull which will be made irrelevant due to the new point
    while h.len() >= 2 && cross(h[h.len() - 2], h[h.len() - 1], next) <= 0.0 {
        h.pop();
    }
    h.push(next);
    h
}

fn cross(a: Point, b: Point, c: Point) -> f64 {
    (b.0 - a.0) * (c.1 - a.1) - (b.1 - a.1) * (c.0 - a.0)
}

#[cfg(test)]
mod tests {
    use super::{convex_hull_clockwise, convex_hull_from_points};
    use crate::geometry::primitives::{Point, Ring};

    #[test]
    fn interior_and_collinear_points_dropped() {
        let points = vec![
            Point(0.0, 0.0),
            Point(1.0, 0.0),
            Point(2.0, 0.0),
            Point(2.0, 2.0),
            Point(1.0, 1.0),
            Point(0.0, 2.0),
            Point(0.0, 0.0),
        ];
        let hull = convex_hull_from_points(points);
        assert_eq!(
            hull,
            vec![Point(0.0, 0.0), Point(2.0, 0.0), Point(2.0, 2.0), Point(0.0, 2.0)]
        );
        assert!(!Ring::new(hull).unwrap().is_clockwise());
    }

    #[test]
    fn clockwise_variant() {
        let hull = convex_hull_clockwise(vec![
            Point(0.0, 0.0),
            Point(3.0, 0.0),
            Point(0.0, 3.0),
        ]);
        assert_eq!(hull.len(), 3);
        assert!(Ring::new(hull).unwrap().is_clockwise());
    }

    #[test]
    fn collinear_input_collapses_to_endpoints() {
        let hull = convex_hull_from_points(vec![Point(0.0, 0.0), Point(1.0, 1.0), Point(2.0, 2.0)]);
        assert_eq!(hull, vec![Point(0.0, 0.0), Point(2.0, 2.0)]);
    }
}
