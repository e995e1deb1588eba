//! Convex hull of a point set.

use crate::Point;

/// Computes the convex hull of `points` with Andrew's monotone chain.
///
/// Vertices are returned in counter-clockwise order starting from the
/// lowest-leftmost point. Collinear points on the hull boundary are dropped.
/// Inputs with fewer than three distinct points are returned deduplicated.
pub fn convex_hull(mut points: Vec<Point<f64>>) -> Vec<Point<f64>> {
    points.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
    points.dedup();
    if points.len() < 3 {
        return points;
    }

    let mut hull: Vec<Point<f64>> = Vec::with_capacity(2 * points.len());

    // lower
    for &p in &points {
        while hull.len() >= 2 && cross(hull[hull.len() - 2], hull[hull.len() - 1], p) <= 0.0 {
            hull.pop();
        }
        hull.push(p);
    }

    // upper
    let lower_len = hull.len() + 1;
    for &p in points.iter().rev() {
        while hull.len() >= lower_len && cross(hull[hull.len() - 2], hull[hull.len() - 1], p) <= 0.0
        {
            hull.pop();
        }
        hull.push(p);
    }

    // last point repeats the first
    hull.pop();
    hull
}

/// 2D cross product of vectors OA and OB.
fn cross(o: Point<f64>, a: Point<f64>, b: Point<f64>) -> f64 {
    (a.x - o.x) * (b.y - o.y) - (a.y - o.y) * (b.x - o.x)
}
