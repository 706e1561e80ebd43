//! Exhaustive convex hull: every pair of distinct points is a candidate edge.
//!
//! A pair `(p1, p2)` survives when no two other points fall on opposite sides
//! of the line through it. Points collinear with a surviving pair are kept as
//! well, so boundary points in the middle of an edge stay in the output and a
//! fully collinear input comes back whole.

use std::collections::HashSet;

use nalgebra::Vector2;

use super::orient::orientation_eps;
use super::types::{Orientation, PointKey};
use super::util::{dedup_exact, sort_lex};

/// Brute-force hull with exact orientation. O(n³).
///
/// Output is deduplicated and sorted by (x, then y).
pub fn brute_force_hull(points: &[Vector2<f64>]) -> Vec<Vector2<f64>> {
    brute_force_hull_eps(points, 0.0)
}

/// Brute-force hull where determinants within `eps` count as collinear.
pub fn brute_force_hull_eps(points: &[Vector2<f64>], eps: f64) -> Vec<Vector2<f64>> {
    let pts = dedup_exact(points);
    let n = pts.len();
    if n <= 1 {
        return pts;
    }

    let mut accepted: HashSet<PointKey> = HashSet::with_capacity(n);
    let mut hull: Vec<Vector2<f64>> = Vec::new();
    for i in 0..n {
        for j in (i + 1)..n {
            let (p1, p2) = (pts[i], pts[j]);
            let mut ccw = false;
            let mut cw = false;
            for (k, &r) in pts.iter().enumerate() {
                if k == i || k == j {
                    continue;
                }
                match orientation_eps(p1, p2, r, eps) {
                    Orientation::CounterClockwise => ccw = true,
                    Orientation::Clockwise => cw = true,
                    Orientation::Collinear => {}
                }
                if ccw && cw {
                    break;
                }
            }
            if ccw && cw {
                continue;
            }
            for p in [p1, p2] {
                if accepted.insert(PointKey::of(&p)) {
                    hull.push(p);
                }
            }
        }
    }
    sort_lex(&mut hull);
    tracing::trace!(input = points.len(), distinct = n, hull = hull.len(), "brute_force_hull");
    hull
}
