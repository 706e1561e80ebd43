//! Point-in-polygon by ray casting (even-odd rule).
//!
//! The ray runs from the query point towards +x. An edge counts when the query's
//! y lies in `(min_y, max_y]` of the edge and the crossing is at or to the right
//! of the query. The half-open y interval keeps a shared vertex from being
//! counted twice. Boundary points resolve by those tie-breaks only: on a
//! counterclockwise axis-aligned rectangle the right and top edges read as
//! inside while the left and bottom edges read as outside.

use nalgebra::Vector2;

use super::hull::Hull;

/// Even-odd membership of `point` in the closed polygon `polygon`.
///
/// The polygon is implicitly closed (last vertex connects to the first).
/// Fewer than 3 vertices enclose no area and always yield `false`.
pub fn is_inside(point: Vector2<f64>, polygon: &[Vector2<f64>]) -> bool {
    let n = polygon.len();
    if n < 3 {
        return false;
    }
    let (x, y) = (point.x, point.y);
    let mut inside = false;
    let mut p1 = polygon[n - 1];
    for &p2 in polygon {
        if y > p1.y.min(p2.y) && y <= p1.y.max(p2.y) && x <= p1.x.max(p2.x) {
            let x_inters = if p1.y != p2.y {
                (y - p1.y) * (p2.x - p1.x) / (p2.y - p1.y) + p1.x
            } else {
                p1.x
            };
            if x <= x_inters {
                inside = !inside;
            }
        }
        p1 = p2;
    }
    inside
}

/// Membership against a hull (its boundary ring). Degenerate hulls contain nothing.
#[inline]
pub fn is_inside_hull(point: Vector2<f64>, hull: &Hull) -> bool {
    hull.contains(point)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    fn square_ccw() -> Vec<Vector2<f64>> {
        vec![
            vector![0.0, 0.0],
            vector![10.0, 0.0],
            vector![10.0, 10.0],
            vector![0.0, 10.0],
        ]
    }

    #[test]
    fn interior_and_far_points() {
        let sq = square_ccw();
        assert!(is_inside(vector![5.0, 5.0], &sq));
        assert!(is_inside(vector![0.5, 9.5], &sq));
        assert!(!is_inside(vector![15.0, 15.0], &sq));
        assert!(!is_inside(vector![-1.0, 5.0], &sq));
        assert!(!is_inside(vector![5.0, -0.1], &sq));
    }

    #[test]
    fn boundary_tie_breaks_are_pinned() {
        let sq = square_ccw();
        assert!(!is_inside(vector![0.0, 5.0], &sq), "left edge");
        assert!(is_inside(vector![10.0, 5.0], &sq), "right edge");
        assert!(!is_inside(vector![5.0, 0.0], &sq), "bottom edge");
        assert!(is_inside(vector![5.0, 10.0], &sq), "top edge");
        assert!(!is_inside(vector![0.0, 0.0], &sq), "bottom-left corner");
        assert!(is_inside(vector![10.0, 10.0], &sq), "top-right corner");
    }

    #[test]
    fn winding_direction_does_not_matter() {
        let cw: Vec<_> = square_ccw().into_iter().rev().collect();
        assert!(is_inside(vector![5.0, 5.0], &cw));
        assert!(!is_inside(vector![11.0, 5.0], &cw));
    }

    #[test]
    fn lexicographic_vertex_order_still_reports_the_center() {
        // walking the sorted hull closes a bow-tie; the center sits on its crossing
        let lex = vec![
            vector![0.0, 0.0],
            vector![0.0, 10.0],
            vector![10.0, 0.0],
            vector![10.0, 10.0],
        ];
        assert!(is_inside(vector![5.0, 5.0], &lex));
        assert!(!is_inside(vector![15.0, 15.0], &lex));
    }

    #[test]
    fn degenerate_polygons_enclose_nothing() {
        assert!(!is_inside(vector![0.0, 0.0], &[]));
        assert!(!is_inside(vector![1.0, 1.0], &[vector![1.0, 1.0]]));
        let seg = [vector![0.0, 0.0], vector![4.0, 4.0]];
        assert!(!is_inside(vector![2.0, 2.0], &seg));
        assert!(!is_inside(vector![1.0, 3.0], &seg));
    }

    #[test]
    fn concave_polygon_parity() {
        // U shape opening upwards
        let u = vec![
            vector![0.0, 0.0],
            vector![6.0, 0.0],
            vector![6.0, 6.0],
            vector![4.0, 6.0],
            vector![4.0, 2.0],
            vector![2.0, 2.0],
            vector![2.0, 6.0],
            vector![0.0, 6.0],
        ];
        assert!(is_inside(vector![1.0, 4.0], &u));
        assert!(is_inside(vector![5.0, 4.0], &u));
        assert!(is_inside(vector![3.0, 1.0], &u));
        assert!(!is_inside(vector![3.0, 4.0], &u));
    }
}
