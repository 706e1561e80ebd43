use nalgebra::Vector2;

use super::types::Orientation;

/// Raw orientation determinant `(qy−py)(rx−qx) − (qx−px)(ry−qy)`.
#[inline]
pub fn orientation_value(p: Vector2<f64>, q: Vector2<f64>, r: Vector2<f64>) -> f64 {
    (q.y - p.y) * (r.x - q.x) - (q.x - p.x) * (r.y - q.y)
}

/// Exact orientation of `p → q → r`.
#[inline]
pub fn orientation(p: Vector2<f64>, q: Vector2<f64>, r: Vector2<f64>) -> Orientation {
    orientation_eps(p, q, r, 0.0)
}

/// Orientation with a collinearity band: `|val| <= eps` is `Collinear`.
#[inline]
pub fn orientation_eps(p: Vector2<f64>, q: Vector2<f64>, r: Vector2<f64>, eps: f64) -> Orientation {
    let val = orientation_value(p, q, r);
    if val.abs() <= eps {
        Orientation::Collinear
    } else if val > 0.0 {
        Orientation::CounterClockwise
    } else {
        Orientation::Clockwise
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn classifies_all_three_turns() {
        let p = vector![0.0, 0.0];
        let q = vector![1.0, 0.0];
        assert_eq!(orientation(p, q, vector![2.0, 0.0]), Orientation::Collinear);
        // y-down frame: (1,1) sits "below" the x axis on screen
        assert_eq!(orientation(p, q, vector![1.0, 1.0]), Orientation::Clockwise);
        assert_eq!(
            orientation(p, q, vector![1.0, -1.0]),
            Orientation::CounterClockwise
        );
    }

    #[test]
    fn value_matches_formula() {
        let (p, q, r) = (vector![1.0, 2.0], vector![4.0, 6.0], vector![-3.0, 5.0]);
        // (6-2)(-3-4) - (4-1)(5-6) = -28 + 3
        assert_eq!(orientation_value(p, q, r), -25.0);
    }

    #[test]
    fn coincident_points_are_collinear() {
        let p = vector![3.0, 3.0];
        assert!(orientation(p, p, vector![7.0, -1.0]).is_collinear());
        assert!(orientation(p, p, p).is_collinear());
    }

    #[test]
    fn eps_band_absorbs_small_determinants() {
        let p = vector![0.0, 0.0];
        let q = vector![1.0, 0.0];
        let r = vector![2.0, 1e-10];
        assert_eq!(orientation(p, q, r), Orientation::Clockwise);
        assert_eq!(orientation_eps(p, q, r, 1e-9), Orientation::Collinear);
    }
}
