use std::cmp::Ordering;
use std::collections::HashSet;

use nalgebra::Vector2;

use super::types::PointKey;

/// Lexicographic order by (x, then y). Callers guarantee finite coordinates.
#[inline]
pub(crate) fn lex_cmp(a: &Vector2<f64>, b: &Vector2<f64>) -> Ordering {
    match a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal) {
        Ordering::Equal => a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal),
        o => o,
    }
}

#[inline]
pub(crate) fn sort_lex(points: &mut [Vector2<f64>]) {
    points.sort_by(lex_cmp);
}

/// Drop exact duplicates, keeping the first occurrence of each point.
pub(crate) fn dedup_exact(points: &[Vector2<f64>]) -> Vec<Vector2<f64>> {
    let mut seen: HashSet<PointKey> = HashSet::with_capacity(points.len());
    points
        .iter()
        .filter(|p| seen.insert(PointKey::of(p)))
        .copied()
        .collect()
}

/// Cross product of `b − a` and `c − a` (positive for a left turn, y-up).
#[inline]
pub(crate) fn cross(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> f64 {
    let ab = b - a;
    let ac = c - a;
    ab.x * ac.y - ab.y * ac.x
}

/// Signed shoelace area of a closed ring (positive for counterclockwise, y-up).
pub(crate) fn signed_area(ring: &[Vector2<f64>]) -> f64 {
    if ring.len() < 3 {
        return 0.0;
    }
    let mut acc = 0.0;
    for k in 0..ring.len() {
        let p = ring[k];
        let q = ring[(k + 1) % ring.len()];
        acc += p.x * q.y - q.x * p.y;
    }
    0.5 * acc
}
