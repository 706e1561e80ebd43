//! Divide-and-conquer driver over one sorted backing array.
//!
//! Model
//! - Sort a private copy of the input once by (x, then y). Every recursion level
//!   works on a contiguous slice of it, split at `len / 2`.
//! - Slices with at most `leaf_size` points go to the brute-force hull.
//! - The merge runs the brute-force hull again over the concatenation of the two
//!   partial hulls (not over the input points), so the merge is cubic in the
//!   combined sub-hull size. There is no tangent-line merge.
//!
//! Code cross-refs: `brute::brute_force_hull_eps`, `types::HullCfg`

use nalgebra::Vector2;

use super::brute::brute_force_hull_eps;
use super::types::HullCfg;
use super::util::sort_lex;

/// Hull vertices (sorted, deduplicated) with the default configuration.
pub fn divide_and_conquer_hull(points: &[Vector2<f64>]) -> Vec<Vector2<f64>> {
    divide_and_conquer_hull_with(points, HullCfg::default())
}

/// Hull vertices (sorted, deduplicated) with an explicit configuration.
pub fn divide_and_conquer_hull_with(points: &[Vector2<f64>], cfg: HullCfg) -> Vec<Vector2<f64>> {
    let leaf = cfg.leaf_size.max(2);
    if points.len() <= leaf {
        return brute_force_hull_eps(points, cfg.eps_orient);
    }
    let mut backing = points.to_vec();
    sort_lex(&mut backing);
    let hull = hull_rec(&backing, leaf, cfg.eps_orient);
    tracing::debug!(points = points.len(), hull = hull.len(), leaf, "divide_and_conquer_hull");
    hull
}

fn hull_rec(pts: &[Vector2<f64>], leaf: usize, eps: f64) -> Vec<Vector2<f64>> {
    if pts.len() <= leaf {
        return brute_force_hull_eps(pts, eps);
    }
    let (lo, hi) = pts.split_at(pts.len() / 2);
    let mut merged = hull_rec(lo, leaf, eps);
    merged.extend(hull_rec(hi, leaf, eps));
    brute_force_hull_eps(&merged, eps)
}

/// Same result as `divide_and_conquer_hull_with`, forking the two branches onto
/// the rayon pool while a slice holds at least `PAR_MIN_POINTS` points.
#[cfg(feature = "rayon")]
pub fn divide_and_conquer_hull_par(points: &[Vector2<f64>], cfg: HullCfg) -> Vec<Vector2<f64>> {
    let leaf = cfg.leaf_size.max(2);
    if points.len() <= leaf {
        return brute_force_hull_eps(points, cfg.eps_orient);
    }
    let mut backing = points.to_vec();
    sort_lex(&mut backing);
    let hull = hull_rec_par(&backing, leaf, cfg.eps_orient);
    tracing::debug!(points = points.len(), hull = hull.len(), leaf, "divide_and_conquer_hull_par");
    hull
}

#[cfg(feature = "rayon")]
fn hull_rec_par(pts: &[Vector2<f64>], leaf: usize, eps: f64) -> Vec<Vector2<f64>> {
    if pts.len() < super::cfg::PAR_MIN_POINTS {
        return hull_rec(pts, leaf, eps);
    }
    let (lo, hi) = pts.split_at(pts.len() / 2);
    let (mut merged, right) = rayon::join(
        || hull_rec_par(lo, leaf, eps),
        || hull_rec_par(hi, leaf, eps),
    );
    merged.extend(right);
    brute_force_hull_eps(&merged, eps)
}
