//! Immutable hull value and the validating entry points.
//!
//! A `Hull` carries its vertices twice:
//! - `vertices`: ascending (x, then y), the canonical order the builder emits;
//! - `ring`: counterclockwise (y-up) boundary order starting at the lexicographic
//!   minimum, i.e. the lower chain left to right, then the upper chain right to
//!   left. Walking the ring and closing back to its start traces a simple
//!   convex polygon whenever the hull is not degenerate.
//!
//! Degenerate hulls (fewer than 3 vertices, or all collinear) keep their points
//! but enclose no area; membership queries against them return `false`.

use nalgebra::Vector2;

use super::dnc::divide_and_conquer_hull_with;
use super::membership::is_inside;
use super::types::{HullCfg, HullError};
use super::util::{cross, dedup_exact, signed_area, sort_lex};

#[derive(Clone, Debug, PartialEq)]
pub struct Hull {
    vertices: Vec<Vector2<f64>>,
    ring: Vec<Vector2<f64>>,
    degenerate: bool,
}

impl Hull {
    /// Wrap hull vertices (any order) and derive the boundary ring.
    ///
    /// Duplicates are dropped. The ring is the exact convex boundary of the
    /// vertices, so a vertex strictly inside it (possible with a nonzero
    /// `eps_orient`) is listed in `vertices` but skipped by `ring`.
    pub fn from_vertices(vertices: Vec<Vector2<f64>>) -> Self {
        let mut vertices = dedup_exact(&vertices);
        sort_lex(&mut vertices);
        let ring = boundary_ring(&vertices);
        let degenerate = ring.len() < 3 || signed_area(&ring) == 0.0;
        Self {
            vertices,
            ring,
            degenerate,
        }
    }

    /// Vertices in ascending lexicographic order.
    #[inline]
    pub fn vertices(&self) -> &[Vector2<f64>] {
        &self.vertices
    }

    /// Vertices on the exact convex boundary, in counterclockwise order.
    #[inline]
    pub fn ring(&self) -> &[Vector2<f64>] {
        &self.ring
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// True when the hull encloses no area (point, segment, or collinear run).
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.degenerate
    }

    /// Enclosed area (shoelace over the ring).
    pub fn area(&self) -> f64 {
        signed_area(&self.ring).abs()
    }

    /// Ray-casting membership against the ring; `false` for degenerate hulls.
    #[inline]
    pub fn contains(&self, p: Vector2<f64>) -> bool {
        !self.degenerate && is_inside(p, &self.ring)
    }
}

/// Monotone chain over lexicographically sorted, distinct points: lower chain
/// left to right, then upper chain right to left.
///
/// Only strict right turns are popped, so points on a boundary edge stay in
/// the chain that owns that edge. Points strictly inside (a tolerance can admit
/// those as vertices) are popped. A fully collinear set is returned as is.
fn boundary_ring(sorted: &[Vector2<f64>]) -> Vec<Vector2<f64>> {
    let n = sorted.len();
    if n < 3 {
        return sorted.to_vec();
    }
    let (first, last) = (sorted[0], sorted[n - 1]);
    if sorted.iter().all(|&p| cross(first, last, p) == 0.0) {
        return sorted.to_vec();
    }
    let mut lower = half_chain(sorted.iter().copied());
    let mut upper = half_chain(sorted.iter().rev().copied());
    lower.pop();
    upper.pop();
    lower.extend(upper);
    lower
}

fn half_chain(pts: impl Iterator<Item = Vector2<f64>>) -> Vec<Vector2<f64>> {
    let mut chain: Vec<Vector2<f64>> = Vec::new();
    for p in pts {
        while chain.len() >= 2 && cross(chain[chain.len() - 2], chain[chain.len() - 1], p) < 0.0 {
            chain.pop();
        }
        chain.push(p);
    }
    chain
}

/// Compute the hull of `points` with the default configuration.
///
/// Errors if any coordinate is NaN or infinite.
pub fn compute_hull(points: &[Vector2<f64>]) -> Result<Hull, HullError> {
    compute_hull_with(points, HullCfg::default())
}

/// Compute the hull of `points` with an explicit configuration.
pub fn compute_hull_with(points: &[Vector2<f64>], cfg: HullCfg) -> Result<Hull, HullError> {
    if !(cfg.eps_orient.is_finite() && cfg.eps_orient >= 0.0) {
        return Err(HullError::InvalidTolerance(cfg.eps_orient));
    }
    check_finite(points)?;
    Ok(Hull::from_vertices(divide_and_conquer_hull_with(points, cfg)))
}

/// Parallel variant of `compute_hull_with` (same result).
#[cfg(feature = "rayon")]
pub fn compute_hull_par(points: &[Vector2<f64>], cfg: HullCfg) -> Result<Hull, HullError> {
    if !(cfg.eps_orient.is_finite() && cfg.eps_orient >= 0.0) {
        return Err(HullError::InvalidTolerance(cfg.eps_orient));
    }
    check_finite(points)?;
    Ok(Hull::from_vertices(super::dnc::divide_and_conquer_hull_par(
        points, cfg,
    )))
}

fn check_finite(points: &[Vector2<f64>]) -> Result<(), HullError> {
    match points
        .iter()
        .position(|p| !(p.x.is_finite() && p.y.is_finite()))
    {
        Some(index) => {
            let p = points[index];
            tracing::debug!(index, x = p.x, y = p.y, "rejecting non-finite point");
            Err(HullError::NonFinite {
                index,
                x: p.x,
                y: p.y,
            })
        }
        None => Ok(()),
    }
}
