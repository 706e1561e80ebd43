//! Basic 2D types shared by the hull builder and the membership tester.
//!
//! - `Orientation`: turn classification of an ordered point triple.
//! - `HullCfg`: centralizes the orientation tolerance and the brute-force leaf size.
//! - `PointKey`: exact-equality hash key for deduplication.
//! - `HullError`: boundary validation failures.
//!
//! Code cross-refs: `orient::orientation`, `brute::brute_force_hull`, `dnc::divide_and_conquer_hull`

use nalgebra::Vector2;

use super::cfg::{EPS_ORIENT, LEAF_SIZE};

/// Turn classification of three ordered points `p → q → r`.
///
/// The labels follow the sign of `(qy−py)(rx−qx) − (qx−px)(ry−qy)`, which reads
/// as a counterclockwise turn for positive values in a y-down (screen) frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    Collinear,
    Clockwise,
    CounterClockwise,
}

impl Orientation {
    #[inline]
    pub fn is_collinear(self) -> bool {
        matches!(self, Orientation::Collinear)
    }
}

/// Hull construction configuration (tolerance and partition size).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HullCfg {
    /// Determinants with `|val| <= eps_orient` count as collinear. Must be `>= 0`.
    pub eps_orient: f64,
    /// Partitions with at most this many points are solved by brute force.
    /// Values below 2 are treated as 2 so the recursion always shrinks.
    pub leaf_size: usize,
}

impl Default for HullCfg {
    fn default() -> Self {
        Self {
            eps_orient: EPS_ORIENT,
            leaf_size: LEAF_SIZE,
        }
    }
}

/// Hashable key with exact coordinate equality (`-0.0` and `0.0` collapse).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PointKey(u64, u64);

impl PointKey {
    #[inline]
    pub fn of(p: &Vector2<f64>) -> Self {
        // adding +0.0 maps -0.0 to +0.0 and leaves every other value unchanged
        PointKey((p.x + 0.0).to_bits(), (p.y + 0.0).to_bits())
    }
}

/// Validation failures at the library boundary.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum HullError {
    #[error("point #{index} has a non-finite coordinate: ({x}, {y})")]
    NonFinite { index: usize, x: f64, y: f64 },
    #[error("orientation tolerance must be finite and non-negative, got {0}")]
    InvalidTolerance(f64),
}
