//! Default sizes and tolerances for hull construction (internal).
//!
//! Policy
//! - Orientation is exact unless a caller opts into a tolerance through
//!   `HullCfg::eps_orient`. Integer-valued or well-scaled coordinates are exact
//!   in `f64` as long as the products stay below 2^53.

/// Partitions at or below this size go straight to the brute-force hull.
pub(crate) const LEAF_SIZE: usize = 5;
/// Orientation tolerance; `0.0` means the sign of the determinant is used as-is.
pub(crate) const EPS_ORIENT: f64 = 0.0;
/// Below this many points the parallel driver stops forking and runs sequentially.
#[cfg_attr(not(feature = "rayon"), allow(dead_code))]
pub(crate) const PAR_MIN_POINTS: usize = 2048;
