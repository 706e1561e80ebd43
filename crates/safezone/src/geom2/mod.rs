//! 2D convex hull and point membership.
//!
//! Purpose
//! - Build the convex hull of a finite point set (`compute_hull`) and answer
//!   inside/outside queries against it (`Hull::contains`, `is_inside`).
//! - Stay total over degenerate inputs: empty, single point, duplicates, and
//!   fully collinear sets all produce a (possibly degenerate) `Hull`.
//!
//! Layout
//! - `orient`: the only geometric primitive (orientation of three points).
//! - `brute`: O(n³) pairwise hull used for small partitions and merges.
//! - `dnc`: divide-and-conquer driver over a single sorted backing array.
//! - `hull`: the immutable `Hull` value plus validating entry points.
//! - `membership`: ray-casting parity test.
//!
//! Conventions
//! - Points are `nalgebra::Vector2<f64>`; equality is exact.
//! - Orientation is exact by default (`HullCfg::eps_orient = 0`).

mod brute;
mod cfg;
mod dnc;
mod hull;
mod membership;
mod orient;
mod types;
mod util;

pub use brute::{brute_force_hull, brute_force_hull_eps};
#[cfg(feature = "rayon")]
pub use dnc::divide_and_conquer_hull_par;
pub use dnc::{divide_and_conquer_hull, divide_and_conquer_hull_with};
#[cfg(feature = "rayon")]
pub use hull::compute_hull_par;
pub use hull::{compute_hull, compute_hull_with, Hull};
pub use membership::{is_inside, is_inside_hull};
pub use orient::{orientation, orientation_eps, orientation_value};
pub use types::{HullCfg, HullError, Orientation, PointKey};
