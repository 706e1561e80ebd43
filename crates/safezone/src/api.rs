//! Curated flat API for callers.
//!
//! Re-exports only; implementations live in `geom2`.

// hull construction
pub use crate::geom2::{
    brute_force_hull, brute_force_hull_eps, compute_hull, compute_hull_with,
    divide_and_conquer_hull, divide_and_conquer_hull_with, Hull, HullCfg, HullError,
};
#[cfg(feature = "rayon")]
pub use crate::geom2::{compute_hull_par, divide_and_conquer_hull_par};
// primitives and membership
pub use crate::geom2::{
    is_inside, is_inside_hull, orientation, orientation_eps, orientation_value, Orientation,
    PointKey,
};
