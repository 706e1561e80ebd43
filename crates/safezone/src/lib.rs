//! Convex-hull safe zones: hull construction and point membership in 2D.
//!
//! The crate is a pure computational core. Callers hand in a point set, get an
//! immutable `Hull` back, and query it as often as they like; there is no I/O,
//! no global state, and no randomness inside.
//!
//! API Policy
//! - `geom2` holds the implementation; `api` is a flat curated surface for
//!   callers (the CLI, benches, and examples use it).

pub mod api;
pub mod geom2;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom2::{compute_hull, is_inside, is_inside_hull, Hull, HullCfg, HullError};
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom2::{
        compute_hull, compute_hull_with, is_inside, is_inside_hull, orientation, Hull, HullCfg,
        HullError, Orientation,
    };
    pub use nalgebra::{vector, Vector2 as Vec2};
}
