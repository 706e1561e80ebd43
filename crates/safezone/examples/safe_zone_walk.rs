//! Walk a query point across a seeded safe zone and report status changes.
//!
//! Usage:
//!   cargo run -p safezone --example safe_zone_walk
//!   cargo run -p safezone --example safe_zone_walk -- 7      # other seed
//!
//! Draws 20 integer sites in [100, 500]², builds their hull once, then steps a
//! query point left to right through the middle of the canvas in steps of 5 and
//! prints every inside/outside transition.

use rand::{rngs::StdRng, Rng, SeedableRng};
use safezone::prelude::*;

const SITES: usize = 20;
const STEP: f64 = 5.0;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(42);
    let mut rng = StdRng::seed_from_u64(seed);
    let sites: Vec<Vec2<f64>> = (0..SITES)
        .map(|_| Vec2::new(rng.gen_range(100..=500) as f64, rng.gen_range(100..=500) as f64))
        .collect();

    let hull = compute_hull(&sites)?;
    println!(
        "seed={seed} sites={} hull_vertices={} area={:.1}",
        sites.len(),
        hull.len(),
        hull.area()
    );
    for v in hull.ring() {
        println!("  ring ({:>5.1}, {:>5.1})", v.x, v.y);
    }

    let mut pos = vector![20.0, 300.0];
    let mut last: Option<bool> = None;
    while pos.x <= 580.0 {
        let safe = hull.contains(pos);
        if last != Some(safe) {
            let status = if safe { "INSIDE SAFE ZONE" } else { "OUTSIDE - ALERT" };
            println!("x={:>5.1}: {status}", pos.x);
            last = Some(safe);
        }
        pos.x += STEP;
    }
    Ok(())
}
