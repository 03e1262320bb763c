//! 01 - Dimension Walk
//!
//! The simplest Hypercycle example: walk the whole dimension range on
//! the console, printing vertex and edge counts for each d-cube.
//!
//! This example demonstrates:
//! - Building hypercubes with `Hypercube::new`
//! - The catalog lookup for names
//! - The count invariants (2^d vertices, d * 2^(d-1) edges)
//!
//! Run with: `cargo run --example 01_dimension_walk`

use hypercycle_core::dimension_info;
use hypercycle_math::{Hypercube, WireShape};

fn main() {
    env_logger::init();

    println!("{:<4} {:<14} {:>10} {:>8}", "d", "name", "vertices", "edges");
    for d in 0..=9 {
        let cube = Hypercube::new(d);
        let info = dimension_info(d);
        println!(
            "{:<4} {:<14} {:>10} {:>8}",
            d,
            info.name,
            cube.vertex_count(),
            cube.edge_count()
        );
    }
}
