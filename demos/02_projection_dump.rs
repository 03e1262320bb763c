//! 02 - Projection Dump
//!
//! Prints the projected 2D coordinates of one hypercube, the same data
//! the renderer turns into lines and dots.
//!
//! This example demonstrates:
//! - Projecting a hypercube with `Hypercube::project`
//! - The fixed low-dimension layouts versus the angular projection
//!
//! Run with: `cargo run --example 02_projection_dump -- [dimension]`

use hypercycle_math::{Hypercube, WireShape};

fn main() {
    env_logger::init();

    let dimension: i32 = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(4);

    let cube = Hypercube::new(dimension);
    let points = cube.project(200.0);

    println!(
        "dimension {}: {} vertices, {} edges",
        dimension,
        cube.vertex_count(),
        cube.edge_count()
    );
    for (i, p) in points.iter().enumerate() {
        println!("  v{:<3} ({:>8.2}, {:>8.2})", i, p.x, p.y);
    }
    for edge in cube.edges() {
        println!("  edge {} - {}", edge.a, edge.b);
    }
}
