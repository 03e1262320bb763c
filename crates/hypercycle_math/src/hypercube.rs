//! n-dimensional hypercube geometry
//!
//! A d-cube has 2^d vertices (all combinations of ±0.5 per coordinate)
//! and d * 2^(d-1) edges. Vertices use binary encoding: bit j of vertex
//! index i determines coordinate j, so edges connect exactly the index
//! pairs that differ in one bit.

use crate::shape::{Edge, WireShape};

/// Half the side length of a unit hypercube
pub const HALF_EXTENT: f32 = 0.5;

/// A d-dimensional hypercube centered at the origin
#[derive(Clone)]
pub struct Hypercube {
    /// The dimension this cube was built for
    dimension: i32,
    /// One coordinate list of length d per vertex, in binary index order
    vertices: Vec<Vec<f32>>,
    /// Undirected edges between vertices differing in exactly one bit
    edges: Vec<Edge>,
}

impl Hypercube {
    /// Build the full vertex and edge sets for the given dimension
    ///
    /// - `dimension < 0` produces empty vertex and edge sets
    /// - `dimension == 0` produces a single vertex with no coordinates
    ///   and no edges
    /// - otherwise 2^d vertices and d * 2^(d-1) edges
    ///
    /// Vertex order is binary index order and must be preserved: edges
    /// reference vertices by index, and projection output mirrors it.
    pub fn new(dimension: i32) -> Self {
        if dimension < 0 {
            return Self {
                dimension,
                vertices: Vec::new(),
                edges: Vec::new(),
            };
        }

        let d = dimension as usize;
        let count = 1usize << d;

        let mut vertices = Vec::with_capacity(count);
        for i in 0..count {
            let mut coords = Vec::with_capacity(d);
            for j in 0..d {
                coords.push(if (i >> j) & 1 == 1 {
                    HALF_EXTENT
                } else {
                    -HALF_EXTENT
                });
            }
            vertices.push(coords);
        }

        // Each vertex has d neighbors; emitting only i < neighbor halves
        // the directed pairs so every undirected edge appears once.
        let mut edges = Vec::with_capacity(d * count / 2);
        for i in 0..count {
            for j in 0..d {
                let neighbor = i ^ (1 << j);
                if i < neighbor {
                    edges.push(Edge::new(i, neighbor));
                }
            }
        }

        Self {
            dimension,
            vertices,
            edges,
        }
    }

    /// The dimension this cube was built for
    #[inline]
    pub fn dimension(&self) -> i32 {
        self.dimension
    }

    /// Project the vertices to 2D with the given target extent
    ///
    /// Convenience wrapper around [`crate::project`].
    pub fn project(&self, size: f32) -> Vec<crate::Point2> {
        crate::project(&self.vertices, self.dimension, size)
    }
}

impl WireShape for Hypercube {
    fn vertices(&self) -> &[Vec<f32>] {
        &self.vertices
    }

    fn edges(&self) -> &[Edge] {
        &self.edges
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_count_is_power_of_two() {
        for d in 0..=9 {
            let cube = Hypercube::new(d);
            assert_eq!(
                cube.vertex_count(),
                1usize << d,
                "wrong vertex count for d={}",
                d
            );
        }
    }

    #[test]
    fn test_edge_count_formula() {
        assert_eq!(Hypercube::new(0).edge_count(), 0);
        for d in 1..=9usize {
            let cube = Hypercube::new(d as i32);
            assert_eq!(
                cube.edge_count(),
                d * (1usize << (d - 1)),
                "wrong edge count for d={}",
                d
            );
        }
    }

    #[test]
    fn test_negative_dimension_is_empty() {
        let cube = Hypercube::new(-1);
        assert!(cube.vertices().is_empty());
        assert!(cube.edges().is_empty());
    }

    #[test]
    fn test_zero_dimension_single_origin_vertex() {
        let cube = Hypercube::new(0);
        assert_eq!(cube.vertex_count(), 1);
        assert!(cube.vertices()[0].is_empty());
        assert_eq!(cube.edge_count(), 0);
    }

    #[test]
    fn test_coordinates_follow_bits() {
        let cube = Hypercube::new(4);
        for (i, coords) in cube.vertices().iter().enumerate() {
            assert_eq!(coords.len(), 4);
            for (j, &c) in coords.iter().enumerate() {
                let expected = if (i >> j) & 1 == 1 {
                    HALF_EXTENT
                } else {
                    -HALF_EXTENT
                };
                assert_eq!(c, expected, "vertex {} coordinate {}", i, j);
            }
        }
    }

    #[test]
    fn test_edges_differ_in_one_bit_and_are_canonical() {
        for d in 1..=6 {
            let cube = Hypercube::new(d);
            for edge in cube.edges() {
                assert!(edge.a < edge.b);
                assert!(edge.b < cube.vertex_count());
                assert_eq!(
                    (edge.a ^ edge.b).count_ones(),
                    1,
                    "edge ({}, {}) in d={}",
                    edge.a,
                    edge.b,
                    d
                );
            }
        }
    }

    #[test]
    fn test_no_duplicate_edges() {
        let cube = Hypercube::new(5);
        let mut seen = std::collections::HashSet::new();
        for edge in cube.edges() {
            assert!(seen.insert((edge.a, edge.b)), "duplicate edge {:?}", edge);
        }
    }

    #[test]
    fn test_cube_has_8_vertices_12_edges_degree_3() {
        let cube = Hypercube::new(3);
        assert_eq!(cube.vertex_count(), 8);
        assert_eq!(cube.edge_count(), 12);

        let mut degree = [0usize; 8];
        for edge in cube.edges() {
            degree[edge.a] += 1;
            degree[edge.b] += 1;
        }
        assert!(degree.iter().all(|&n| n == 3));
    }

    #[test]
    fn test_tesseract_has_16_vertices_32_edges() {
        let cube = Hypercube::new(4);
        assert_eq!(cube.vertex_count(), 16);
        assert_eq!(cube.edge_count(), 32);
    }

    #[test]
    fn test_corner_vertices() {
        let cube = Hypercube::new(3);
        assert_eq!(cube.vertices()[0], vec![-0.5, -0.5, -0.5]);
        assert_eq!(cube.vertices()[7], vec![0.5, 0.5, 0.5]);
    }

    #[test]
    fn test_clone() {
        let c1 = Hypercube::new(4);
        let c2 = c1.clone();
        assert_eq!(c1.vertex_count(), c2.vertex_count());
        assert_eq!(c1.edge_count(), c2.edge_count());
    }
}
