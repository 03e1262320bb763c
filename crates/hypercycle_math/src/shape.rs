//! Shape traits and primitives for wireframe geometry
//!
//! Shapes are pure geometric data - no colors, materials, or rendering info.

/// An undirected edge between two vertex indices
///
/// Edges are the fundamental building blocks for wireframe rendering.
/// Stored canonically with the smaller index first so each undirected
/// edge has exactly one representation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Edge {
    /// Smaller vertex index
    pub a: usize,
    /// Larger vertex index
    pub b: usize,
}

impl Edge {
    /// Create a new edge, swapping the indices into canonical order
    #[inline]
    pub fn new(a: usize, b: usize) -> Self {
        if a <= b { Self { a, b } } else { Self { a: b, b: a } }
    }

    /// Get the indices as a pair
    #[inline]
    pub fn indices(&self) -> (usize, usize) {
        (self.a, self.b)
    }
}

/// Trait for shapes that can be drawn as a wireframe
///
/// A WireShape provides the geometric data needed for wireframe rendering:
/// - Vertices: coordinate lists in the shape's native dimension
/// - Edges: index pairs into the vertex list
///
/// Shapes are pure geometry - they contain no rendering-specific data
/// like colors. That information lives at the application layer.
pub trait WireShape: Send + Sync {
    /// Get the vertices of this shape
    fn vertices(&self) -> &[Vec<f32>];

    /// Get the edges of this shape
    fn edges(&self) -> &[Edge];

    /// Get the number of vertices
    #[inline]
    fn vertex_count(&self) -> usize {
        self.vertices().len()
    }

    /// Get the number of edges
    #[inline]
    fn edge_count(&self) -> usize {
        self.edges().len()
    }
}
