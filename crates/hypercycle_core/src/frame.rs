//! Frame assembly
//!
//! A frame is the fully computed, ready-to-render state for one
//! dimension: projected points, edges, and the catalog entry. Frames
//! are rebuilt from scratch on every dimension change; nothing is
//! mutated in place.

use hypercycle_math::{Edge, Hypercube, Point2, WireShape};

use crate::catalog::{dimension_info, DimensionInfo};

/// One renderable snapshot of the cycle
#[derive(Clone, Debug)]
pub struct Frame {
    /// Dimension this frame was built for
    pub dimension: i32,
    /// Projected 2D points, one per hypercube vertex, in vertex order
    pub points: Vec<Point2>,
    /// Edges referencing `points` by index
    pub edges: Vec<Edge>,
    /// Display name and color for the dimension
    pub info: DimensionInfo,
}

impl Frame {
    /// Generate, project, and label the hypercube for a dimension
    ///
    /// `size` is the target maximum extent of the projection in
    /// viewport units.
    pub fn build(dimension: i32, size: f32) -> Self {
        let cube = Hypercube::new(dimension);
        let points = cube.project(size);
        log::debug!(
            "Built frame for dimension {}: {} vertices, {} edges",
            dimension,
            points.len(),
            cube.edge_count()
        );
        Self {
            dimension,
            points,
            edges: cube.edges().to_vec(),
            info: dimension_info(dimension),
        }
    }

    /// True when there is nothing to draw
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_counts() {
        for d in 2..=9usize {
            let frame = Frame::build(d as i32, 240.0);
            assert_eq!(frame.points.len(), 1 << d);
            assert_eq!(frame.edges.len(), d * (1 << (d - 1)));
        }
    }

    #[test]
    fn test_catalog_entry_attached() {
        let frame = Frame::build(4, 240.0);
        assert_eq!(frame.info.name, "Tesseract");
    }

    #[test]
    fn test_edges_reference_valid_points() {
        let frame = Frame::build(6, 240.0);
        for edge in &frame.edges {
            assert!(edge.b < frame.points.len());
        }
    }

    #[test]
    fn test_negative_dimension_is_empty_frame() {
        let frame = Frame::build(-2, 240.0);
        assert!(frame.is_empty());
        assert!(frame.edges.is_empty());
    }

    #[test]
    fn test_point_frame() {
        let frame = Frame::build(0, 240.0);
        assert_eq!(frame.points, vec![Point2::ZERO]);
        assert!(frame.edges.is_empty());
        assert!(!frame.is_empty());
    }
}
