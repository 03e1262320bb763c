//! Conversion from core frames to GPU vertex data
//!
//! A [`FrameGeometry`] is the CPU-side staging form of one frame: a
//! flat list of line vertices (two per edge) and dot vertices (six per
//! projected point, two triangles forming a quad).

use hypercycle_core::Frame;

use crate::pipeline::types::Vertex2D;

/// Visual style applied when flattening a frame
#[derive(Clone, Copy, Debug)]
pub struct FrameStyle {
    /// RGBA color for edge lines
    pub edge_color: [f32; 4],
    /// RGBA color for vertex dots
    pub dot_color: [f32; 4],
    /// Half-extent of a vertex dot in viewport pixels
    pub dot_radius: f32,
}

impl Default for FrameStyle {
    fn default() -> Self {
        Self {
            edge_color: [0.85, 0.85, 0.85, 1.0],
            dot_color: [1.0, 1.0, 1.0, 1.0],
            dot_radius: 3.0,
        }
    }
}

impl FrameStyle {
    /// Style derived from a frame's catalog color
    ///
    /// Edges take the dimension color; dots use a lightened version of
    /// it so they read on top of the lines.
    pub fn for_frame(frame: &Frame, dot_radius: f32) -> Self {
        let [r, g, b] = frame.info.color;
        Self {
            edge_color: [r, g, b, 1.0],
            dot_color: [
                r + (1.0 - r) * 0.5,
                g + (1.0 - g) * 0.5,
                b + (1.0 - b) * 0.5,
                1.0,
            ],
            dot_radius,
        }
    }
}

/// GPU-ready vertex data for one frame
#[derive(Clone, Debug, Default)]
pub struct FrameGeometry {
    /// Two vertices per edge, consumed as a line list
    pub line_vertices: Vec<Vertex2D>,
    /// Six vertices per point, consumed as a triangle list
    pub dot_vertices: Vec<Vertex2D>,
}

impl FrameGeometry {
    /// Flatten a frame into vertex lists
    ///
    /// An empty frame produces empty lists; the pipeline renders
    /// nothing for those.
    pub fn from_frame(frame: &Frame, style: &FrameStyle) -> Self {
        let mut line_vertices = Vec::with_capacity(frame.edges.len() * 2);
        for edge in &frame.edges {
            let a = frame.points[edge.a];
            let b = frame.points[edge.b];
            line_vertices.push(Vertex2D::new(a.to_array(), style.edge_color));
            line_vertices.push(Vertex2D::new(b.to_array(), style.edge_color));
        }

        let r = style.dot_radius;
        let mut dot_vertices = Vec::with_capacity(frame.points.len() * 6);
        for p in &frame.points {
            let corners = [
                [p.x - r, p.y - r],
                [p.x + r, p.y - r],
                [p.x + r, p.y + r],
                [p.x - r, p.y + r],
            ];
            // Two triangles per quad: 0-1-2, 0-2-3
            for &i in &[0usize, 1, 2, 0, 2, 3] {
                dot_vertices.push(Vertex2D::new(corners[i], style.dot_color));
            }
        }

        Self {
            line_vertices,
            dot_vertices,
        }
    }

    /// Number of line vertices
    #[inline]
    pub fn line_vertex_count(&self) -> usize {
        self.line_vertices.len()
    }

    /// Number of dot vertices
    #[inline]
    pub fn dot_vertex_count(&self) -> usize {
        self.dot_vertices.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_counts() {
        let frame = Frame::build(4, 240.0);
        let geometry = FrameGeometry::from_frame(&frame, &FrameStyle::default());
        assert_eq!(geometry.line_vertex_count(), 32 * 2);
        assert_eq!(geometry.dot_vertex_count(), 16 * 6);
    }

    #[test]
    fn test_empty_frame_empty_geometry() {
        let frame = Frame::build(-1, 240.0);
        let geometry = FrameGeometry::from_frame(&frame, &FrameStyle::default());
        assert_eq!(geometry.line_vertex_count(), 0);
        assert_eq!(geometry.dot_vertex_count(), 0);
    }

    #[test]
    fn test_point_frame_has_dot_but_no_lines() {
        let frame = Frame::build(0, 240.0);
        let geometry = FrameGeometry::from_frame(&frame, &FrameStyle::default());
        assert_eq!(geometry.line_vertex_count(), 0);
        assert_eq!(geometry.dot_vertex_count(), 6);
    }

    #[test]
    fn test_edge_color_applied() {
        let frame = Frame::build(2, 100.0);
        let style = FrameStyle {
            edge_color: [1.0, 0.0, 0.0, 1.0],
            ..FrameStyle::default()
        };
        let geometry = FrameGeometry::from_frame(&frame, &style);
        assert!(geometry
            .line_vertices
            .iter()
            .all(|v| v.color == [1.0, 0.0, 0.0, 1.0]));
    }

    #[test]
    fn test_line_endpoints_match_projection() {
        let frame = Frame::build(2, 100.0);
        let geometry = FrameGeometry::from_frame(&frame, &FrameStyle::default());
        // First edge of the square is (0, 1): (-50,-50) -> (50,-50)
        assert_eq!(geometry.line_vertices[0].position, [-50.0, -50.0]);
        assert_eq!(geometry.line_vertices[1].position, [50.0, -50.0]);
    }

    #[test]
    fn test_style_for_frame_lightens_dots() {
        let frame = Frame::build(4, 240.0);
        let style = FrameStyle::for_frame(&frame, 3.0);
        let [r, g, b] = frame.info.color;
        assert_eq!(style.edge_color[0], r);
        assert!(style.dot_color[0] >= r);
        assert!(style.dot_color[1] >= g);
        assert!(style.dot_color[2] >= b);
    }
}
