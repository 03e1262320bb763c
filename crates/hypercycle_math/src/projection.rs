//! Projection of n-dimensional vertices onto the 2D viewport plane
//!
//! Low dimensions get exact hard-coded layouts (a centered point, a
//! horizontal segment, an axis-aligned square); dimensions 3 and up use
//! an angular spread projection with empirically tuned constants. The
//! generic formula does not degenerate correctly below d=3, so the low
//! branches stay explicit.

use std::f32::consts::PI;

use crate::Point2;

/// Project n-dimensional vertices to 2D viewport coordinates
///
/// `size` is the target maximum extent of the result. Output has one
/// point per input vertex, in the same order. An empty vertex list
/// produces an empty point list.
pub fn project(vertices: &[Vec<f32>], dimension: i32, size: f32) -> Vec<Point2> {
    match dimension {
        d if d <= 0 => vertices.iter().map(|_| Point2::ZERO).collect(),
        1 => vertices
            .iter()
            .map(|coords| Point2::new(half_by_sign(coords.first(), size), 0.0))
            .collect(),
        // Exact axis-aligned square, never the generic formula: division
        // by (d - 1.5) is unstable this close to zero.
        2 => vertices
            .iter()
            .map(|coords| {
                Point2::new(
                    half_by_sign(coords.first(), size),
                    half_by_sign(coords.get(1), size),
                )
            })
            .collect(),
        d => project_angular(vertices, d, size),
    }
}

/// Generic angular projection for d >= 3
///
/// Each coordinate axis k is assigned the angle pi * k / (d - 1.5) and
/// the vertex is summed along the resulting unit directions. Both the
/// angular spread and the 2.2 / (d - 1) scale factor are tuned for
/// visual fit within a fixed viewport, not a principled projection;
/// keep them as-is.
fn project_angular(vertices: &[Vec<f32>], dimension: i32, size: f32) -> Vec<Point2> {
    let d = dimension as usize;
    let spread = dimension as f32 - 1.5;
    let scale = size * 2.2 / (dimension as f32 - 1.0);

    let angles: Vec<f32> = (0..d).map(|k| PI * k as f32 / spread).collect();

    vertices
        .iter()
        .map(|coords| {
            let mut x = 0.0;
            let mut y = 0.0;
            for (&p, &angle) in coords.iter().zip(angles.iter()) {
                x += p * angle.cos();
                y += p * angle.sin();
            }
            Point2::new(x * scale, y * scale)
        })
        .collect()
}

/// Map a coordinate's sign to +/- size/2, defaulting to the negative
/// half for a missing coordinate
#[inline]
fn half_by_sign(coord: Option<&f32>, size: f32) -> f32 {
    match coord {
        Some(&c) if c > 0.0 => size / 2.0,
        _ => -size / 2.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Hypercube;
    use crate::shape::WireShape;

    const EPSILON: f32 = 1e-4;

    fn assert_close(p: Point2, x: f32, y: f32) {
        assert!(
            (p.x - x).abs() < EPSILON && (p.y - y).abs() < EPSILON,
            "expected ({}, {}), got ({}, {})",
            x,
            y,
            p.x,
            p.y
        );
    }

    #[test]
    fn test_point_projects_to_origin() {
        let cube = Hypercube::new(0);
        let points = project(cube.vertices(), 0, 100.0);
        assert_eq!(points, vec![Point2::ZERO]);
    }

    #[test]
    fn test_segment_endpoints() {
        let cube = Hypercube::new(1);
        let points = project(cube.vertices(), 1, 100.0);
        assert_eq!(points, vec![Point2::new(-50.0, 0.0), Point2::new(50.0, 0.0)]);
    }

    #[test]
    fn test_square_corners_in_binary_order() {
        let cube = Hypercube::new(2);
        let points = project(cube.vertices(), 2, 100.0);
        assert_eq!(
            points,
            vec![
                Point2::new(-50.0, -50.0),
                Point2::new(50.0, -50.0),
                Point2::new(-50.0, 50.0),
                Point2::new(50.0, 50.0),
            ]
        );
    }

    #[test]
    fn test_empty_input_empty_output() {
        for d in [-1, 0, 1, 2, 3, 7] {
            assert!(project(&[], d, 100.0).is_empty());
        }
    }

    #[test]
    fn test_output_length_matches_input() {
        for d in 0..=9 {
            let cube = Hypercube::new(d);
            let points = project(cube.vertices(), d, 240.0);
            assert_eq!(points.len(), cube.vertex_count());
        }
    }

    #[test]
    fn test_negative_dimension_maps_to_origin() {
        let vertices = vec![vec![0.5], vec![-0.5]];
        let points = project(&vertices, -3, 100.0);
        assert_eq!(points, vec![Point2::ZERO, Point2::ZERO]);
    }

    #[test]
    fn test_cube_diagonal_vertices_land_on_origin() {
        // For d=3 the three axis angles are 0, 2pi/3 and 4pi/3; their
        // unit vectors sum to zero, so the all-minus and all-plus
        // vertices collapse onto the center.
        let cube = Hypercube::new(3);
        let points = project(cube.vertices(), 3, 100.0);
        assert_close(points[0], 0.0, 0.0);
        assert_close(points[7], 0.0, 0.0);
    }

    #[test]
    fn test_cube_known_vertex() {
        // Vertex 1 of the 3-cube is (0.5, -0.5, -0.5):
        //   x = 0.5*cos(0) - 0.5*cos(2pi/3) - 0.5*cos(4pi/3) = 1.0
        //   y = 0.5*sin(0) - 0.5*sin(2pi/3) - 0.5*sin(4pi/3) = 0.0
        // scaled by 100 * 2.2 / 2 = 110.
        let cube = Hypercube::new(3);
        let points = project(cube.vertices(), 3, 100.0);
        assert_close(points[1], 110.0, 0.0);
    }

    #[test]
    fn test_projection_stays_within_viewport_ballpark() {
        // The tuned scale keeps every dimension within a few multiples
        // of size; guard against regressions that blow it up.
        for d in 3..=9 {
            let cube = Hypercube::new(d);
            for p in cube.project(100.0) {
                assert!(
                    p.length() < 400.0,
                    "d={} projected point {:?} escaped the viewport",
                    d,
                    p
                );
            }
        }
    }

    #[test]
    fn test_hypercube_project_convenience() {
        let cube = Hypercube::new(4);
        assert_eq!(cube.project(200.0), project(cube.vertices(), 4, 200.0));
    }
}
