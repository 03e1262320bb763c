//! GPU-compatible data types for the wireframe pipeline
//!
//! These types are designed to match the shader layouts exactly.
//! All types derive Pod and Zeroable for safe GPU buffer operations.

use bytemuck::{Pod, Zeroable};

/// A vertex in viewport space with color
///
/// Positions are logical pixels centered on the viewport origin, y
/// growing downward; the vertex shader maps them to clip space.
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct Vertex2D {
    /// Position in centered viewport coordinates (x, y)
    pub position: [f32; 2],
    /// RGBA color
    pub color: [f32; 4],
}

impl Vertex2D {
    /// Create a new vertex
    pub fn new(position: [f32; 2], color: [f32; 4]) -> Self {
        Self { position, color }
    }
}

/// Uniforms for the wireframe shader
/// Layout: 16 bytes total (must match wireframe.wgsl ViewUniforms)
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct ViewUniforms {
    /// Viewport size in physical pixels (width, height)
    pub viewport: [f32; 2],
    /// Padding to 16-byte alignment
    pub _padding: [f32; 2],
}

impl Default for ViewUniforms {
    fn default() -> Self {
        Self {
            viewport: [1.0, 1.0],
            _padding: [0.0; 2],
        }
    }
}

impl ViewUniforms {
    /// Uniforms for a viewport of the given pixel size
    pub fn for_viewport(width: u32, height: u32) -> Self {
        Self {
            viewport: [width.max(1) as f32, height.max(1) as f32],
            _padding: [0.0; 2],
        }
    }
}
