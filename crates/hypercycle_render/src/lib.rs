//! 2D Wireframe Rendering Library
//!
//! This crate provides the wgpu-based pipeline for drawing projected
//! hypercube wireframes: lines for edges, small quads for vertex dots.
//!
//! ## Key Components
//!
//! - [`context::RenderContext`] - WGPU device, queue, and surface management
//! - [`pipeline::WireframePipeline`] - Line and dot render pipelines
//! - [`renderable::FrameGeometry`] - Converts a core `Frame` to GPU vertex data

pub mod context;
pub mod pipeline;
pub mod renderable;

// Re-export core types for convenience
pub use hypercycle_core::Frame;
pub use hypercycle_math::{Edge, Point2};

// Re-export renderable for easy access
pub use renderable::{FrameGeometry, FrameStyle};
