//! Rendering pipeline components
//!
//! This module contains the GPU types and the wireframe pipeline used
//! to draw projected hypercubes.

pub mod types;
pub mod wireframe_pipeline;

// Re-export types
pub use types::{Vertex2D, ViewUniforms};

// Re-export pipeline
pub use wireframe_pipeline::WireframePipeline;
