//! GPU rendering system
//!
//! Manages the render context, the wireframe pipeline, and per-frame
//! uniform updates.

use std::sync::Arc;
use winit::window::Window;

use hypercycle_core::Frame;
use hypercycle_render::{
    context::RenderContext,
    pipeline::{ViewUniforms, WireframePipeline},
    FrameGeometry, FrameStyle,
};

use crate::config::RenderingConfig;

/// Render error types
#[derive(Debug)]
pub enum RenderError {
    /// Surface was lost (window resized, minimized, etc.)
    SurfaceLost,
    /// GPU out of memory
    OutOfMemory,
    /// Other surface error
    Other(String),
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::SurfaceLost => write!(f, "Surface lost"),
            RenderError::OutOfMemory => write!(f, "Out of memory"),
            RenderError::Other(msg) => write!(f, "Render error: {}", msg),
        }
    }
}

impl std::error::Error for RenderError {}

/// Manages GPU rendering
pub struct RenderSystem {
    context: RenderContext,
    pipeline: WireframePipeline,
    render_config: RenderingConfig,
}

impl RenderSystem {
    /// Create render system from window and config
    pub fn new(window: Arc<Window>, render_config: RenderingConfig, vsync: bool) -> Self {
        let context = pollster::block_on(RenderContext::with_vsync(window, vsync));
        let pipeline = WireframePipeline::new(&context.device, context.config.format);

        Self {
            context,
            pipeline,
            render_config,
        }
    }

    /// Handle window resize
    pub fn resize(&mut self, width: u32, height: u32) {
        self.context
            .resize(winit::dpi::PhysicalSize::new(width, height));
    }

    /// Target projection extent for the current surface size
    pub fn projection_extent(&self) -> f32 {
        let short_side = self.context.size.width.min(self.context.size.height).max(1);
        short_side as f32 * self.render_config.extent_fraction
    }

    /// Upload a frame's geometry to the GPU
    pub fn upload_frame(&mut self, frame: &Frame) {
        let style = FrameStyle::for_frame(frame, self.render_config.dot_radius);
        let geometry = FrameGeometry::from_frame(frame, &style);
        self.pipeline.upload_frame(&self.context.device, &geometry);
        log::info!(
            "Uploaded {} ({}-cube): {} line vertices, {} dot vertices",
            frame.info.name,
            frame.dimension,
            geometry.line_vertex_count(),
            geometry.dot_vertex_count()
        );
    }

    /// Render a single frame
    pub fn render_frame(&mut self) -> Result<(), RenderError> {
        self.pipeline.update_uniforms(
            &self.context.queue,
            &ViewUniforms::for_viewport(self.context.config.width, self.context.config.height),
        );

        let output = match self.context.surface.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost) => return Err(RenderError::SurfaceLost),
            Err(wgpu::SurfaceError::OutOfMemory) => return Err(RenderError::OutOfMemory),
            Err(e) => return Err(RenderError::Other(format!("{:?}", e))),
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .context
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        let bg = &self.render_config.background_color;
        self.pipeline.render(
            &mut encoder,
            &view,
            wgpu::Color {
                r: bg[0] as f64,
                g: bg[1] as f64,
                b: bg[2] as f64,
                a: bg[3] as f64,
            },
        );

        self.context.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }

    /// Get current surface size
    pub fn size(&self) -> (u32, u32) {
        (self.context.size.width, self.context.size.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_error_display() {
        assert_eq!(format!("{}", RenderError::SurfaceLost), "Surface lost");
        assert_eq!(format!("{}", RenderError::OutOfMemory), "Out of memory");
        assert_eq!(
            format!("{}", RenderError::Other("test".to_string())),
            "Render error: test"
        );
    }
}
