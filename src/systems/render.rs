//! GPU rendering system
//!
//! Manages GPU rendering including:
//! - Render context and surface
//! - The point/line scene pipeline
//! - Frame submission

use std::sync::Arc;
use winit::window::Window;
use neonfield_render::{
    context::RenderContext,
    pipeline::{ScenePipeline, SceneUniforms},
    FrameGeometry, PerspectiveCamera, RenderError, RenderTarget, StartupError,
};

/// Draws frames to the window surface
pub struct RenderSystem {
    context: RenderContext,
    pipeline: ScenePipeline,
    background: wgpu::Color,
}

impl RenderSystem {
    /// Create render system for a window
    pub fn new(window: Arc<Window>, vsync: bool, background: [f32; 4]) -> Result<Self, StartupError> {
        let context = pollster::block_on(RenderContext::with_vsync(window, vsync))?;
        let pipeline = ScenePipeline::new(&context.device, context.config.format);

        log::info!(
            "Render surface {}x{} ({:?})",
            context.size.width,
            context.size.height,
            context.config.format
        );

        Ok(Self {
            context,
            pipeline,
            background: clear_color(background),
        })
    }

    /// Reconfigure the surface after it was lost or outdated
    pub fn recover_surface(&mut self) {
        log::warn!("Surface lost, reconfiguring");
        self.context.reconfigure();
    }

    /// Clear the surface without drawing any scene content
    pub fn clear(&mut self) -> Result<(), RenderError> {
        self.render(&FrameGeometry::new(), &PerspectiveCamera::default())
    }
}

impl RenderTarget for RenderSystem {
    fn resize(&mut self, width: u32, height: u32) {
        self.context.resize(winit::dpi::PhysicalSize::new(width, height));
    }

    fn size(&self) -> (u32, u32) {
        (self.context.size.width, self.context.size.height)
    }

    fn render(&mut self, frame: &FrameGeometry, camera: &PerspectiveCamera) -> Result<(), RenderError> {
        let uniforms = SceneUniforms {
            view_matrix: camera.view_matrix(),
            projection_matrix: camera.projection_matrix(),
        };
        self.pipeline.update_uniforms(&self.context.queue, &uniforms);
        self.pipeline.upload(
            &self.context.device,
            &self.context.queue,
            &frame.points,
            &frame.lines,
        );

        // Get surface texture
        let output = self.context.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .context
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        self.pipeline.render(&mut encoder, &view, self.background);

        self.context.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }
}

fn clear_color(bg: [f32; 4]) -> wgpu::Color {
    wgpu::Color {
        r: bg[0] as f64,
        g: bg[1] as f64,
        b: bg[2] as f64,
        a: bg[3] as f64,
    }
}
