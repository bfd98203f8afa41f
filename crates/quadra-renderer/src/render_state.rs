//! Composition of the GPU context and the quad renderer.

use std::sync::Arc;

use winit::window::Window;

use crate::error::RendererError;
use crate::gpu::GpuContext;
use crate::quad::{QuadRenderer, RendererConfig};

pub struct RenderState {
    pub gpu: GpuContext,
    pub quad: QuadRenderer,
}

impl RenderState {
    /// Create a fully initialized render state from a window.
    pub async fn new(window: Arc<Window>, config: &RendererConfig) -> Result<Self, RendererError> {
        let gpu = GpuContext::new(window).await?;
        let quad = QuadRenderer::new(&gpu.device, &gpu.queue, gpu.format(), config)?;
        Ok(Self { gpu, quad })
    }

    /// Handle a window resize by reconfiguring the surface.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.gpu.resize(width, height);
    }

    /// Run one whole frame for callers with no mid-frame work:
    /// begin, issue the draw, end.
    pub fn render_frame(&mut self) -> Result<(), RendererError> {
        self.quad.begin(&self.gpu)?;
        self.quad.draw()?;
        self.quad.end(&self.gpu)
    }
}
