//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop: window creation, renderer bootstrap, scene population, and
//! the per-frame redraw.

use std::sync::Arc;

use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowAttributes, WindowId};

use quadra_renderer::{matrix, RenderState};

use crate::cli::Args;
use crate::{demo, texture};

pub struct QuadraApp {
    args: Args,
    window: Option<Arc<Window>>,
    render_state: Option<RenderState>,
}

impl QuadraApp {
    pub fn new(args: Args) -> Self {
        Self {
            args,
            window: None,
            render_state: None,
        }
    }

    /// Point the camera down −Z with a top-left-origin orthographic
    /// projection over the current canvas.
    fn apply_camera(rs: &mut RenderState) {
        let view = matrix::look_at([0.0, 0.0, 0.0], [0.0, 0.0, -1.0], [0.0, 1.0, 0.0]);
        let projection = matrix::ortho(
            0.0,
            rs.gpu.width() as f32,
            rs.gpu.height() as f32,
            0.0,
            -1.0,
            1.0,
        );
        rs.quad.set_camera(&rs.gpu.queue, view, projection);
    }

    /// Append texture layers and quads for the selected scene.
    fn populate_scene(&self, rs: &mut RenderState) {
        if self.args.textures.is_empty() {
            // Give the demo scenes a real layer 1 next to the placeholder.
            let pixels = demo::solid_layer(
                self.args.texture_width,
                self.args.texture_height,
                [66, 135, 245, 255],
            );
            if let Err(e) = rs.quad.add_texture_layer(&rs.gpu.queue, &pixels) {
                tracing::warn!("Skipping generated layer: {e}");
            }
        } else {
            for path in &self.args.textures {
                let pixels = match texture::load_rgba8(
                    path,
                    self.args.texture_width,
                    self.args.texture_height,
                ) {
                    Ok(pixels) => pixels,
                    Err(e) => {
                        tracing::warn!("Skipping texture: {e}");
                        continue;
                    }
                };
                if let Err(e) = rs.quad.add_texture_layer(&rs.gpu.queue, &pixels) {
                    tracing::warn!("Skipping texture {}: {e}", path.display());
                }
            }
        }

        let quads = if self.args.grid {
            demo::grid_cells(
                self.args.grid_cols,
                self.args.grid_rows,
                rs.gpu.width() as f32,
                rs.gpu.height() as f32,
            )
        } else {
            demo::two_quads().to_vec()
        };

        for (transform, layer) in &quads {
            if let Err(e) = rs.quad.add_quad(transform, *layer) {
                tracing::error!("Failed to add quad: {e}");
                break;
            }
        }

        tracing::info!(
            instances = rs.quad.instance_count(),
            layers = rs.quad.layer_count(),
            "scene populated",
        );
    }
}

impl ApplicationHandler for QuadraApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let (width, height) = self.args.window_size();
        let attrs = WindowAttributes::default()
            .with_title("Quadra")
            .with_inner_size(winit::dpi::LogicalSize::new(width as f64, height as f64));

        let window = match event_loop.create_window(attrs) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                tracing::error!("Failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        let config = self.args.renderer_config();
        match pollster::block_on(RenderState::new(window.clone(), &config)) {
            Ok(mut rs) => {
                Self::apply_camera(&mut rs);
                self.populate_scene(&mut rs);
                self.render_state = Some(rs);
            }
            Err(e) => {
                tracing::error!("Failed to initialize renderer: {e}");
                event_loop.exit();
                return;
            }
        }

        window.request_redraw();
        self.window = Some(window);
        tracing::info!("Window created and renderer initialized");
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("Window close requested");
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if size.width > 0 && size.height > 0 {
                    if let Some(ref mut rs) = self.render_state {
                        rs.resize(size.width, size.height);
                        Self::apply_camera(rs);
                    }
                }
            }

            WindowEvent::RedrawRequested => {
                if let Some(ref mut rs) = self.render_state {
                    if let Err(e) = rs.render_frame() {
                        tracing::error!("Render error: {e}");
                    }
                }
                if let Some(ref window) = self.window {
                    window.request_redraw();
                }
            }

            _ => {}
        }
    }
}
