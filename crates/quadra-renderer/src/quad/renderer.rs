//! Instanced quad renderer.
//!
//! Owns every GPU resource (geometry, instance, indirect, and uniform
//! buffers, the texture array, the pipeline) plus their CPU mirrors, and
//! drives the per-frame begin → draw → end protocol. One renderer draws all
//! of its quads with a single indirect call.

use std::path::PathBuf;

use wgpu::util::DeviceExt;

use crate::camera::Camera;
use crate::error::RendererError;
use crate::gpu::GpuContext;
use crate::matrix::Mat4;
use crate::texture_array::TextureArrayStore;
use crate::transform::Transform;

use super::instances::InstanceStore;
use super::pipeline::QuadPipeline;
use super::types::{DrawIndexedIndirectArgs, QuadInstance, QUAD_INDICES, QUAD_VERTICES};

/// Renderer construction arguments. All fields are required; the only
/// normalization applied is `max(1, texture_layers)`.
#[derive(Debug, Clone)]
pub struct RendererConfig {
    pub vertex_shader: PathBuf,
    pub fragment_shader: PathBuf,
    pub max_instances: u32,
    pub texture_layers: u32,
    pub texture_width: u32,
    pub texture_height: u32,
}

/// An in-flight frame: the acquired surface texture, its encoder, and the
/// open render pass. Present while drawing, absent while ready.
///
/// Field order matters: the pass must drop before the encoder it records
/// into.
struct FrameContext {
    pass: wgpu::RenderPass<'static>,
    encoder: wgpu::CommandEncoder,
    surface_texture: wgpu::SurfaceTexture,
}

pub struct QuadRenderer {
    pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    instance_buffer: wgpu::Buffer,
    indirect_buffer: wgpu::Buffer,
    camera_buffer: wgpu::Buffer,
    camera_bind_group: wgpu::BindGroup,
    texture_bind_group: wgpu::BindGroup,
    textures: TextureArrayStore,
    instances: InstanceStore,
    camera: Camera,
    clear_color: wgpu::Color,
    frame: Option<FrameContext>,
}

impl QuadRenderer {
    /// Build the pipeline from the configured shader pair and allocate all
    /// GPU storage. A shader or pipeline validation failure aborts
    /// construction; the renderer never exists in a half-initialized state.
    pub fn new(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        format: wgpu::TextureFormat,
        config: &RendererConfig,
    ) -> Result<Self, RendererError> {
        let QuadPipeline {
            pipeline,
            camera_layout,
            texture_layout,
        } = QuadPipeline::build(device, format, &config.vertex_shader, &config.fragment_shader)?;

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("quad vertices"),
            contents: bytemuck::cast_slice(QUAD_VERTICES),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("quad indices"),
            contents: bytemuck::cast_slice(QUAD_INDICES),
            usage: wgpu::BufferUsages::INDEX,
        });

        let instance_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("quad instances"),
            size: u64::from(config.max_instances.max(1))
                * std::mem::size_of::<QuadInstance>() as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let indirect_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("quad draw command"),
            contents: bytemuck::bytes_of(&DrawIndexedIndirectArgs::for_quads(0)),
            usage: wgpu::BufferUsages::INDIRECT | wgpu::BufferUsages::COPY_DST,
        });

        let camera = Camera::default();
        let camera_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("quad camera block"),
            contents: bytemuck::bytes_of(&camera.uniform()),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let camera_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("quad camera bind group"),
            layout: &camera_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: camera_buffer.as_entire_binding(),
            }],
        });

        let textures = TextureArrayStore::new(
            device,
            queue,
            config.texture_width,
            config.texture_height,
            config.texture_layers,
        );

        let texture_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("quad texture bind group"),
            layout: &texture_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(textures.view()),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(textures.sampler()),
                },
            ],
        });

        tracing::info!(
            max_instances = config.max_instances,
            texture_layers = textures.capacity(),
            texture_width = config.texture_width,
            texture_height = config.texture_height,
            "quad renderer initialized",
        );

        Ok(Self {
            pipeline,
            vertex_buffer,
            index_buffer,
            instance_buffer,
            indirect_buffer,
            camera_buffer,
            camera_bind_group,
            texture_bind_group,
            textures,
            instances: InstanceStore::new(config.max_instances),
            camera,
            clear_color: wgpu::Color {
                r: 0.12,
                g: 0.12,
                b: 0.12,
                a: 1.0,
            },
            frame: None,
        })
    }

    /// Append one quad. Its layer index is clamped against the occupied
    /// layer count; a full store rejects the quad unchanged.
    pub fn add_quad(&mut self, transform: &Transform, layer: i32) -> Result<(), RendererError> {
        self.instances.push(
            QuadInstance::new(transform.matrix(), layer),
            self.textures.layer_count(),
        )
    }

    /// Append one RGBA8 texture layer and return its index.
    pub fn add_texture_layer(
        &mut self,
        queue: &wgpu::Queue,
        pixels: &[u8],
    ) -> Result<u32, RendererError> {
        self.textures.add_layer(queue, pixels)
    }

    /// Replace both camera matrices and upload them as one block.
    pub fn set_camera(&mut self, queue: &wgpu::Queue, view: Mat4, projection: Mat4) {
        self.camera = Camera { view, projection };
        queue.write_buffer(
            &self.camera_buffer,
            0,
            bytemuck::bytes_of(&self.camera.uniform()),
        );
    }

    pub fn set_clear_color(&mut self, r: f64, g: f64, b: f64) {
        self.clear_color = wgpu::Color { r, g, b, a: 1.0 };
    }

    /// Start a frame: acquire the surface, resynchronize GPU state from the
    /// instance store, clear, and bind everything the draw needs.
    pub fn begin(&mut self, gpu: &GpuContext) -> Result<(), RendererError> {
        if self.frame.is_some() {
            return Err(RendererError::FrameActive);
        }

        let surface_texture = gpu.surface.get_current_texture()?;

        if let Some((records, command)) = self.instances.synchronize(self.textures.layer_count()) {
            if !records.is_empty() {
                gpu.queue
                    .write_buffer(&self.instance_buffer, 0, bytemuck::cast_slice(records));
            }
            gpu.queue
                .write_buffer(&self.indirect_buffer, 0, bytemuck::bytes_of(&command));
            tracing::trace!(
                instances = command.instance_count,
                "instance buffer resynchronized"
            );
        }

        let view = surface_texture
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("quad frame encoder"),
            });

        let mut pass = encoder
            .begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("quad pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            })
            .forget_lifetime();

        pass.set_pipeline(&self.pipeline);
        pass.set_bind_group(0, &self.camera_bind_group, &[]);
        pass.set_bind_group(1, &self.texture_bind_group, &[]);
        pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        pass.set_vertex_buffer(1, self.instance_buffer.slice(..));
        pass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint16);

        self.frame = Some(FrameContext {
            pass,
            encoder,
            surface_texture,
        });
        Ok(())
    }

    /// Issue the one indirect draw for all stored quads. Fails outside an
    /// active frame rather than drawing with stale state.
    pub fn draw(&mut self) -> Result<(), RendererError> {
        let frame = self.frame.as_mut().ok_or(RendererError::FrameNotActive)?;
        frame.pass.draw_indexed_indirect(&self.indirect_buffer, 0);
        Ok(())
    }

    /// Finish the frame: close the pass, submit, and present.
    pub fn end(&mut self, gpu: &GpuContext) -> Result<(), RendererError> {
        let FrameContext {
            pass,
            encoder,
            surface_texture,
        } = self.frame.take().ok_or(RendererError::FrameNotActive)?;

        drop(pass);
        gpu.queue.submit(std::iter::once(encoder.finish()));
        surface_texture.present();
        Ok(())
    }

    /// Whether a frame is currently open.
    pub fn is_drawing(&self) -> bool {
        self.frame.is_some()
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len()
    }

    pub fn instance_capacity(&self) -> u32 {
        self.instances.capacity()
    }

    pub fn layer_count(&self) -> u32 {
        self.textures.layer_count()
    }

    pub fn layer_capacity(&self) -> u32 {
        self.textures.capacity()
    }
}
