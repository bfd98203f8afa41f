use bytemuck::{Pod, Zeroable};

use crate::matrix::Mat4;

/// Per-instance data for one quad.
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
#[repr(C)]
pub struct QuadInstance {
    /// Model matrix, column-major, fed to four consecutive vec4 attributes.
    pub model: [f32; 16],
    /// Texture array layer sampled by this quad.
    pub layer: i32,
}

impl QuadInstance {
    pub fn new(model: Mat4, layer: i32) -> Self {
        Self { model, layer }
    }
}

/// Shared unit-quad vertex (position + UV).
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
#[repr(C)]
pub(crate) struct Vertex {
    pub position: [f32; 3],
    pub uv: [f32; 2],
}

/// Arguments of one indexed, instanced draw, laid out for the indirect
/// draw buffer.
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
#[repr(C)]
pub struct DrawIndexedIndirectArgs {
    /// Indices per instance: always 6 (two triangles).
    pub index_count: u32,
    /// Instances to draw; must match the instance store at draw time.
    pub instance_count: u32,
    pub first_index: u32,
    pub base_vertex: i32,
    pub first_instance: u32,
}

impl DrawIndexedIndirectArgs {
    pub const fn for_quads(instance_count: u32) -> Self {
        Self {
            index_count: QUAD_INDICES.len() as u32,
            instance_count,
            first_index: 0,
            base_vertex: 0,
            first_instance: 0,
        }
    }
}

/// Unit quad centered on the origin, UVs spanning 0..1.
pub(crate) const QUAD_VERTICES: &[Vertex] = &[
    Vertex {
        position: [-0.5, -0.5, 0.0],
        uv: [0.0, 0.0],
    },
    Vertex {
        position: [0.5, -0.5, 0.0],
        uv: [1.0, 0.0],
    },
    Vertex {
        position: [0.5, 0.5, 0.0],
        uv: [1.0, 1.0],
    },
    Vertex {
        position: [-0.5, 0.5, 0.0],
        uv: [0.0, 1.0],
    },
];

/// Two CCW triangles.
pub(crate) const QUAD_INDICES: &[u16] = &[0, 1, 2, 2, 3, 0];
