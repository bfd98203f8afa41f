//! GPU-accelerated instanced quad rendering.
//!
//! Batches every quad into one indexed, instanced, indirect draw: a shared
//! unit-quad vertex/index pair, a per-instance buffer of transform matrices
//! and texture layers, and a GPU-resident draw command kept in sync with
//! the CPU-side instance store.

mod instances;
mod pipeline;
mod renderer;
mod types;

pub use instances::InstanceStore;
pub use renderer::{QuadRenderer, RendererConfig};
pub use types::{DrawIndexedIndirectArgs, QuadInstance};

#[cfg(test)]
mod tests {
    use super::types::*;

    #[test]
    fn vertex_size() {
        assert_eq!(std::mem::size_of::<Vertex>(), 20); // 3 + 2 floats
    }

    #[test]
    fn quad_instance_size() {
        assert_eq!(std::mem::size_of::<QuadInstance>(), 68); // mat4 + i32
    }

    #[test]
    fn draw_args_match_indirect_layout() {
        assert_eq!(std::mem::size_of::<DrawIndexedIndirectArgs>(), 20); // 5 words
    }

    #[test]
    fn quad_indices_form_two_triangles() {
        assert_eq!(QUAD_INDICES, &[0, 1, 2, 2, 3, 0]);
    }

    #[test]
    fn quad_vertices_center_on_origin() {
        assert_eq!(QUAD_VERTICES.len(), 4);
        assert_eq!(QUAD_VERTICES[0].position, [-0.5, -0.5, 0.0]);
        assert_eq!(QUAD_VERTICES[2].position, [0.5, 0.5, 0.0]);
        assert_eq!(QUAD_VERTICES[0].uv, [0.0, 0.0]);
        assert_eq!(QUAD_VERTICES[2].uv, [1.0, 1.0]);
    }

    #[test]
    fn draw_args_for_quads_always_use_six_indices() {
        let command = DrawIndexedIndirectArgs::for_quads(42);
        assert_eq!(command.index_count, 6);
        assert_eq!(command.instance_count, 42);
        assert_eq!(command.first_index, 0);
        assert_eq!(command.base_vertex, 0);
        assert_eq!(command.first_instance, 0);
    }
}
