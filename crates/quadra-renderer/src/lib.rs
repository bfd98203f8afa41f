pub mod camera;
pub mod error;
pub mod gpu;
pub mod matrix;
pub mod quad;
pub mod render_state;
pub mod texture_array;
pub mod transform;

pub use error::RendererError;
pub use gpu::GpuContext;
pub use quad::{QuadRenderer, RendererConfig};
pub use render_state::RenderState;
pub use texture_array::TextureArrayStore;
pub use transform::Transform;
