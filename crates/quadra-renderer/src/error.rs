//! Renderer error taxonomy.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum RendererError {
    #[error("instance store full: capacity {capacity} reached")]
    InstanceCapacity { capacity: u32 },

    #[error("texture array full: capacity {capacity} reached")]
    TextureCapacity { capacity: u32 },

    #[error("texture layer size mismatch: expected {expected} bytes, got {actual}")]
    LayerSizeMismatch { expected: usize, actual: usize },

    #[error("shader compilation failed for {}: {message}", path.display())]
    ShaderCompilation { path: PathBuf, message: String },

    #[error("pipeline link failed: {0}")]
    PipelineLink(String),

    #[error("frame already begun")]
    FrameActive,

    #[error("no frame in progress")]
    FrameNotActive,

    #[error("surface error: {0}")]
    Surface(String),

    #[error("no suitable GPU adapter found")]
    AdapterNotFound,

    #[error("device error: {0}")]
    Device(String),

    #[error("failed to read shader {}: {source}", path.display())]
    ShaderIo {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl From<wgpu::SurfaceError> for RendererError {
    fn from(e: wgpu::SurfaceError) -> Self {
        RendererError::Surface(e.to_string())
    }
}

impl From<wgpu::RequestDeviceError> for RendererError {
    fn from(e: wgpu::RequestDeviceError) -> Self {
        RendererError::Device(e.to_string())
    }
}
