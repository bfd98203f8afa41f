//! View and projection state pushed to the camera uniform block.

use crate::matrix::{Mat4, IDENTITY};

/// CPU-side camera state. Both matrices are always replaced together.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub view: Mat4,
    pub projection: Mat4,
}

impl Camera {
    /// The uniform block as uploaded to the GPU.
    pub fn uniform(&self) -> CameraUniform {
        CameraUniform {
            view: self.view,
            projection: self.projection,
        }
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            view: IDENTITY,
            projection: IDENTITY,
        }
    }
}

/// GPU layout of the camera block: view then projection, 128 bytes.
#[derive(Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub struct CameraUniform {
    pub view: [f32; 16],
    pub projection: [f32; 16],
}
