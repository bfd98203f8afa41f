//! Fixed-capacity RGBA8 texture array.
//!
//! All layers share one size and format. Layers are append-only; layer 0 is
//! a generated placeholder written at construction, so a valid layer always
//! exists for instances to sample.

use crate::error::RendererError;

/// Placeholder checkerboard colors for layer 0.
const PLACEHOLDER_A: [u8; 4] = [180, 50, 50, 255];
const PLACEHOLDER_B: [u8; 4] = [200, 200, 200, 255];

pub struct TextureArrayStore {
    texture: wgpu::Texture,
    view: wgpu::TextureView,
    sampler: wgpu::Sampler,
    width: u32,
    height: u32,
    capacity: u32,
    layer_count: u32,
}

impl TextureArrayStore {
    /// Allocate storage for `max(1, capacity)` layers of `width × height`
    /// RGBA8 and write the placeholder into layer 0.
    pub fn new(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        width: u32,
        height: u32,
        capacity: u32,
    ) -> Self {
        let capacity = capacity.max(1);

        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("quad texture array"),
            size: wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: capacity,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8Unorm,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        let view = texture.create_view(&wgpu::TextureViewDescriptor {
            label: Some("quad texture array view"),
            dimension: Some(wgpu::TextureViewDimension::D2Array),
            ..Default::default()
        });

        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("quad texture array sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Nearest,
            min_filter: wgpu::FilterMode::Nearest,
            mipmap_filter: wgpu::FilterMode::Nearest,
            ..Default::default()
        });

        let mut store = Self {
            texture,
            view,
            sampler,
            width,
            height,
            capacity,
            layer_count: 0,
        };
        store.write_layer(queue, 0, &placeholder_pattern(width, height));
        store.layer_count = 1;
        store
    }

    /// Append one RGBA8 layer and return its index.
    ///
    /// `pixels` must be exactly `width × height × 4` bytes. Fails without
    /// changing the layer count when the array is full.
    pub fn add_layer(&mut self, queue: &wgpu::Queue, pixels: &[u8]) -> Result<u32, RendererError> {
        let expected = (self.width * self.height * 4) as usize;
        if pixels.len() != expected {
            return Err(RendererError::LayerSizeMismatch {
                expected,
                actual: pixels.len(),
            });
        }
        if self.layer_count >= self.capacity {
            return Err(RendererError::TextureCapacity {
                capacity: self.capacity,
            });
        }

        let layer = self.layer_count;
        self.write_layer(queue, layer, pixels);
        self.layer_count += 1;
        tracing::debug!("texture layer {layer} uploaded");
        Ok(layer)
    }

    fn write_layer(&self, queue: &wgpu::Queue, layer: u32, pixels: &[u8]) {
        queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &self.texture,
                mip_level: 0,
                origin: wgpu::Origin3d {
                    x: 0,
                    y: 0,
                    z: layer,
                },
                aspect: wgpu::TextureAspect::All,
            },
            pixels,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(4 * self.width),
                rows_per_image: Some(self.height),
            },
            wgpu::Extent3d {
                width: self.width,
                height: self.height,
                depth_or_array_layers: 1,
            },
        );
    }

    /// Number of occupied layers. Always at least 1.
    pub fn layer_count(&self) -> u32 {
        self.layer_count
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn view(&self) -> &wgpu::TextureView {
        &self.view
    }

    pub fn sampler(&self) -> &wgpu::Sampler {
        &self.sampler
    }
}

/// A 2×2 checkerboard stretched to the configured layer size.
pub(crate) fn placeholder_pattern(width: u32, height: u32) -> Vec<u8> {
    let mut pixels = Vec::with_capacity((width * height * 4) as usize);
    for y in 0..height {
        for x in 0..width {
            let cell = x * 2 / width.max(1) + y * 2 / height.max(1);
            let color = if cell % 2 == 0 {
                PLACEHOLDER_A
            } else {
                PLACEHOLDER_B
            };
            pixels.extend_from_slice(&color);
        }
    }
    pixels
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_pattern_matches_layer_size() {
        let pixels = placeholder_pattern(2, 2);
        assert_eq!(pixels.len(), 2 * 2 * 4);
    }

    #[test]
    fn placeholder_pattern_is_a_checkerboard() {
        let pixels = placeholder_pattern(2, 2);
        assert_eq!(&pixels[0..4], &PLACEHOLDER_A);
        assert_eq!(&pixels[4..8], &PLACEHOLDER_B);
        assert_eq!(&pixels[8..12], &PLACEHOLDER_B);
        assert_eq!(&pixels[12..16], &PLACEHOLDER_A);
    }

    #[test]
    fn placeholder_pattern_scales_up() {
        // Each checker cell covers half the layer in both axes.
        let width = 8;
        let pixels = placeholder_pattern(width, 8);
        let at = |x: usize, y: usize| &pixels[(y * width as usize + x) * 4..][..4];
        assert_eq!(at(0, 0), &PLACEHOLDER_A);
        assert_eq!(at(7, 0), &PLACEHOLDER_B);
        assert_eq!(at(0, 7), &PLACEHOLDER_B);
        assert_eq!(at(7, 7), &PLACEHOLDER_A);
    }
}
