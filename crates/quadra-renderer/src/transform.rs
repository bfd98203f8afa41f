//! Position and scale for a single quad.

use crate::matrix::{self, Mat4};

/// Translation and scale of one quad. Rotation is not supported.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: [f32; 3],
    pub scale: [f32; 3],
}

impl Transform {
    pub fn new(position: [f32; 3], scale: [f32; 3]) -> Self {
        Self { position, scale }
    }

    /// Model matrix: translate, then scale.
    pub fn matrix(&self) -> Mat4 {
        let [x, y, z] = self.position;
        let [sx, sy, sz] = self.scale;
        matrix::mul(&matrix::translate(x, y, z), &matrix::scale(sx, sy, sz))
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: [0.0; 3],
            scale: [1.0; 3],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix;

    fn apply(m: &Mat4, p: [f32; 3]) -> [f32; 3] {
        let mut out = [0.0f32; 3];
        for (row, slot) in out.iter_mut().enumerate() {
            *slot = m[row] * p[0] + m[4 + row] * p[1] + m[8 + row] * p[2] + m[12 + row];
        }
        out
    }

    #[test]
    fn matrix_is_translate_times_scale() {
        let transform = Transform::new([50.0, 50.0, 1.0], [50.0, 50.0, 1.0]);
        let expected = matrix::mul(
            &matrix::translate(50.0, 50.0, 1.0),
            &matrix::scale(50.0, 50.0, 1.0),
        );
        assert_eq!(transform.matrix(), expected);
    }

    #[test]
    fn translate_then_scale_differs_from_scale_then_translate() {
        let transform = Transform::new([10.0, 0.0, 0.0], [2.0, 2.0, 1.0]);
        let swapped = matrix::mul(
            &matrix::scale(2.0, 2.0, 1.0),
            &matrix::translate(10.0, 0.0, 0.0),
        );
        assert_ne!(transform.matrix(), swapped);
    }

    #[test]
    fn unit_quad_corner_lands_at_scaled_offset() {
        // A quad centered at (100, 200) and 50 px wide: the +0.5 corner of
        // the shared unit quad must land at center + half extent.
        let transform = Transform::new([100.0, 200.0, 0.0], [50.0, 50.0, 1.0]);
        let corner = apply(&transform.matrix(), [0.5, 0.5, 0.0]);
        assert_eq!(corner, [125.0, 225.0, 0.0]);
    }

    #[test]
    fn default_is_neutral() {
        let transform = Transform::default();
        assert_eq!(transform.matrix(), matrix::IDENTITY);
    }
}
