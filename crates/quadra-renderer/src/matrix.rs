//! 4×4 matrix math for quad transforms and the camera block.
//!
//! Column-major layout matching WGSL `mat4x4<f32>`.
//! Minimal set: translate, non-uniform scale, orthographic, look-at.

/// 4×4 column-major matrix stored as `[f32; 16]`.
pub type Mat4 = [f32; 16];

/// Identity matrix.
pub const IDENTITY: Mat4 = [
    1.0, 0.0, 0.0, 0.0, // col 0
    0.0, 1.0, 0.0, 0.0, // col 1
    0.0, 0.0, 1.0, 0.0, // col 2
    0.0, 0.0, 0.0, 1.0, // col 3
];

/// Translation matrix.
pub fn translate(x: f32, y: f32, z: f32) -> Mat4 {
    [
        1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, x, y, z, 1.0,
    ]
}

/// Non-uniform scale matrix.
pub fn scale(x: f32, y: f32, z: f32) -> Mat4 {
    [
        x, 0.0, 0.0, 0.0, 0.0, y, 0.0, 0.0, 0.0, 0.0, z, 0.0, 0.0, 0.0, 0.0, 1.0,
    ]
}

/// Right-handed orthographic projection mapping depth to 0..1.
///
/// `ortho(0.0, w, h, 0.0, -1.0, 1.0)` puts the origin at the top-left of a
/// `w × h` pixel canvas, the usual 2D screen-space setup.
pub fn ortho(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Mat4 {
    let rcp_width = 1.0 / (right - left);
    let rcp_height = 1.0 / (top - bottom);
    let rcp_depth = 1.0 / (near - far);

    [
        2.0 * rcp_width,
        0.0,
        0.0,
        0.0,
        0.0,
        2.0 * rcp_height,
        0.0,
        0.0,
        0.0,
        0.0,
        rcp_depth,
        0.0,
        -(right + left) * rcp_width,
        -(top + bottom) * rcp_height,
        near * rcp_depth,
        1.0,
    ]
}

/// Right-handed look-at view matrix.
pub fn look_at(eye: [f32; 3], center: [f32; 3], up: [f32; 3]) -> Mat4 {
    let forward = normalize(sub(center, eye));
    let side = normalize(cross(forward, up));
    let upward = cross(side, forward);

    [
        side[0],
        upward[0],
        -forward[0],
        0.0,
        side[1],
        upward[1],
        -forward[1],
        0.0,
        side[2],
        upward[2],
        -forward[2],
        0.0,
        -dot(side, eye),
        -dot(upward, eye),
        dot(forward, eye),
        1.0,
    ]
}

/// Multiply two 4×4 column-major matrices: result = a × b.
pub fn mul(a: &Mat4, b: &Mat4) -> Mat4 {
    let mut out = [0.0f32; 16];
    for col in 0..4 {
        for row in 0..4 {
            let mut sum = 0.0;
            for k in 0..4 {
                sum += a[k * 4 + row] * b[col * 4 + k];
            }
            out[col * 4 + row] = sum;
        }
    }
    out
}

fn sub(a: [f32; 3], b: [f32; 3]) -> [f32; 3] {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

fn dot(a: [f32; 3], b: [f32; 3]) -> f32 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

fn cross(a: [f32; 3], b: [f32; 3]) -> [f32; 3] {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

fn normalize(v: [f32; 3]) -> [f32; 3] {
    let len = dot(v, v).sqrt();
    if len == 0.0 {
        return v;
    }
    [v[0] / len, v[1] / len, v[2] / len]
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: &Mat4, b: &Mat4, eps: f32) -> bool {
        a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() < eps)
    }

    fn apply(m: &Mat4, p: [f32; 3]) -> [f32; 3] {
        let mut out = [0.0f32; 3];
        for (row, slot) in out.iter_mut().enumerate() {
            *slot = m[row] * p[0] + m[4 + row] * p[1] + m[8 + row] * p[2] + m[12 + row];
        }
        out
    }

    #[test]
    fn identity_mul_identity() {
        let result = mul(&IDENTITY, &IDENTITY);
        assert!(approx_eq(&result, &IDENTITY, 1e-6));
    }

    #[test]
    fn translate_moves_point() {
        let t = translate(1.0, 2.0, 3.0);
        let p = apply(&t, [0.0, 0.0, 0.0]);
        assert_eq!(p, [1.0, 2.0, 3.0]);
    }

    #[test]
    fn scale_stretches_axes_independently() {
        let s = scale(2.0, 3.0, 4.0);
        let p = apply(&s, [1.0, 1.0, 1.0]);
        assert_eq!(p, [2.0, 3.0, 4.0]);
    }

    #[test]
    fn mul_does_not_commute() {
        let t = translate(10.0, 0.0, 0.0);
        let s = scale(2.0, 2.0, 2.0);
        let ts = mul(&t, &s);
        let st = mul(&s, &t);
        assert!(!approx_eq(&ts, &st, 1e-6));
    }

    #[test]
    fn ortho_maps_canvas_corners_to_ndc() {
        // Top-left origin over a 600×480 canvas.
        let p = ortho(0.0, 600.0, 480.0, 0.0, -1.0, 1.0);

        let top_left = apply(&p, [0.0, 0.0, 0.0]);
        assert!((top_left[0] - (-1.0)).abs() < 1e-6);
        assert!((top_left[1] - 1.0).abs() < 1e-6);

        let bottom_right = apply(&p, [600.0, 480.0, 0.0]);
        assert!((bottom_right[0] - 1.0).abs() < 1e-6);
        assert!((bottom_right[1] - (-1.0)).abs() < 1e-6);
    }

    #[test]
    fn ortho_keeps_depth_in_unit_range() {
        let p = ortho(0.0, 100.0, 100.0, 0.0, -1.0, 1.0);
        let near = apply(&p, [0.0, 0.0, -1.0]);
        let far = apply(&p, [0.0, 0.0, 1.0]);
        assert!((near[2] - 1.0).abs() < 1e-6);
        assert!(far[2].abs() < 1e-6);
    }

    #[test]
    fn look_at_down_negative_z_is_identity() {
        let v = look_at([0.0, 0.0, 0.0], [0.0, 0.0, -1.0], [0.0, 1.0, 0.0]);
        assert!(approx_eq(&v, &IDENTITY, 1e-6));
    }

    #[test]
    fn look_at_translates_eye_to_origin() {
        let v = look_at([5.0, 0.0, 0.0], [5.0, 0.0, -1.0], [0.0, 1.0, 0.0]);
        let p = apply(&v, [5.0, 0.0, 0.0]);
        assert!(p.iter().all(|c| c.abs() < 1e-6));
    }
}
