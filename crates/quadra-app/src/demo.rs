//! Demo scene content.

use quadra_renderer::Transform;

/// The two-quad scene: one placeholder-textured quad and one on layer 1.
pub fn two_quads() -> [(Transform, i32); 2] {
    [
        (
            Transform::new([50.0, 50.0, 1.0], [50.0, 50.0, 1.0]),
            0,
        ),
        (
            Transform::new([100.0, 200.0, 0.0], [50.0, 50.0, 1.0]),
            1,
        ),
    ]
}

/// A `cols × rows` grid of cells filling a `width × height` canvas, each
/// cell one quad centered in its slot, layers alternating 0/1 like a
/// checkerboard.
pub fn grid_cells(cols: u32, rows: u32, width: f32, height: f32) -> Vec<(Transform, i32)> {
    let cell_w = width / cols as f32;
    let cell_h = height / rows as f32;

    let mut cells = Vec::with_capacity((cols * rows) as usize);
    for row in 0..rows {
        for col in 0..cols {
            let x = (col as f32 + 0.5) * cell_w;
            let y = (row as f32 + 0.5) * cell_h;
            let layer = ((col + row) % 2) as i32;
            cells.push((
                Transform::new([x, y, 0.0], [cell_w, cell_h, 1.0]),
                layer,
            ));
        }
    }
    cells
}

/// A solid-color RGBA8 layer of the configured size.
pub fn solid_layer(width: u32, height: u32, rgba: [u8; 4]) -> Vec<u8> {
    let mut pixels = Vec::with_capacity((width * height * 4) as usize);
    for _ in 0..width * height {
        pixels.extend_from_slice(&rgba);
    }
    pixels
}
