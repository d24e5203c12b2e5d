// src/geometry.rs

/// Standard KiCad schematic grid: 0.1 inch in mm.
pub const GRID: f64 = 2.54;

/// Snaps `value` up to the next multiple of `grid` (ceiling semantics).
///
/// Bodies only ever grow to meet the grid; snapping down would make pins
/// collide. A value sitting a rounding error above an exact multiple must
/// not jump a whole extra grid step, hence the epsilon.
pub fn round_up_to_grid(value: f64, grid: f64) -> f64 {
    (value / grid - 1e-9).ceil() * grid
}

/// Offsets for `count` items spaced by `pitch`, symmetric about zero.
///
/// The first offset is the most negative one, so the first item lands
/// leftmost/topmost. `count == 1` yields `[0.0]`.
pub fn centered_span(count: usize, pitch: f64) -> Vec<f64> {
    if count == 0 {
        return Vec::new();
    }
    let span = (count - 1) as f64 * pitch;
    (0..count).map(|i| -span / 2.0 + i as f64 * pitch).collect()
}
