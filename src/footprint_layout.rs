// src/footprint_layout.rs

use crate::error::{Error, Result};
use crate::geometry::centered_span;
use crate::kicad_models::{FpPad, KiFootprint};
use crate::pinout_models::{PadArrangement, PadShape, PadTechnology, Package};
use crate::symbol_layout::sanitize_name;

/// Clearance between the courtyard and everything it must enclose.
const COURTYARD_CLEARANCE: f64 = 0.25;
/// How far the pin-1 marker is nudged from its pad toward the body.
const MARKER_NUDGE: f64 = 0.5;
/// The marker may sit at most this far outside the body outline.
const MARKER_CLAMP: f64 = 0.5;

/// One placed pad before the pad-shape and drill parameters are applied:
/// identifier, centre and rotation.
struct PadSeed {
    number: String,
    x: f64,
    y: f64,
    rotation: i32,
}

/// Computes the pad arrangement, outlines and courtyard for `package`.
///
/// The footprint engine treats `package.pin_count` as authoritative; it is
/// deliberately independent of the symbol's pin list.
pub fn layout_footprint(name: &str, package: &Package) -> Result<KiFootprint> {
    if package.pin_count == 0 {
        return Err(Error::InvalidPinCount(0));
    }

    let seeds = match package.package_type.arrangement() {
        PadArrangement::GridArray => grid_array_pads(package),
        PadArrangement::Quad => quad_pads(package),
        PadArrangement::DualRow => dual_row_pads(package),
    };

    let drill = match package.pad_type {
        PadTechnology::ThruHole if package.drill_size > 0.0 => Some(package.drill_size),
        _ => None,
    };

    let pads: Vec<FpPad> = seeds
        .into_iter()
        .map(|seed| {
            // A 90-degree pad rotation swaps the copper extent.
            let size = if seed.rotation == 90 {
                (package.pad_height, package.pad_width)
            } else {
                (package.pad_width, package.pad_height)
            };
            FpPad {
                number: seed.number,
                technology: package.pad_type,
                shape: package.pad_shape,
                pos: (seed.x, seed.y),
                size,
                rotation: seed.rotation,
                drill,
            }
        })
        .collect();

    let thermal_pad = if package.thermal_pad
        && package.thermal_pad_width > 0.0
        && package.thermal_pad_height > 0.0
    {
        Some(FpPad {
            number: String::new(),
            technology: PadTechnology::Smd,
            shape: PadShape::Rect,
            pos: (0.0, 0.0),
            size: (package.thermal_pad_width, package.thermal_pad_height),
            rotation: 0,
            drill: None,
        })
    } else {
        None
    };

    let body_half = (package.body_width / 2.0, package.body_height / 2.0);
    let pin1_marker = pin1_marker_pos(&pads, body_half);
    let courtyard_half = courtyard_extents(&pads, &thermal_pad, body_half);

    // Reference above, value below; footprint +y points down.
    let reference_pos = (0.0, -(courtyard_half.1 + 1.0));
    let value_pos = (0.0, courtyard_half.1 + 1.0);

    Ok(KiFootprint {
        name: sanitize_name(name),
        technology: package.pad_type,
        pads,
        thermal_pad,
        body_half,
        courtyard_half,
        pin1_marker,
        reference_pos,
        value_pos,
    })
}

/// BGA-style near-square grid. Rows are lettered from "A", columns are
/// 1-based; placement stops after exactly `pin_count` pads even mid-row.
fn grid_array_pads(package: &Package) -> Vec<PadSeed> {
    let count = package.pin_count as usize;
    let cols = (count as f64).sqrt().ceil() as usize;
    let rows = count.div_ceil(cols);

    let col_offsets = centered_span(cols, package.pin_pitch);
    let row_offsets = centered_span(rows, package.pin_pitch);

    let mut seeds = Vec::with_capacity(count);
    'rows: for (r, &y) in row_offsets.iter().enumerate() {
        for (c, &x) in col_offsets.iter().enumerate() {
            if seeds.len() == count {
                break 'rows;
            }
            seeds.push(PadSeed {
                number: format!("{}{}", row_letter(r), c + 1),
                x,
                y,
                rotation: 0,
            });
        }
    }
    seeds
}

/// BGA row designators: A..Z, then AA, AB, ...
fn row_letter(mut index: usize) -> String {
    let mut letters = String::new();
    loop {
        letters.insert(0, (b'A' + (index % 26) as u8) as char);
        if index < 26 {
            break;
        }
        index = index / 26 - 1;
    }
    letters
}

/// Quad packages: pins distributed over all four sides, numbered 1 upward
/// starting at the top of the left side and proceeding left, bottom, right,
/// top -- the counter-clockwise-from-top-view convention.
fn quad_pads(package: &Package) -> Vec<PadSeed> {
    let count = package.pin_count as usize;
    let base = count / 4;
    let remainder = count % 4;

    // Remainder pins go one each to left, bottom, right, top in order.
    let left_count = base + usize::from(remainder > 0);
    let bottom_count = base + usize::from(remainder > 1);
    let right_count = base + usize::from(remainder > 2);
    let top_count = base;

    let offset = package.row_spacing / 2.0;
    let mut seeds = Vec::with_capacity(count);
    let mut number = 1u32;
    let mut push = |seeds: &mut Vec<PadSeed>, x: f64, y: f64, rotation: i32| {
        seeds.push(PadSeed {
            number: number.to_string(),
            x,
            y,
            rotation,
        });
        number += 1;
    };

    // Footprint +y points down, so the most negative offset is topmost.
    for &along in &centered_span(left_count, package.pin_pitch) {
        push(&mut seeds, -offset, along, 0);
    }
    for &along in &centered_span(bottom_count, package.pin_pitch) {
        push(&mut seeds, along, offset, 90);
    }
    for &along in &centered_span(right_count, package.pin_pitch) {
        push(&mut seeds, offset, -along, 0);
    }
    for &along in &centered_span(top_count, package.pin_pitch) {
        push(&mut seeds, -along, -offset, 90);
    }
    seeds
}

/// Dual-row packages: pin 1 at the top of the left column, descending; the
/// right column numbers onward from the bottom up, so pin 1 and pin N end
/// up adjacent at the top. An odd last pin becomes a rotated pad below the
/// right column (3-pin SOT style).
fn dual_row_pads(package: &Package) -> Vec<PadSeed> {
    let count = package.pin_count as usize;
    let column = count / 2;
    let offset = package.row_spacing / 2.0;
    let along = centered_span(column, package.pin_pitch);

    let mut seeds = Vec::with_capacity(count);
    for (i, &y) in along.iter().enumerate() {
        seeds.push(PadSeed {
            number: (i + 1).to_string(),
            x: -offset,
            y,
            rotation: 0,
        });
    }
    for (i, &y) in along.iter().enumerate() {
        seeds.push(PadSeed {
            number: (column + i + 1).to_string(),
            x: offset,
            y: -y,
            rotation: 0,
        });
    }

    if count % 2 == 1 {
        let span_half = along.last().copied().unwrap_or(0.0);
        seeds.push(PadSeed {
            number: count.to_string(),
            x: offset,
            y: span_half + package.pin_pitch,
            rotation: 90,
        });
    }
    seeds
}

/// Marker centre: the first placed pad, nudged toward the body interior and
/// clamped to at most `MARKER_CLAMP` outside the body outline on each axis.
fn pin1_marker_pos(pads: &[FpPad], body_half: (f64, f64)) -> (f64, f64) {
    let (px, py) = pads[0].pos;
    let x = nudge_toward_zero(px).clamp(-(body_half.0 + MARKER_CLAMP), body_half.0 + MARKER_CLAMP);
    let y = nudge_toward_zero(py).clamp(-(body_half.1 + MARKER_CLAMP), body_half.1 + MARKER_CLAMP);
    (x, y)
}

fn nudge_toward_zero(v: f64) -> f64 {
    if v > 0.0 {
        v - MARKER_NUDGE
    } else if v < 0.0 {
        v + MARKER_NUDGE
    } else {
        v
    }
}

/// The courtyard must enclose the body outline and every pad extent, plus
/// the standard clearance on all sides.
fn courtyard_extents(
    pads: &[FpPad],
    thermal_pad: &Option<FpPad>,
    body_half: (f64, f64),
) -> (f64, f64) {
    let mut half_x = body_half.0;
    let mut half_y = body_half.1;
    for pad in pads.iter().chain(thermal_pad.iter()) {
        half_x = half_x.max(pad.pos.0.abs() + pad.size.0 / 2.0);
        half_y = half_y.max(pad.pos.1.abs() + pad.size.1 / 2.0);
    }
    (half_x + COURTYARD_CLEARANCE, half_y + COURTYARD_CLEARANCE)
}
