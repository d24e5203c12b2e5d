// src/symbol_layout.rs

use crate::error::{Error, Result};
use crate::geometry::{GRID, centered_span, round_up_to_grid};
use crate::kicad_models::{FONT_SIZE, KiSymbol, KiSymbolPin, PIN_NAME_OFFSET};
use crate::pinout_models::{Pin, PinSide, assign_missing_positions};

pub const PIN_LENGTH: f64 = 2.54; // mm (100 mil)
pub const PIN_SPACING: f64 = 2.54; // mm between pins
const BODY_MIN_WIDTH: f64 = 10.16; // mm (400 mil)
const BODY_MIN_HEIGHT: f64 = 5.08; // mm (two grid units)
/// Gap kept between the longest left-side and right-side pin names.
const NAME_GAP: f64 = 2.54;
/// Visual heuristic for proportional text, not exact metrics.
const CHAR_WIDTH: f64 = FONT_SIZE * 0.7;

/// Makes a component name safe for KiCad symbol identifiers.
pub fn sanitize_name(name: &str) -> String {
    name.replace([' ', '/', '\\'], "_")
}

/// Computes the symbol body and absolute pin placement for `pins`, grouped
/// by body side and ordered by their per-side position rank.
pub fn layout_symbol(name: &str, pins: &[Pin]) -> Result<KiSymbol> {
    if pins.is_empty() {
        return Err(Error::EmptyPinList);
    }

    let mut pins = pins.to_vec();
    assign_missing_positions(&mut pins);

    let left = ordered_side(&pins, PinSide::Left);
    let right = ordered_side(&pins, PinSide::Right);
    let top = ordered_side(&pins, PinSide::Top);
    let bottom = ordered_side(&pins, PinSide::Bottom);

    // Body height: one row per vertical pin plus a one-pitch margin,
    // snapped up to the grid.
    let max_vertical = left.len().max(right.len()).max(1);
    let body_height = round_up_to_grid(
        (max_vertical as f64 * PIN_SPACING + PIN_SPACING).max(BODY_MIN_HEIGHT),
        GRID,
    );

    // Body width: the longest left and right names side by side, the
    // horizontal pin row, and the absolute minimum all set lower bounds.
    let max_left_name = longest_name(&left);
    let max_right_name = longest_name(&right);
    let name_width =
        (max_left_name + max_right_name) as f64 * CHAR_WIDTH + 2.0 * PIN_NAME_OFFSET + NAME_GAP;
    let max_horizontal = top.len().max(bottom.len()).max(1);
    let horiz_width = max_horizontal as f64 * PIN_SPACING + PIN_SPACING;
    let body_width = round_up_to_grid(name_width.max(horiz_width).max(BODY_MIN_WIDTH), GRID);

    let half_w = body_width / 2.0;
    let half_h = body_height / 2.0;

    let mut ki_pins = Vec::with_capacity(pins.len());

    // Left pins point right (angle 0); first pin one pitch below the top
    // edge, descending one pitch per pin. Right pins mirror at angle 180.
    for (i, pin) in left.iter().enumerate() {
        let y = half_h - PIN_SPACING - i as f64 * PIN_SPACING;
        ki_pins.push(place_pin(pin, -half_w - PIN_LENGTH, y, 0));
    }
    for (i, pin) in right.iter().enumerate() {
        let y = half_h - PIN_SPACING - i as f64 * PIN_SPACING;
        ki_pins.push(place_pin(pin, half_w + PIN_LENGTH, y, 180));
    }

    // Top pins point down (angle 270), bottom pins up (angle 90), both
    // centred about the body's vertical axis.
    let top_xs = centered_span(top.len(), PIN_SPACING);
    for (pin, &x) in top.iter().zip(top_xs.iter()) {
        ki_pins.push(place_pin(pin, x, half_h + PIN_LENGTH, 270));
    }
    let bottom_xs = centered_span(bottom.len(), PIN_SPACING);
    for (pin, &x) in bottom.iter().zip(bottom_xs.iter()) {
        ki_pins.push(place_pin(pin, x, -half_h - PIN_LENGTH, 90));
    }

    // Property labels sit one font height past the pin tips, pushed out a
    // full pitch when the facing side carries pins whose names would
    // otherwise collide with the label.
    let mut ref_y = half_h + PIN_LENGTH + FONT_SIZE;
    if !top.is_empty() {
        ref_y += PIN_SPACING;
    }
    let mut val_y = -(half_h + PIN_LENGTH + FONT_SIZE);
    if !bottom.is_empty() {
        val_y -= PIN_SPACING;
    }

    Ok(KiSymbol {
        name: sanitize_name(name),
        reference: "U".to_string(),
        half_width: half_w,
        half_height: half_h,
        ref_y,
        val_y,
        pins: ki_pins,
    })
}

/// Pins of one side, sorted by position rank. The sort is stable, so pins
/// sharing a rank keep their extraction order.
fn ordered_side(pins: &[Pin], side: PinSide) -> Vec<Pin> {
    let mut side_pins: Vec<Pin> = pins.iter().filter(|p| p.side == side).cloned().collect();
    side_pins.sort_by_key(|p| p.position);
    side_pins
}

fn longest_name(side_pins: &[Pin]) -> usize {
    side_pins
        .iter()
        .map(|p| p.name.chars().count())
        .max()
        .unwrap_or(0)
}

fn place_pin(pin: &Pin, x: f64, y: f64, rotation: i32) -> KiSymbolPin {
    KiSymbolPin {
        name: pin.name.clone(),
        number: pin.number.clone(),
        electrical: pin.electrical_type,
        length: PIN_LENGTH,
        pos: (x, y),
        rotation,
    }
}
