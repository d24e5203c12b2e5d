// src/pinout_models.rs

use serde::{Deserialize, Serialize};

/// Which edge of the symbol body a pin is drawn on.
///
/// Unknown values in the input document fall back to `Left`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PinSide {
    Right,
    Top,
    Bottom,
    // serde requires the catch-all variant to come last.
    #[default]
    #[serde(other)]
    Left,
}

impl PinSide {
    pub const ALL: [PinSide; 4] = [PinSide::Left, PinSide::Right, PinSide::Top, PinSide::Bottom];
}

/// KiCad electrical pin types. Unknown values fall back to `Unspecified`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElectricalType {
    Input,
    Output,
    Bidirectional,
    TriState,
    Passive,
    Free,
    PowerIn,
    PowerOut,
    OpenCollector,
    OpenEmitter,
    NoConnect,
    #[default]
    #[serde(other)]
    Unspecified,
}

impl ElectricalType {
    /// The `.kicad_sym` keyword for this electrical type.
    pub fn keyword(&self) -> &'static str {
        match self {
            ElectricalType::Input => "input",
            ElectricalType::Output => "output",
            ElectricalType::Bidirectional => "bidirectional",
            ElectricalType::TriState => "tri_state",
            ElectricalType::Passive => "passive",
            ElectricalType::Free => "free",
            ElectricalType::Unspecified => "unspecified",
            ElectricalType::PowerIn => "power_in",
            ElectricalType::PowerOut => "power_out",
            ElectricalType::OpenCollector => "open_collector",
            ElectricalType::OpenEmitter => "open_emitter",
            ElectricalType::NoConnect => "no_connect",
        }
    }
}

/// One electrical contact as described by the extraction/review front end.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pin {
    pub number: String,
    pub name: String,
    #[serde(default)]
    pub side: PinSide,
    #[serde(rename = "type", default)]
    pub electrical_type: ElectricalType,
    /// 1-indexed rank within the side; 0 means "unset".
    #[serde(default)]
    pub position: u32,
}

/// Assigns a rank to every pin whose position is unset (0), continuing after
/// the highest rank already taken on that pin's side, in list order.
pub fn assign_missing_positions(pins: &mut [Pin]) {
    for side in PinSide::ALL {
        let mut max_pos = pins
            .iter()
            .filter(|p| p.side == side)
            .map(|p| p.position)
            .max()
            .unwrap_or(0);
        for pin in pins.iter_mut().filter(|p| p.side == side) {
            if pin.position == 0 {
                max_pos += 1;
                pin.position = max_pos;
            }
        }
    }
}

/// Physical package family. Unknown values normalize to `Other`, which is
/// laid out as a dual-row package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PackageType {
    Dip,
    #[default]
    Soic,
    Ssop,
    Sop,
    Tssop,
    Qfp,
    Tqfp,
    Lqfp,
    Qfn,
    Dfn,
    Bga,
    Sot,
    #[serde(other)]
    Other,
}

/// Pad arrangement family a package type maps onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PadArrangement {
    DualRow,
    Quad,
    GridArray,
}

impl PackageType {
    pub fn arrangement(&self) -> PadArrangement {
        match self {
            PackageType::Qfp | PackageType::Tqfp | PackageType::Lqfp | PackageType::Qfn => {
                PadArrangement::Quad
            }
            PackageType::Bga => PadArrangement::GridArray,
            _ => PadArrangement::DualRow,
        }
    }
}

/// Copper pad outline. Unknown values fall back to `Rect`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PadShape {
    Oval,
    Circle,
    RoundRect,
    #[default]
    #[serde(other)]
    Rect,
}

impl PadShape {
    /// The `.kicad_mod` keyword for this pad shape.
    pub fn keyword(&self) -> &'static str {
        match self {
            PadShape::Rect => "rect",
            PadShape::Oval => "oval",
            PadShape::Circle => "circle",
            PadShape::RoundRect => "roundrect",
        }
    }
}

/// Pad mounting technology. Unknown values fall back to `Smd`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PadTechnology {
    ThruHole,
    #[default]
    #[serde(other)]
    Smd,
}

/// Physical footprint parameters for one component. All dimensions in mm.
///
/// Defaults describe a plain SOIC-8 so a document with a partial package
/// block still yields a plausible footprint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Package {
    pub package_type: PackageType,
    pub pin_count: u32,
    pub pin_pitch: f64,
    pub pad_width: f64,
    pub pad_height: f64,
    pub row_spacing: f64,
    pub body_width: f64,
    pub body_height: f64,
    /// 0.0 is valid for SMD packages.
    pub drill_size: f64,
    pub pad_shape: PadShape,
    pub pad_type: PadTechnology,
    pub thermal_pad: bool,
    pub thermal_pad_width: f64,
    pub thermal_pad_height: f64,
}

impl Default for Package {
    fn default() -> Self {
        Package {
            package_type: PackageType::Soic,
            pin_count: 8,
            pin_pitch: 1.27,
            pad_width: 1.55,
            pad_height: 0.6,
            row_spacing: 5.4,
            body_width: 3.9,
            body_height: 4.9,
            drill_size: 0.0,
            pad_shape: PadShape::Rect,
            pad_type: PadTechnology::Smd,
            thermal_pad: false,
            thermal_pad_width: 0.0,
            thermal_pad_height: 0.0,
        }
    }
}
