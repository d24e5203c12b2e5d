// src/kicad_models.rs

use crate::pinout_models::{ElectricalType, PadShape, PadTechnology};
use crate::sexpr::{SexprWriter, mm, quoted};

pub const FONT_SIZE: f64 = 1.27; // mm
pub const PIN_NAME_OFFSET: f64 = 1.016; // mm

const SILK_STROKE: f64 = 0.12;
const FAB_STROKE: f64 = 0.10;
const COURTYARD_STROKE: f64 = 0.05;
const MARKER_RADIUS: f64 = 0.25;

pub const KICAD_SYM_HEADER: &str = r#"(kicad_symbol_lib
  (version 20231120)
  (generator "pinout2kicad")
  (generator_version "1.0")
"#;

pub const KICAD_SYM_FOOTER: &str = ")\n";

// --- Symbol Structs ---

#[derive(Debug, Clone)]
pub struct KiSymbolPin {
    pub name: String,
    pub number: String,
    pub electrical: ElectricalType,
    pub length: f64,
    pub pos: (f64, f64),
    pub rotation: i32,
}

#[derive(Debug, Clone)]
pub struct KiSymbol {
    pub name: String,
    pub reference: String,
    pub half_width: f64,
    pub half_height: f64,
    /// Vertical offsets of the Reference and Value properties.
    pub ref_y: f64,
    pub val_y: f64,
    pub pins: Vec<KiSymbolPin>,
}

impl KiSymbol {
    /// Generates the `(symbol ...)` entry spliced between the library
    /// header and footer of a `.kicad_sym` file.
    pub fn to_kicad_lib_entry(&self) -> String {
        let mut w = SexprWriter::at_depth(1);

        w.open(&format!("symbol {}", quoted(&self.name)));
        w.open("pin_names");
        w.line(&format!("offset {}", PIN_NAME_OFFSET));
        w.close();
        w.line("exclude_from_sim no");
        w.line("in_bom yes");
        w.line("on_board yes");

        Self::write_property(&mut w, "Reference", &self.reference, self.ref_y, false);
        Self::write_property(&mut w, "Value", &self.name, self.val_y, false);
        Self::write_property(&mut w, "Footprint", "", 0.0, true);
        Self::write_property(&mut w, "Datasheet", "", 0.0, true);

        // Body outline sub-symbol.
        w.open(&format!("symbol {}", quoted(&format!("{}_0_1", self.name))));
        w.open("rectangle");
        w.line(&format!("start {} {}", mm(-self.half_width), mm(self.half_height)));
        w.line(&format!("end {} {}", mm(self.half_width), mm(-self.half_height)));
        w.open("stroke");
        w.line("width 0.254");
        w.line("type default");
        w.close();
        w.open("fill");
        w.line("type background");
        w.close();
        w.close(); // rectangle
        w.close(); // _0_1

        // Pin sub-symbol.
        w.open(&format!("symbol {}", quoted(&format!("{}_1_1", self.name))));
        for pin in &self.pins {
            Self::write_pin(&mut w, pin);
        }
        w.close(); // _1_1

        w.close(); // symbol
        w.finish()
    }

    /// Generates a complete standalone `.kicad_sym` document holding just
    /// this symbol.
    pub fn to_kicad_sym(&self) -> String {
        format!(
            "{}{}{}",
            KICAD_SYM_HEADER,
            self.to_kicad_lib_entry(),
            KICAD_SYM_FOOTER
        )
    }

    fn write_property(w: &mut SexprWriter, key: &str, value: &str, y: f64, hidden: bool) {
        w.open(&format!("property {} {}", quoted(key), quoted(value)));
        w.line(&format!("at 0 {} 0", mm(y)));
        w.open("effects");
        w.open("font");
        w.line(&format!("size {} {}", FONT_SIZE, FONT_SIZE));
        w.close();
        if hidden {
            w.line("hide yes");
        }
        w.close();
        w.close();
    }

    fn write_pin(w: &mut SexprWriter, pin: &KiSymbolPin) {
        w.open(&format!("pin {} line", pin.electrical.keyword()));
        w.line(&format!(
            "at {} {} {}",
            mm(pin.pos.0),
            mm(pin.pos.1),
            pin.rotation
        ));
        w.line(&format!("length {}", pin.length));
        w.open(&format!("name {}", quoted(&pin.name)));
        w.open("effects");
        w.open("font");
        w.line(&format!("size {} {}", FONT_SIZE, FONT_SIZE));
        w.close();
        w.close();
        w.close();
        w.open(&format!("number {}", quoted(&pin.number)));
        w.open("effects");
        w.open("font");
        w.line(&format!("size {} {}", FONT_SIZE, FONT_SIZE));
        w.close();
        w.close();
        w.close();
        w.close(); // pin
    }
}

// --- Footprint Structs ---

#[derive(Debug, Clone)]
pub struct FpPad {
    pub number: String,
    pub technology: PadTechnology,
    pub shape: PadShape,
    pub pos: (f64, f64),
    /// Effective size after any 90-degree rotation swap.
    pub size: (f64, f64),
    pub rotation: i32,
    /// Drill diameter in mm; only for through-hole pads.
    pub drill: Option<f64>,
}

impl FpPad {
    fn layers(&self) -> &'static str {
        match self.technology {
            PadTechnology::Smd => r#""F.Cu" "F.Paste" "F.Mask""#,
            PadTechnology::ThruHole => r#""*.Cu" "*.Mask""#,
        }
    }
}

#[derive(Debug, Clone)]
pub struct KiFootprint {
    pub name: String,
    pub technology: PadTechnology,
    pub pads: Vec<FpPad>,
    pub thermal_pad: Option<FpPad>,
    /// Half extents of the body outline drawn on silkscreen and fab layers.
    pub body_half: (f64, f64),
    /// Half extents of the courtyard rectangle.
    pub courtyard_half: (f64, f64),
    /// Centre of the pin-1 marker circle on the silkscreen layer.
    pub pin1_marker: (f64, f64),
    pub reference_pos: (f64, f64),
    pub value_pos: (f64, f64),
}

impl KiFootprint {
    /// Generates the full S-expression document for a `.kicad_mod` file.
    pub fn to_kicad_mod_entry(&self) -> String {
        let mut w = SexprWriter::new();

        w.open(&format!("footprint {}", quoted(&self.name)));
        w.line("version 20240108");
        w.line("generator \"pinout2kicad\"");
        w.line("generator_version \"1.0\"");
        w.line("layer \"F.Cu\"");
        let attr = match self.technology {
            PadTechnology::Smd => "smd",
            PadTechnology::ThruHole => "through_hole",
        };
        w.line(&format!("attr {}", attr));

        Self::write_text_property(&mut w, "Reference", "REF**", self.reference_pos, "F.SilkS");
        Self::write_text_property(&mut w, "Value", &self.name, self.value_pos, "F.Fab");

        for pad in &self.pads {
            Self::write_pad(&mut w, pad);
        }
        if let Some(thermal) = &self.thermal_pad {
            Self::write_pad(&mut w, thermal);
        }

        let (bx, by) = self.body_half;
        Self::write_rect_outline(&mut w, bx, by, "F.SilkS", SILK_STROKE);
        Self::write_rect_outline(&mut w, bx, by, "F.Fab", FAB_STROKE);

        self.write_pin1_marker(&mut w);

        let (cx, cy) = self.courtyard_half;
        Self::write_rect_outline(&mut w, cx, cy, "F.CrtYd", COURTYARD_STROKE);

        w.close();
        w.finish()
    }

    fn write_text_property(
        w: &mut SexprWriter,
        key: &str,
        value: &str,
        pos: (f64, f64),
        layer: &str,
    ) {
        w.open(&format!("property {} {}", quoted(key), quoted(value)));
        w.line(&format!("at {} {} 0", mm(pos.0), mm(pos.1)));
        w.line(&format!("layer {}", quoted(layer)));
        w.open("effects");
        w.open("font");
        w.line("size 1 1");
        w.line("thickness 0.15");
        w.close();
        w.close();
        w.close();
    }

    fn write_pad(w: &mut SexprWriter, pad: &FpPad) {
        let technology = match pad.technology {
            PadTechnology::Smd => "smd",
            PadTechnology::ThruHole => "thru_hole",
        };
        w.open(&format!(
            "pad {} {} {}",
            quoted(&pad.number),
            technology,
            pad.shape.keyword()
        ));
        if pad.rotation != 0 {
            w.line(&format!(
                "at {} {} {}",
                mm(pad.pos.0),
                mm(pad.pos.1),
                pad.rotation
            ));
        } else {
            w.line(&format!("at {} {}", mm(pad.pos.0), mm(pad.pos.1)));
        }
        w.line(&format!("size {} {}", mm(pad.size.0), mm(pad.size.1)));
        if let Some(drill) = pad.drill {
            w.line(&format!("drill {}", mm(drill)));
        }
        if pad.shape == PadShape::RoundRect {
            w.line("roundrect_rratio 0.25");
        }
        w.line(&format!("layers {}", pad.layers()));
        w.close();
    }

    fn write_rect_outline(w: &mut SexprWriter, half_x: f64, half_y: f64, layer: &str, stroke: f64) {
        let corners = [
            ((-half_x, -half_y), (half_x, -half_y)),
            ((half_x, -half_y), (half_x, half_y)),
            ((half_x, half_y), (-half_x, half_y)),
            ((-half_x, half_y), (-half_x, -half_y)),
        ];
        for (start, end) in corners {
            w.open("fp_line");
            w.line(&format!("start {} {}", mm(start.0), mm(start.1)));
            w.line(&format!("end {} {}", mm(end.0), mm(end.1)));
            w.open("stroke");
            w.line(&format!("width {}", stroke));
            w.line("type solid");
            w.close();
            w.line(&format!("layer {}", quoted(layer)));
            w.close();
        }
    }

    fn write_pin1_marker(&self, w: &mut SexprWriter) {
        let (x, y) = self.pin1_marker;
        w.open("fp_circle");
        w.line(&format!("center {} {}", mm(x), mm(y)));
        w.line(&format!("end {} {}", mm(x + MARKER_RADIUS), mm(y)));
        w.open("stroke");
        w.line(&format!("width {}", SILK_STROKE));
        w.line("type solid");
        w.close();
        w.line("fill solid");
        w.line("layer \"F.SilkS\"");
        w.close();
    }
}
