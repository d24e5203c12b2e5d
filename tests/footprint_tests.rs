use pinout2kicad_rs::error::Error;
use pinout2kicad_rs::footprint_layout::layout_footprint;
use pinout2kicad_rs::kicad_models::{FpPad, KiFootprint};
use pinout2kicad_rs::pinout_models::{Package, PackageType, PadTechnology};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn pad<'a>(fp: &'a KiFootprint, number: &str) -> &'a FpPad {
    fp.pads
        .iter()
        .find(|p| p.number == number)
        .unwrap_or_else(|| panic!("pad {} not found", number))
}

fn soic8() -> Package {
    Package::default()
}

fn qfp32() -> Package {
    Package {
        package_type: PackageType::Qfp,
        pin_count: 32,
        pin_pitch: 0.8,
        pad_width: 1.5,
        pad_height: 0.55,
        row_spacing: 8.9,
        body_width: 7.0,
        body_height: 7.0,
        ..Default::default()
    }
}

#[test]
fn test_dual_row_eight_pin_numbering() {
    let fp = layout_footprint("SOIC-8", &soic8()).expect("layout failed");
    assert_eq!(fp.pads.len(), 8);

    // Pins 1-4 run down the left column.
    for i in 1..=4 {
        assert!(pad(&fp, &i.to_string()).pos.0 < 0.0);
    }
    // Pins 5-8 run up the right column.
    for i in 5..=8 {
        assert!(pad(&fp, &i.to_string()).pos.0 > 0.0);
    }

    // Pin 1 topmost on the left, pin 8 topmost on the right (+y is down);
    // pin 5 sits at the bottom, so the columns are not mirror images.
    let p1 = pad(&fp, "1");
    let p4 = pad(&fp, "4");
    let p5 = pad(&fp, "5");
    let p8 = pad(&fp, "8");
    assert!(approx(p1.pos.1, -1.905));
    assert!(approx(p4.pos.1, 1.905));
    assert!(approx(p5.pos.1, 1.905));
    assert!(approx(p8.pos.1, -1.905));
    assert!(approx(p1.pos.1, p8.pos.1));
    assert!(approx(p4.pos.1, p5.pos.1));
}

#[test]
fn test_quad_32_distribution_and_traversal() {
    let fp = layout_footprint("QFP-32", &qfp32()).expect("layout failed");
    assert_eq!(fp.pads.len(), 32);

    let spacing = 8.9 / 2.0;
    // 8 pads per side; numbering walks left, bottom, right, top.
    for i in 1..=8 {
        let p = pad(&fp, &i.to_string());
        assert!(approx(p.pos.0, -spacing), "pin {} not on left side", i);
        assert_eq!(p.rotation, 0);
    }
    for i in 9..=16 {
        let p = pad(&fp, &i.to_string());
        assert!(approx(p.pos.1, spacing), "pin {} not on bottom side", i);
        assert_eq!(p.rotation, 90);
    }
    for i in 17..=24 {
        let p = pad(&fp, &i.to_string());
        assert!(approx(p.pos.0, spacing), "pin {} not on right side", i);
    }
    for i in 25..=32 {
        let p = pad(&fp, &i.to_string());
        assert!(approx(p.pos.1, -spacing), "pin {} not on top side", i);
    }

    // Traversal direction: left top-to-bottom, bottom left-to-right,
    // right bottom-to-top, top right-to-left.
    assert!(pad(&fp, "1").pos.1 < pad(&fp, "8").pos.1);
    assert!(pad(&fp, "9").pos.0 < pad(&fp, "16").pos.0);
    assert!(pad(&fp, "17").pos.1 > pad(&fp, "24").pos.1);
    assert!(pad(&fp, "25").pos.0 > pad(&fp, "32").pos.0);
}

#[test]
fn test_quad_rotated_pads_swap_size() {
    let fp = layout_footprint("QFP-32", &qfp32()).expect("layout failed");

    let left = pad(&fp, "1");
    assert!(approx(left.size.0, 1.5) && approx(left.size.1, 0.55));
    let bottom = pad(&fp, "9");
    assert!(approx(bottom.size.0, 0.55) && approx(bottom.size.1, 1.5));
}

#[test]
fn test_quad_remainder_goes_left_bottom_right() {
    let package = Package {
        package_type: PackageType::Qfn,
        pin_count: 11,
        pin_pitch: 0.5,
        row_spacing: 3.1,
        ..Default::default()
    };
    let fp = layout_footprint("QFN-11", &package).expect("layout failed");
    assert_eq!(fp.pads.len(), 11);

    let left = fp.pads.iter().filter(|p| p.pos.0 < -1.0).count();
    let bottom = fp.pads.iter().filter(|p| p.pos.1 > 1.0).count();
    let right = fp.pads.iter().filter(|p| p.pos.0 > 1.0).count();
    let top = fp.pads.iter().filter(|p| p.pos.1 < -1.0).count();
    assert_eq!((left, bottom, right, top), (3, 3, 3, 2));
}

#[test]
fn test_bga_ten_pin_grid() {
    let package = Package {
        package_type: PackageType::Bga,
        pin_count: 10,
        pin_pitch: 0.8,
        body_width: 4.0,
        body_height: 4.0,
        ..Default::default()
    };
    let fp = layout_footprint("BGA-10", &package).expect("layout failed");

    // ceil(sqrt(10)) = 4 columns, filled row-major, stopping at 10.
    let expected = ["A1", "A2", "A3", "A4", "B1", "B2", "B3", "B4", "C1", "C2"];
    let names: Vec<&str> = fp.pads.iter().map(|p| p.number.as_str()).collect();
    assert_eq!(names, expected);

    // A1 is the top-left corner of the grid.
    let a1 = pad(&fp, "A1");
    assert!(approx(a1.pos.0, -1.2));
    assert!(approx(a1.pos.1, -0.8));
    // Columns share x, rows share y.
    assert!(approx(pad(&fp, "B1").pos.0, a1.pos.0));
    assert!(approx(pad(&fp, "A4").pos.1, a1.pos.1));
}

#[test]
fn test_sot_odd_pin_count() {
    let package = Package {
        package_type: PackageType::Sot,
        pin_count: 3,
        pin_pitch: 0.95,
        pad_width: 0.9,
        pad_height: 0.8,
        row_spacing: 2.3,
        body_width: 1.3,
        body_height: 2.9,
        ..Default::default()
    };
    let fp = layout_footprint("SOT-23", &package).expect("layout failed");
    assert_eq!(fp.pads.len(), 3);

    let p3 = pad(&fp, "3");
    assert_eq!(p3.rotation, 90);
    // The third lead sits below the right column span.
    assert!(p3.pos.0 > 0.0);
    assert!(p3.pos.1 > pad(&fp, "2").pos.1);
    assert!(approx(p3.pos.1, 0.95));
}

#[test]
fn test_unknown_package_type_uses_dual_row() {
    // PackageType::Other is the documented fallback for anything the
    // extractor could not classify.
    let package = Package {
        package_type: PackageType::Other,
        pin_count: 4,
        ..Default::default()
    };
    let fp = layout_footprint("MYSTERY-4", &package).expect("layout failed");
    assert_eq!(fp.pads.len(), 4);
    assert!(pad(&fp, "1").pos.0 < 0.0);
    assert!(pad(&fp, "3").pos.0 > 0.0);
}

#[test]
fn test_thermal_pad_emitted_only_when_enabled_with_positive_dims() {
    let mut package = Package {
        thermal_pad: true,
        thermal_pad_width: 2.0,
        thermal_pad_height: 2.0,
        ..Default::default()
    };
    let fp = layout_footprint("X", &package).expect("layout failed");
    let thermal = fp.thermal_pad.as_ref().expect("thermal pad missing");
    assert!(approx(thermal.pos.0, 0.0) && approx(thermal.pos.1, 0.0));
    assert!(fp.to_kicad_mod_entry().contains("(pad \"\" smd rect"));

    package.thermal_pad_height = 0.0;
    assert!(layout_footprint("X", &package).unwrap().thermal_pad.is_none());

    package.thermal_pad = false;
    package.thermal_pad_height = 2.0;
    assert!(layout_footprint("X", &package).unwrap().thermal_pad.is_none());
}

#[test]
fn test_through_hole_pads_carry_drill() {
    let package = Package {
        package_type: PackageType::Dip,
        pin_count: 8,
        pin_pitch: 2.54,
        pad_width: 1.6,
        pad_height: 1.6,
        row_spacing: 7.62,
        drill_size: 0.8,
        pad_type: PadTechnology::ThruHole,
        ..Default::default()
    };
    let fp = layout_footprint("DIP-8", &package).expect("layout failed");

    assert!(fp.pads.iter().all(|p| p.drill == Some(0.8)));
    let text = fp.to_kicad_mod_entry();
    assert!(text.contains("(drill 0.8000)"));
    assert!(text.contains(r#"(layers "*.Cu" "*.Mask")"#));
    assert!(text.contains("(attr through_hole)"));
}

#[test]
fn test_courtyard_encloses_body_and_pads() {
    for package in [soic8(), qfp32()] {
        let fp = layout_footprint("X", &package).expect("layout failed");
        let (cx, cy) = fp.courtyard_half;

        assert!(cx >= fp.body_half.0 + 0.25 - 1e-9);
        assert!(cy >= fp.body_half.1 + 0.25 - 1e-9);
        for p in &fp.pads {
            assert!(cx >= p.pos.0.abs() + p.size.0 / 2.0 + 0.25 - 1e-9);
            assert!(cy >= p.pos.1.abs() + p.size.1 / 2.0 + 0.25 - 1e-9);
        }
    }
}

#[test]
fn test_pin1_marker_near_first_pad_inside_clamp() {
    let fp = layout_footprint("SOIC-8", &soic8()).expect("layout failed");
    let first = &fp.pads[0];
    let (mx, my) = fp.pin1_marker;

    // Nudged 0.5mm toward the interior on each axis.
    assert!(approx(mx, first.pos.0 + 0.5));
    assert!(approx(my, first.pos.1 + 0.5));
    // Never more than 0.5mm outside the body outline.
    assert!(mx.abs() <= fp.body_half.0 + 0.5 + 1e-9);
    assert!(my.abs() <= fp.body_half.1 + 0.5 + 1e-9);
}

#[test]
fn test_zero_pin_count_is_an_error() {
    let package = Package {
        pin_count: 0,
        ..Default::default()
    };
    let result = layout_footprint("X", &package);
    assert!(matches!(result, Err(Error::InvalidPinCount(0))));
}

#[test]
fn test_footprint_document_shape() {
    let fp = layout_footprint("SOIC-8", &soic8()).expect("layout failed");
    let text = fp.to_kicad_mod_entry();

    assert!(text.starts_with("(footprint \"SOIC-8\"\n"));
    assert!(text.contains("(version 20240108)"));
    assert!(text.contains("(attr smd)"));
    assert!(text.contains("(property \"Reference\" \"REF**\""));
    assert!(text.contains("(property \"Value\" \"SOIC-8\""));
    assert!(text.contains(r#"(layers "F.Cu" "F.Paste" "F.Mask")"#));
    assert!(text.contains(r#"(layer "F.SilkS")"#));
    assert!(text.contains(r#"(layer "F.Fab")"#));
    assert!(text.contains(r#"(layer "F.CrtYd")"#));
    assert!(text.contains("(fp_circle"));
    // Every pad identifier appears exactly once.
    for i in 1..=8 {
        let needle = format!("(pad \"{}\" smd rect", i);
        assert_eq!(text.matches(&needle).count(), 1);
    }
}

#[test]
fn test_output_is_deterministic() {
    let package = qfp32();
    let a = layout_footprint("QFP-32", &package).unwrap().to_kicad_mod_entry();
    let b = layout_footprint("QFP-32", &package).unwrap().to_kicad_mod_entry();
    assert_eq!(a, b);
}
