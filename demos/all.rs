use pinout2kicad_rs::pinout_models::{
    ElectricalType, Package, PackageType, PadTechnology, Pin, PinSide,
};
use pinout2kicad_rs::{generate_component, importer};
use std::path::Path;
use std::time::Instant;

fn pin(number: &str, name: &str, side: PinSide, etype: ElectricalType, position: u32) -> Pin {
    Pin {
        number: number.to_string(),
        name: name.to_string(),
        side,
        electrical_type: etype,
        position,
    }
}

fn main() {
    env_logger::init();

    let start_time = Instant::now();

    // A classic: the 555 timer in DIP-8.
    let pins = vec![
        pin("1", "GND", PinSide::Left, ElectricalType::PowerIn, 1),
        pin("2", "TRIG", PinSide::Left, ElectricalType::Input, 2),
        pin("3", "OUT", PinSide::Left, ElectricalType::Output, 3),
        pin("4", "RESET", PinSide::Left, ElectricalType::Input, 4),
        pin("5", "CTRL", PinSide::Right, ElectricalType::Input, 4),
        pin("6", "THRES", PinSide::Right, ElectricalType::Input, 3),
        pin("7", "DISCH", PinSide::Right, ElectricalType::OpenCollector, 2),
        pin("8", "VCC", PinSide::Right, ElectricalType::PowerIn, 1),
    ];
    let package = Package {
        package_type: PackageType::Dip,
        pin_count: 8,
        pin_pitch: 2.54,
        pad_width: 1.6,
        pad_height: 1.6,
        row_spacing: 7.62,
        body_width: 6.4,
        body_height: 9.8,
        drill_size: 0.8,
        pad_type: PadTechnology::ThruHole,
        ..Default::default()
    };

    match generate_component("NE555", &pins, &package, Path::new("example_lib")) {
        Ok(()) => println!("Generated NE555 symbol and footprint."),
        Err(e) => eprintln!("Error generating NE555: {}", e),
    }

    // The same pipeline, but fed from the JSON document a review front end
    // would hand over.
    let doc_json = r#"{
        "component_name": "LM358",
        "pins": [
            {"number": "1", "name": "OUT1", "side": "left", "type": "output"},
            {"number": "2", "name": "IN1-", "side": "left", "type": "input"},
            {"number": "3", "name": "IN1+", "side": "left", "type": "input"},
            {"number": "4", "name": "GND", "side": "left", "type": "power_in"},
            {"number": "5", "name": "IN2+", "side": "right", "type": "input", "position": 4},
            {"number": "6", "name": "IN2-", "side": "right", "type": "input", "position": 3},
            {"number": "7", "name": "OUT2", "side": "right", "type": "output", "position": 2},
            {"number": "8", "name": "VCC", "side": "right", "type": "power_in", "position": 1}
        ],
        "package": {
            "package_type": "SOIC",
            "pin_count": 8
        }
    }"#;

    match importer::import_component_doc(doc_json) {
        Ok(doc) => {
            match generate_component(&doc.name, &doc.pins, &doc.package, Path::new("example_lib")) {
                Ok(()) => println!("Generated {} symbol and footprint.", doc.name),
                Err(e) => eprintln!("Error generating {}: {}", doc.name, e),
            }
        }
        Err(e) => eprintln!("Error parsing component document: {}", e),
    }

    println!("Done in {:?}", start_time.elapsed());
}
