// src/lib.rs

pub mod error;
pub mod file_writer;
pub mod footprint_layout;
pub mod geometry;
pub mod importer;
pub mod kicad_models;
pub mod pinout_models;
pub mod sexpr;
pub mod symbol_layout;

use crate::error::Result;
use crate::pinout_models::{Package, Pin};
use std::path::Path;

/// Generates the symbol and footprint for one component and writes both
/// into the KiCad library at `output_dir`.
///
/// The footprint is laid out from `package.pin_count` alone; when that
/// count differs from the symbol's pin list the discrepancy is logged and
/// both artifacts are still generated as given.
pub fn generate_component(
    name: &str,
    pins: &[Pin],
    package: &Package,
    output_dir: &Path,
) -> Result<()> {
    let kicad_lib = file_writer::KicadLibrary {
        path: output_dir.to_path_buf(),
    };
    kicad_lib.setup_directories()?;

    if package.pin_count as usize != pins.len() {
        log::warn!(
            "Package pin count ({}) differs from symbol pin list ({}); generating both as given",
            package.pin_count,
            pins.len()
        );
    }

    // Lay out both artifacts before touching the library, so a failure in
    // either engine leaves nothing half-written.
    let ki_symbol = symbol_layout::layout_symbol(name, pins)?;
    let ki_footprint = footprint_layout::layout_footprint(name, package)?;

    kicad_lib.add_symbol(&ki_symbol)?;
    log::info!("Successfully generated symbol: {}", ki_symbol.name);

    kicad_lib.add_footprint(&ki_footprint)?;
    log::info!("Successfully generated footprint: {}", ki_footprint.name);

    log::info!("Generation complete. Files are located in: {:?}", output_dir);
    Ok(())
}
