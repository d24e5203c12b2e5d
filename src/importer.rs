// src/importer.rs

use crate::error::Result;
use crate::pinout_models::{Package, Pin, assign_missing_positions};
use serde::Deserialize;

/// The JSON document produced by the extraction/review front end. Enum
/// fields tolerate unknown strings (they normalize to documented fallbacks)
/// and the whole package block may be missing.
#[derive(Debug, Deserialize)]
pub struct ComponentDoc {
    #[serde(rename = "component_name", default = "default_component_name")]
    pub name: String,
    #[serde(default)]
    pub pins: Vec<Pin>,
    #[serde(default)]
    pub package: Package,
}

fn default_component_name() -> String {
    "Unknown_IC".to_string()
}

/// Parses a component document and assigns any unset pin positions from
/// list order, so the descriptors reach the layout engines ready to use.
pub fn import_component_doc(json: &str) -> Result<ComponentDoc> {
    let mut doc: ComponentDoc = serde_json::from_str(json)?;
    assign_missing_positions(&mut doc.pins);
    Ok(doc)
}
