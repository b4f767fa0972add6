//! Canonical artifact file names

use crate::component::types::InstanceContext;

/// Manifest file name for a component, e.g. "PVDriver.json"
pub fn manifest_file_name(component_name: &str) -> String {
    format!("{}.json", component_name)
}

/// Package archive file name for a component, e.g. "PVDriver.zip"
pub fn package_file_name(component_name: &str, context: &InstanceContext) -> String {
    format!("{}.{}", component_name, context.compress_format)
}
