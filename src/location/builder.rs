//! Manifest and package URL construction

use tracing::debug;

use crate::component::names::manifest_file_name;
use crate::component::types::InstanceContext;
use crate::config::COMPONENT_URL;
use crate::location::partition::Partition;

/// Builds download locations for component artifacts
///
/// Locations have the shape
/// `<base>/<name>/<platform>/<arch>/[<version>/]<file>` where `<base>` depends
/// on the partition of the instance region. Segments are used verbatim.
#[derive(Debug, Clone)]
pub struct LocationBuilder {
    component_url: String,
}

impl LocationBuilder {
    /// Creates a LocationBuilder with a custom standard partition template
    pub fn new(component_url: &str) -> Self {
        Self {
            component_url: component_url.to_string(),
        }
    }

    /// Location of the component's version manifest
    pub fn build_manifest_url(&self, component_name: &str, context: &InstanceContext) -> String {
        format!(
            "{}/{}/{}/{}/{}",
            self.base(context),
            component_name,
            context.platform,
            context.arch,
            manifest_file_name(component_name)
        )
    }

    /// Location of a package artifact for one component version
    pub fn build_package_url(
        &self,
        component_name: &str,
        version: &str,
        context: &InstanceContext,
        file_name: &str,
    ) -> String {
        format!(
            "{}/{}/{}/{}/{}/{}",
            self.base(context),
            component_name,
            context.platform,
            context.arch,
            version,
            file_name
        )
    }

    fn base(&self, context: &InstanceContext) -> String {
        let partition = Partition::for_region(&context.region);
        debug!("Region {} maps to partition {:?}", context.region, partition);
        partition.components_base(&context.region, &self.component_url)
    }
}

impl Default for LocationBuilder {
    fn default() -> Self {
        Self::new(COMPONENT_URL)
    }
}
