//! Candidate version source for "latest" resolution

#[cfg(test)]
use mockall::automock;

use crate::component::types::InstanceContext;
use crate::version::error::RegistryError;

/// Trait for listing the published versions of a component
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait CandidateSource: Send + Sync {
    /// Lists every published version string for a component
    ///
    /// # Arguments
    /// * `component_name` - The name of the component (e.g., "PVDriver")
    /// * `context` - Instance facts selecting the partition, platform and arch
    ///
    /// # Returns
    /// * `Ok(Vec<String>)` - Versions as published, possibly malformed or empty
    /// * `Err(RegistryError)` - If the listing cannot be retrieved
    async fn list_versions(
        &self,
        component_name: &str,
        context: &InstanceContext,
    ) -> Result<Vec<String>, RegistryError>;
}
