//! Candidate source test utilities

use std::collections::HashMap;

use async_trait::async_trait;

use component_resolver::component::types::InstanceContext;
use component_resolver::version::error::RegistryError;
use component_resolver::version::registry::CandidateSource;

/// Mock candidate source for testing
#[derive(Default)]
pub struct MockRegistry {
    versions: HashMap<String, Vec<String>>,
}

impl MockRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_versions(mut self, component: &str, versions: Vec<&str>) -> Self {
        self.versions.insert(
            component.to_string(),
            versions.into_iter().map(|v| v.to_string()).collect(),
        );
        self
    }
}

#[async_trait]
impl CandidateSource for MockRegistry {
    async fn list_versions(
        &self,
        component_name: &str,
        _context: &InstanceContext,
    ) -> Result<Vec<String>, RegistryError> {
        match self.versions.get(component_name) {
            Some(versions) => Ok(versions.clone()),
            None => Err(RegistryError::NotFound(component_name.to_string())),
        }
    }
}

/// Windows/amd64 instance context in `region`
pub fn test_context(region: &str) -> InstanceContext {
    InstanceContext {
        region: region.to_string(),
        platform: "windows".to_string(),
        platform_version: "2015.9".to_string(),
        arch: "amd64".to_string(),
        installer_name: "Windows".to_string(),
        compress_format: "zip".to_string(),
    }
}
