//! Manifest feed candidate source
//!
//! Fetches `<Name>.json` from the component's platform/arch folder and reads
//! its `versions` array.

use serde::Deserialize;
use tracing::{debug, warn};

use crate::component::types::InstanceContext;
use crate::location::builder::LocationBuilder;
use crate::version::error::RegistryError;
use crate::version::registry::CandidateSource;

/// Manifest document published next to a component's versions
#[derive(Debug, Deserialize)]
struct ComponentManifest {
    #[serde(default)]
    versions: Vec<String>,
}

/// Candidate source backed by the component manifest feed
pub struct ManifestRegistry {
    client: reqwest::Client,
    locations: LocationBuilder,
}

impl ManifestRegistry {
    /// Creates a ManifestRegistry resolving manifest URLs with `locations`
    pub fn new(locations: LocationBuilder) -> Result<Self, RegistryError> {
        let client = reqwest::Client::builder()
            .user_agent("component-resolver")
            .build()?;

        Ok(Self { client, locations })
    }
}

#[async_trait::async_trait]
impl CandidateSource for ManifestRegistry {
    async fn list_versions(
        &self,
        component_name: &str,
        context: &InstanceContext,
    ) -> Result<Vec<String>, RegistryError> {
        let url = self.locations.build_manifest_url(component_name, context);
        debug!("Fetching manifest for {} from {}", component_name, url);

        let response = self.client.get(&url).send().await?;

        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(RegistryError::NotFound(component_name.to_string()));
        }

        if !status.is_success() {
            warn!("Manifest feed returned status {}: {}", status, url);
            return Err(RegistryError::InvalidResponse(format!(
                "Unexpected status: {}",
                status
            )));
        }

        let manifest: ComponentManifest = response.json().await.map_err(|e| {
            warn!("Failed to parse manifest for {}: {}", component_name, e);
            RegistryError::InvalidResponse(e.to_string())
        })?;

        Ok(manifest.versions)
    }
}
