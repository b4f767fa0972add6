//! Target version resolution
//!
//! Decides which version a request acts on: the explicit one when given,
//! otherwise the strict latest among the published candidates.

use std::sync::Arc;

use tracing::{debug, info};

use crate::component::types::{ComponentRequest, InstanceContext};
use crate::version::error::ResolveError;
use crate::version::installed::InstalledState;
use crate::version::registry::CandidateSource;
use crate::version::selector::select_latest;

pub struct VersionResolver {
    candidates: Arc<dyn CandidateSource>,
    installed: Arc<dyn InstalledState>,
    preferred_prefix: Option<String>,
}

impl VersionResolver {
    pub fn new(candidates: Arc<dyn CandidateSource>, installed: Arc<dyn InstalledState>) -> Self {
        Self {
            candidates,
            installed,
            preferred_prefix: None,
        }
    }

    /// Restrict "latest" resolution to versions starting with `prefix`
    pub fn with_preferred_prefix(mut self, prefix: Option<String>) -> Self {
        self.preferred_prefix = prefix;
        self
    }

    /// Currently installed version, empty when not installed
    pub fn current_installed_version(&self, component_name: &str) -> String {
        self.installed.current_version(component_name)
    }

    /// Version the request should act on
    ///
    /// An explicit version is returned unchanged without checking that it
    /// exists. An explicit source bypasses the computed locations, so it
    /// requires an explicit version. Otherwise the candidate source is listed
    /// and the strict latest is selected; no conforming candidate yields
    /// `NoVersionFound`.
    pub async fn resolve_target(
        &self,
        request: &ComponentRequest,
        context: &InstanceContext,
    ) -> Result<String, ResolveError> {
        if let Some(version) = &request.version {
            debug!("Using requested version {} of {}", version, request.name);
            return Ok(version.clone());
        }

        if request.source.is_some() {
            return Err(ResolveError::SourceWithoutVersion {
                name: request.name.clone(),
            });
        }

        let candidates = self.candidates.list_versions(&request.name, context).await?;
        let latest = select_latest(&candidates, self.preferred_prefix.as_deref());

        if latest.is_empty() {
            return Err(ResolveError::NoVersionFound {
                name: request.name.clone(),
            });
        }

        info!(
            "Resolved latest {} to {} from {} candidates",
            request.name,
            latest,
            candidates.len()
        );
        Ok(latest)
    }
}
