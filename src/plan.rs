//! Install plan coordination
//!
//! Groups the version resolver, location builder, and package stager that
//! together answer "which version, from where, staged where" for one request.
//! Fetching, extracting, and running the installer happen elsewhere.

use std::path::PathBuf;
use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;
use tracing::info;

use crate::component::error::RequestError;
use crate::component::names::package_file_name;
use crate::component::types::{ComponentAction, ComponentRequest, InstanceContext};
use crate::config::ResolverConfig;
use crate::location::builder::LocationBuilder;
use crate::staging::error::StagingError;
use crate::staging::fs::LocalFileSystem;
use crate::staging::stager::PackageStager;
use crate::version::error::{RegistryError, ResolveError};
use crate::version::installed::InstalledVersionFile;
use crate::version::registries::ManifestRegistry;
use crate::version::resolver::VersionResolver;

#[derive(Debug, Error)]
pub enum PlanError {
    #[error("Invalid request: {0}")]
    Request(#[from] RequestError),

    #[error("Version lookup failed: {0}")]
    VersionLookup(#[from] ResolveError),

    #[error("Staging failed: {0}")]
    Staging(#[from] StagingError),
}

/// Everything the fetch/extract/execute pipeline needs for one request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InstallPlan {
    pub name: String,
    pub action: ComponentAction,
    /// Version the action applies to
    pub version: String,
    /// Installed version before the action, empty when not installed
    pub installed_version: String,
    pub already_installed: bool,
    /// None when the request carries an explicit source
    pub manifest_url: Option<String>,
    pub package_url: String,
    pub staging_path: PathBuf,
    /// A previously staged package exists for this version
    pub package_staged: bool,
}

pub struct Planner {
    resolver: VersionResolver,
    locations: LocationBuilder,
    stager: PackageStager,
}

impl Planner {
    pub fn new(resolver: VersionResolver, locations: LocationBuilder, stager: PackageStager) -> Self {
        Self {
            resolver,
            locations,
            stager,
        }
    }

    /// Build a Planner over the manifest feed and the local filesystem
    pub fn from_config(
        config: &ResolverConfig,
        preferred_prefix: Option<String>,
    ) -> Result<Self, RegistryError> {
        let fs = Arc::new(LocalFileSystem);
        let root = config.staging_root();
        let locations = LocationBuilder::new(&config.component_url);

        let resolver = VersionResolver::new(
            Arc::new(ManifestRegistry::new(locations.clone())?),
            Arc::new(InstalledVersionFile::new(
                fs.clone(),
                config.installed_root(),
            )),
        )
        .with_preferred_prefix(preferred_prefix);

        Ok(Self::new(resolver, locations, PackageStager::new(fs, root)))
    }

    /// Resolve version, locations, and staging folder for a request
    ///
    /// An uninstall without an explicit version targets the installed
    /// version when there is one.
    pub async fn plan(
        &self,
        request: &ComponentRequest,
        context: &InstanceContext,
    ) -> Result<InstallPlan, PlanError> {
        request.validate()?;

        let installed_version = self.resolver.current_installed_version(&request.name);

        let version = match request.action {
            ComponentAction::Uninstall
                if request.version.is_none() && !installed_version.is_empty() =>
            {
                installed_version.clone()
            }
            _ => self.resolver.resolve_target(request, context).await?,
        };

        let (manifest_url, package_url) = match &request.source {
            Some(source) => (None, source.clone()),
            None => {
                let file_name = package_file_name(&request.name, context);
                (
                    Some(self.locations.build_manifest_url(&request.name, context)),
                    self.locations
                        .build_package_url(&request.name, &version, context, &file_name),
                )
            }
        };

        let staging_path = self.stager.create_component_folder(&request.name, &version)?;
        let package_staged = self.stager.has_valid_package(&request.name, &version);

        info!(
            "{} {} {} from {}",
            request.action, request.name, version, package_url
        );

        Ok(InstallPlan {
            name: request.name.clone(),
            action: request.action,
            already_installed: installed_version == version,
            version,
            installed_version,
            manifest_url,
            package_url,
            staging_path,
            package_staged,
        })
    }
}
