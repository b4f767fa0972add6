//! Per-version staging folders

use std::path::PathBuf;
use std::sync::Arc;

use tracing::{debug, info};

use crate::staging::error::StagingError;
use crate::staging::fs::FileSystem;

/// Creates and inspects `<root>/<name>/<version>` staging folders
///
/// `root` is the `components` staging directory. Nothing is cleaned up on
/// failure; a partially created tree stays as it is.
pub struct PackageStager {
    fs: Arc<dyn FileSystem>,
    root: PathBuf,
}

impl PackageStager {
    pub fn new(fs: Arc<dyn FileSystem>, root: PathBuf) -> Self {
        Self { fs, root }
    }

    /// Staging path for a component version, without touching the filesystem
    pub fn component_folder(&self, component_name: &str, version: &str) -> PathBuf {
        self.root.join(component_name).join(version)
    }

    /// Ensure the staging folder for a component version exists and return it
    pub fn create_component_folder(
        &self,
        component_name: &str,
        version: &str,
    ) -> Result<PathBuf, StagingError> {
        let path = self.component_folder(component_name, version);

        self.fs
            .create_dir_all(&path)
            .map_err(|source| StagingError::CreateFolder {
                path: path.clone(),
                source,
            })?;

        info!("Component folder ready at {:?}", path);
        Ok(path)
    }

    /// Whether a previously staged package for this exact version is present
    ///
    /// The folder must exist and contain at least one entry. Unreadable
    /// folders count as invalid.
    pub fn has_valid_package(&self, component_name: &str, version: &str) -> bool {
        let path = self.component_folder(component_name, version);

        if !self.fs.is_dir(&path) {
            return false;
        }

        match self.fs.read_dir_names(&path) {
            Ok(entries) => !entries.is_empty(),
            Err(e) => {
                debug!("Cannot read staged package {:?}: {}", path, e);
                false
            }
        }
    }
}
