//! Installed-state query

use std::io;
use std::path::PathBuf;
use std::sync::Arc;

#[cfg(test)]
use mockall::automock;
use tracing::{debug, info};

use crate::staging::error::StagingError;
use crate::staging::fs::FileSystem;

/// Trait for querying which version of a component is installed
#[cfg_attr(test, automock)]
pub trait InstalledState: Send + Sync {
    /// Currently installed version, or an empty string when not installed
    fn current_version(&self, component_name: &str) -> String;
}

/// Installed state kept as one file per component at `<root>/<name>`
///
/// `root` must not be the staging root, so version folders never collide
/// with state files.
pub struct InstalledVersionFile {
    fs: Arc<dyn FileSystem>,
    root: PathBuf,
}

impl InstalledVersionFile {
    pub fn new(fs: Arc<dyn FileSystem>, root: PathBuf) -> Self {
        Self { fs, root }
    }

    fn marker_path(&self, component_name: &str) -> PathBuf {
        self.root.join(component_name)
    }

    /// Record `version` as the installed version of a component
    pub fn record_installed(&self, component_name: &str, version: &str) -> Result<(), StagingError> {
        self.fs
            .create_dir_all(&self.root)
            .map_err(|source| StagingError::CreateFolder {
                path: self.root.clone(),
                source,
            })?;

        let path = self.marker_path(component_name);
        self.fs
            .write(&path, version)
            .map_err(|source| StagingError::WriteMarker {
                path: path.clone(),
                source,
            })?;

        info!("Recorded {} {} as installed", component_name, version);
        Ok(())
    }

    /// Forget the installed version of a component; a missing marker is fine
    pub fn clear_installed(&self, component_name: &str) -> Result<(), StagingError> {
        let path = self.marker_path(component_name);
        match self.fs.remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StagingError::RemoveMarker { path, source }),
        }
    }
}

impl InstalledState for InstalledVersionFile {
    fn current_version(&self, component_name: &str) -> String {
        let path = self.marker_path(component_name);
        match self.fs.read_to_string(&path) {
            Ok(content) => content.trim().to_string(),
            Err(e) => {
                debug!("No installed version for {} ({:?}): {}", component_name, path, e);
                String::new()
            }
        }
    }
}
