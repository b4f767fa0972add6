use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StagingError {
    #[error("Failed to create component folder {path:?}: {source}")]
    CreateFolder {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write installed marker {path:?}: {source}")]
    WriteMarker {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to remove installed marker {path:?}: {source}")]
    RemoveMarker {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
