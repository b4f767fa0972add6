use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Component not found: {0}")]
    NotFound(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("No version found for component {name}")]
    NoVersionFound { name: String },

    #[error("Component {name} has an explicit source but no version")]
    SourceWithoutVersion { name: String },

    #[error("Failed to list versions: {0}")]
    Registry(#[from] RegistryError),
}
