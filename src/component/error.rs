use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    #[error("Component name is required")]
    MissingName,

    #[error("Invalid action: {0} (expected Install or Uninstall)")]
    InvalidAction(String),
}
