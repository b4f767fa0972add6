//! Common types for component requests

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::component::error::RequestError;

/// Action requested for a component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ComponentAction {
    Install,
    Uninstall,
}

impl ComponentAction {
    /// Returns the string representation of the action
    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentAction::Install => "Install",
            ComponentAction::Uninstall => "Uninstall",
        }
    }
}

impl FromStr for ComponentAction {
    type Err = RequestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Install" => Ok(ComponentAction::Install),
            "Uninstall" => Ok(ComponentAction::Uninstall),
            other => Err(RequestError::InvalidAction(other.to_string())),
        }
    }
}

impl TryFrom<String> for ComponentAction {
    type Error = RequestError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ComponentAction> for String {
    fn from(action: ComponentAction) -> Self {
        action.as_str().to_string()
    }
}

impl fmt::Display for ComponentAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Install or uninstall request for a single component
///
/// Deserializes from the plugin input shape
/// `{"name": ..., "version": ..., "action": ..., "source": ...}`.
/// Empty `version` and `source` strings are treated as unset.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentRequest {
    /// Component name (e.g., "PVDriver")
    pub name: String,
    /// Explicit version, or None to resolve the latest
    #[serde(default, deserialize_with = "empty_as_none")]
    pub version: Option<String>,
    pub action: ComponentAction,
    /// Explicit package URL overriding the computed location
    #[serde(default, deserialize_with = "empty_as_none")]
    pub source: Option<String>,
}

impl ComponentRequest {
    pub fn new(name: &str, action: ComponentAction) -> Self {
        Self {
            name: name.to_string(),
            version: None,
            action,
            source: None,
        }
    }

    pub fn with_version(mut self, version: &str) -> Self {
        self.version = Some(version.to_string()).filter(|v| !v.is_empty());
        self
    }

    pub fn with_source(mut self, source: &str) -> Self {
        self.source = Some(source.to_string()).filter(|s| !s.is_empty());
        self
    }

    /// Reject requests that cannot be resolved at all
    pub fn validate(&self) -> Result<(), RequestError> {
        if self.name.trim().is_empty() {
            return Err(RequestError::MissingName);
        }
        Ok(())
    }
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}

/// Facts about the managed instance, supplied by the caller
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InstanceContext {
    /// Cloud region (e.g., "us-west-2", "cn-north-1")
    pub region: String,
    /// OS family, used verbatim as a URL segment (e.g., "windows")
    pub platform: String,
    pub platform_version: String,
    /// CPU architecture, used verbatim as a URL segment (e.g., "amd64")
    pub arch: String,
    /// Human-facing platform label; not part of any URL
    pub installer_name: String,
    /// Archive extension of the package file (e.g., "zip")
    pub compress_format: String,
}
