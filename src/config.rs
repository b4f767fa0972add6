use serde::Deserialize;
use std::path::{Path, PathBuf};

// =============================================================================
// Distribution endpoints
// =============================================================================

/// Placeholder substituted with the instance region in endpoint templates
pub const REGION_HOLDER: &str = "{Region}";

/// Standard partition component endpoint template
pub const COMPONENT_URL: &str = "https://s3.{Region}.amazonaws.com/amazon-ssm-{Region}/Components";

/// Region prefix identifying the restricted (China) partition
pub const RESTRICTED_REGION_PREFIX: &str = "cn-";

// =============================================================================
// Local staging layout
// =============================================================================

/// Root segment under which component packages are staged
pub const COMPONENTS_DIR: &str = "components";

/// Root holding one file per component with its installed version
pub const INSTALLED_DIR: &str = "installed";

// =============================================================================
// Time-related constants
// =============================================================================

/// Timeout for candidate version lookups in milliseconds (30 seconds)
pub const FETCH_TIMEOUT_MS: u64 = 30_000;

/// Resolver configuration structure
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ResolverConfig {
    /// Standard partition endpoint template, must contain `{Region}`
    pub component_url: String,
    /// Directory holding the `components` staging and `installed` state roots
    pub staging_dir: Option<PathBuf>,
    pub fetch_timeout_ms: u64,
    pub log: LogConfig,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            component_url: COMPONENT_URL.to_string(),
            staging_dir: None,
            fetch_timeout_ms: FETCH_TIMEOUT_MS,
            log: LogConfig::default(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct LogConfig {
    /// Emit JSON lines instead of the plain text format
    pub json: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl ResolverConfig {
    /// Load configuration from a JSON file. Missing fields take their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Returns the `components` staging root for this configuration.
    pub fn staging_root(&self) -> PathBuf {
        self.base_dir().join(COMPONENTS_DIR)
    }

    /// Returns the installed-state root, a sibling of the staging root.
    pub fn installed_root(&self) -> PathBuf {
        self.base_dir().join(INSTALLED_DIR)
    }

    fn base_dir(&self) -> PathBuf {
        self.staging_dir.clone().unwrap_or_else(data_dir)
    }
}

/// Returns the path to the data directory for component-resolver.
/// Uses $XDG_DATA_HOME/component-resolver if XDG_DATA_HOME is set,
/// otherwise falls back to ~/.local/share/component-resolver,
/// or ./component-resolver if neither is available.
pub fn data_dir() -> PathBuf {
    data_dir_with_env(std::env::var("XDG_DATA_HOME").ok(), dirs::home_dir())
}

/// Returns the path to the log file.
pub fn log_path() -> PathBuf {
    data_dir().join("component-resolver.log")
}

fn data_dir_with_env(xdg_data_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    let data_dir = xdg_data_home
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".local/share")))
        .unwrap_or_else(|| PathBuf::from("."));

    data_dir.join("component-resolver")
}
