//! Scaffold configuration: TOML file, defaults and environment overrides

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use crate::generation::{DEFAULT_ACTIVITY_TIMEOUT_SECS, Namespace};

/// File picked up from the working directory when `--config` is absent
pub const DEFAULT_CONFIG_FILE: &str = "temporal-scaffold.toml";

pub const ENV_NAMESPACE: &str = "TEMPORAL_SCAFFOLD_NAMESPACE";
pub const ENV_SOURCE_DIR: &str = "TEMPORAL_SCAFFOLD_SOURCE_DIR";
pub const ENV_PRESET_DIR: &str = "TEMPORAL_SCAFFOLD_PRESET_DIR";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config {}: {detail}", path.display())]
    Parse { path: PathBuf, detail: String },
}

/// Source of environment overrides, injectable for tests
pub trait ConfigEnv {
    fn var(&self, key: &str) -> Option<String>;
}

/// Reads overrides from the process environment
pub struct ProcessEnv;

impl ConfigEnv for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok().filter(|value| !value.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScaffoldConfig {
    /// Base namespace; each workflow gets its own child namespace
    pub namespace: String,
    /// Namespace mapped onto `source_dir` (PSR-4 prefix)
    pub namespace_root: String,
    pub source_dir: PathBuf,
    pub preset_dir: PathBuf,
    /// Schedule-to-close timeout of generated activities, in seconds
    pub activity_timeout: u64,
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        Self {
            namespace: "App\\Workflow".to_string(),
            namespace_root: "App".to_string(),
            source_dir: PathBuf::from("app/src"),
            preset_dir: PathBuf::from(".temporal-scaffold/presets"),
            activity_timeout: DEFAULT_ACTIVITY_TIMEOUT_SECS,
        }
    }
}

impl ScaffoldConfig {
    /// Resolution order: `explicit` file, then `temporal-scaffold.toml` in
    /// `working_dir`, then defaults. Environment overrides apply last.
    pub fn load(
        explicit: Option<&Path>,
        working_dir: &Path,
        env: &dyn ConfigEnv,
    ) -> Result<Self, ConfigError> {
        let config = match explicit {
            Some(path) => Self::from_file(path)?,
            None => {
                let candidate = working_dir.join(DEFAULT_CONFIG_FILE);
                if candidate.is_file() {
                    Self::from_file(&candidate)?
                } else {
                    debug!("No config file found, using defaults");
                    Self::default()
                }
            }
        };
        Ok(config.with_env(env))
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(path, &content)?;
        debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    fn from_toml(path: &Path, content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            detail: e.to_string(),
        })
    }

    #[must_use]
    pub fn with_env(mut self, env: &dyn ConfigEnv) -> Self {
        if let Some(namespace) = env.var(ENV_NAMESPACE) {
            self.namespace = namespace;
        }
        if let Some(dir) = env.var(ENV_SOURCE_DIR) {
            self.source_dir = PathBuf::from(dir);
        }
        if let Some(dir) = env.var(ENV_PRESET_DIR) {
            self.preset_dir = PathBuf::from(dir);
        }
        self
    }

    pub fn base_namespace(&self) -> Namespace {
        Namespace::parse(&self.namespace)
    }

    /// Directory holding the classes of `namespace`: `source_dir` plus the
    /// namespace directories below `namespace_root`
    pub fn output_root_for(&self, namespace: &Namespace) -> PathBuf {
        let root = Namespace::parse(&self.namespace_root);
        self.source_dir.join(namespace.relative_dir(&root))
    }
}
