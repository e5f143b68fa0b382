use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config_manager::backend::BackendConfig;
use crate::config_manager::system::SystemConfig;
use crate::podcast::GenerationConfig;

/// Main configuration for the application (JSON-LD, JSON or YAML)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub system_config: SystemConfig,

    #[serde(default)]
    pub backend_config: BackendConfig,

    /// Defaults for the episode; command-line flags override these.
    #[serde(default)]
    pub podcast_config: GenerationConfig,
}

impl Config {
    /// Load configuration, choosing the parser by file extension
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        use crate::config_manager::utils::{read_jsonld, read_yaml, validate_config};

        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();

        let value = match extension.as_str() {
            "yaml" | "yml" => read_yaml(path)?,
            _ => read_jsonld(path)?,
        };
        validate_config(value)
    }

    /// Paths tried when no explicit config is given, in order.
    pub fn candidate_paths(explicit: Option<&Path>) -> Vec<PathBuf> {
        let exe_dir = std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(Path::to_path_buf));

        let mut paths = Vec::new();
        if let Some(path) = explicit {
            paths.push(path.to_path_buf());
        }
        if let Ok(path) = std::env::var("CONFIG_PATH") {
            paths.push(PathBuf::from(path));
        }
        for name in ["conf.jsonld", "conf.json", "conf.yaml"] {
            paths.push(PathBuf::from(name));
            if let Some(dir) = &exe_dir {
                paths.push(dir.join(name));
            }
        }
        paths
    }

    /// Load the first config that parses.
    ///
    /// An explicitly requested path must load; otherwise the search falls
    /// back to built-in defaults when no file is found.
    pub fn locate(explicit: Option<&Path>) -> anyhow::Result<(Self, Option<PathBuf>)> {
        if let Some(path) = explicit {
            return Ok((Self::load(path)?, Some(path.to_path_buf())));
        }

        for path in Self::candidate_paths(None) {
            if !path.exists() {
                continue;
            }
            match Self::load(&path) {
                Ok(config) => return Ok((config, Some(path))),
                Err(e) => debug!("Failed to load config from {}: {}", path.display(), e),
            }
        }
        Ok((Self::default(), None))
    }
}
