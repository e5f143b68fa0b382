use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// System configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemConfig {
    #[serde(default = "default_conf_version")]
    pub conf_version: String,

    /// Where downloads (WAV, script, covers) are written.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// Reference substituted for every cover when image generation fails.
    #[serde(default = "default_placeholder_cover")]
    pub placeholder_cover: String,

    /// `tracing` filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_conf_version() -> String {
    "v1.0.0".to_string()
}

fn default_output_dir() -> String {
    "output".to_string()
}

fn default_placeholder_cover() -> String {
    "/Podcast.avif".to_string()
}

fn default_log_filter() -> String {
    "podcast_studio=info".to_string()
}

impl SystemConfig {
    pub fn output_path(&self) -> PathBuf {
        PathBuf::from(&self.output_dir)
    }
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            conf_version: default_conf_version(),
            output_dir: default_output_dir(),
            placeholder_cover: default_placeholder_cover(),
            log_filter: default_log_filter(),
        }
    }
}
