use serde::{Deserialize, Serialize};

/// Model identifiers for each generation stage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelConfig {
    #[serde(default = "default_script_model")]
    pub script_model: String,

    #[serde(default = "default_suggestion_model")]
    pub suggestion_model: String,

    #[serde(default = "default_image_model")]
    pub image_model: String,

    #[serde(default = "default_speech_model")]
    pub speech_model: String,
}

fn default_script_model() -> String {
    "gemini-2.5-pro".to_string()
}

fn default_suggestion_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_image_model() -> String {
    "imagen-4.0-generate-001".to_string()
}

fn default_speech_model() -> String {
    "gemini-2.5-flash-preview-tts".to_string()
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            script_model: default_script_model(),
            suggestion_model: default_suggestion_model(),
            image_model: default_image_model(),
            speech_model: default_speech_model(),
        }
    }
}

/// Configuration for the generative backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    #[serde(default = "default_provider")]
    pub provider: String,

    #[serde(default)]
    pub api_key: String,

    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(flatten)]
    pub models: ModelConfig,
}

fn default_provider() -> String {
    "gemini".to_string()
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            api_key: String::new(),
            base_url: default_base_url(),
            models: ModelConfig::default(),
        }
    }
}
