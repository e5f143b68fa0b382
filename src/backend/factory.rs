use std::sync::Arc;

use anyhow::Result;
use tracing::{info, warn};

use super::gemini::GeminiBackend;
use super::interface::GenerativeBackend;
use crate::config_manager::BackendConfig;

/// Factory for creating generative backends
pub struct BackendFactory;

impl BackendFactory {
    /// Create a backend based on configuration
    ///
    /// # Arguments
    /// * `config` - Backend section of the application config
    pub fn create_backend(config: &BackendConfig) -> Result<Arc<dyn GenerativeBackend>> {
        info!("Initializing generative backend: {}", config.provider);

        match config.provider.as_str() {
            "gemini" | "google" => {
                if config.api_key.is_empty() || config.api_key.starts_with("${") {
                    warn!("No API key configured for the gemini backend; requests will be rejected");
                }
                Ok(Arc::new(GeminiBackend::new(
                    config.base_url.clone(),
                    config.api_key.clone(),
                )))
            }
            other => Err(anyhow::anyhow!("Unsupported backend provider: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_provider_rejected() {
        let config = BackendConfig {
            provider: "carrier-pigeon".to_string(),
            ..BackendConfig::default()
        };
        let err = BackendFactory::create_backend(&config).err().unwrap();
        assert!(err.to_string().contains("carrier-pigeon"));
    }

    #[test]
    fn test_gemini_provider() {
        assert!(BackendFactory::create_backend(&BackendConfig::default()).is_ok());
    }
}
