use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::types::SpeechResponse;
use crate::error::BackendError;

/// Text generation request, optionally constrained to a JSON schema
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextRequest {
    pub model: String,
    pub prompt: String,
    /// When set, the backend must answer with JSON matching this schema.
    pub response_schema: Option<serde_json::Value>,
}

/// Image generation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageRequest {
    pub model: String,
    pub prompt: String,
    pub count: u32,
    pub aspect_ratio: String,
    pub mime_type: String,
}

/// Binding of a speaker label in the script to a prebuilt voice
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeakerVoice {
    pub speaker: String,
    pub voice_name: String,
}

/// Multi-speaker speech synthesis request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeechRequest {
    pub model: String,
    pub text: String,
    pub speakers: Vec<SpeakerVoice>,
}

/// One generated image, base64 encoded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedImage {
    pub mime_type: String,
    pub data: String,
}

impl GeneratedImage {
    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.data)
    }
}

/// Capabilities the pipeline needs from a generative AI provider.
///
/// Implementations only transport requests; prompt composition and failure
/// policy live in the pipeline.
#[async_trait]
pub trait GenerativeBackend: Send + Sync {
    /// Generate text for a prompt. With a response schema the text is JSON.
    async fn generate_text(&self, request: TextRequest) -> Result<String, BackendError>;

    /// Generate `request.count` images for a prompt.
    async fn generate_image(
        &self,
        request: ImageRequest,
    ) -> Result<Vec<GeneratedImage>, BackendError>;

    /// Synthesize speech. The audio, if any, sits inline in the response.
    async fn generate_speech(&self, request: SpeechRequest)
        -> Result<SpeechResponse, BackendError>;
}
