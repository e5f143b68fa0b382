use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{debug, error, info};

use super::interface::{
    GeneratedImage, GenerativeBackend, ImageRequest, SpeechRequest, TextRequest,
};
use super::types::{GenerateContentResponse, SpeechResponse};
use crate::error::BackendError;

/// Gemini / Imagen REST client
#[derive(Debug, Clone)]
pub struct GeminiBackend {
    client: Client,
    base_url: String,
    api_key: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PredictResponse {
    #[serde(default)]
    predictions: Vec<Prediction>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Prediction {
    bytes_base64_encoded: Option<String>,
    mime_type: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
}

impl GeminiBackend {
    pub fn new(base_url: String, api_key: String) -> Self {
        info!("Initialized GeminiBackend: base_url={}", base_url);
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }

    fn model_url(&self, model: &str, method: &str) -> String {
        format!("{}/v1beta/models/{}:{}", self.base_url, model, method)
    }

    async fn post(&self, url: &str, body: &Value) -> Result<reqwest::Response, BackendError> {
        debug!("POST {}", url);
        let response = self
            .client
            .post(url)
            .header("x-goog-api-key", &self.api_key)
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let text = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ApiErrorBody>(&text)
            .map(|body| body.error.message)
            .unwrap_or(text);
        error!("Backend request to {} failed: {} {}", url, status, message);

        if status == StatusCode::TOO_MANY_REQUESTS {
            Err(BackendError::RateLimited(message))
        } else {
            Err(BackendError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }

    async fn generate_content(
        &self,
        model: &str,
        body: &Value,
    ) -> Result<GenerateContentResponse, BackendError> {
        let url = self.model_url(model, "generateContent");
        let response = self.post(&url, body).await?;
        Ok(response.json::<GenerateContentResponse>().await?)
    }
}

pub fn text_request_body(request: &TextRequest) -> Value {
    let mut body = json!({
        "contents": [{ "parts": [{ "text": request.prompt }] }]
    });
    if let Some(schema) = &request.response_schema {
        body["generationConfig"] = json!({
            "responseMimeType": "application/json",
            "responseSchema": schema
        });
    }
    body
}

pub fn image_request_body(request: &ImageRequest) -> Value {
    json!({
        "instances": [{ "prompt": request.prompt }],
        "parameters": {
            "sampleCount": request.count,
            "aspectRatio": request.aspect_ratio,
            "outputOptions": { "mimeType": request.mime_type }
        }
    })
}

pub fn speech_request_body(request: &SpeechRequest) -> Value {
    let speaker_voice_configs: Vec<Value> = request
        .speakers
        .iter()
        .map(|s| {
            json!({
                "speaker": s.speaker,
                "voiceConfig": { "prebuiltVoiceConfig": { "voiceName": s.voice_name } }
            })
        })
        .collect();

    json!({
        "contents": [{ "parts": [{ "text": request.text }] }],
        "generationConfig": {
            "responseModalities": ["AUDIO"],
            "speechConfig": {
                "multiSpeakerVoiceConfig": { "speakerVoiceConfigs": speaker_voice_configs }
            }
        }
    })
}

#[async_trait]
impl GenerativeBackend for GeminiBackend {
    async fn generate_text(&self, request: TextRequest) -> Result<String, BackendError> {
        let response = self
            .generate_content(&request.model, &text_request_body(&request))
            .await?;
        response
            .text()
            .ok_or_else(|| BackendError::Malformed("response contained no text".to_string()))
    }

    async fn generate_image(
        &self,
        request: ImageRequest,
    ) -> Result<Vec<GeneratedImage>, BackendError> {
        let url = self.model_url(&request.model, "predict");
        let response = self.post(&url, &image_request_body(&request)).await?;
        let predict: PredictResponse = response.json().await?;

        let images: Vec<GeneratedImage> = predict
            .predictions
            .into_iter()
            .filter_map(|p| {
                p.bytes_base64_encoded.map(|data| GeneratedImage {
                    mime_type: p.mime_type.unwrap_or_else(|| request.mime_type.clone()),
                    data,
                })
            })
            .collect();

        if images.is_empty() {
            return Err(BackendError::Malformed(
                "image response contained no images".to_string(),
            ));
        }
        debug!("Received {} generated images", images.len());
        Ok(images)
    }

    async fn generate_speech(
        &self,
        request: SpeechRequest,
    ) -> Result<SpeechResponse, BackendError> {
        self.generate_content(&request.model, &speech_request_body(&request))
            .await
    }
}
