#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use podcast_studio::backend::{
    GeneratedImage, GenerativeBackend, ImageRequest, SpeechRequest, SpeechResponse, TextRequest,
};
use podcast_studio::BackendError;

/// In-memory backend with canned replies and call accounting.
pub struct FakeBackend {
    pub script_reply: Result<String, String>,
    pub suggestion_reply: Result<String, String>,
    pub image_reply: Result<Vec<GeneratedImage>, String>,
    pub speech_reply: Result<SpeechResponse, String>,
    pub text_calls: AtomicUsize,
    pub image_calls: AtomicUsize,
    pub speech_calls: AtomicUsize,
    pub speech_requests: Mutex<Vec<SpeechRequest>>,
}

pub const SCRIPT_JSON: &str =
    r#"{"title": "La Ética de la IA", "script": "Joe: Bienvenidos.\nJane: Gracias, Joe.\nJoe: Empecemos."}"#;

pub const MONOLOGUE_JSON: &str =
    r#"{"title": "Orígenes", "script": "Joe: Hoy os cuento una historia.\nJoe: Y termina aquí."}"#;

pub const SUGGESTIONS_JSON: &str = r#"{
    "suggestions": ["Sesgos en los datos", "Privacidad"],
    "aspects": ["Historia", "Regulación", "Impacto social", "Futuro"],
    "tones": ["Informativo", "Crítico", "Optimista", "Cercano"]
}"#;

pub fn pcm_payload(len: usize) -> String {
    STANDARD.encode(vec![0u8; len])
}

pub fn image(tag: &str) -> GeneratedImage {
    GeneratedImage {
        mime_type: "image/jpeg".to_string(),
        data: STANDARD.encode(tag.as_bytes()),
    }
}

impl Default for FakeBackend {
    fn default() -> Self {
        Self {
            script_reply: Ok(SCRIPT_JSON.to_string()),
            suggestion_reply: Ok(SUGGESTIONS_JSON.to_string()),
            image_reply: Ok(vec![image("a"), image("b"), image("c"), image("d")]),
            speech_reply: Ok(SpeechResponse::with_inline_data(
                "audio/L16;codec=pcm;rate=24000",
                pcm_payload(4_800),
            )),
            text_calls: AtomicUsize::new(0),
            image_calls: AtomicUsize::new(0),
            speech_calls: AtomicUsize::new(0),
            speech_requests: Mutex::new(Vec::new()),
        }
    }
}

impl FakeBackend {
    pub fn calls(counter: &AtomicUsize) -> usize {
        counter.load(Ordering::SeqCst)
    }
}

fn asks_for_script(request: &TextRequest) -> bool {
    request
        .response_schema
        .as_ref()
        .and_then(|schema| schema.get("properties"))
        .map(|props| props.get("script").is_some())
        .unwrap_or(false)
}

#[async_trait]
impl GenerativeBackend for FakeBackend {
    async fn generate_text(&self, request: TextRequest) -> Result<String, BackendError> {
        self.text_calls.fetch_add(1, Ordering::SeqCst);
        let reply = if asks_for_script(&request) {
            &self.script_reply
        } else {
            &self.suggestion_reply
        };
        reply.clone().map_err(BackendError::Other)
    }

    async fn generate_image(
        &self,
        _request: ImageRequest,
    ) -> Result<Vec<GeneratedImage>, BackendError> {
        self.image_calls.fetch_add(1, Ordering::SeqCst);
        self.image_reply.clone().map_err(BackendError::Other)
    }

    async fn generate_speech(
        &self,
        request: SpeechRequest,
    ) -> Result<SpeechResponse, BackendError> {
        self.speech_calls.fetch_add(1, Ordering::SeqCst);
        self.speech_requests.lock().unwrap().push(request);
        self.speech_reply.clone().map_err(BackendError::Other)
    }
}
