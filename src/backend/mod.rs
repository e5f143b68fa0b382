pub mod factory;
pub mod gemini;
pub mod interface;
pub mod schema;
pub mod types;

pub use factory::BackendFactory;
pub use gemini::GeminiBackend;
pub use interface::{
    GeneratedImage, GenerativeBackend, ImageRequest, SpeakerVoice, SpeechRequest, TextRequest,
};
pub use types::{GenerateContentResponse, InlineData, SpeechResponse};
