pub mod format;
pub mod prompts;
pub mod types;
pub mod voices;

pub use format::{EpisodeDuration, PodcastFormat, CO_HOST, HOST};
pub use types::{
    validate_theme, CoverArtSet, GenerationConfig, PodcastResult, ScriptResult, Suggestions,
    MIN_THEME_LEN,
};
pub use voices::{find_voice, Voice, VOICES};
