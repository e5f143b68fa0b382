use serde::{Deserialize, Serialize};
use tracing::warn;

use super::format::{EpisodeDuration, PodcastFormat};
use super::voices::{is_known_voice, DEFAULT_SPEAKER1, DEFAULT_SPEAKER2};
use crate::error::ConfigError;

/// Themes shorter than this are too vague to ask for suggestions.
pub const MIN_THEME_LEN: usize = 5;

/// Everything the script, audio and cover-art stages need for one episode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    #[serde(default)]
    pub theme: String,
    #[serde(default)]
    pub series_title: String,
    #[serde(default = "default_speaker1")]
    pub speaker1: String,
    #[serde(default = "default_speaker2")]
    pub speaker2: String,
    #[serde(default)]
    pub duration: EpisodeDuration,
    #[serde(default)]
    pub aspects: Vec<String>,
    #[serde(default)]
    pub tones: Vec<String>,
    #[serde(default = "default_audience")]
    pub audience: String,
    #[serde(default)]
    pub ai_suggestions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_art_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_idea: Option<String>,
    #[serde(default)]
    pub podcast_format: PodcastFormat,
}

fn default_speaker1() -> String {
    DEFAULT_SPEAKER1.to_string()
}

fn default_speaker2() -> String {
    DEFAULT_SPEAKER2.to_string()
}

fn default_audience() -> String {
    "Público general".to_string()
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            theme: String::new(),
            series_title: String::new(),
            speaker1: default_speaker1(),
            speaker2: default_speaker2(),
            duration: EpisodeDuration::default(),
            aspects: Vec::new(),
            tones: Vec::new(),
            audience: default_audience(),
            ai_suggestions: Vec::new(),
            cover_art_url: None,
            user_idea: None,
            podcast_format: PodcastFormat::default(),
        }
    }
}

impl GenerationConfig {
    pub fn new(theme: impl Into<String>) -> Self {
        Self {
            theme: theme.into(),
            ..Self::default()
        }
    }

    /// Seed the config from a suggestion round.
    ///
    /// The series title falls back to the theme and the first two aspects
    /// and tones are preselected. Suggested ideas are offered, not chosen.
    pub fn apply_suggestions(&mut self, suggestions: &Suggestions) {
        if self.series_title.trim().is_empty() {
            self.series_title = self.theme.clone();
        }
        self.aspects = suggestions.aspects.iter().take(2).cloned().collect();
        self.tones = suggestions.tones.iter().take(2).cloned().collect();
    }

    /// The user idea, if one was given with non-blank text.
    pub fn user_idea(&self) -> Option<&str> {
        self.user_idea
            .as_deref()
            .map(str::trim)
            .filter(|idea| !idea.is_empty())
    }

    /// The chosen cover, if one was given with non-blank text.
    pub fn chosen_cover_art(&self) -> Option<&str> {
        self.cover_art_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    /// Check what the script stage expects from its caller.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_theme(&self.theme)?;
        if self.aspects.is_empty() {
            return Err(ConfigError::NoAspects);
        }
        if self.tones.is_empty() {
            return Err(ConfigError::NoTones);
        }
        for voice in [&self.speaker1, &self.speaker2] {
            if !is_known_voice(voice) {
                warn!("Voice '{}' is not in the catalog, passing it through", voice);
            }
        }
        Ok(())
    }
}

pub fn validate_theme(theme: &str) -> Result<(), ConfigError> {
    if theme.trim().chars().count() < MIN_THEME_LEN {
        return Err(ConfigError::ThemeTooShort { min: MIN_THEME_LEN });
    }
    Ok(())
}

/// Title and dialogue returned by the script stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptResult {
    pub title: String,
    pub script: String,
}

/// Ideas returned by the suggestion stage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestions {
    pub suggestions: Vec<String>,
    pub aspects: Vec<String>,
    pub tones: Vec<String>,
}

impl Suggestions {
    pub fn is_empty(&self) -> bool {
        self.suggestions.is_empty() && self.aspects.is_empty() && self.tones.is_empty()
    }
}

/// Candidate cover images, in the order the backend returned them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverArtSet {
    pub images: Vec<String>,
}

impl CoverArtSet {
    pub fn new(images: Vec<String>) -> Self {
        Self { images }
    }

    /// `count` copies of the same placeholder reference.
    pub fn placeholder(reference: &str, count: usize) -> Self {
        Self {
            images: vec![reference.to_string(); count],
        }
    }

    pub fn first(&self) -> Option<&str> {
        self.select(0)
    }

    pub fn select(&self, index: usize) -> Option<&str> {
        self.images.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

/// A finished episode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PodcastResult {
    pub title: String,
    pub script: String,
    pub audio_url: String,
    pub cover_art_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn suggestions() -> Suggestions {
        Suggestions {
            suggestions: vec!["Entrevistar a un pionero".to_string()],
            aspects: vec!["Ética".into(), "Innovación".into(), "Historia".into()],
            tones: vec!["Optimista".into(), "Nostálgico".into(), "Crítico".into()],
        }
    }

    #[test]
    fn test_apply_suggestions_seeds_config() {
        let mut config = GenerationConfig::new("El futuro de la IA");
        config.apply_suggestions(&suggestions());

        assert_eq!(config.series_title, "El futuro de la IA");
        assert_eq!(config.aspects, vec!["Ética", "Innovación"]);
        assert_eq!(config.tones, vec!["Optimista", "Nostálgico"]);
        assert!(config.ai_suggestions.is_empty());
    }

    #[test]
    fn test_apply_suggestions_keeps_series_title() {
        let mut config = GenerationConfig::new("El futuro de la IA");
        config.series_title = "Mentes Digitales".to_string();
        config.apply_suggestions(&suggestions());
        assert_eq!(config.series_title, "Mentes Digitales");
    }

    #[test]
    fn test_validate() {
        let mut config = GenerationConfig::new("IA");
        assert_eq!(
            config.validate(),
            Err(ConfigError::ThemeTooShort { min: MIN_THEME_LEN })
        );

        config.theme = "AI ethics".to_string();
        assert_eq!(config.validate(), Err(ConfigError::NoAspects));

        config.aspects.push("Debate Ético".to_string());
        assert_eq!(config.validate(), Err(ConfigError::NoTones));

        config.tones.push("Optimista".to_string());
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_blank_optional_fields_are_ignored() {
        let mut config = GenerationConfig::new("AI ethics");
        config.user_idea = Some("   ".to_string());
        config.cover_art_url = Some(String::new());
        assert_eq!(config.user_idea(), None);
        assert_eq!(config.chosen_cover_art(), None);
    }

    #[test]
    fn test_config_deserializes_with_defaults() {
        let config: GenerationConfig = serde_json::from_str(
            r#"{"theme": "AI ethics", "podcastFormat": "Monólogo Narrativo (Joe)"}"#,
        )
        .unwrap();

        assert_eq!(config.podcast_format, PodcastFormat::Monologue);
        assert_eq!(config.speaker1, "Kore");
        assert_eq!(config.speaker2, "Puck");
        assert_eq!(config.duration, EpisodeDuration::FiveMinutes);
        assert_eq!(config.audience, "Público general");
    }

    #[test]
    fn test_cover_art_placeholder() {
        let set = CoverArtSet::placeholder("/Podcast.avif", 4);
        assert_eq!(set.len(), 4);
        assert!(set.images.iter().all(|img| img == "/Podcast.avif"));
        assert_eq!(set.select(3), Some("/Podcast.avif"));
        assert_eq!(set.select(4), None);
    }
}
