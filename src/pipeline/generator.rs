use std::sync::Arc;

use tracing::{info, warn};

use super::audio::generate_audio;
use super::cover_art::generate_cover_art;
use super::outcome::StageOutcome;
use super::script::generate_script;
use super::suggestions::generate_suggestions;
use crate::audio::{AudioArtifact, BlobStore};
use crate::backend::GenerativeBackend;
use crate::config_manager::ModelConfig;
use crate::error::PipelineError;
use crate::podcast::{
    CoverArtSet, GenerationConfig, PodcastFormat, PodcastResult, ScriptResult, Suggestions,
};
use crate::utils::placeholder_cover_url;

pub const DEFAULT_PLACEHOLDER_COVER: &str = "/Podcast.avif";

/// Episode produced together with its cover candidates.
#[derive(Debug, Clone)]
pub struct GeneratedEpisode {
    pub podcast: PodcastResult,
    pub audio: AudioArtifact,
    pub cover_art: StageOutcome<CoverArtSet>,
}

/// Drives the generation stages against one backend.
///
/// Script and audio failures are returned as [`PipelineError`]; the
/// suggestion and cover-art stages always succeed, possibly degraded.
#[derive(Clone)]
pub struct PodcastGenerator {
    backend: Arc<dyn GenerativeBackend>,
    store: Arc<BlobStore>,
    models: ModelConfig,
    placeholder_cover: String,
}

impl PodcastGenerator {
    pub fn new(
        backend: Arc<dyn GenerativeBackend>,
        store: Arc<BlobStore>,
        models: ModelConfig,
    ) -> Self {
        Self {
            backend,
            store,
            models,
            placeholder_cover: DEFAULT_PLACEHOLDER_COVER.to_string(),
        }
    }

    pub fn with_placeholder_cover(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder_cover = placeholder.into();
        self
    }

    pub fn store(&self) -> &Arc<BlobStore> {
        &self.store
    }

    pub async fn suggest(&self, theme: &str, format: PodcastFormat) -> StageOutcome<Suggestions> {
        generate_suggestions(
            self.backend.as_ref(),
            &self.models.suggestion_model,
            theme,
            format,
        )
        .await
    }

    pub async fn write_script(
        &self,
        config: &GenerationConfig,
    ) -> Result<ScriptResult, PipelineError> {
        generate_script(self.backend.as_ref(), &self.models.script_model, config).await
    }

    pub async fn synthesize(
        &self,
        script: &str,
        config: &GenerationConfig,
    ) -> Result<AudioArtifact, PipelineError> {
        generate_audio(
            self.backend.as_ref(),
            &self.models.speech_model,
            script,
            config,
            &self.store,
        )
        .await
    }

    pub async fn cover_art(&self, theme: &str, series_title: &str) -> StageOutcome<CoverArtSet> {
        generate_cover_art(
            self.backend.as_ref(),
            &self.models.image_model,
            theme,
            series_title,
            &self.placeholder_cover,
        )
        .await
    }

    async fn script_and_audio(
        &self,
        config: &GenerationConfig,
    ) -> Result<(ScriptResult, AudioArtifact), PipelineError> {
        info!("Generating script for '{}'", config.theme);
        let script = self.write_script(config).await?;

        info!("Generating audio for '{}'", script.title);
        let audio = self.synthesize(&script.script, config).await?;
        Ok((script, audio))
    }

    /// Script, then audio, then assembly with the chosen or placeholder cover.
    pub async fn generate(&self, config: &GenerationConfig) -> Result<PodcastResult, PipelineError> {
        let (script, audio) = self.script_and_audio(config).await?;
        Ok(assemble(script, &audio, None, config))
    }

    /// Like [`generate`](Self::generate), with cover art requested alongside.
    ///
    /// The cover request runs concurrently with script and audio. When the
    /// config has no chosen cover, the first candidate is used. Without a
    /// series title no cover is requested and the text placeholder is used.
    pub async fn generate_with_cover_art(
        &self,
        config: &GenerationConfig,
    ) -> Result<GeneratedEpisode, PipelineError> {
        let (main, cover_art) = if config.series_title.trim().is_empty() {
            warn!("No series title for '{}', skipping cover art", config.theme);
            let skipped = StageOutcome::degraded(CoverArtSet::new(Vec::new()), "no series title");
            (self.script_and_audio(config).await, skipped)
        } else {
            futures::join!(
                self.script_and_audio(config),
                self.cover_art(&config.theme, &config.series_title)
            )
        };
        let (script, audio) = main?;

        let podcast = assemble(script, &audio, cover_art.value().first(), config);
        Ok(GeneratedEpisode {
            podcast,
            audio,
            cover_art,
        })
    }
}

/// Combine stage outputs into the final result.
///
/// Cover precedence: the config's chosen cover, then `generated`, then a
/// text placeholder derived from the series title or theme.
pub fn assemble(
    script: ScriptResult,
    audio: &AudioArtifact,
    generated: Option<&str>,
    config: &GenerationConfig,
) -> PodcastResult {
    let cover_art_url = config
        .chosen_cover_art()
        .or(generated)
        .map(str::to_string)
        .unwrap_or_else(|| placeholder_cover_url(config));

    PodcastResult {
        title: script.title,
        script: script.script,
        audio_url: audio.url.clone(),
        cover_art_url,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn artifact() -> AudioArtifact {
        AudioArtifact {
            url: "blob:podcast-studio/test".to_string(),
            byte_len: 44,
            duration_secs: 0.0,
        }
    }

    fn script() -> ScriptResult {
        ScriptResult {
            title: "Episodio".to_string(),
            script: "Joe: Hola.".to_string(),
        }
    }

    #[test]
    fn test_assemble_prefers_chosen_cover() {
        let mut config = GenerationConfig::new("AI ethics");
        config.cover_art_url = Some("data:image/jpeg;base64,AAAA".to_string());
        let result = assemble(script(), &artifact(), Some("/Podcast.avif"), &config);
        assert_eq!(result.cover_art_url, "data:image/jpeg;base64,AAAA");
        assert_eq!(result.audio_url, "blob:podcast-studio/test");
    }

    #[test]
    fn test_assemble_uses_generated_then_placeholder() {
        let config = GenerationConfig::new("AI ethics");
        let with_generated = assemble(script(), &artifact(), Some("/Podcast.avif"), &config);
        assert_eq!(with_generated.cover_art_url, "/Podcast.avif");

        let without = assemble(script(), &artifact(), None, &config);
        assert_eq!(
            without.cover_art_url,
            "https://via.placeholder.com/512/8B5CF6/FFFFFF?text=AI%20ethics"
        );
    }
}
