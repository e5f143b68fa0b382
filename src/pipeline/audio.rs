use tracing::info;

use crate::audio::{transcode_to_artifact, AudioArtifact, BlobStore, WavSpec};
use crate::backend::{GenerativeBackend, SpeakerVoice, SpeechRequest};
use crate::error::PipelineError;
use crate::podcast::{GenerationConfig, CO_HOST, HOST};

/// Voice mapping for the two fixed speaker roles.
pub fn speaker_voices(config: &GenerationConfig) -> Vec<SpeakerVoice> {
    vec![
        SpeakerVoice {
            speaker: HOST.to_string(),
            voice_name: config.speaker1.clone(),
        },
        SpeakerVoice {
            speaker: CO_HOST.to_string(),
            voice_name: config.speaker2.clone(),
        },
    ]
}

/// Synthesize the script and publish it as a WAV blob.
pub async fn generate_audio(
    backend: &dyn GenerativeBackend,
    model: &str,
    script: &str,
    config: &GenerationConfig,
    store: &BlobStore,
) -> Result<AudioArtifact, PipelineError> {
    let response = backend
        .generate_speech(SpeechRequest {
            model: model.to_string(),
            text: script.to_string(),
            speakers: speaker_voices(config),
        })
        .await
        .map_err(PipelineError::Audio)?;

    let inline = response.inline_data().ok_or(PipelineError::NoAudioData)?;
    let artifact = transcode_to_artifact(&inline.data, WavSpec::SPEECH, store)?;

    info!(
        "Generated audio {} ({:.1}s)",
        artifact.url, artifact.duration_secs
    );
    Ok(artifact)
}
