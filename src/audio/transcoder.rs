use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::blob_store::BlobStore;
use super::wav::{pcm_to_wav, WavHeader, WavSpec};
use crate::error::TranscodeError;

pub const WAV_MIME_TYPE: &str = "audio/wav";

/// A playable WAV stream published in a [`BlobStore`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioArtifact {
    pub url: String,
    pub byte_len: usize,
    pub duration_secs: f64,
}

/// Decode a base64 PCM payload and wrap it in a WAV container.
pub fn base64_pcm_to_wav(payload: &str, spec: WavSpec) -> Result<Vec<u8>, TranscodeError> {
    let pcm = STANDARD.decode(payload.trim())?;
    pcm_to_wav(&pcm, spec)
}

/// Transcode a speech payload and publish it as a blob URL.
pub fn transcode_to_artifact(
    payload: &str,
    spec: WavSpec,
    store: &BlobStore,
) -> Result<AudioArtifact, TranscodeError> {
    let wav = base64_pcm_to_wav(payload, spec)?;
    let header = WavHeader::parse(&wav)?;
    let byte_len = wav.len();

    debug!(
        "Transcoded {} PCM bytes into WAV ({:.2}s)",
        header.data_size,
        header.duration_secs()
    );

    let url = store.create_object_url(wav, WAV_MIME_TYPE);
    Ok(AudioArtifact {
        url,
        byte_len,
        duration_secs: header.duration_secs(),
    })
}
