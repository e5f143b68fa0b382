pub mod blob_store;
pub mod transcoder;
pub mod wav;

pub use blob_store::{Blob, BlobStore};
pub use transcoder::{base64_pcm_to_wav, transcode_to_artifact, AudioArtifact, WAV_MIME_TYPE};
pub use wav::{pcm_to_wav, WavHeader, WavSpec, WAV_HEADER_LEN};
