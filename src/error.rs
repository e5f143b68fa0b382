use thiserror::Error;

/// Failure reported by a generative backend (text, image or speech).
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("backend rate limited the request: {0}")]
    RateLimited(String),

    #[error("backend returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("malformed backend response: {0}")]
    Malformed(String),

    #[error("{0}")]
    Other(String),
}

/// Errors raised while turning a raw PCM payload into WAV bytes.
#[derive(Debug, Error)]
pub enum TranscodeError {
    #[error("audio payload is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("PCM payload has odd length {0}, expected whole 16-bit samples")]
    OddLength(usize),

    #[error("PCM payload of {0} bytes does not fit in a RIFF container")]
    PayloadTooLarge(usize),

    #[error("invalid WAV header: {0}")]
    InvalidHeader(&'static str),
}

/// Fatal pipeline failures, attributed to the stage that produced them.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("script generation failed: {0}")]
    Script(#[source] BackendError),

    #[error("script response was not a valid {{title, script}} object: {0}")]
    MalformedScript(#[source] serde_json::Error),

    #[error("audio generation failed: {0}")]
    Audio(#[source] BackendError),

    #[error("no audio data produced")]
    NoAudioData,

    #[error("audio transcoding failed: {0}")]
    Transcode(#[from] TranscodeError),
}

/// Caller-side validation of a generation config.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("theme must be at least {min} characters long")]
    ThemeTooShort { min: usize },

    #[error("at least one aspect must be selected")]
    NoAspects,

    #[error("at least one tone must be selected")]
    NoTones,

    #[error("unknown podcast format: {0}")]
    UnknownFormat(String),

    #[error("unknown duration: {0}")]
    UnknownDuration(String),
}
