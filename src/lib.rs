//! Podcast generation over a generative AI backend.
//!
//! A [`pipeline::PodcastGenerator`] turns a [`podcast::GenerationConfig`]
//! into a title, a dialogue script, a WAV recording published in a
//! [`audio::BlobStore`], and a cover image reference.

pub mod audio;
pub mod backend;
pub mod config_manager;
pub mod error;
pub mod pipeline;
pub mod podcast;
pub mod utils;

pub use error::{BackendError, ConfigError, PipelineError, TranscodeError};
