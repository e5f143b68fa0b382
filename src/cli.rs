use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use podcast_studio::podcast::{EpisodeDuration, PodcastFormat};

#[derive(Parser)]
#[command(name = "podcast-studio")]
#[command(about = "Generate podcast episodes (script, voices and cover art) with generative AI")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (JSON-LD, JSON or YAML)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory for generated files (overrides the config)
    #[arg(short, long, global = true)]
    pub output_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Suggest content ideas, key aspects and tones for a theme
    Suggest {
        /// Episode theme
        #[arg(long)]
        theme: String,

        /// Podcast format (id or label)
        #[arg(long, value_parser = parse_format)]
        format: Option<PodcastFormat>,
    },

    /// Generate cover art candidates
    CoverArt {
        /// Episode theme
        #[arg(long)]
        theme: String,

        /// Podcast series title
        #[arg(long)]
        series_title: String,
    },

    /// Generate a full episode: script, audio and cover
    Generate(GenerateArgs),

    /// Wrap a base64 PCM payload (16-bit mono 24 kHz) into a WAV file
    Transcode {
        /// File holding the base64 payload
        input: PathBuf,

        /// Destination WAV file
        output: PathBuf,
    },
}

#[derive(Args)]
pub struct GenerateArgs {
    /// Episode theme
    #[arg(long)]
    pub theme: Option<String>,

    /// Podcast series title
    #[arg(long)]
    pub series_title: Option<String>,

    /// Podcast format (id or label)
    #[arg(long, value_parser = parse_format)]
    pub format: Option<PodcastFormat>,

    /// Approximate duration in minutes (2, 5 or 10)
    #[arg(long, value_parser = parse_duration)]
    pub duration: Option<EpisodeDuration>,

    /// Target audience
    #[arg(long)]
    pub audience: Option<String>,

    /// Key aspect to cover (repeatable)
    #[arg(long = "aspect")]
    pub aspects: Vec<String>,

    /// Tone (repeatable)
    #[arg(long = "tone")]
    pub tones: Vec<String>,

    /// Extra idea to weave in (repeatable)
    #[arg(long = "idea")]
    pub ideas: Vec<String>,

    /// Free-form direction for the script writer
    #[arg(long)]
    pub user_idea: Option<String>,

    /// Voice for Joe
    #[arg(long)]
    pub speaker1: Option<String>,

    /// Voice for Jane
    #[arg(long)]
    pub speaker2: Option<String>,

    /// Cover art reference to use as-is
    #[arg(long)]
    pub cover_art_url: Option<String>,

    /// Ask for suggestions first and preselect aspects and tones
    #[arg(long)]
    pub suggest: bool,

    /// Also generate cover art alongside the episode
    #[arg(long)]
    pub with_cover_art: bool,
}

fn parse_format(s: &str) -> Result<PodcastFormat, String> {
    s.parse().map_err(|e: podcast_studio::error::ConfigError| e.to_string())
}

fn parse_duration(s: &str) -> Result<EpisodeDuration, String> {
    s.parse().map_err(|e: podcast_studio::error::ConfigError| e.to_string())
}
