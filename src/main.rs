mod cli;

use std::fs;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands, GenerateArgs};
use podcast_studio::audio::{base64_pcm_to_wav, BlobStore, WavHeader, WavSpec};
use podcast_studio::backend::BackendFactory;
use podcast_studio::config_manager::Config;
use podcast_studio::pipeline::{PodcastGenerator, StageOutcome};
use podcast_studio::podcast::{validate_theme, GenerationConfig, PodcastFormat, Suggestions};
use podcast_studio::utils::{count_turns, save_artifact, save_cover_image};

const FAILURE_NOTICE: &str =
    "Hubo un error al generar el podcast. Por favor, inténtalo de nuevo.";

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let (config, loaded_from) = Config::locate(cli.config.as_deref())?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.system_config.log_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match &loaded_from {
        Some(path) => info!("Loaded configuration from: {}", path.display()),
        None => info!("No configuration file found, using defaults"),
    }

    let output_dir = cli
        .output_dir
        .clone()
        .unwrap_or_else(|| config.system_config.output_path());

    match cli.command {
        Commands::Transcode { input, output } => transcode(&input, &output),
        Commands::Suggest { theme, format } => {
            let generator = build_generator(&config)?;
            let format = format.unwrap_or(config.podcast_config.podcast_format);
            suggest(&generator, &theme, format).await
        }
        Commands::CoverArt {
            theme,
            series_title,
        } => {
            let generator = build_generator(&config)?;
            cover_art(&generator, &theme, &series_title, &output_dir).await
        }
        Commands::Generate(args) => {
            let generator = build_generator(&config)?;
            let podcast_config = apply_overrides(config.podcast_config.clone(), &args);
            generate(&generator, podcast_config, &args, &output_dir).await
        }
    }
}

fn build_generator(config: &Config) -> Result<PodcastGenerator> {
    let backend = BackendFactory::create_backend(&config.backend_config)?;
    let store = Arc::new(BlobStore::new());
    Ok(PodcastGenerator::new(
        backend,
        store,
        config.backend_config.models.clone(),
    )
    .with_placeholder_cover(config.system_config.placeholder_cover.clone()))
}

fn apply_overrides(mut config: GenerationConfig, args: &GenerateArgs) -> GenerationConfig {
    if let Some(theme) = &args.theme {
        config.theme = theme.clone();
    }
    if let Some(title) = &args.series_title {
        config.series_title = title.clone();
    }
    if let Some(format) = args.format {
        config.podcast_format = format;
    }
    if let Some(duration) = args.duration {
        config.duration = duration;
    }
    if let Some(audience) = &args.audience {
        config.audience = audience.clone();
    }
    if !args.aspects.is_empty() {
        config.aspects = args.aspects.clone();
    }
    if !args.tones.is_empty() {
        config.tones = args.tones.clone();
    }
    if !args.ideas.is_empty() {
        config.ai_suggestions = args.ideas.clone();
    }
    if args.user_idea.is_some() {
        config.user_idea = args.user_idea.clone();
    }
    if let Some(voice) = &args.speaker1 {
        config.speaker1 = voice.clone();
    }
    if let Some(voice) = &args.speaker2 {
        config.speaker2 = voice.clone();
    }
    if args.cover_art_url.is_some() {
        config.cover_art_url = args.cover_art_url.clone();
    }
    config
}

fn print_suggestions(suggestions: &Suggestions) {
    println!("Ideas:");
    for idea in &suggestions.suggestions {
        println!("  - {}", idea);
    }
    println!("Aspectos clave: {}", suggestions.aspects.join(", "));
    println!("Tonos: {}", suggestions.tones.join(", "));
}

async fn suggest(generator: &PodcastGenerator, theme: &str, format: PodcastFormat) -> Result<()> {
    validate_theme(theme)?;
    let outcome = generator.suggest(theme, format).await;
    if let Some(reason) = outcome.reason() {
        warn!("Suggestions unavailable: {}", reason);
    }
    print_suggestions(outcome.value());
    Ok(())
}

async fn cover_art(
    generator: &PodcastGenerator,
    theme: &str,
    series_title: &str,
    output_dir: &Path,
) -> Result<()> {
    let outcome = generator.cover_art(theme, series_title).await;
    if outcome.is_degraded() {
        println!("No se pudo generar la carátula; se usa la imagen de reserva.");
    }
    for (i, url) in outcome.value().images.iter().enumerate() {
        match save_cover_image(url, &format!("cover_{}", i + 1), output_dir)? {
            Some(path) => println!("{}", path.display()),
            None => println!("{}", url),
        }
    }
    Ok(())
}

async fn generate(
    generator: &PodcastGenerator,
    mut config: GenerationConfig,
    args: &GenerateArgs,
    output_dir: &Path,
) -> Result<()> {
    if args.suggest || config.aspects.is_empty() || config.tones.is_empty() {
        validate_theme(&config.theme)?;
        let outcome = generator.suggest(&config.theme, config.podcast_format).await;
        let suggestions = outcome.into_value();
        let (aspects, tones) = (config.aspects.clone(), config.tones.clone());
        config.apply_suggestions(&suggestions);
        // explicit selections win over suggested ones
        if !aspects.is_empty() {
            config.aspects = aspects;
        }
        if !tones.is_empty() {
            config.tones = tones;
        }
    }
    config.validate()?;

    let result = if args.with_cover_art {
        generator
            .generate_with_cover_art(&config)
            .await
            .map(|episode| (episode.podcast, Some(episode.cover_art)))
    } else {
        generator.generate(&config).await.map(|podcast| (podcast, None))
    };

    let (podcast, covers) = match result {
        Ok(done) => done,
        Err(e) => {
            eprintln!("{}", FAILURE_NOTICE);
            return Err(e.into());
        }
    };

    let store = generator.store();
    let wav_path = save_artifact(store, &podcast.audio_url, &podcast.title, output_dir)?;
    let script_path = wav_path.with_extension("txt");
    fs::write(&script_path, &podcast.script)?;

    if let Some(StageOutcome::Complete(set)) = &covers {
        for (i, url) in set.images.iter().enumerate() {
            save_cover_image(url, &format!("cover_{}", i + 1), output_dir)?;
        }
    }
    let cover = save_cover_image(&podcast.cover_art_url, "cover", output_dir)?
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| podcast.cover_art_url.clone());

    let wav = fs::read(&wav_path)?;
    let header = WavHeader::parse(&wav)?;

    println!("{}", podcast.title);
    println!("  audio:  {} ({:.1}s)", wav_path.display(), header.duration_secs());
    println!("  script: {}", script_path.display());
    println!("  cover:  {}", cover);
    for speaker in config.podcast_format.speakers() {
        println!("  {} turns: {}", speaker, count_turns(&podcast.script, speaker));
    }

    store.revoke_object_url(&podcast.audio_url);
    Ok(())
}

fn transcode(input: &Path, output: &Path) -> Result<()> {
    let payload = fs::read_to_string(input)
        .with_context(|| format!("Failed to read {}", input.display()))?;
    let wav = base64_pcm_to_wav(&payload, WavSpec::SPEECH)?;
    fs::write(output, &wav).with_context(|| format!("Failed to write {}", output.display()))?;

    let header = WavHeader::parse(&wav)?;
    println!(
        "{}: {} bytes, {:.2}s",
        output.display(),
        wav.len(),
        header.duration_secs()
    );
    Ok(())
}
