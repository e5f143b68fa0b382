use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::{Context, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use regex::Regex;
use tracing::{debug, info};

use crate::audio::BlobStore;

const FALLBACK_STEM: &str = "podcast";

struct NamePatterns {
    whitespace: Regex,
    forbidden: Regex,
}

fn name_patterns() -> &'static NamePatterns {
    static PATTERNS: OnceLock<NamePatterns> = OnceLock::new();
    PATTERNS.get_or_init(|| NamePatterns {
        whitespace: Regex::new(r"\s+").expect("valid regex"),
        forbidden: Regex::new(r#"[/\\:*?"<>|\x00-\x1f]"#).expect("valid regex"),
    })
}

/// `<title, whitespace runs as underscores>.wav`
///
/// Path separators and characters file systems reject become `_`, and
/// leading dots are dropped, so the name never leaves its directory.
pub fn download_file_name(title: &str) -> String {
    let patterns = name_patterns();
    let spaced = patterns.whitespace.replace_all(title.trim(), "_");
    let cleaned = patterns.forbidden.replace_all(&spaced, "_");
    let stem = cleaned.trim_start_matches('.');
    let stem = if stem.is_empty() { FALLBACK_STEM } else { stem };
    format!("{}.wav", stem)
}

/// Write the bytes behind a blob URL into `dir` under the title-derived name.
pub fn save_artifact(store: &BlobStore, url: &str, title: &str, dir: &Path) -> Result<PathBuf> {
    let blob = store
        .resolve(url)
        .ok_or_else(|| anyhow::anyhow!("Blob URL is not live: {}", url))?;

    fs::create_dir_all(dir)?;
    let path = dir.join(download_file_name(title));
    anyhow::ensure!(
        path.parent() == Some(dir),
        "Refusing to write {} outside {}",
        path.display(),
        dir.display()
    );
    fs::write(&path, &blob.bytes[..])
        .with_context(|| format!("Failed to write {}", path.display()))?;

    info!("Saved {} ({} bytes)", path.display(), blob.bytes.len());
    Ok(path)
}

/// Decode a `data:<mime>;base64,<payload>` URL.
pub fn decode_data_url(url: &str) -> Option<(String, Vec<u8>)> {
    let rest = url.strip_prefix("data:")?;
    let (meta, payload) = rest.split_once(',')?;
    let mime = meta.strip_suffix(";base64")?;
    let bytes = STANDARD.decode(payload).ok()?;
    Some((mime.to_string(), bytes))
}

/// Save a cover image if it carries its own bytes; references are left alone.
pub fn save_cover_image(url: &str, stem: &str, dir: &Path) -> Result<Option<PathBuf>> {
    let Some((mime, bytes)) = decode_data_url(url) else {
        debug!("Cover {} is a reference, nothing to save", url);
        return Ok(None);
    };

    let extension = match mime.as_str() {
        "image/png" => "png",
        "image/webp" => "webp",
        _ => "jpg",
    };
    fs::create_dir_all(dir)?;
    let path = dir.join(format!("{}.{}", stem, extension));
    fs::write(&path, bytes)?;
    Ok(Some(path))
}
