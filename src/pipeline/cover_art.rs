use tracing::{error, info, warn};

use super::outcome::StageOutcome;
use crate::backend::{GenerativeBackend, ImageRequest};
use crate::podcast::prompts::cover_art_prompt;
use crate::podcast::CoverArtSet;

pub const COVER_ART_COUNT: u32 = 4;

/// Generate square cover candidates; falls back to the placeholder on any failure.
pub async fn generate_cover_art(
    backend: &dyn GenerativeBackend,
    model: &str,
    theme: &str,
    series_title: &str,
    placeholder: &str,
) -> StageOutcome<CoverArtSet> {
    let request = ImageRequest {
        model: model.to_string(),
        prompt: cover_art_prompt(theme, series_title),
        count: COVER_ART_COUNT,
        aspect_ratio: "1:1".to_string(),
        mime_type: "image/jpeg".to_string(),
    };

    match backend.generate_image(request).await {
        Ok(images) if !images.is_empty() => {
            info!("Generated {} cover candidates", images.len());
            let urls = images
                .iter()
                .take(COVER_ART_COUNT as usize)
                .map(|img| img.to_data_url())
                .collect();
            StageOutcome::Complete(CoverArtSet::new(urls))
        }
        Ok(_) => {
            warn!("Image backend returned no images, using {}", placeholder);
            StageOutcome::degraded(
                CoverArtSet::placeholder(placeholder, COVER_ART_COUNT as usize),
                "no images returned",
            )
        }
        Err(e) => {
            error!("Error generating cover art: {}", e);
            warn!("Falling back to local placeholder image '{}'", placeholder);
            StageOutcome::degraded(
                CoverArtSet::placeholder(placeholder, COVER_ART_COUNT as usize),
                e.to_string(),
            )
        }
    }
}
