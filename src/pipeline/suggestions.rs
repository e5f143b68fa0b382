use tracing::{error, info};

use super::outcome::StageOutcome;
use super::parse_json_response;
use crate::backend::schema::suggestions_schema;
use crate::backend::{GenerativeBackend, TextRequest};
use crate::podcast::prompts::suggestions_prompt;
use crate::podcast::{PodcastFormat, Suggestions};

/// Ask for content ideas, aspects and tones for a theme.
///
/// Any failure yields three empty lists instead of an error.
pub async fn generate_suggestions(
    backend: &dyn GenerativeBackend,
    model: &str,
    theme: &str,
    format: PodcastFormat,
) -> StageOutcome<Suggestions> {
    let request = TextRequest {
        model: model.to_string(),
        prompt: suggestions_prompt(theme, format),
        response_schema: Some(suggestions_schema()),
    };

    let text = match backend.generate_text(request).await {
        Ok(text) => text,
        Err(e) => {
            error!("Error generating suggestions: {}", e);
            return StageOutcome::degraded(Suggestions::default(), e.to_string());
        }
    };

    match parse_json_response::<Suggestions>(&text) {
        Ok(suggestions) => {
            info!(
                "Received {} suggestions, {} aspects, {} tones",
                suggestions.suggestions.len(),
                suggestions.aspects.len(),
                suggestions.tones.len()
            );
            StageOutcome::Complete(suggestions)
        }
        Err(e) => {
            error!("Suggestion response was not valid JSON: {}", e);
            StageOutcome::degraded(Suggestions::default(), e.to_string())
        }
    }
}
