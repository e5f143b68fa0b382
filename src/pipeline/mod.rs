pub mod audio;
pub mod cover_art;
pub mod generator;
pub mod outcome;
pub mod script;
pub mod suggestions;

pub use audio::{generate_audio, speaker_voices};
pub use cover_art::{generate_cover_art, COVER_ART_COUNT};
pub use generator::{assemble, GeneratedEpisode, PodcastGenerator, DEFAULT_PLACEHOLDER_COVER};
pub use outcome::StageOutcome;
pub use script::generate_script;
pub use suggestions::generate_suggestions;

use serde::de::DeserializeOwned;

/// Parse a structured-output response, tolerating a Markdown code fence.
pub(crate) fn parse_json_response<T: DeserializeOwned>(text: &str) -> Result<T, serde_json::Error> {
    let trimmed = text.trim();
    let body = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .and_then(|rest| rest.strip_suffix("```"))
        .unwrap_or(trimmed);
    serde_json::from_str(body.trim())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::podcast::ScriptResult;

    #[test]
    fn test_parse_plain_and_fenced_json() {
        let plain: ScriptResult =
            parse_json_response(r#"{"title": "T", "script": "Joe: Hola."}"#).unwrap();
        assert_eq!(plain.title, "T");

        let fenced: ScriptResult =
            parse_json_response("```json\n{\"title\": \"T\", \"script\": \"Joe: Hola.\"}\n```")
                .unwrap();
        assert_eq!(fenced, plain);
    }

    #[test]
    fn test_missing_field_is_an_error() {
        assert!(parse_json_response::<ScriptResult>(r#"{"title": "T"}"#).is_err());
        assert!(parse_json_response::<ScriptResult>("no json here").is_err());
    }
}
