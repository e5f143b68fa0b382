use tracing::{debug, info, warn};

use super::parse_json_response;
use crate::backend::schema::script_schema;
use crate::backend::{GenerativeBackend, TextRequest};
use crate::error::PipelineError;
use crate::podcast::prompts::script_prompt;
use crate::podcast::{GenerationConfig, ScriptResult};
use crate::utils::starts_with_speaker;

/// Write the episode title and dialogue.
pub async fn generate_script(
    backend: &dyn GenerativeBackend,
    model: &str,
    config: &GenerationConfig,
) -> Result<ScriptResult, PipelineError> {
    let prompt = script_prompt(config);
    debug!("Script prompt:\n{}", prompt);

    let text = backend
        .generate_text(TextRequest {
            model: model.to_string(),
            prompt,
            response_schema: Some(script_schema()),
        })
        .await
        .map_err(PipelineError::Script)?;

    let script: ScriptResult =
        parse_json_response(&text).map_err(PipelineError::MalformedScript)?;

    if !starts_with_speaker(&script.script) {
        warn!("Script for '{}' does not open with a speaker label", script.title);
    }
    info!(
        "Generated script '{}' ({} chars)",
        script.title,
        script.script.len()
    );
    Ok(script)
}
