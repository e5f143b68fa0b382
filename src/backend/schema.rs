//! Structured-output schemas requested from the text backend.

use serde_json::{json, Value};

use crate::podcast::prompts::{ASPECT_COUNT, SUGGESTION_COUNT, TONE_COUNT};

/// `{title: string, script: string}`
pub fn script_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "title": { "type": "STRING" },
            "script": { "type": "STRING" }
        },
        "required": ["title", "script"]
    })
}

/// `{suggestions: string[], aspects: string[], tones: string[]}`
pub fn suggestions_schema() -> Value {
    let string_array = |description: String| {
        json!({
            "type": "ARRAY",
            "items": { "type": "STRING" },
            "description": description
        })
    };

    json!({
        "type": "OBJECT",
        "properties": {
            "suggestions": string_array(format!("{} ideas de contenido breves y atractivas.", SUGGESTION_COUNT)),
            "aspects": string_array(format!("{} aspectos clave únicos y relevantes.", ASPECT_COUNT)),
            "tones": string_array(format!("{} tonos específicos para el tema.", TONE_COUNT))
        },
        "required": ["suggestions", "aspects", "tones"]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_schema_requires_both_fields() {
        let schema = script_schema();
        assert_eq!(schema["required"], json!(["title", "script"]));
        assert_eq!(schema["properties"]["script"]["type"], "STRING");
    }

    #[test]
    fn test_suggestions_schema_arrays() {
        let schema = suggestions_schema();
        for key in ["suggestions", "aspects", "tones"] {
            assert_eq!(schema["properties"][key]["type"], "ARRAY");
            assert_eq!(schema["properties"][key]["items"]["type"], "STRING");
        }
        assert!(schema["properties"]["suggestions"]["description"]
            .as_str()
            .unwrap()
            .starts_with("12 "));
    }
}
