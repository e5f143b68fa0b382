use serde::{Deserialize, Serialize};

/// Response body of a content generation call.
///
/// Speech audio lives at `candidates[0].content.parts[0].inlineData.data`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

/// The speech stage consumes the raw response shape.
pub type SpeechResponse = GenerateContentResponse;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Content {
    #[serde(default)]
    pub parts: Vec<Part>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inline_data: Option<InlineData>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    #[serde(default)]
    pub mime_type: String,
    pub data: String,
}

impl GenerateContentResponse {
    /// A response carrying a single inline payload.
    pub fn with_inline_data(mime_type: &str, data: impl Into<String>) -> Self {
        Self {
            candidates: vec![Candidate {
                content: Some(Content {
                    parts: vec![Part {
                        text: None,
                        inline_data: Some(InlineData {
                            mime_type: mime_type.to_string(),
                            data: data.into(),
                        }),
                    }],
                    role: None,
                }),
                finish_reason: None,
            }],
        }
    }

    fn first_part(&self) -> Option<&Part> {
        self.candidates.first()?.content.as_ref()?.parts.first()
    }

    /// Inline payload of the first part of the first candidate.
    pub fn inline_data(&self) -> Option<&InlineData> {
        self.first_part()?
            .inline_data
            .as_ref()
            .filter(|inline| !inline.data.is_empty())
    }

    /// Concatenated text parts of the first candidate.
    pub fn text(&self) -> Option<String> {
        let parts = &self.candidates.first()?.content.as_ref()?.parts;
        let text: String = parts.iter().filter_map(|p| p.text.as_deref()).collect();
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inline_audio_path() {
        let body = r#"{
            "candidates": [{
                "content": {
                    "role": "model",
                    "parts": [{"inlineData": {"mimeType": "audio/L16;codec=pcm;rate=24000", "data": "AAAA"}}]
                },
                "finishReason": "STOP"
            }]
        }"#;
        let response: GenerateContentResponse = serde_json::from_str(body).unwrap();
        let inline = response.inline_data().unwrap();
        assert_eq!(inline.data, "AAAA");
        assert!(inline.mime_type.starts_with("audio/L16"));
    }

    #[test]
    fn test_missing_inline_audio() {
        let empty: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert!(empty.inline_data().is_none());

        let text_only: GenerateContentResponse = serde_json::from_str(
            r#"{"candidates": [{"content": {"parts": [{"text": "hola"}]}}]}"#,
        )
        .unwrap();
        assert!(text_only.inline_data().is_none());
        assert_eq!(text_only.text().as_deref(), Some("hola"));

        let no_content: GenerateContentResponse =
            serde_json::from_str(r#"{"candidates": [{"finishReason": "SAFETY"}]}"#).unwrap();
        assert!(no_content.inline_data().is_none());
        assert!(no_content.text().is_none());
    }

    #[test]
    fn test_text_joins_parts() {
        let response: GenerateContentResponse = serde_json::from_str(
            r#"{"candidates": [{"content": {"parts": [{"text": "{\"title\":"}, {"text": "\"x\"}"}]}}]}"#,
        )
        .unwrap();
        assert_eq!(response.text().as_deref(), Some("{\"title\":\"x\"}"));
    }
}
