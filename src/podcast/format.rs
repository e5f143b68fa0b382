use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Speaker label of the first host. Bound to `speaker1`'s voice.
pub const HOST: &str = "Joe";
/// Speaker label of the second host. Bound to `speaker2`'s voice.
pub const CO_HOST: &str = "Jane";

/// Episode structure requested from the script writer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PodcastFormat {
    #[default]
    #[serde(rename = "Conversación Dinámica", alias = "dynamic-conversation")]
    DynamicConversation,
    #[serde(rename = "Entrevista (Jane entrevista a Joe)", alias = "interview")]
    Interview,
    #[serde(rename = "Monólogo Narrativo (Joe)", alias = "monologue")]
    Monologue,
    #[serde(rename = "Debate Estructurado", alias = "structured-debate")]
    StructuredDebate,
}

impl PodcastFormat {
    pub const ALL: [PodcastFormat; 4] = [
        PodcastFormat::DynamicConversation,
        PodcastFormat::Interview,
        PodcastFormat::Monologue,
        PodcastFormat::StructuredDebate,
    ];

    /// Label shown to the user and embedded in prompts.
    pub fn label(&self) -> &'static str {
        match self {
            PodcastFormat::DynamicConversation => "Conversación Dinámica",
            PodcastFormat::Interview => "Entrevista (Jane entrevista a Joe)",
            PodcastFormat::Monologue => "Monólogo Narrativo (Joe)",
            PodcastFormat::StructuredDebate => "Debate Estructurado",
        }
    }

    /// Stable identifier accepted on the command line.
    pub fn id(&self) -> &'static str {
        match self {
            PodcastFormat::DynamicConversation => "dynamic-conversation",
            PodcastFormat::Interview => "interview",
            PodcastFormat::Monologue => "monologue",
            PodcastFormat::StructuredDebate => "structured-debate",
        }
    }

    /// Speaker labels expected to appear in a script of this format.
    pub fn speakers(&self) -> &'static [&'static str] {
        match self {
            PodcastFormat::Monologue => &[HOST],
            _ => &[HOST, CO_HOST],
        }
    }
}

impl fmt::Display for PodcastFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PodcastFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|format| format.id().eq_ignore_ascii_case(s) || format.label() == s)
            .ok_or_else(|| ConfigError::UnknownFormat(s.to_string()))
    }
}

/// Approximate episode length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum EpisodeDuration {
    #[serde(rename = "2 minutos", alias = "2")]
    TwoMinutes,
    #[default]
    #[serde(rename = "5 minutos", alias = "5")]
    FiveMinutes,
    #[serde(rename = "10 minutos", alias = "10")]
    TenMinutes,
}

impl EpisodeDuration {
    pub const ALL: [EpisodeDuration; 3] = [
        EpisodeDuration::TwoMinutes,
        EpisodeDuration::FiveMinutes,
        EpisodeDuration::TenMinutes,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            EpisodeDuration::TwoMinutes => "2 minutos",
            EpisodeDuration::FiveMinutes => "5 minutos",
            EpisodeDuration::TenMinutes => "10 minutos",
        }
    }

    pub fn minutes(&self) -> u32 {
        match self {
            EpisodeDuration::TwoMinutes => 2,
            EpisodeDuration::FiveMinutes => 5,
            EpisodeDuration::TenMinutes => 10,
        }
    }
}

impl fmt::Display for EpisodeDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for EpisodeDuration {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|d| d.label() == s || d.minutes().to_string() == s)
            .ok_or_else(|| ConfigError::UnknownDuration(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_parses_ids_and_labels() {
        for format in PodcastFormat::ALL {
            assert_eq!(format.id().parse::<PodcastFormat>().unwrap(), format);
            assert_eq!(format.label().parse::<PodcastFormat>().unwrap(), format);
        }
        assert!("karaoke".parse::<PodcastFormat>().is_err());
    }

    #[test]
    fn test_format_serde_uses_labels() {
        let json = serde_json::to_string(&PodcastFormat::Monologue).unwrap();
        assert_eq!(json, "\"Monólogo Narrativo (Joe)\"");
        let parsed: PodcastFormat = serde_json::from_str("\"structured-debate\"").unwrap();
        assert_eq!(parsed, PodcastFormat::StructuredDebate);
    }

    #[test]
    fn test_monologue_has_single_speaker() {
        assert_eq!(PodcastFormat::Monologue.speakers(), &[HOST]);
        assert_eq!(PodcastFormat::Interview.speakers(), &[HOST, CO_HOST]);
    }

    #[test]
    fn test_duration_parsing() {
        assert_eq!("10".parse::<EpisodeDuration>().unwrap(), EpisodeDuration::TenMinutes);
        assert_eq!(
            "2 minutos".parse::<EpisodeDuration>().unwrap(),
            EpisodeDuration::TwoMinutes
        );
        assert_eq!(
            "7".parse::<EpisodeDuration>(),
            Err(ConfigError::UnknownDuration("7".to_string()))
        );
    }
}
