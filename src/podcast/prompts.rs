//! Prompt text sent to the generative backend.

use super::format::{PodcastFormat, CO_HOST, HOST};
use super::types::GenerationConfig;

pub const SUGGESTION_COUNT: usize = 12;
pub const ASPECT_COUNT: usize = 4;
pub const TONE_COUNT: usize = 4;

/// Format-specific directions for the script writer.
pub fn format_instruction(format: PodcastFormat) -> String {
    match format {
        PodcastFormat::DynamicConversation => format!(
            "El guion debe ser una conversación natural y fluida entre {} y {}.",
            HOST, CO_HOST
        ),
        PodcastFormat::Interview => format!(
            "El guion debe ser una entrevista donde {co} es la entrevistadora y {host} es el \
             experto invitado. {co} debe hacer preguntas perspicaces y {host} debe proporcionar \
             respuestas detalladas.",
            host = HOST,
            co = CO_HOST
        ),
        PodcastFormat::Monologue => format!(
            "El guion debe ser un monólogo narrativo entregado en su totalidad por {host}. \
             {co} no debe hablar en absoluto. Todas las líneas deben comenzar con \"{host}:\".",
            host = HOST,
            co = CO_HOST
        ),
        PodcastFormat::StructuredDebate => format!(
            "El guion debe ser un debate estructurado entre {} y {}. Deben presentar argumentos \
             claros, contraargumentos y llegar a una conclusión o resumir sus puntos de vista.",
            HOST, CO_HOST
        ),
    }
}

pub fn script_prompt(config: &GenerationConfig) -> String {
    let hosts = format!("{} y {}", HOST, CO_HOST);
    let user_idea = config
        .user_idea()
        .map(|idea| format!("- Idea Específica del Usuario: {}\n", idea))
        .unwrap_or_default();

    format!(
        "Eres un guionista y productor de podcasts de clase mundial. Crea el contenido para un \
         episodio de podcast basado en la siguiente configuración. La respuesta debe ser un JSON.\n\
         \n\
         Configuración:\n\
         - Título de la Serie: {series_title}\n\
         - Tema del Episodio: {theme}\n\
         - Formato del Episodio: {format}. {instruction}\n\
         - Duración: {duration}\n\
         - Público Objetivo: {audience}\n\
         - Aspectos Clave a Cubrir: {aspects}\n\
         - Tono General: {tones}\n\
         - Ideas Adicionales a Incorporar: {ideas}\n\
         {user_idea}- Presentadores: {hosts}.\n\
         \n\
         Instrucciones:\n\
         1. Escribe un título atractivo y conciso para el episodio en un campo llamado \"title\".\n\
         2. Escribe un guion completo en un campo llamado \"script\", siguiendo las directrices del formato del episodio.\n\
         3. El guion DEBE comenzar con el nombre de uno de los presentadores seguido de dos puntos (ej: \"{host}:\").\n\
         4. No incluyas texto introductorio como \"Aquí está el guion:\". Simplemente el diálogo.\n\
         5. Incorpora los aspectos, tono e ideas de forma orgánica en la conversación.\n\
         6. Ajusta la longitud del guion a la duración especificada.\n\
         7. El guion debe centrarse exclusivamente en el diálogo. No incluyas anotaciones de producción, \
         efectos de sonido o texto entre paréntesis, ya que serán leídos en voz alta.\n",
        series_title = config.series_title,
        theme = config.theme,
        format = config.podcast_format.label(),
        instruction = format_instruction(config.podcast_format),
        duration = config.duration.label(),
        audience = config.audience,
        aspects = config.aspects.join(", "),
        tones = config.tones.join(", "),
        ideas = config.ai_suggestions.join(", "),
        user_idea = user_idea,
        hosts = hosts,
        host = HOST,
    )
}

pub fn suggestions_prompt(theme: &str, format: PodcastFormat) -> String {
    format!(
        "Eres un productor de podcasts experto y creativo. Para un podcast sobre el tema \"{theme}\" \
         con el formato de \"{format}\", genera ideas para mejorarlo. Proporciona la respuesta en \
         formato JSON.\n\
         \n\
         Necesito exactamente:\n\
         1. Un array llamado \"suggestions\" con {n_suggestions} ideas de contenido breves y atractivas \
         (ej: \"Explorar el impacto en la cultura pop\", \"Entrevistar a un pionero del campo\").\n\
         2. Un array llamado \"aspects\" con {n_aspects} \"aspectos clave\" únicos y relevantes para el \
         tema (ej: \"Debate Ético\", \"Innovación Tecnológica\").\n\
         3. Un array llamado \"tones\" con {n_tones} \"tonos\" específicos que encajarían bien con el \
         tema (ej: \"Conspirativo\", \"Optimista\", \"Nostálgico\").",
        theme = theme,
        format = format.label(),
        n_suggestions = SUGGESTION_COUNT,
        n_aspects = ASPECT_COUNT,
        n_tones = TONE_COUNT,
    )
}

pub fn cover_art_prompt(theme: &str, series_title: &str) -> String {
    format!(
        "Crea una carátula de podcast minimalista y llamativa. Tema del podcast: \"{}\". \
         Tema del episodio: \"{}\". Estilo: arte digital, abstracto, colores vibrantes, sin texto.",
        series_title, theme
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_each_format_has_its_distinguishing_phrase() {
        assert!(format_instruction(PodcastFormat::DynamicConversation)
            .contains("conversación natural y fluida"));
        assert!(format_instruction(PodcastFormat::Interview).contains("Jane es la entrevistadora"));
        assert!(
            format_instruction(PodcastFormat::Monologue).contains("Jane no debe hablar en absoluto")
        );
        assert!(format_instruction(PodcastFormat::StructuredDebate)
            .contains("argumentos claros, contraargumentos"));
    }

    #[test]
    fn test_format_instructions_are_distinct() {
        let all: HashSet<String> = PodcastFormat::ALL.into_iter().map(format_instruction).collect();
        assert_eq!(all.len(), 4);
    }

    #[test]
    fn test_script_prompts_differ_by_format() {
        let phrases = [
            (PodcastFormat::DynamicConversation, "conversación natural y fluida"),
            (PodcastFormat::Interview, "Jane es la entrevistadora"),
            (PodcastFormat::Monologue, "Jane no debe hablar en absoluto"),
            (PodcastFormat::StructuredDebate, "argumentos claros, contraargumentos"),
        ];
        assert_eq!(phrases.len(), PodcastFormat::ALL.len());

        let mut prompts = HashSet::new();
        for format in PodcastFormat::ALL {
            let mut config = GenerationConfig::new("AI ethics");
            config.podcast_format = format;
            let prompt = script_prompt(&config);

            for (other, phrase) in phrases {
                assert_eq!(
                    prompt.contains(phrase),
                    other == format,
                    "{:?} prompt and phrase {:?}",
                    format,
                    phrase
                );
            }
            prompts.insert(prompt);
        }
        assert_eq!(prompts.len(), 4);
    }

    #[test]
    fn test_script_prompt_embeds_config() {
        let mut config = GenerationConfig::new("AI ethics");
        config.series_title = "Mentes Digitales".to_string();
        config.aspects = vec!["Debate Ético".into(), "Regulación".into()];
        config.tones = vec!["Crítico".into()];
        config.ai_suggestions = vec!["Citar a Asimov".into()];
        config.podcast_format = PodcastFormat::Monologue;

        let prompt = script_prompt(&config);
        assert!(prompt.contains("- Título de la Serie: Mentes Digitales"));
        assert!(prompt.contains("- Tema del Episodio: AI ethics"));
        assert!(prompt.contains("Monólogo Narrativo (Joe). El guion debe ser un monólogo"));
        assert!(prompt.contains("- Duración: 5 minutos"));
        assert!(prompt.contains("- Aspectos Clave a Cubrir: Debate Ético, Regulación"));
        assert!(prompt.contains("- Tono General: Crítico"));
        assert!(prompt.contains("- Ideas Adicionales a Incorporar: Citar a Asimov"));
        assert!(prompt.contains("- Presentadores: Joe y Jane."));
        assert!(!prompt.contains("Idea Específica del Usuario"));
    }

    #[test]
    fn test_script_prompt_includes_user_idea_when_set() {
        let mut config = GenerationConfig::new("AI ethics");
        config.user_idea = Some("Compara la IA con el cerebro humano".to_string());
        let prompt = script_prompt(&config);
        assert!(prompt
            .contains("- Idea Específica del Usuario: Compara la IA con el cerebro humano\n- Presentadores"));
    }

    #[test]
    fn test_cover_art_prompt_forbids_text() {
        let prompt = cover_art_prompt("AI ethics", "Mentes Digitales");
        assert!(prompt.contains("\"Mentes Digitales\""));
        assert!(prompt.contains("\"AI ethics\""));
        assert!(prompt.contains("sin texto"));
    }
}
