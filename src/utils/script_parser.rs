use serde::{Deserialize, Serialize};

/// One spoken line of a script
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogueTurn {
    pub speaker: String,
    pub text: String,
}

/// Split a `Speaker: line` script into turns.
///
/// Lines without a speaker label continue the previous turn. A label is a
/// short run of word characters before the first colon.
pub fn parse_turns(script: &str) -> Vec<DialogueTurn> {
    let mut turns: Vec<DialogueTurn> = Vec::new();

    for line in script.lines().map(str::trim).filter(|l| !l.is_empty()) {
        match split_label(line) {
            Some((speaker, text)) => turns.push(DialogueTurn {
                speaker: speaker.to_string(),
                text: text.to_string(),
            }),
            None => {
                if let Some(last) = turns.last_mut() {
                    last.text.push(' ');
                    last.text.push_str(line);
                }
            }
        }
    }

    turns
}

fn split_label(line: &str) -> Option<(&str, &str)> {
    let (label, rest) = line.split_once(':')?;
    let label = label.trim();
    let is_label = !label.is_empty()
        && label.chars().count() <= 24
        && label.chars().all(|c| c.is_alphanumeric() || c == ' ' || c == '_');
    is_label.then(|| (label, rest.trim()))
}

/// Number of turns spoken by `speaker`.
pub fn count_turns(script: &str, speaker: &str) -> usize {
    parse_turns(script)
        .iter()
        .filter(|t| t.speaker == speaker)
        .count()
}

/// Whether the script opens with a speaker label.
pub fn starts_with_speaker(script: &str) -> bool {
    script
        .lines()
        .map(str::trim)
        .find(|l| !l.is_empty())
        .and_then(split_label)
        .is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCRIPT: &str = "Joe: Bienvenidos a Mentes Digitales.\n\
                          Jane: Hoy hablamos de ética.\n\
                          Es un tema enorme.\n\
                          \n\
                          Joe: Empecemos: ¿qué es la IA?";

    #[test]
    fn test_parse_turns() {
        let turns = parse_turns(SCRIPT);
        assert_eq!(turns.len(), 3);
        assert_eq!(turns[0].speaker, "Joe");
        assert_eq!(turns[1].text, "Hoy hablamos de ética. Es un tema enorme.");
        assert_eq!(turns[2].text, "Empecemos: ¿qué es la IA?");
    }

    #[test]
    fn test_count_turns() {
        assert_eq!(count_turns(SCRIPT, "Joe"), 2);
        assert_eq!(count_turns(SCRIPT, "Jane"), 1);
        assert_eq!(count_turns(SCRIPT, "Bob"), 0);
    }

    #[test]
    fn test_starts_with_speaker() {
        assert!(starts_with_speaker(SCRIPT));
        assert!(!starts_with_speaker("Aquí está el guion, con comas: y más"));
        assert!(!starts_with_speaker(""));
    }
}
