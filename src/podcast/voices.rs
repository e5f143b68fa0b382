/// A prebuilt voice offered by the speech backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Voice {
    pub id: &'static str,
    pub description: &'static str,
}

pub const VOICES: [Voice; 5] = [
    Voice { id: "Kore", description: "Voz Femenina, Clara" },
    Voice { id: "Puck", description: "Voz Masculina, Amistosa" },
    Voice { id: "Zephyr", description: "Voz Femenina, Calmada" },
    Voice { id: "Charon", description: "Voz Masculina, Profunda" },
    Voice { id: "Fenrir", description: "Voz Masculina, Energética" },
];

pub const DEFAULT_SPEAKER1: &str = "Kore";
pub const DEFAULT_SPEAKER2: &str = "Puck";

pub fn find_voice(id: &str) -> Option<&'static Voice> {
    VOICES.iter().find(|v| v.id.eq_ignore_ascii_case(id))
}

pub fn is_known_voice(id: &str) -> bool {
    find_voice(id).is_some()
}
