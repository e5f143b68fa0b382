pub mod download;
pub mod placeholder;
pub mod script_parser;

pub use download::{download_file_name, save_artifact, save_cover_image};
pub use placeholder::placeholder_cover_url;
pub use script_parser::{count_turns, parse_turns, starts_with_speaker, DialogueTurn};
