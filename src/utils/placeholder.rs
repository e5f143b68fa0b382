use crate::podcast::GenerationConfig;

const PLACEHOLDER_BASE: &str = "https://via.placeholder.com/512/8B5CF6/FFFFFF";

/// Text placeholder cover keyed by series title, or theme when untitled.
pub fn placeholder_cover_url(config: &GenerationConfig) -> String {
    let label = if config.series_title.trim().is_empty() {
        config.theme.trim()
    } else {
        config.series_title.trim()
    };
    format!("{}?text={}", PLACEHOLDER_BASE, urlencoding::encode(label))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uses_series_title() {
        let mut config = GenerationConfig::new("AI ethics");
        config.series_title = "Mentes Digitales".to_string();
        assert_eq!(
            placeholder_cover_url(&config),
            "https://via.placeholder.com/512/8B5CF6/FFFFFF?text=Mentes%20Digitales"
        );
    }

    #[test]
    fn test_falls_back_to_theme() {
        let config = GenerationConfig::new("AI & ethics");
        assert!(placeholder_cover_url(&config).ends_with("?text=AI%20%26%20ethics"));
    }
}
