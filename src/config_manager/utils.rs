use std::fs;
use std::path::Path;

use anyhow::Result;
use regex::{Captures, Regex};
use serde_json::Value;
use tracing::debug;

use crate::config_manager::main::Config;

/// Replace `${VAR_NAME}` with the environment value; unknown variables are left as-is.
pub fn substitute_env_vars(content: &str) -> Result<String> {
    let pattern = Regex::new(r"\$\{(\w+)\}")?;
    let replaced = pattern.replace_all(content, |caps: &Captures<'_>| {
        std::env::var(&caps[1]).unwrap_or_else(|_| caps[0].to_string())
    });
    Ok(replaced.into_owned())
}

/// Read a JSON-LD (or plain JSON) configuration file with environment variable substitution
pub fn read_jsonld(config_path: &Path) -> Result<Value> {
    let content = read_config_text(config_path)?;
    let mut json_value: Value = serde_json::from_str(&content)?;

    // @context is JSON-LD metadata, not configuration
    if let Value::Object(ref mut obj) = json_value {
        obj.remove("@context");
    }
    Ok(json_value)
}

/// Read a YAML configuration file with environment variable substitution
pub fn read_yaml(config_path: &Path) -> Result<Value> {
    let content = read_config_text(config_path)?;
    let yaml: serde_yaml::Value = serde_yaml::from_str(&content)?;
    Ok(serde_json::to_value(yaml)?)
}

fn read_config_text(config_path: &Path) -> Result<String> {
    if !config_path.exists() {
        anyhow::bail!("Configuration file not found: {}", config_path.display());
    }

    let content = load_text_file_with_guess_encoding(config_path)?;
    if content.trim().is_empty() {
        anyhow::bail!("Configuration file is empty: {}", config_path.display());
    }
    substitute_env_vars(&content)
}

/// Validate configuration data against the Config model
pub fn validate_config(config_data: Value) -> Result<Config> {
    let config: Config = serde_json::from_value(config_data)?;
    Ok(config)
}

/// Load text file, stripping a UTF-8 BOM and falling back to GBK
pub fn load_text_file_with_guess_encoding(file_path: &Path) -> Result<String> {
    let mut bytes = fs::read(file_path)?;
    if bytes.starts_with(&[0xEF, 0xBB, 0xBF]) {
        bytes.drain(0..3);
    }

    match String::from_utf8(bytes) {
        Ok(text) => Ok(text),
        Err(err) => {
            debug!("{} is not UTF-8, decoding as GBK", file_path.display());
            let (cow, _, _) = encoding_rs::GBK.decode(err.as_bytes());
            Ok(cow.into_owned())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_substitute_env_vars() {
        std::env::set_var("PODCAST_STUDIO_TEST_KEY", "secret-123");
        let out = substitute_env_vars(r#"{"api_key": "${PODCAST_STUDIO_TEST_KEY}"}"#).unwrap();
        assert_eq!(out, r#"{"api_key": "secret-123"}"#);
    }

    #[test]
    fn test_unknown_env_var_is_kept() {
        let out = substitute_env_vars("${PODCAST_STUDIO_SURELY_UNSET_VAR}").unwrap();
        assert_eq!(out, "${PODCAST_STUDIO_SURELY_UNSET_VAR}");
    }

    #[test]
    fn test_bom_is_stripped() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[0xEF, 0xBB, 0xBF]).unwrap();
        file.write_all(b"{\"a\": 1}").unwrap();

        let text = load_text_file_with_guess_encoding(file.path()).unwrap();
        assert_eq!(text, "{\"a\": 1}");
    }

    #[test]
    fn test_read_jsonld_drops_context() {
        let mut file = tempfile::Builder::new().suffix(".jsonld").tempfile().unwrap();
        file.write_all(br#"{"@context": {"@vocab": "x"}, "a": 1}"#).unwrap();

        let value = read_jsonld(file.path()).unwrap();
        assert!(value.get("@context").is_none());
        assert_eq!(value["a"], 1);
    }

    #[test]
    fn test_missing_file() {
        assert!(read_jsonld(Path::new("/definitely/not/here.jsonld")).is_err());
    }
}
