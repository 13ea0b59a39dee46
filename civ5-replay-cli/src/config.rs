//! Configuration loading and parsing

use anyhow::{Context, Result};
use civ5_replay_decoder::DecoderConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main application configuration (loaded from config.toml)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub decoder: DecoderConfig,
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct InputConfig {
    pub replay: Option<PathBuf>,
    pub map: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Write the score histogram as CSV
    pub csv: Option<PathBuf>,
    /// Write the decoded replay as JSON
    pub json: Option<PathBuf>,
    /// Only print the end-of-game line
    #[serde(default)]
    pub quiet: bool,
}

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<AppConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config: AppConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use civ5_replay_decoder::Language;
    use std::io::Write;

    #[test]
    fn test_config_deserialization() {
        let toml_content = r#"
            [decoder]
            language = "fr"

            [input]
            replay = "game.Civ5Replay"
            map = "game.Civ5Map"

            [output]
            csv = "scores.csv"
            quiet = true
        "#;

        let config: AppConfig = toml::from_str(toml_content).unwrap();
        assert_eq!(config.decoder.language, Some(Language::Fr));
        assert_eq!(config.decoder.fallback_language, Language::En);
        assert_eq!(config.input.replay, Some(PathBuf::from("game.Civ5Replay")));
        assert_eq!(config.output.csv, Some(PathBuf::from("scores.csv")));
        assert!(config.output.json.is_none());
        assert!(config.output.quiet);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert!(config.decoder.detects_language());
        assert!(config.input.replay.is_none());
        assert!(!config.output.quiet);
    }

    #[test]
    fn test_load_config_reports_parse_errors() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[decoder]\nlanguage = \"tlh\"").unwrap();
        let err = load_config(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }
}
