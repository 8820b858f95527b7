use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use samplekit_generate::OutputFormat;

/// Settings file looked up in the working directory when `--config` is absent.
pub const SETTINGS_FILE: &str = "samplekit.toml";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Seed for reproducible runs; entropy when unset.
    pub seed: Option<u64>,
    pub default_count: usize,
    pub format: OutputFormat,
    /// Filter directive used when `SAMPLEKIT_LOG` is unset.
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            default_count: 100,
            format: OutputFormat::Text,
            log_level: "info".to_string(),
        }
    }
}

impl Settings {
    pub fn from_toml(path: &Path, content: &str) -> Result<Self, SettingsError> {
        toml::from_str(content).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Load settings from `path`, or from `./samplekit.toml` when it exists.
///
/// An explicit path must exist; the implicit one falls back to defaults.
pub fn load_settings(path: Option<&Path>) -> Result<Settings, SettingsError> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => {
            let implicit = PathBuf::from(SETTINGS_FILE);
            if !implicit.exists() {
                return Ok(Settings::default());
            }
            implicit
        }
    };

    let content = std::fs::read_to_string(&path).map_err(|source| SettingsError::Read {
        path: path.clone(),
        source,
    })?;
    Settings::from_toml(&path, &content)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(content: &str) -> Result<Settings, SettingsError> {
        Settings::from_toml(Path::new("samplekit.toml"), content)
    }

    #[test]
    fn empty_file_uses_defaults() {
        let settings = parse("").expect("parse");
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.default_count, 100);
        assert_eq!(settings.format, OutputFormat::Text);
        assert_eq!(settings.log_level, "info");
    }

    #[test]
    fn partial_file_keeps_remaining_defaults() {
        let settings = parse("seed = 42\nformat = \"csv\"\n").expect("parse");
        assert_eq!(settings.seed, Some(42));
        assert_eq!(settings.format, OutputFormat::Csv);
        assert_eq!(settings.default_count, 100);
    }

    #[test]
    fn full_file_round_trips() {
        let settings = Settings {
            seed: Some(7),
            default_count: 12,
            format: OutputFormat::Json,
            log_level: "samplekit_generate=debug".to_string(),
        };
        let encoded = toml::to_string_pretty(&settings).expect("encode");
        assert_eq!(parse(&encoded).expect("parse"), settings);
    }

    #[test]
    fn unknown_format_is_rejected() {
        assert!(matches!(
            parse("format = \"xml\""),
            Err(SettingsError::Parse { .. })
        ));
    }

    #[test]
    fn explicit_missing_path_is_an_error() {
        let missing = std::env::temp_dir().join("samplekit-missing-settings.toml");
        assert!(matches!(
            load_settings(Some(&missing)),
            Err(SettingsError::Read { .. })
        ));
    }
}
