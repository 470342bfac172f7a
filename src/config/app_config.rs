use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::core::errors::{Result, ShiftDecodeError};

/// Default config file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "shiftdecode.toml";

/// Current format version supported by this build of shiftdecode.
pub const CURRENT_FORMAT_VERSION: u32 = 1;

/// Top-level configuration read from `shiftdecode.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub shiftdecode: MetaSection,
    #[serde(default)]
    pub decoder: DecoderSection,
    #[serde(default)]
    pub output: OutputSection,
    /// Directory the config was loaded from; relative paths resolve against it.
    #[serde(skip)]
    pub base_dir: PathBuf,
}

impl AppConfig {
    /// Locate and load the configuration.
    ///
    /// An explicit path must exist. Without one, `shiftdecode.toml` in the
    /// working directory is used when present, otherwise `None`.
    pub fn discover(custom: Option<&str>) -> Result<Option<Self>> {
        match custom {
            Some(path) => Self::load(Path::new(path)).map(Some),
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if default.exists() {
                    Self::load(default).map(Some)
                } else {
                    Ok(None)
                }
            }
        }
    }

    /// Load the configuration from `path`.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ShiftDecodeError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        let mut config = Self::parse(&content)?;
        config.base_dir = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        Ok(config)
    }

    /// Parse and validate config text.
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(|e| ShiftDecodeError::InvalidConfig {
            detail: format!("Failed to parse {DEFAULT_CONFIG_FILE}: {e}"),
        })?;

        if config.shiftdecode.format_version > CURRENT_FORMAT_VERSION {
            return Err(ShiftDecodeError::InvalidConfig {
                detail: format!(
                    "format_version {} is newer than the supported version {CURRENT_FORMAT_VERSION}",
                    config.shiftdecode.format_version
                ),
            });
        }

        if config.decoder.key.as_ref().is_some_and(Vec::is_empty) {
            return Err(ShiftDecodeError::InvalidConfig {
                detail: "decoder.key must not be empty".into(),
            });
        }

        Ok(config)
    }

    /// Key file from `[decoder]`, resolved against the config's directory.
    pub fn key_file(&self) -> Option<PathBuf> {
        self.decoder
            .key_file
            .as_ref()
            .map(|f| self.base_dir.join(f))
    }
}

/// The `[shiftdecode]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct MetaSection {
    /// Format version for backward compatibility. Defaults to 1 if missing.
    #[serde(default = "default_format_version")]
    pub format_version: u32,
}

impl Default for MetaSection {
    fn default() -> Self {
        Self {
            format_version: default_format_version(),
        }
    }
}

fn default_format_version() -> u32 {
    1
}

/// The `[decoder]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DecoderSection {
    pub key: Option<Vec<i32>>,
    pub key_file: Option<String>,
}

/// The `[output]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputSection {
    pub format: Option<OutputFormat>,
}

/// How the decoded message is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_config() {
        let content = r#"
[shiftdecode]
format_version = 1

[decoder]
key = [3, 1, 4]
key_file = "key.txt"

[output]
format = "json"
"#;
        let config = AppConfig::parse(content).unwrap();
        assert_eq!(config.decoder.key, Some(vec![3, 1, 4]));
        assert_eq!(config.decoder.key_file.as_deref(), Some("key.txt"));
        assert_eq!(config.output.format, Some(OutputFormat::Json));
    }

    #[test]
    fn parse_empty_config_uses_defaults() {
        let config = AppConfig::parse("").unwrap();
        assert_eq!(config.shiftdecode.format_version, 1);
        assert!(config.decoder.key.is_none());
        assert!(config.output.format.is_none());
    }

    #[test]
    fn newer_format_version_is_rejected() {
        let err = AppConfig::parse("[shiftdecode]\nformat_version = 2\n").unwrap_err();
        assert!(matches!(err, ShiftDecodeError::InvalidConfig { .. }));
    }

    #[test]
    fn empty_inline_key_is_rejected() {
        let err = AppConfig::parse("[decoder]\nkey = []\n").unwrap_err();
        assert!(err.to_string().contains("decoder.key"));
    }

    #[test]
    fn unknown_format_is_rejected() {
        assert!(AppConfig::parse("[output]\nformat = \"xml\"\n").is_err());
    }

    #[test]
    fn key_file_resolves_against_base_dir() {
        let mut config = AppConfig::parse("[decoder]\nkey_file = \"key.txt\"\n").unwrap();
        config.base_dir = PathBuf::from("conf");
        assert_eq!(config.key_file(), Some(PathBuf::from("conf/key.txt")));
    }

    #[test]
    fn explicit_missing_config_fails() {
        let err = AppConfig::discover(Some("no/such/shiftdecode.toml")).unwrap_err();
        assert!(matches!(err, ShiftDecodeError::FileNotFound { .. }));
    }
}
