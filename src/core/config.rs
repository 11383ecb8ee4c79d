use crate::core::literal::LiteralDialect;
use crate::encoders::errors::CodecError;
use crate::encoders::value::XorKey;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid configuration: {0}")]
    Toml(#[from] toml::de::Error),

    #[error(transparent)]
    Codec(#[from] CodecError),
}

/// How literals are recognised and generated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiteralSettings {
    /// Terminal marker character of the literal kind (smali: `s`).
    pub marker: char,
    /// Hex digits emitted for tokens produced by an edit.
    #[serde(default = "default_pad_width")]
    pub pad_width: usize,
}

/// Where the pre-rewrite copy of a file goes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackupSettings {
    /// Appended to the source path.
    pub suffix: String,
}

/// Keys tried for the sample column of the inspection table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InspectSettings {
    pub candidate_keys: Vec<XorKey>,
}

fn default_pad_width() -> usize {
    LiteralDialect::DEFAULT_PAD_WIDTH
}

/// Effective configuration after all override files are applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub literal: LiteralSettings,
    pub backup: BackupSettings,
    pub inspect: InspectSettings,
}

/// One configuration file. Every section is optional so that an override
/// file only needs the sections it changes.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub literal: Option<LiteralSettings>,
    #[serde(default)]
    pub backup: Option<BackupSettings>,
    #[serde(default)]
    pub inspect: Option<InspectSettings>,
}

impl ConfigFile {
    /// Parses a configuration file from TOML content.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Loads a configuration file from disk.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }
}

impl Config {
    /// Loads the built-in configuration bundled with the crate.
    pub fn load_default() -> Result<Self, ConfigError> {
        let content = include_str!("../../smali-xor.toml");
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration with user overrides from standard locations.
    ///
    /// Searches in priority order:
    /// 1. Built-in defaults (`smali-xor.toml` in the crate)
    /// 2. `~/.config/smali-xor/config.toml` (user overrides)
    /// 3. `./smali-xor.toml` (project-local overrides)
    ///
    /// A section present in a later file replaces the earlier section.
    /// Override files that fail to load are reported and skipped.
    pub fn load_with_overrides() -> Result<Self, ConfigError> {
        let mut config = Self::load_default()?;

        if let Some(config_dir) = dirs::config_dir() {
            let user_config_path = config_dir.join("smali-xor").join("config.toml");
            config.merge_path(&user_config_path);
        }

        config.merge_path(Path::new("smali-xor.toml"));
        Ok(config)
    }

    fn merge_path(&mut self, path: &Path) {
        if !path.exists() {
            return;
        }

        match ConfigFile::load_from_file(path) {
            Ok(file) => {
                let previous = self.clone();
                self.merge(file);
                if let Err(e) = self.validate() {
                    warn!("Ignoring config {:?}: {}", path, e);
                    *self = previous;
                } else {
                    debug!("Loaded config overrides from {:?}", path);
                }
            }
            Err(e) => warn!("Failed to load config from {:?}: {}", path, e),
        }
    }

    /// Merges another configuration file into this one.
    ///
    /// Sections present in `other` replace the matching section in `self`.
    pub fn merge(&mut self, other: ConfigFile) {
        if let Some(literal) = other.literal {
            self.literal = literal;
        }
        if let Some(backup) = other.backup {
            self.backup = backup;
        }
        if let Some(inspect) = other.inspect {
            self.inspect = inspect;
        }
    }

    /// Builds the literal dialect these settings describe.
    pub fn dialect(&self) -> Result<LiteralDialect, CodecError> {
        LiteralDialect::new(self.literal.marker, self.literal.pad_width)
    }

    fn validate(&self) -> Result<(), CodecError> {
        self.dialect().map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_default_config() {
        let config = Config::load_default().unwrap();
        assert_eq!(config.literal.marker, 's');
        assert_eq!(config.literal.pad_width, 4);
        assert_eq!(config.backup.suffix, ".backup");
        assert_eq!(config.inspect.candidate_keys, vec![0x174a, 0x5072, 0x0000]);
    }

    #[test]
    fn test_merge_replaces_present_sections_only() {
        let mut config = Config::load_default().unwrap();
        let overrides = ConfigFile::from_toml(
            r#"
[backup]
suffix = ".orig"
"#,
        )
        .unwrap();

        config.merge(overrides);
        assert_eq!(config.backup.suffix, ".orig");
        assert_eq!(config.literal.marker, 's');
        assert_eq!(config.inspect.candidate_keys.len(), 3);
    }

    #[test]
    fn test_pad_width_defaults_when_omitted() {
        let file = ConfigFile::from_toml("[literal]\nmarker = \"t\"\n").unwrap();
        let literal = file.literal.unwrap();
        assert_eq!(literal.marker, 't');
        assert_eq!(literal.pad_width, 4);
    }

    #[test]
    fn test_invalid_marker_fails_dialect() {
        let mut config = Config::load_default().unwrap();
        config.literal.marker = 'a';
        assert!(matches!(
            config.dialect(),
            Err(CodecError::InvalidMarker { marker: 'a' })
        ));
    }

    #[test]
    fn test_merge_path_skips_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[literal]\nmarker = \"b\"\n").unwrap();

        let mut config = Config::load_default().unwrap();
        config.merge_path(&path);
        assert_eq!(config.literal.marker, 's');

        std::fs::write(&path, "[backup]\nsuffix = \".bak\"\n").unwrap();
        config.merge_path(&path);
        assert_eq!(config.backup.suffix, ".bak");
    }

    #[test]
    fn test_malformed_toml() {
        assert!(matches!(
            ConfigFile::from_toml("[literal\nmarker = 1"),
            Err(ConfigError::Toml(_))
        ));
    }
}
