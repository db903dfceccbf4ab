use markdown_mathml_engine::{
    Delimiter, MathOptions,
    math::{Strict, StrictLevel},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// Strictness as written in the config file: a boolean or a level name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StrictSetting {
    Bool(bool),
    Level(StrictLevel),
}

impl Default for StrictSetting {
    fn default() -> Self {
        StrictSetting::Level(StrictLevel::Ignore)
    }
}

impl From<StrictSetting> for Strict {
    fn from(setting: StrictSetting) -> Self {
        match setting {
            StrictSetting::Bool(v) => Strict::Bool(v),
            StrictSetting::Level(level) => level.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub strict: StrictSetting,
    #[serde(default = "Delimiter::defaults")]
    pub delimiters: Vec<Delimiter>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            strict: StrictSetting::default(),
            delimiters: Delimiter::defaults(),
        }
    }
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/markdown-mathml");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// Expands `~` and `$VARS` in a user-supplied path.
    pub fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }

    /// Options for the math rule.
    pub fn math_options(&self) -> MathOptions {
        MathOptions {
            delimiters: self.delimiters.clone(),
            strict: self.strict.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_config_path() {
        let config_path = Config::config_path();
        let path_str = config_path.to_string_lossy();

        assert!(!path_str.starts_with('~'));
        assert!(path_str.ends_with(".config/markdown-mathml/config.toml"));
    }

    #[test]
    fn test_config_serialization_roundtrip() {
        let original = Config {
            strict: StrictSetting::Bool(true),
            delimiters: vec![Delimiter::new("$$", "$$", true)],
        };

        let toml_str = toml::to_string(&original).unwrap();
        let deserialized: Config = toml::from_str(&toml_str).unwrap();

        assert_eq!(original, deserialized);
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.delimiters, Delimiter::defaults());
    }

    #[test]
    fn test_strict_accepts_bool_and_level() {
        let config: Config = toml::from_str("strict = false").unwrap();
        assert_eq!(config.strict, StrictSetting::Bool(false));

        let config: Config = toml::from_str(r#"strict = "warn""#).unwrap();
        assert_eq!(config.strict, StrictSetting::Level(StrictLevel::Warn));
        assert!(matches!(config.math_options().strict, Strict::Warn));
    }

    #[test]
    fn test_unknown_strict_level_is_rejected() {
        let result: Result<Config, _> = toml::from_str(r#"strict = "loud""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_custom_delimiters_in_toml() {
        let config_content = r#"
strict = "error"

[[delimiters]]
left = "$$"
right = "$$"
display = true

[[delimiters]]
left = '\('
right = '\)'
display = false
"#;

        let config: Config = toml::from_str(config_content).unwrap();
        let options = config.math_options();

        assert_eq!(
            options.delimiters,
            vec![
                Delimiter::new("$$", "$$", true),
                Delimiter::new("\\(", "\\)", false),
            ]
        );
        assert!(matches!(options.strict, Strict::Error));
    }

    #[test]
    fn test_empty_delimiter_list_is_kept() {
        let config: Config = toml::from_str("delimiters = []").unwrap();
        assert!(config.math_options().delimiters.is_empty());
    }

    #[test]
    fn test_expand_path_with_tilde() {
        let path = PathBuf::from("~/test/path");
        let expanded = Config::expand_path(&path);

        assert!(expanded.is_some());
        let expanded = expanded.unwrap();
        assert!(!expanded.to_string_lossy().starts_with('~'));
        assert!(expanded.to_string_lossy().contains("test/path"));
    }

    #[test]
    fn test_expand_path_with_env_var() {
        unsafe {
            env::set_var("MATHML_TEST_VAR", "/test/env/path");
        }

        let path = PathBuf::from("$MATHML_TEST_VAR/config.toml");
        let expanded = Config::expand_path(&path);

        assert_eq!(expanded, Some(PathBuf::from("/test/env/path/config.toml")));

        unsafe {
            env::remove_var("MATHML_TEST_VAR");
        }
    }

    #[test]
    fn test_load_config_file_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let non_existent_config = temp_dir.path().join("nonexistent.toml");

        let result = Config::load_from_path(&non_existent_config).unwrap();

        assert!(result.is_none());
    }

    #[test]
    fn test_load_invalid_config_reports_path() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "delimiters = 3").unwrap();

        let err = Config::load_from_path(&config_file).unwrap_err();

        assert!(matches!(err, ConfigError::ConfigParseError { .. }));
        assert!(err.to_string().contains("config.toml"));
    }

    #[test]
    fn test_load_config_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        let test_config = Config {
            strict: StrictSetting::Level(StrictLevel::Warn),
            delimiters: Delimiter::defaults(),
        };
        std::fs::write(&config_file, toml::to_string_pretty(&test_config).unwrap()).unwrap();

        let loaded_config = Config::load_from_path(&config_file).unwrap().unwrap();

        assert_eq!(loaded_config, test_config);
    }
}
