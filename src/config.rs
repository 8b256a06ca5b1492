//! Editor configuration, read from a YAML file with kebab-case keys:
//!
//! ```yaml
//! char-width: 8.4
//! fallback-char-width: 9.6
//! store-dir: /home/me/.local/share/chordsheet
//! ```
//!
//! Every key is optional.

use crate::error::ChordSheetError;
use crate::persist::FileStore;
use crate::placement::{PlacementEngine, DEFAULT_CHAR_WIDTH};
use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Raw config for YAML deserialization
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct RawConfig {
    char_width: Option<f64>,
    fallback_char_width: Option<f64>,
    store_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Measured character width; `None` until the renderer reports one.
    pub char_width: Option<f64>,
    pub fallback_char_width: f64,
    pub store_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            char_width: None,
            fallback_char_width: DEFAULT_CHAR_WIDTH,
            store_dir: FileStore::default_dir(),
        }
    }
}

impl Config {
    pub fn from_yaml(content: &str) -> Result<Config, ChordSheetError> {
        // an empty document deserializes as unit, not as an empty map
        if content.trim().is_empty() {
            return Ok(Config::default());
        }
        let raw: RawConfig =
            serde_yaml::from_str(content).map_err(|e| ChordSheetError::ConfigError(e.to_string()))?;
        let defaults = Config::default();
        Ok(Config {
            char_width: raw.char_width,
            fallback_char_width: raw.fallback_char_width.unwrap_or(defaults.fallback_char_width),
            store_dir: raw.store_dir.unwrap_or(defaults.store_dir),
        })
    }

    pub fn load(path: &Path) -> Result<Config, ChordSheetError> {
        let content = fs::read_to_string(path)
            .map_err(|e| ChordSheetError::ConfigError(format!("{}: {}", path.display(), e)))?;
        Config::from_yaml(&content)
    }

    /// Like [`Config::load`], but a missing file means defaults.
    pub fn load_or_default(path: &Path) -> Result<Config, ChordSheetError> {
        match fs::metadata(path) {
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Config::default()),
            _ => Config::load(path),
        }
    }

    pub fn engine(&self) -> PlacementEngine {
        let measured = self.char_width.unwrap_or(self.fallback_char_width);
        PlacementEngine::with_fallback(measured, self.fallback_char_width)
    }

    pub fn store(&self) -> FileStore {
        FileStore::new(self.store_dir.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_config() {
        let config = Config::from_yaml(
            "char-width: 8.4\nfallback-char-width: 7.0\nstore-dir: /tmp/sheets\n",
        )
        .unwrap();
        assert_eq!(config.char_width, Some(8.4));
        assert_eq!(config.fallback_char_width, 7.0);
        assert_eq!(config.store_dir, PathBuf::from("/tmp/sheets"));
        assert_eq!(config.engine().char_width(), 8.4);
    }

    #[test]
    fn test_empty_config_is_default() {
        assert_eq!(Config::from_yaml("").unwrap(), Config::default());
        let engine = Config::default().engine();
        assert_eq!(engine.char_width(), DEFAULT_CHAR_WIDTH);
    }

    #[test]
    fn test_missing_measurement_uses_fallback() {
        let config = Config::from_yaml("fallback-char-width: 12\n").unwrap();
        assert_eq!(config.engine().char_width(), 12.0);
    }

    #[test]
    fn test_bad_config() {
        assert!(Config::from_yaml("char-width: wide\n").is_err());
        assert!(Config::from_yaml("font: mono\n").is_err());
    }

    #[test]
    fn test_load_or_default() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("none.yaml");
        assert_eq!(Config::load_or_default(&missing).unwrap(), Config::default());
        assert!(Config::load(&missing).is_err());

        let path = dir.path().join("chordsheet.yaml");
        fs::write(&path, "char-width: 10\n").unwrap();
        assert_eq!(Config::load_or_default(&path).unwrap().char_width, Some(10.0));
    }
}
