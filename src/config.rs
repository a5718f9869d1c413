//! CLI settings: built-in defaults + optional TOML file.
//!
//! - `Settings::default()` → no default language, colors on, 25-char text column
//! - `Settings::from_toml_file(path)` → load user settings
//! - `Settings::load(path)` → the file if it exists, defaults otherwise

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::core::error::CoreError;
use crate::core::language::LanguageId;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Used when neither --lang nor the file extension decides.
    pub default_language: Option<LanguageId>,
    pub color: bool,
    /// Width of the text column in token tables.
    pub value_width: usize,
    /// Rows per counter in the frequency report.
    pub top: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_language: None,
            color: true,
            value_width: 25,
            top: 10,
        }
    }
}

impl Settings {
    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let txt = fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let settings: Settings = toml::from_str(&txt)
            .with_context(|| format!("parsing {}", path.display()))?;
        settings.validate()?;
        Ok(settings)
    }

    /// A missing file is not an error; a broken one is.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) if p.exists() => Self::from_toml_file(p),
            _ => Ok(Self::default()),
        }
    }

    fn validate(&self) -> Result<()> {
        if self.value_width < 4 {
            return Err(CoreError::InvalidConfig(format!(
                "value_width must be at least 4 (got {})",
                self.value_width
            ))
            .into());
        }
        Ok(())
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    // ~/.polylex/config.toml
    dirs_next::home_dir().map(|h| h.join(".polylex").join("config.toml"))
}

pub fn resolve_config_path(cli_path: &Option<PathBuf>) -> Option<PathBuf> {
    if let Some(p) = cli_path {
        return Some(p.clone());
    }
    default_config_path()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "default_language = \"python\"\nvalue_width = 30\n").unwrap();
        let s = Settings::load(Some(&path)).unwrap();
        assert_eq!(s.default_language, Some(LanguageId::Python));
        assert_eq!(s.value_width, 30);
        assert!(s.color);
        assert_eq!(s.top, 10);
    }

    #[test]
    fn missing_file_means_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let s = Settings::load(Some(&dir.path().join("nope.toml"))).unwrap();
        assert_eq!(s, Settings::default());
    }

    #[test]
    fn rejects_unknown_keys_and_tiny_width() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "colour = false\n").unwrap();
        assert!(Settings::load(Some(&path)).is_err());
        fs::write(&path, "value_width = 2\n").unwrap();
        let err = Settings::load(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("value_width"), "{err}");
    }

    #[test]
    fn cli_path_wins() {
        let p = PathBuf::from("custom.toml");
        assert_eq!(resolve_config_path(&Some(p.clone())), Some(p));
    }
}
