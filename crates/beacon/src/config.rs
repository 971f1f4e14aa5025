//! Site configuration (`beacon.yaml`).
//!
//! ```yaml
//! title: Northwind Studio
//! default_theme: dark
//! disable_system_preference: false
//! contact_delay_ms: 1000
//! content: site/content.yaml
//! ```
//!
//! Every key is optional. Precedence, lowest first: built-in defaults, the
//! config file, the `BEACON_THEME` environment variable, command-line flags.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use beacon_contact::DEFAULT_SUBMIT_DELAY;
use beacon_render::{ColorMode, ThemeOptions};
use serde::{Deserialize, Serialize};

use crate::error::SiteError;

/// File looked up in the working directory when `--config` is not given.
pub const CONFIG_FILE_NAME: &str = "beacon.yaml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Document title. Defaults to the brand name.
    pub title: Option<String>,
    /// Mode used before (or instead of) the host preference.
    pub default_theme: Option<ColorMode>,
    pub disable_system_preference: bool,
    /// Simulated contact delivery delay.
    pub contact_delay_ms: u64,
    /// Content file, relative to the config file's directory.
    pub content: Option<PathBuf>,

    #[serde(skip)]
    base_dir: Option<PathBuf>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: None,
            default_theme: None,
            disable_system_preference: false,
            contact_delay_ms: DEFAULT_SUBMIT_DELAY.as_millis() as u64,
            content: None,
            base_dir: None,
        }
    }
}

impl SiteConfig {
    pub fn from_yaml(yaml: &str) -> Result<Self, SiteError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml).map_err(|err| SiteError::yaml("config", err))
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SiteError> {
        let path = path.as_ref();
        let yaml = fs::read_to_string(path).map_err(|err| SiteError::io(path, err))?;
        let mut config = if yaml.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml::from_str(&yaml)
                .map_err(|err| SiteError::yaml(path.display().to_string(), err))?
        };
        config.base_dir = path.parent().map(Path::to_path_buf);
        Ok(config)
    }

    /// Loads `explicit` if given (it must exist), otherwise `./beacon.yaml`
    /// if present, otherwise the defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, SiteError> {
        Self::load_from(explicit, Path::new("."))
    }

    /// Like [`load`](Self::load), looking for the implicit file in `dir`.
    pub fn load_from(explicit: Option<&Path>, dir: &Path) -> Result<Self, SiteError> {
        if let Some(path) = explicit {
            tracing::debug!(path = %path.display(), "loading config");
            return Self::from_file(path);
        }

        let implicit = dir.join(CONFIG_FILE_NAME);
        if implicit.is_file() {
            tracing::debug!(path = %implicit.display(), "loading config");
            Self::from_file(implicit)
        } else {
            tracing::debug!("no config file, using defaults");
            Ok(Self::default())
        }
    }

    pub fn theme_options(&self) -> ThemeOptions {
        ThemeOptions {
            default_mode: self.default_theme,
            disable_system_preference: self.disable_system_preference,
        }
    }

    pub fn contact_delay(&self) -> Duration {
        Duration::from_millis(self.contact_delay_ms)
    }

    /// The content path resolved against the config file's directory.
    pub fn content_path(&self) -> Option<PathBuf> {
        let content = self.content.as_ref()?;
        match &self.base_dir {
            Some(base) if content.is_relative() => Some(base.join(content)),
            _ => Some(content.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = SiteConfig::default();
        assert_eq!(config.contact_delay(), Duration::from_secs(1));
        assert_eq!(config.theme_options(), ThemeOptions::default());
        assert_eq!(config.content_path(), None);
    }

    #[test]
    fn partial_yaml_keeps_other_defaults() {
        let config = SiteConfig::from_yaml("default_theme: dark\n").unwrap();
        assert_eq!(config.default_theme, Some(ColorMode::Dark));
        assert_eq!(config.contact_delay_ms, 1000);
        assert!(!config.disable_system_preference);
    }

    #[test]
    fn empty_yaml_is_default() {
        assert_eq!(SiteConfig::from_yaml("").unwrap(), SiteConfig::default());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = SiteConfig::from_yaml("colour: blue\n").unwrap_err();
        assert!(matches!(err, SiteError::Yaml { .. }));
    }

    #[test]
    fn bad_theme_is_rejected() {
        assert!(SiteConfig::from_yaml("default_theme: sepia\n").is_err());
    }

    #[test]
    fn theme_options_follow_config() {
        let config =
            SiteConfig::from_yaml("default_theme: light\ndisable_system_preference: true\n")
                .unwrap();
        assert_eq!(
            config.theme_options(),
            ThemeOptions::default()
                .with_default(ColorMode::Light)
                .without_system_preference()
        );
    }
}
