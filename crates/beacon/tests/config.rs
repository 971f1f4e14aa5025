//! Config file discovery and precedence.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use beacon::cli::{theme_options, ThemeFlags};
use beacon::config::{SiteConfig, CONFIG_FILE_NAME};
use beacon::SiteError;
use beacon_render::ColorMode;
use tempfile::TempDir;

#[test]
fn implicit_file_is_found_in_dir() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(CONFIG_FILE_NAME), "default_theme: dark\n").unwrap();

    let config = SiteConfig::load_from(None, dir.path()).unwrap();
    assert_eq!(config.default_theme, Some(ColorMode::Dark));
}

#[test]
fn no_file_means_defaults() {
    let dir = TempDir::new().unwrap();
    let config = SiteConfig::load_from(None, dir.path()).unwrap();
    assert_eq!(config, SiteConfig::default());
}

#[test]
fn explicit_file_wins_over_implicit() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(CONFIG_FILE_NAME), "default_theme: dark\n").unwrap();
    let explicit = dir.path().join("other.yaml");
    fs::write(&explicit, "default_theme: light\ncontact_delay_ms: 50\n").unwrap();

    let config = SiteConfig::load_from(Some(&explicit), dir.path()).unwrap();
    assert_eq!(config.default_theme, Some(ColorMode::Light));
    assert_eq!(config.contact_delay(), Duration::from_millis(50));
}

#[test]
fn missing_explicit_file_is_an_io_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.yaml");
    let err = SiteConfig::load_from(Some(&missing), dir.path()).unwrap_err();
    assert!(matches!(err, SiteError::Io { .. }));
}

#[test]
fn empty_file_is_default() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    fs::write(&path, "\n").unwrap();
    let config = SiteConfig::from_file(&path).unwrap();
    assert_eq!(config.contact_delay_ms, 1000);
}

#[test]
fn content_path_is_relative_to_config() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    fs::write(&path, "content: site/content.yaml\n").unwrap();

    let config = SiteConfig::from_file(&path).unwrap();
    assert_eq!(config.content_path(), Some(dir.path().join("site/content.yaml")));
}

#[test]
fn absolute_content_path_is_kept() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    let absolute = dir.path().join("elsewhere.yaml");
    fs::write(&path, format!("content: {}\n", absolute.display())).unwrap();

    let config = SiteConfig::from_file(&path).unwrap();
    assert_eq!(config.content_path(), Some(PathBuf::from(absolute)));
}

#[test]
fn theme_flag_overrides_disabled_detection_default() {
    let config = SiteConfig::from_yaml("disable_system_preference: true\n").unwrap();
    let flags = ThemeFlags {
        theme: Some(ColorMode::Dark),
        no_system_theme: false,
    };
    let options = theme_options(&config, &flags);
    assert_eq!(options.default_mode, Some(ColorMode::Dark));
    assert!(options.disable_system_preference);
}
