//! The host's ambient color-scheme preference.
//!
//! The preference is read through the [`AmbientPreference`] trait so the theme
//! scope never talks to the OS directly. Production code uses
//! [`OsPreference`]; tests and non-interactive contexts inject
//! [`FixedPreference`] or [`NoPreference`].
//!
//! ```rust
//! use beacon_render::theme::{get_system_preference, FixedPreference, NoPreference};
//! use beacon_render::ColorMode;
//!
//! assert_eq!(get_system_preference(&FixedPreference(ColorMode::Dark)), ColorMode::Dark);
//! // No signal available: falls back to light.
//! assert_eq!(get_system_preference(&NoPreference), ColorMode::Light);
//! ```

use dark_light::{detect as detect_os_theme, Mode as OsThemeMode};

use super::mode::ColorMode;

/// Source of the "does the host prefer dark presentation?" signal.
pub trait AmbientPreference: Send + Sync {
    /// Returns `Some(true)` if the host prefers dark, `Some(false)` if it
    /// prefers light, and `None` if the signal is unavailable.
    fn prefers_dark(&self) -> Option<bool>;
}

/// Queries the operating system through the `dark-light` crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsPreference;

impl AmbientPreference for OsPreference {
    fn prefers_dark(&self) -> Option<bool> {
        match detect_os_theme() {
            Ok(OsThemeMode::Dark) => Some(true),
            Ok(OsThemeMode::Light) => Some(false),
            Ok(OsThemeMode::Unspecified) => None,
            Err(err) => {
                tracing::debug!(error = ?err, "OS color scheme detection failed");
                None
            }
        }
    }
}

/// A fixed preference, for tests and for forcing a mode from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedPreference(pub ColorMode);

impl AmbientPreference for FixedPreference {
    fn prefers_dark(&self) -> Option<bool> {
        Some(self.0.is_dark())
    }
}

/// No preference signal at all (server-side or headless rendering).
#[derive(Debug, Default, Clone, Copy)]
pub struct NoPreference;

impl AmbientPreference for NoPreference {
    fn prefers_dark(&self) -> Option<bool> {
        None
    }
}

/// Resolves the ambient signal to a mode.
///
/// An unavailable signal yields [`ColorMode::Light`]; this is a default, not
/// an error.
pub fn get_system_preference(ambient: &dyn AmbientPreference) -> ColorMode {
    match ambient.prefers_dark() {
        Some(true) => ColorMode::Dark,
        Some(false) | None => ColorMode::Light,
    }
}
