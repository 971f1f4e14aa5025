use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The display mode of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Light mode (light background, dark text).
    #[default]
    Light,
    /// Dark mode (dark background, light text).
    Dark,
}

impl ColorMode {
    /// Both modes, light first.
    pub const ALL: [ColorMode; 2] = [ColorMode::Light, ColorMode::Dark];

    /// Returns the other mode.
    pub fn toggled(self) -> Self {
        match self {
            ColorMode::Light => ColorMode::Dark,
            ColorMode::Dark => ColorMode::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == ColorMode::Dark
    }

    /// Lowercase name, as used in markup and configuration.
    pub fn as_str(self) -> &'static str {
        match self {
            ColorMode::Light => "light",
            ColorMode::Dark => "dark",
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is neither `light` nor `dark`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseColorModeError(String);

impl fmt::Display for ParseColorModeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown color mode '{}' (expected 'light' or 'dark')", self.0)
    }
}

impl std::error::Error for ParseColorModeError {}

impl FromStr for ColorMode {
    type Err = ParseColorModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ColorMode::Light),
            "dark" => Ok(ColorMode::Dark),
            _ => Err(ParseColorModeError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggled_flips() {
        assert_eq!(ColorMode::Light.toggled(), ColorMode::Dark);
        assert_eq!(ColorMode::Dark.toggled(), ColorMode::Light);
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("Dark".parse::<ColorMode>().unwrap(), ColorMode::Dark);
        assert_eq!(" light ".parse::<ColorMode>().unwrap(), ColorMode::Light);
        assert!("sepia".parse::<ColorMode>().is_err());
    }

    #[test]
    fn serde_uses_lowercase() {
        let json = serde_json::to_string(&ColorMode::Dark).unwrap();
        assert_eq!(json, "\"dark\"");
        let mode: ColorMode = serde_json::from_str("\"light\"").unwrap();
        assert_eq!(mode, ColorMode::Light);
    }
}
