//! Site palettes and WCAG contrast math.
//!
//! Each [`ColorMode`] has a [`Palette`] of semantic colors. The page exposes
//! them as CSS custom properties; the contrast audit checks foreground /
//! background pairs against the WCAG 2.x thresholds.
//!
//! Contrast follows the WCAG definition:
//!
//! 1. Linearize each sRGB channel.
//! 2. Relative luminance `L = 0.2126 R + 0.7152 G + 0.0722 B`.
//! 3. Ratio `(L_hi + 0.05) / (L_lo + 0.05)`, which lies in `[1, 21]`.
//!
//! ```rust
//! use beacon_render::palette::{contrast_ratio, Rgb};
//!
//! let black = Rgb::from_hex("#000").unwrap();
//! let white = Rgb::from_hex("#ffffff").unwrap();
//! assert!((contrast_ratio(black, white) - 21.0).abs() < 1e-9);
//! ```

use std::fmt;

use serde::{Serialize, Serializer};

use crate::theme::ColorMode;

/// An sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Parses `#rrggbb` or `#rgb` (the `#` is optional).
    pub fn from_hex(s: &str) -> Result<Self, String> {
        let hex = s.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(format!("Invalid hex color '{}': expected hex digits", s));
        }
        let channel = |digits: &str| {
            u8::from_str_radix(digits, 16).map_err(|_| format!("Invalid hex color: {}", s))
        };
        match hex.len() {
            3 => Ok(Rgb(
                channel(&hex[0..1])? * 17,
                channel(&hex[1..2])? * 17,
                channel(&hex[2..3])? * 17,
            )),
            6 => Ok(Rgb(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            _ => Err(format!(
                "Invalid hex color '{}': expected 3 or 6 hex digits",
                s
            )),
        }
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }

    /// WCAG relative luminance, 0.0 (black) to 1.0 (white).
    pub fn relative_luminance(self) -> f64 {
        let r = srgb_to_linear(self.0);
        let g = srgb_to_linear(self.1);
        let b = srgb_to_linear(self.2);
        0.2126 * r + 0.7152 * g + 0.0722 * b
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

/// Convert an sRGB component (0–255) to linear light (0.0–1.0).
fn srgb_to_linear(c: u8) -> f64 {
    let c = c as f64 / 255.0;
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Contrast ratio between two colors. Symmetric.
pub fn contrast_ratio(a: Rgb, b: Rgb) -> f64 {
    let la = a.relative_luminance();
    let lb = b.relative_luminance();
    let (hi, lo) = if la >= lb { (la, lb) } else { (lb, la) };
    (hi + 0.05) / (lo + 0.05)
}

/// Semantic colors for one display mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Palette {
    pub background: Rgb,
    pub surface: Rgb,
    pub foreground: Rgb,
    pub muted: Rgb,
    pub primary: Rgb,
    pub primary_foreground: Rgb,
    pub border: Rgb,
}

impl Palette {
    pub const fn light() -> Self {
        Self {
            background: Rgb(0xff, 0xff, 0xff),
            surface: Rgb(0xf8, 0xfa, 0xfc),
            foreground: Rgb(0x0f, 0x17, 0x2a),
            muted: Rgb(0x47, 0x55, 0x69),
            primary: Rgb(0x4f, 0x46, 0xe5),
            primary_foreground: Rgb(0xff, 0xff, 0xff),
            border: Rgb(0xe2, 0xe8, 0xf0),
        }
    }

    pub const fn dark() -> Self {
        Self {
            background: Rgb(0x0b, 0x11, 0x20),
            surface: Rgb(0x11, 0x18, 0x27),
            foreground: Rgb(0xf1, 0xf5, 0xf9),
            muted: Rgb(0x94, 0xa3, 0xb8),
            primary: Rgb(0x81, 0x8c, 0xf8),
            primary_foreground: Rgb(0x0b, 0x11, 0x20),
            border: Rgb(0x1f, 0x29, 0x37),
        }
    }

    pub const fn for_mode(mode: ColorMode) -> Self {
        match mode {
            ColorMode::Light => Self::light(),
            ColorMode::Dark => Self::dark(),
        }
    }

    /// Looks up a color by its field name.
    pub fn get(&self, name: &str) -> Option<Rgb> {
        self.entries()
            .into_iter()
            .find(|(key, _)| *key == name)
            .map(|(_, color)| color)
    }

    /// All colors with their names, in declaration order.
    pub fn entries(&self) -> [(&'static str, Rgb); 7] {
        [
            ("background", self.background),
            ("surface", self.surface),
            ("foreground", self.foreground),
            ("muted", self.muted),
            ("primary", self.primary),
            ("primary_foreground", self.primary_foreground),
            ("border", self.border),
        ]
    }

    /// CSS custom property declarations, e.g. `--color-primary-foreground: #ffffff;`.
    pub fn css_variables(&self) -> String {
        self.entries()
            .iter()
            .map(|(name, color)| format!("--color-{}: {};", name.replace('_', "-"), color))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_six_digit_hex() {
        assert_eq!(Rgb::from_hex("#4f46e5").unwrap(), Rgb(0x4f, 0x46, 0xe5));
        assert_eq!(Rgb::from_hex("0B1120").unwrap(), Rgb(0x0b, 0x11, 0x20));
    }

    #[test]
    fn parse_three_digit_hex() {
        assert_eq!(Rgb::from_hex("#fff").unwrap(), Rgb(255, 255, 255));
        assert_eq!(Rgb::from_hex("#a0f").unwrap(), Rgb(0xaa, 0x00, 0xff));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(Rgb::from_hex("#ggg").is_err());
        assert!(Rgb::from_hex("#12345").is_err());
        assert!(Rgb::from_hex("").is_err());
    }

    #[test]
    fn parse_rejects_non_ascii_and_signs() {
        // Three bytes, one char: must not be sliced.
        assert!(Rgb::from_hex("#€").is_err());
        assert!(Rgb::from_hex("#+f+f+f").is_err());
        assert!(Rgb::from_hex("#-1-1-1").is_err());
    }

    #[test]
    fn hex_round_trip_formatting() {
        assert_eq!(Rgb(0x0f, 0x17, 0x2a).to_hex(), "#0f172a");
    }

    #[test]
    fn luminance_extremes() {
        assert_eq!(Rgb(0, 0, 0).relative_luminance(), 0.0);
        assert!((Rgb(255, 255, 255).relative_luminance() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn contrast_is_symmetric_and_bounded() {
        let a = Rgb(0x47, 0x55, 0x69);
        let b = Rgb(0xf8, 0xfa, 0xfc);
        assert_eq!(contrast_ratio(a, b), contrast_ratio(b, a));
        assert!(contrast_ratio(a, a) - 1.0 < 1e-9);
    }

    #[test]
    fn mid_gray_on_white_is_just_below_aa() {
        let ratio = contrast_ratio(Rgb(0x77, 0x77, 0x77), Rgb(255, 255, 255));
        assert!(ratio < 4.5);
        assert!(ratio > 4.4);
    }

    #[test]
    fn palette_lookup_by_name() {
        let palette = Palette::dark();
        assert_eq!(palette.get("primary"), Some(palette.primary));
        assert_eq!(palette.get("accent"), None);
    }

    #[test]
    fn css_variables_use_kebab_case() {
        let css = Palette::light().css_variables();
        assert!(css.contains("--color-background: #ffffff;"));
        assert!(css.contains("--color-primary-foreground: #ffffff;"));
    }
}
