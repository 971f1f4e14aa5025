//! WCAG contrast audit of the site palettes.
//!
//! Checks every text / background pairing the stylesheet actually uses, in
//! both modes. Borders are decorative and are not audited.

use std::fmt::Write as _;

use beacon_render::{contrast_ratio, ColorMode, Palette};
use clap::ValueEnum;
use console::Style;
use serde::Serialize;

/// `(foreground, background)` palette keys rendered on top of each other.
pub const CHECKED_PAIRS: &[(&str, &str)] = &[
    ("foreground", "background"),
    ("foreground", "surface"),
    ("muted", "background"),
    ("muted", "surface"),
    ("primary", "background"),
    ("primary", "surface"),
    ("primary_foreground", "primary"),
];

/// WCAG 2.x conformance level for text contrast.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum AuditLevel {
    /// 4.5:1, normal text.
    #[default]
    Aa,
    /// 3:1, large text (18pt, or 14pt bold).
    AaLarge,
}

impl AuditLevel {
    pub fn min_ratio(self) -> f64 {
        match self {
            AuditLevel::Aa => 4.5,
            AuditLevel::AaLarge => 3.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContrastCheck {
    pub mode: ColorMode,
    pub foreground: &'static str,
    pub background: &'static str,
    pub ratio: f64,
    pub required: f64,
    pub passes: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuditReport {
    pub level: AuditLevel,
    pub checks: Vec<ContrastCheck>,
}

/// Audits one palette.
pub fn audit_palette(mode: ColorMode, palette: &Palette, level: AuditLevel) -> Vec<ContrastCheck> {
    CHECKED_PAIRS
        .iter()
        .filter_map(|&(fg, bg)| {
            let ratio = contrast_ratio(palette.get(fg)?, palette.get(bg)?);
            Some(ContrastCheck {
                mode,
                foreground: fg,
                background: bg,
                ratio,
                required: level.min_ratio(),
                passes: ratio >= level.min_ratio(),
            })
        })
        .collect()
}

/// Audits the light and dark palettes.
pub fn run_audit(level: AuditLevel) -> AuditReport {
    let checks = ColorMode::ALL
        .iter()
        .flat_map(|&mode| audit_palette(mode, &Palette::for_mode(mode), level))
        .collect();
    AuditReport { level, checks }
}

impl AuditReport {
    pub fn passed(&self) -> bool {
        self.checks.iter().all(|check| check.passes)
    }

    pub fn failures(&self) -> impl Iterator<Item = &ContrastCheck> {
        self.checks.iter().filter(|check| !check.passes)
    }

    /// Human-readable table. Styling is dropped when `console` decides the
    /// target is not a color terminal.
    pub fn render_text(&self) -> String {
        let pass = Style::new().green().bold();
        let fail = Style::new().red().bold();
        let dim = Style::new().dim();

        let mut out = String::new();
        for mode in ColorMode::ALL {
            let _ = writeln!(out, "{}", Style::new().bold().apply_to(format!("{mode} palette")));
            for check in self.checks.iter().filter(|c| c.mode == mode) {
                let verdict = if check.passes {
                    pass.apply_to("PASS")
                } else {
                    fail.apply_to("FAIL")
                };
                let _ = writeln!(
                    out,
                    "  {verdict}  {:<18} on {:<10} {:>5.2}:1 {}",
                    check.foreground,
                    check.background,
                    check.ratio,
                    dim.apply_to(format!("(needs {:.1}:1)", check.required)),
                );
            }
        }

        let failed = self.failures().count();
        let summary = if failed == 0 {
            pass.apply_to(format!("All {} checks pass", self.checks.len()))
        } else {
            fail.apply_to(format!("{failed} of {} checks fail", self.checks.len()))
        };
        let _ = writeln!(out, "{summary}");
        out
    }
}
