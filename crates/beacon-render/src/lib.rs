//! # Beacon Render - themes, document marker and templates
//!
//! `beacon-render` holds the shared UI state of the Beacon site:
//!
//! - [`ColorMode`]: light or dark.
//! - [`ThemeScope`]: resolves the initial mode from an explicit default and the
//!   host's ambient preference, then shares it (read + mutate) with every part
//!   of the page composition.
//! - [`ThemeMirror`] / [`Document`]: keep the `dark` class on the root element
//!   in sync with the scope.
//! - [`Palette`](palette::Palette): per-mode colors and WCAG contrast math.
//! - [`TemplateEngine`]: the MiniJinja-backed HTML renderer.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use beacon_render::theme::{FixedPreference, ThemeOptions};
//! use beacon_render::{ColorMode, Document, ThemeMirror, ThemeScope, DARK_CLASS};
//!
//! let document = Arc::new(Document::new());
//! let scope = ThemeScope::initialize(
//!     ThemeOptions::default(),
//!     &FixedPreference(ColorMode::Dark),
//!     ThemeMirror::attached(Arc::clone(&document)),
//! );
//!
//! assert_eq!(scope.mode(), ColorMode::Dark);
//! assert!(document.has_class(DARK_CLASS));
//!
//! scope.toggle_theme();
//! assert!(!document.has_class(DARK_CLASS));
//! ```

pub mod document;
mod error;
pub mod palette;
pub mod template;
pub mod theme;

pub use document::{Document, RootElement, ThemeMirror, DARK_CLASS, THEME_ATTRIBUTE};
pub use error::RenderError;
pub use palette::{contrast_ratio, Palette, Rgb};
pub use template::{MiniJinjaEngine, TemplateEngine};
pub use theme::{
    get_system_preference, AmbientPreference, ColorMode, OsPreference, ThemeOptions, ThemeScope,
    ThemeState,
};
