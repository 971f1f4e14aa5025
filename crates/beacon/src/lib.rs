//! # Beacon
//!
//! A single-page brochure site with an adaptive light/dark theme and a
//! contact form, rendered to static HTML.
//!
//! The crate ties the pieces together:
//!
//! - [`content`]: the site copy, loaded from YAML.
//! - [`page`]: composes content, the [`ThemeScope`](beacon_render::ThemeScope)
//!   and the form state into HTML through MiniJinja templates.
//! - [`form`]: the contact form's view state on top of `beacon-contact`.
//! - [`audit`]: WCAG contrast checks for both palettes.
//! - [`config`], [`cli`], [`logging`]: the `beacon` binary.
//!
//! ```rust
//! use beacon::content::SiteContent;
//! use beacon::page::Page;
//! use beacon_render::theme::{FixedPreference, ThemeOptions};
//! use beacon_render::ColorMode;
//!
//! let page = Page::new(
//!     SiteContent::builtin(),
//!     ThemeOptions::default(),
//!     &FixedPreference(ColorMode::Dark),
//! );
//! assert!(page.document().has_class("dark"));
//!
//! page.scope().toggle_theme();
//! let html = page.render().unwrap();
//! assert!(html.contains(r#"aria-pressed="false""#));
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod content;
mod error;
pub mod form;
pub mod logging;
pub mod page;

pub use error::SiteError;
