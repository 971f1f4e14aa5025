//! Template rendering.
//!
//! Pages are rendered through the [`TemplateEngine`] trait so the composition
//! layer never depends on MiniJinja directly. Templates registered under a
//! `.html` name are HTML auto-escaped.

mod engine;

pub use engine::{register_filters, MiniJinjaEngine, TemplateEngine};
