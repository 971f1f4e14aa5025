//! The root presentation node and the theme mirror that writes to it.
//!
//! A [`Document`] holds the page's root element (`<html>`): a class list and a
//! few attributes. The page template reads them back when it emits the opening
//! tag, so stylesheet rules keyed off `.dark` see whatever the theme scope last
//! applied.
//!
//! [`ThemeMirror`] is the only writer of the theme marker. A mirror without a
//! document models a non-interactive context and does nothing.
//!
//! ```rust
//! use std::sync::Arc;
//! use beacon_render::{ColorMode, Document, ThemeMirror, DARK_CLASS};
//!
//! let document = Arc::new(Document::new());
//! let mirror = ThemeMirror::attached(Arc::clone(&document));
//!
//! mirror.apply_theme(ColorMode::Dark);
//! assert!(document.has_class(DARK_CLASS));
//!
//! mirror.apply_theme(ColorMode::Light);
//! assert!(!document.has_class(DARK_CLASS));
//! ```

use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::theme::ColorMode;

/// Class marking the root element as dark.
pub const DARK_CLASS: &str = "dark";

/// Attribute carrying the resolved mode name (`light` / `dark`).
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Snapshot of the root element's classes and attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RootElement {
    classes: BTreeSet<String>,
    attributes: BTreeMap<String, String>,
}

impl RootElement {
    pub fn add_class(&mut self, class: &str) {
        if !self.classes.contains(class) {
            self.classes.insert(class.to_string());
        }
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.remove(class);
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(name.into(), value.into());
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(|s| s.as_str())
    }

    /// Classes joined with spaces, sorted, as they appear in `class="..."`.
    pub fn class_attr(&self) -> String {
        self.classes
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Attributes in name order.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// The page document. Share it as `Arc<Document>`.
#[derive(Debug, Default)]
pub struct Document {
    root: Mutex<RootElement>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the current root element.
    pub fn root(&self) -> RootElement {
        self.lock().clone()
    }

    /// Runs `f` with mutable access to the root element.
    pub fn with_root<R>(&self, f: impl FnOnce(&mut RootElement) -> R) -> R {
        f(&mut self.lock())
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.lock().has_class(class)
    }

    fn lock(&self) -> MutexGuard<'_, RootElement> {
        self.root.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Keeps the root element's theme marker consistent with a [`ColorMode`].
#[derive(Debug, Clone, Default)]
pub struct ThemeMirror {
    document: Option<Arc<Document>>,
}

impl ThemeMirror {
    /// A mirror writing to `document`.
    pub fn attached(document: Arc<Document>) -> Self {
        Self {
            document: Some(document),
        }
    }

    /// A mirror with no document; [`apply_theme`](Self::apply_theme) is a no-op.
    pub fn detached() -> Self {
        Self { document: None }
    }

    pub fn document(&self) -> Option<&Arc<Document>> {
        self.document.as_ref()
    }

    /// Sets the `dark` class iff `mode` is dark. Idempotent.
    pub fn apply_theme(&self, mode: ColorMode) {
        let Some(document) = &self.document else {
            return;
        };
        document.with_root(|root| {
            match mode {
                ColorMode::Dark => root.add_class(DARK_CLASS),
                ColorMode::Light => root.remove_class(DARK_CLASS),
            }
            root.set_attribute(THEME_ATTRIBUTE, mode.as_str());
        });
    }
}
