//! Page composition.
//!
//! A [`Page`] owns everything one rendered page needs: the site copy, the
//! [`ThemeScope`] created at its root, the [`Document`] the scope mirrors
//! into, and the contact form state. Every section template reads the theme
//! from the same scope snapshot, so header, sections and root element always
//! agree.
//!
//! ```rust
//! use beacon::content::SiteContent;
//! use beacon::page::{Page, SiteRenderer};
//! use beacon_render::theme::{NoPreference, ThemeOptions};
//! use beacon_render::ColorMode;
//!
//! let page = Page::new(
//!     SiteContent::builtin(),
//!     ThemeOptions::default().with_default(ColorMode::Dark),
//!     &NoPreference,
//! );
//! let html = SiteRenderer::new().unwrap().render(&page).unwrap();
//! assert!(html.contains(r#"<html lang="en" class="dark" data-theme="dark">"#));
//! ```

pub mod icons;
pub mod templates;

use std::sync::Arc;
use std::time::Duration;

use beacon_contact::DEFAULT_SUBMIT_DELAY;
use beacon_render::theme::AmbientPreference;
use beacon_render::{
    ColorMode, Document, MiniJinjaEngine, Palette, RenderError, TemplateEngine, ThemeMirror,
    ThemeOptions, ThemeScope,
};
use serde_json::json;

use crate::content::{SiteContent, SECTION_IDS};
use crate::form::ContactFormView;

pub use templates::{LAYOUT_TEMPLATE, SITE_TEMPLATES};

/// One page: content, theme scope, root element and form state.
#[derive(Debug)]
pub struct Page {
    content: SiteContent,
    scope: ThemeScope,
    document: Arc<Document>,
    follow_system: bool,
    form: ContactFormView,
    title: Option<String>,
    submit_delay: Duration,
}

impl Page {
    /// Creates the page root: a fresh document and a theme scope mirroring
    /// into it.
    pub fn new(content: SiteContent, options: ThemeOptions, ambient: &dyn AmbientPreference) -> Self {
        let document = Arc::new(Document::new());
        let scope = ThemeScope::initialize(
            options,
            ambient,
            ThemeMirror::attached(Arc::clone(&document)),
        );
        Self {
            content,
            scope,
            document,
            follow_system: options.default_mode.is_none() && !options.disable_system_preference,
            form: ContactFormView::new(),
            title: None,
            submit_delay: DEFAULT_SUBMIT_DELAY,
        }
    }

    /// Overrides the document title (defaults to the brand name).
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Delay the page's client-side form simulation waits before succeeding.
    pub fn with_submit_delay(mut self, delay: Duration) -> Self {
        self.submit_delay = delay;
        self
    }

    pub fn content(&self) -> &SiteContent {
        &self.content
    }

    /// The page's theme scope. Clones share state with the page.
    pub fn scope(&self) -> &ThemeScope {
        &self.scope
    }

    pub fn document(&self) -> &Arc<Document> {
        &self.document
    }

    pub fn form(&self) -> &ContactFormView {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ContactFormView {
        &mut self.form
    }

    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.content.brand.name)
    }

    /// Template context for the current state.
    pub fn context(&self) -> serde_json::Value {
        let state = self.scope.state();
        let root = self.document.root();
        let attributes: Vec<[&str; 2]> = root.attributes().map(|(k, v)| [k, v]).collect();
        let toggle_label = match state.current_mode.toggled() {
            ColorMode::Dark => "Switch to dark mode",
            ColorMode::Light => "Switch to light mode",
        };

        json!({
            "site": self.content,
            "title": self.title(),
            "sections": SECTION_IDS,
            "theme": {
                "mode": state.current_mode,
                "is_dark": state.current_mode.is_dark(),
                "system_preference": state.system_preference,
                "follow_system": self.follow_system,
                "toggle_label": toggle_label,
            },
            "root": {
                "class": root.class_attr(),
                "attributes": attributes,
            },
            "css": {
                "light": Palette::light().css_variables(),
                "dark": Palette::dark().css_variables(),
            },
            "form": self.form.context(),
            "contact_delay_ms": self.submit_delay.as_millis() as u64,
        })
    }

    /// Renders with a one-off [`SiteRenderer`].
    pub fn render(&self) -> Result<String, RenderError> {
        SiteRenderer::new()?.render(self)
    }
}

/// A template engine with the site templates and the `icon` function
/// registered.
pub struct SiteRenderer {
    engine: MiniJinjaEngine,
}

impl SiteRenderer {
    pub fn new() -> Result<Self, RenderError> {
        let mut engine = MiniJinjaEngine::new();
        engine
            .environment_mut()
            .add_function("icon", icons::icon_function);
        engine.register_all(SITE_TEMPLATES)?;
        Ok(Self { engine })
    }

    pub fn engine(&self) -> &MiniJinjaEngine {
        &self.engine
    }

    /// Renders the full page.
    pub fn render(&self, page: &Page) -> Result<String, RenderError> {
        let html = self.engine.render(LAYOUT_TEMPLATE, &page.context())?;
        tracing::debug!(
            mode = %page.scope().mode(),
            bytes = html.len(),
            "rendered page"
        );
        Ok(html)
    }

    /// Renders a single section (`"hero"`, `"contact"`, ...).
    pub fn render_section(&self, page: &Page, id: &str) -> Result<String, RenderError> {
        if !SECTION_IDS.contains(&id) {
            return Err(RenderError::TemplateNotFound(format!("sections/{id}.html")));
        }
        self.engine
            .render(&format!("sections/{id}.html"), &page.context())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use beacon_render::theme::{FixedPreference, NoPreference};

    fn page(options: ThemeOptions, ambient: &dyn AmbientPreference) -> Page {
        Page::new(SiteContent::builtin(), options, ambient)
    }

    #[test]
    fn every_template_is_registered() {
        let renderer = SiteRenderer::new().unwrap();
        for (name, _) in SITE_TEMPLATES {
            assert!(renderer.engine().contains(name), "{name}");
        }
    }

    #[test]
    fn scope_is_mirrored_at_construction() {
        let page = page(ThemeOptions::default(), &FixedPreference(ColorMode::Dark));
        assert!(page.document().has_class("dark"));
        assert_eq!(page.context()["root"]["class"], "dark");
    }

    #[test]
    fn context_tracks_scope_changes() {
        let page = page(ThemeOptions::default(), &NoPreference);
        assert_eq!(page.context()["theme"]["mode"], "light");

        page.scope().toggle_theme();
        let ctx = page.context();
        assert_eq!(ctx["theme"]["mode"], "dark");
        assert_eq!(ctx["theme"]["is_dark"], true);
        assert_eq!(ctx["theme"]["toggle_label"], "Switch to light mode");
        assert_eq!(ctx["root"]["attributes"][0][1], "dark");
    }

    #[test]
    fn follow_system_only_without_explicit_choice() {
        let auto = page(ThemeOptions::default(), &NoPreference);
        assert_eq!(auto.context()["theme"]["follow_system"], true);

        let fixed = page(ThemeOptions::default().with_default(ColorMode::Light), &NoPreference);
        assert_eq!(fixed.context()["theme"]["follow_system"], false);
    }

    #[test]
    fn title_defaults_to_brand() {
        let page = page(ThemeOptions::default(), &NoPreference);
        assert_eq!(page.title(), "Northwind Studio");
        assert_eq!(page.with_title("Home").title(), "Home");
    }

    #[test]
    fn unknown_section_is_an_error() {
        let renderer = SiteRenderer::new().unwrap();
        let page = page(ThemeOptions::default(), &NoPreference);
        assert!(matches!(
            renderer.render_section(&page, "pricing"),
            Err(RenderError::TemplateNotFound(_))
        ));
    }
}
