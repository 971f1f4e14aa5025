//! The template engine seam and its MiniJinja implementation.

use minijinja::{Environment, Value};

use crate::error::RenderError;

/// Something that turns named templates plus a JSON context into HTML.
pub trait TemplateEngine: Send + Sync {
    /// Registers `source` under `name`, replacing any previous template.
    ///
    /// Names ending in `.html` are HTML auto-escaped.
    fn register(&mut self, name: &str, source: &str) -> Result<(), RenderError>;

    fn contains(&self, name: &str) -> bool;

    /// Renders a registered template.
    fn render(&self, name: &str, context: &serde_json::Value) -> Result<String, RenderError>;

    /// Renders an unregistered template source (no auto-escaping).
    fn render_str(&self, source: &str, context: &serde_json::Value) -> Result<String, RenderError>;

    /// Registers every `(name, source)` pair, stopping at the first failure.
    fn register_all(&mut self, templates: &[(&str, &str)]) -> Result<(), RenderError> {
        for (name, source) in templates {
            self.register(name, source)?;
        }
        Ok(())
    }
}

/// [`TemplateEngine`] backed by a MiniJinja [`Environment`].
///
/// ```rust
/// use beacon_render::template::{MiniJinjaEngine, TemplateEngine};
/// use serde_json::json;
///
/// let mut engine = MiniJinjaEngine::new();
/// engine.register("link.html", r#"<a href="{{ id | anchor }}">{{ label }}</a>"#).unwrap();
///
/// let html = engine
///     .render("link.html", &json!({"id": "contact", "label": "Say <hi>"}))
///     .unwrap();
/// assert_eq!(html, r##"<a href="#contact">Say &lt;hi&gt;</a>"##);
/// ```
pub struct MiniJinjaEngine {
    env: Environment<'static>,
}

impl MiniJinjaEngine {
    pub fn new() -> Self {
        let mut env = Environment::new();
        register_filters(&mut env);
        Self { env }
    }

    /// The underlying environment, e.g. to add template functions.
    pub fn environment_mut(&mut self) -> &mut Environment<'static> {
        &mut self.env
    }
}

impl Default for MiniJinjaEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateEngine for MiniJinjaEngine {
    fn register(&mut self, name: &str, source: &str) -> Result<(), RenderError> {
        self.env
            .add_template_owned(name.to_string(), source.to_string())?;
        Ok(())
    }

    fn contains(&self, name: &str) -> bool {
        self.env.get_template(name).is_ok()
    }

    fn render(&self, name: &str, context: &serde_json::Value) -> Result<String, RenderError> {
        let template = self
            .env
            .get_template(name)
            .map_err(|err| RenderError::lookup(name, err))?;
        Ok(template.render(Value::from_serialize(context))?)
    }

    fn render_str(&self, source: &str, context: &serde_json::Value) -> Result<String, RenderError> {
        Ok(self.env.render_str(source, Value::from_serialize(context))?)
    }
}

/// Adds the site filters to `env`.
///
/// - `anchor`: `"contact"` becomes `"#contact"`. Values already starting with
///   `#` or containing `:` or `/` (paths, URLs) pass through.
/// - `aria_bool`: any value as `"true"` / `"false"` by truthiness.
pub fn register_filters(env: &mut Environment<'static>) {
    env.add_filter("anchor", |value: String| -> String {
        if value.starts_with('#') || value.contains(':') || value.contains('/') {
            value
        } else {
            format!("#{}", value)
        }
    });

    env.add_filter("aria_bool", |value: Value| -> String {
        value.is_true().to_string()
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn html_names_escape() {
        let mut engine = MiniJinjaEngine::new();
        engine.register("t.html", "<p>{{ text }}</p>").unwrap();
        let output = engine.render("t.html", &json!({"text": "<b>"})).unwrap();
        assert_eq!(output, "<p>&lt;b&gt;</p>");
    }

    #[test]
    fn other_names_do_not_escape() {
        let mut engine = MiniJinjaEngine::new();
        engine.register("t.txt", "{{ text }}").unwrap();
        assert_eq!(engine.render("t.txt", &json!({"text": "<b>"})).unwrap(), "<b>");
    }

    #[test]
    fn contains_reflects_registration() {
        let mut engine = MiniJinjaEngine::new();
        assert!(!engine.contains("a.html"));
        engine
            .register_all(&[("a.html", "A"), ("b.html", "{% include 'a.html' %}B")])
            .unwrap();
        assert!(engine.contains("a.html"));
        assert_eq!(engine.render("b.html", &json!({})).unwrap(), "AB");
    }

    #[test]
    fn missing_template() {
        let engine = MiniJinjaEngine::new();
        let err = engine
            .render("sections/pricing.html", &json!({}))
            .unwrap_err();
        assert!(matches!(&err, RenderError::TemplateNotFound(name) if name == "sections/pricing.html"));
        assert_eq!(err.to_string(), "no template named 'sections/pricing.html'");
    }

    #[test]
    fn broken_template_is_rejected_on_register() {
        let mut engine = MiniJinjaEngine::new();
        let err = engine.register("bad.html", "{% if %}").unwrap_err();
        assert!(matches!(err, RenderError::Template { .. }));
    }

    #[test]
    fn anchor_filter() {
        let engine = MiniJinjaEngine::new();
        let output = engine
            .render_str(
                "{{ 'about' | anchor }} {{ '#top' | anchor }} {{ 'https://x.io' | anchor }} {{ '/privacy' | anchor }}",
                &json!({}),
            )
            .unwrap();
        assert_eq!(output, "#about #top https://x.io /privacy");
    }

    #[test]
    fn aria_bool_filter() {
        let engine = MiniJinjaEngine::new();
        let output = engine
            .render_str(
                "{{ on | aria_bool }}/{{ off | aria_bool }}/{{ missing | aria_bool }}",
                &json!({"on": true, "off": false}),
            )
            .unwrap();
        assert_eq!(output, "true/false/false");
    }
}
