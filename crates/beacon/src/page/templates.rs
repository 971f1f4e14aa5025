//! Page templates.
//!
//! Templates are stored as `(name, content)` pairs and registered with the
//! engine by [`SiteRenderer`](super::SiteRenderer). Every name ends in
//! `.html`, so all interpolated values are HTML-escaped.
//!
//! Besides the page context, templates can use:
//! - the `icon(name)` function (inline SVG, see [`icons`](super::icons));
//! - the `anchor` and `aria_bool` filters;
//! - the macros in `components.html`.

/// Entry point rendered for a full page.
pub const LAYOUT_TEMPLATE: &str = "layout.html";

pub const SITE_TEMPLATES: &[(&str, &str)] = &[
    (LAYOUT_TEMPLATE, LAYOUT),
    ("components.html", COMPONENTS),
    ("header.html", HEADER),
    ("footer.html", FOOTER),
    ("sections/hero.html", HERO),
    ("sections/features.html", FEATURES),
    ("sections/services.html", SERVICES),
    ("sections/about.html", ABOUT),
    ("sections/contact.html", CONTACT),
];

/// Document shell.
///
/// The palette of each mode becomes a set of CSS custom properties; the dark
/// set applies whenever the root element carries the `dark` class.
const LAYOUT: &str = r##"<!DOCTYPE html>
<html lang="en"{% if root.class %} class="{{ root.class }}"{% endif %}{% for name, value in root.attributes %} {{ name }}="{{ value }}"{% endfor %}>
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<meta name="color-scheme" content="light dark">
<title>{{ title }}</title>
<style>
:root { {{ css.light | safe }} }
:root.dark { {{ css.dark | safe }} }
*, *::before, *::after { box-sizing: border-box; }
body { margin: 0; font: 16px/1.6 system-ui, sans-serif; background: var(--color-background); color: var(--color-foreground); transition: background-color .2s, color .2s; }
a { color: var(--color-primary); }
.site-header { position: sticky; top: 0; display: flex; align-items: center; gap: 2rem; padding: 1rem 2rem; background: var(--color-background); border-bottom: 1px solid var(--color-border); }
.site-header nav ul, .site-footer ul { display: flex; gap: 1.5rem; list-style: none; margin: 0; padding: 0; }
.site-header nav a { color: var(--color-muted); text-decoration: none; }
.brand { font-weight: 700; color: var(--color-foreground); text-decoration: none; }
.theme-toggle { margin-left: auto; background: var(--color-surface); border: 1px solid var(--color-border); border-radius: 999px; padding: .4rem; color: var(--color-foreground); cursor: pointer; }
.theme-toggle .icon-dark, :root.dark .theme-toggle .icon-light { display: none; }
:root.dark .theme-toggle .icon-dark { display: inline; }
.section { padding: 5rem 2rem; max-width: 72rem; margin: 0 auto; }
.section-alt { background: var(--color-surface); max-width: none; }
.section-header p, .lead, .muted { color: var(--color-muted); }
.eyebrow { color: var(--color-primary); font-weight: 600; }
.hero h1 { font-size: clamp(2.25rem, 5vw, 3.75rem); line-height: 1.1; margin: .5rem 0 1rem; }
.actions { display: flex; gap: 1rem; flex-wrap: wrap; }
.btn { display: inline-block; padding: .75rem 1.5rem; border-radius: .5rem; border: 1px solid transparent; font-weight: 600; text-decoration: none; cursor: pointer; }
.btn-primary { background: var(--color-primary); color: var(--color-primary-foreground); }
.btn-secondary { background: var(--color-surface); color: var(--color-foreground); border-color: var(--color-border); }
.btn[disabled] { opacity: .7; cursor: progress; }
.grid { display: grid; gap: 1.5rem; grid-template-columns: repeat(auto-fit, minmax(15rem, 1fr)); }
.card { background: var(--color-surface); border: 1px solid var(--color-border); border-radius: .75rem; padding: 1.5rem; }
.card p { color: var(--color-muted); }
.card-icon, .contact-details .icon { color: var(--color-primary); }
.card-list { list-style: none; padding: 0; }
.card-list .icon { width: 1rem; height: 1rem; margin-right: .5rem; color: var(--color-primary); }
.stats { display: flex; gap: 3rem; }
.stats div { display: flex; flex-direction: column-reverse; }
.stats dd { margin: 0; font-size: 2rem; font-weight: 700; color: var(--color-primary); }
.stats dt { color: var(--color-muted); }
.contact-grid { display: grid; gap: 3rem; grid-template-columns: 1fr 2fr; }
.contact-details { list-style: none; padding: 0; }
.contact-details li { display: flex; gap: .75rem; margin-bottom: 1rem; }
.field { display: flex; flex-direction: column; gap: .25rem; margin-bottom: 1rem; }
.field input, .field textarea { font: inherit; padding: .6rem .75rem; border-radius: .5rem; border: 1px solid var(--color-border); background: var(--color-background); color: var(--color-foreground); }
.field-error { margin: 0; font-size: .875rem; }
.alert { display: flex; gap: .5rem; padding: .75rem 1rem; border-radius: .5rem; border: 1px solid var(--color-border); background: var(--color-surface); margin-bottom: 1rem; }
.site-footer { display: flex; justify-content: space-between; padding: 2rem; border-top: 1px solid var(--color-border); color: var(--color-muted); }
@media (max-width: 48rem) { .contact-grid { grid-template-columns: 1fr; } .site-header nav { display: none; } }
</style>
</head>
<body data-follow-system="{{ theme.follow_system | aria_bool }}">
{% include "header.html" %}
<main>
{% include "sections/hero.html" %}
{% include "sections/features.html" %}
{% include "sections/services.html" %}
{% include "sections/about.html" %}
{% include "sections/contact.html" %}
</main>
{% include "footer.html" %}
<script>
(function () {
  var root = document.documentElement;
  var toggle = document.querySelector("[data-theme-toggle]");
  function apply(mode) {
    root.classList.toggle("dark", mode === "dark");
    root.setAttribute("data-theme", mode);
    if (toggle) { toggle.setAttribute("aria-pressed", String(mode === "dark")); }
  }
  if (document.body.getAttribute("data-follow-system") === "true" && window.matchMedia) {
    apply(window.matchMedia("(prefers-color-scheme: dark)").matches ? "dark" : "light");
  }
  if (toggle) {
    toggle.addEventListener("click", function () {
      apply(root.classList.contains("dark") ? "light" : "dark");
    });
  }
  var form = document.querySelector("[data-contact-form]");
  if (!form) { return; }
  var status = form.querySelector(".form-status");
  var button = form.querySelector("button[type=submit]");
  function show(kind, text) {
    status.innerHTML = "";
    var box = document.createElement("div");
    box.className = "alert alert-" + kind;
    box.setAttribute("role", kind === "error" ? "alert" : "status");
    box.textContent = text;
    status.appendChild(box);
  }
  var rules = JSON.parse(form.getAttribute("data-rules") || "[]");
  function passes(rule, value) {
    if (rule.kind === "required") { return value.length > 0; }
    if (!value) { return true; }
    if (rule.kind === "min_chars") { return Array.from(value).length >= rule.min; }
    if (rule.kind === "pattern") { return new RegExp(rule.pattern).test(value); }
    return true;
  }
  function markField(key, message) {
    var input = form.elements[key];
    var field = input.closest(".field");
    var id = "contact-" + key + "-error";
    var note = document.getElementById(id);
    if (note) { note.remove(); }
    field.classList.toggle("field-invalid", !!message);
    if (!message) {
      input.removeAttribute("aria-invalid");
      input.removeAttribute("aria-describedby");
      return;
    }
    note = document.createElement("p");
    note.className = "field-error";
    note.id = id;
    note.textContent = message;
    field.appendChild(note);
    input.setAttribute("aria-invalid", "true");
    input.setAttribute("aria-describedby", id);
  }
  function checkFields() {
    var errors = {};
    rules.forEach(function (rule) {
      if (errors[rule.field]) { return; }
      if (!passes(rule, form.elements[rule.field].value.trim())) {
        errors[rule.field] = rule.message;
      }
    });
    ["name", "email", "message"].forEach(function (key) { markField(key, errors[key]); });
    return Object.keys(errors).length === 0;
  }
  form.addEventListener("submit", function (event) {
    event.preventDefault();
    if (button.disabled) { return; }
    if (!checkFields()) { status.innerHTML = ""; return; }
    var missing = ["name", "email", "message"].some(function (key) {
      return !form.elements[key].value;
    });
    if (missing) { show("error", "All fields are required"); return; }
    button.disabled = true;
    button.textContent = "Sending...";
    setTimeout(function () {
      form.reset();
      button.disabled = false;
      button.textContent = "Send message";
      show("success", form.getAttribute("data-success-message"));
    }, Number(form.getAttribute("data-submit-delay")) || 0);
  });
})();
</script>
</body>
</html>
"##;

/// Reusable UI pieces. Macros only see their arguments plus the `icon`
/// function and the filters.
const COMPONENTS: &str = r##"{% macro button(label, href="", variant="primary", type="button", disabled=false) -%}
{% if href %}<a class="btn btn-{{ variant }}" href="{{ href | anchor }}">{{ label }}</a>
{%- else %}<button class="btn btn-{{ variant }}" type="{{ type }}"{% if disabled %} disabled aria-busy="true"{% endif %}>{{ label }}</button>
{%- endif %}
{%- endmacro %}

{% macro card(title, description, icon_name="", items=[]) -%}
<article class="card">
{%- if icon_name %}<div class="card-icon">{{ icon(icon_name) }}</div>{% endif -%}
<h3>{{ title }}</h3><p>{{ description }}</p>
{%- if items %}<ul class="card-list">{% for item in items %}<li>{{ icon("check") }}{{ item }}</li>{% endfor %}</ul>{% endif -%}
</article>
{%- endmacro %}

{% macro input(name, label, type="text", value="", error="") -%}
<div class="field{% if error %} field-invalid{% endif %}">
<label for="contact-{{ name }}">{{ label }}</label>
<input id="contact-{{ name }}" name="{{ name }}" type="{{ type }}" value="{{ value }}" required
{%- if error %} aria-invalid="true" aria-describedby="contact-{{ name }}-error"{% endif %}>
{%- if error %}
<p class="field-error" id="contact-{{ name }}-error">{{ error }}</p>
{%- endif %}
</div>
{%- endmacro %}

{% macro textarea(name, label, value="", error="", rows=5) -%}
<div class="field{% if error %} field-invalid{% endif %}">
<label for="contact-{{ name }}">{{ label }}</label>
<textarea id="contact-{{ name }}" name="{{ name }}" rows="{{ rows }}" required
{%- if error %} aria-invalid="true" aria-describedby="contact-{{ name }}-error"{% endif %}>{{ value }}</textarea>
{%- if error %}
<p class="field-error" id="contact-{{ name }}-error">{{ error }}</p>
{%- endif %}
</div>
{%- endmacro %}

{% macro alert(message, kind="info") -%}
<div class="alert alert-{{ kind }}" role="{% if kind == "error" %}alert{% else %}status{% endif %}">
{{- icon("check" if kind == "success" else "alert") }}<span>{{ message }}</span></div>
{%- endmacro %}
"##;

const HEADER: &str = r##"<header class="site-header">
<a class="brand" href="#hero">{{ site.brand.name }}</a>
<nav aria-label="Main"><ul>
{%- for link in site.nav %}<li><a href="{{ link.target | anchor }}">{{ link.label }}</a></li>{% endfor -%}
</ul></nav>
<button type="button" class="theme-toggle" data-theme-toggle aria-label="Toggle dark mode" aria-pressed="{{ theme.is_dark | aria_bool }}" title="{{ theme.toggle_label }}">
<span class="icon-light">{{ icon("sun") }}</span><span class="icon-dark">{{ icon("moon") }}</span>
</button>
</header>
"##;

const FOOTER: &str = r##"<footer class="site-footer">
<p>{{ site.footer.copyright }}</p>
{%- if site.footer.links %}
<nav aria-label="Footer"><ul>
{%- for link in site.footer.links %}<li><a href="{{ link.href | anchor }}">{{ link.label }}</a></li>{% endfor -%}
</ul></nav>
{%- endif %}
</footer>
"##;

const HERO: &str = r##"{% import "components.html" as ui -%}
<section id="hero" class="section hero">
{%- if site.hero.eyebrow %}
<p class="eyebrow">{{ site.hero.eyebrow }}</p>
{%- endif %}
<h1>{{ site.hero.title }}</h1>
<p class="lead">{{ site.hero.subtitle }}</p>
<div class="actions">
{{ ui.button(site.hero.primary_cta.label, href=site.hero.primary_cta.href) }}
{%- if site.hero.secondary_cta %}
{{ ui.button(site.hero.secondary_cta.label, href=site.hero.secondary_cta.href, variant="secondary") }}
{%- endif %}
</div>
</section>
"##;

const FEATURES: &str = r##"{% import "components.html" as ui -%}
<section id="features" class="section">
<header class="section-header"><h2>{{ site.features.title }}</h2>
{%- if site.features.subtitle %}<p>{{ site.features.subtitle }}</p>{% endif %}</header>
<div class="grid">
{%- for item in site.features.items %}
{{ ui.card(item.title, item.description, icon_name=item.icon) }}
{%- endfor %}
</div>
</section>
"##;

const SERVICES: &str = r##"{% import "components.html" as ui -%}
<section id="services" class="section section-alt">
<header class="section-header"><h2>{{ site.services.title }}</h2>
{%- if site.services.subtitle %}<p>{{ site.services.subtitle }}</p>{% endif %}</header>
<div class="grid">
{%- for item in site.services.items %}
{{ ui.card(item.title, item.description, icon_name=item.icon, items=item.highlights) }}
{%- endfor %}
</div>
</section>
"##;

const ABOUT: &str = r##"<section id="about" class="section">
<h2>{{ site.about.title }}</h2>
{%- for paragraph in site.about.paragraphs %}
<p>{{ paragraph }}</p>
{%- endfor %}
{%- if site.about.stats %}
<dl class="stats">
{%- for stat in site.about.stats %}<div><dt>{{ stat.label }}</dt><dd>{{ stat.value }}</dd></div>{% endfor -%}
</dl>
{%- endif %}
</section>
"##;

/// Contact details plus the form, rendered from the form view state.
const CONTACT: &str = r##"{% import "components.html" as ui -%}
<section id="contact" class="section section-alt">
<header class="section-header"><h2>{{ site.contact.title }}</h2>
{%- if site.contact.subtitle %}<p>{{ site.contact.subtitle }}</p>{% endif %}</header>
<div class="contact-grid">
<ul class="contact-details">
<li>{{ icon("mail") }}<a href="mailto:{{ site.contact.email }}">{{ site.contact.email }}</a></li>
{%- if site.contact.phone %}
<li>{{ icon("phone") }}<span>{{ site.contact.phone }}</span></li>
{%- endif %}
{%- if site.contact.address %}
<li>{{ icon("map-pin") }}<span>{{ site.contact.address }}</span></li>
{%- endif %}
</ul>
<form class="contact-form" action="#contact" method="post" novalidate data-contact-form data-submit-delay="{{ contact_delay_ms }}" data-status="{{ form.status }}" data-success-message="{{ form.success_text }}" data-rules="{{ form.rules_json }}">
{{ ui.input("name", "Name", value=form.values.name, error=form.errors.name) }}
{{ ui.input("email", "Email", type="email", value=form.values.email, error=form.errors.email) }}
{{ ui.textarea("message", "Message", value=form.values.message, error=form.errors.message) }}
<div class="form-status" aria-live="polite">
{%- if form.success %}{{ ui.alert(form.success, kind="success") }}
{%- elif form.error %}{{ ui.alert(form.error, kind="error") }}
{%- endif -%}
</div>
{{ ui.button(form.submit_label, type="submit", disabled=form.submitting) }}
</form>
</div>
</section>
"##;
