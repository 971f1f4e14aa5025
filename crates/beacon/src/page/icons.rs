//! Inline SVG icons.
//!
//! Icons are referenced by name from content and templates. Unknown names
//! render [`FALLBACK_ICON`] so a typo never breaks the page.

use minijinja::Value;

/// Icon rendered for names missing from [`ICONS`].
pub const FALLBACK_ICON: &str = "dot";

/// `(name, svg body)` pairs. Bodies are drawn on a 24x24 stroke grid.
pub const ICONS: &[(&str, &str)] = &[
    ("bolt", r#"<path d="M13 2 3 14h9l-1 8 10-12h-9l1-8z"/>"#),
    (
        "shield",
        r#"<path d="M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10z"/><path d="m9 12 2 2 4-4"/>"#,
    ),
    (
        "palette",
        r#"<circle cx="13.5" cy="6.5" r="1.5"/><circle cx="17.5" cy="10.5" r="1.5"/><circle cx="8.5" cy="7.5" r="1.5"/><circle cx="6.5" cy="12.5" r="1.5"/><path d="M12 2a10 10 0 0 0 0 20c1.1 0 2-.9 2-2 0-.5-.2-1-.5-1.3-.3-.4-.5-.8-.5-1.3 0-1.1.9-2 2-2h2.4A5.6 5.6 0 0 0 22 9.8C22 5.5 17.5 2 12 2z"/>"#,
    ),
    (
        "chart",
        r#"<path d="M3 3v18h18"/><path d="m19 9-5 5-4-4-3 3"/>"#,
    ),
    (
        "code",
        r#"<polyline points="16 18 22 12 16 6"/><polyline points="8 6 2 12 8 18"/>"#,
    ),
    (
        "rocket",
        r#"<path d="M4.5 16.5c-1.5 1.3-2 5-2 5s3.7-.5 5-2c.7-.8.7-2.1-.1-2.9a2.2 2.2 0 0 0-2.9-.1z"/><path d="m12 15-3-3a22 22 0 0 1 2-3.9A12.9 12.9 0 0 1 22 2c0 2.7-.8 7.5-6 11a22.4 22.4 0 0 1-4 2z"/>"#,
    ),
    (
        "sun",
        r#"<circle cx="12" cy="12" r="4"/><path d="M12 2v2M12 20v2M4.9 4.9l1.4 1.4M17.7 17.7l1.4 1.4M2 12h2M20 12h2M6.3 17.7l-1.4 1.4M19.1 4.9l-1.4 1.4"/>"#,
    ),
    ("moon", r#"<path d="M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9z"/>"#),
    (
        "mail",
        r#"<rect width="20" height="16" x="2" y="4" rx="2"/><path d="m22 7-10 6L2 7"/>"#,
    ),
    (
        "phone",
        r#"<path d="M22 16.9v3a2 2 0 0 1-2.2 2 19.8 19.8 0 0 1-8.6-3.1 19.5 19.5 0 0 1-6-6A19.8 19.8 0 0 1 2.1 4.2 2 2 0 0 1 4.1 2h3a2 2 0 0 1 2 1.7c.1.9.4 1.8.7 2.7a2 2 0 0 1-.5 2.1L8 9.8a16 16 0 0 0 6 6l1.3-1.3a2 2 0 0 1 2.1-.4c.9.3 1.8.6 2.7.7a2 2 0 0 1 1.7 2z"/>"#,
    ),
    (
        "map-pin",
        r#"<path d="M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0z"/><circle cx="12" cy="10" r="3"/>"#,
    ),
    ("check", r#"<path d="M20 6 9 17l-5-5"/>"#),
    (
        "alert",
        r#"<circle cx="12" cy="12" r="10"/><path d="M12 8v4M12 16h.01"/>"#,
    ),
    ("dot", r#"<circle cx="12" cy="12" r="4"/>"#),
];

/// Returns `true` if `name` is a known icon.
pub fn has_icon(name: &str) -> bool {
    ICONS.iter().any(|(key, _)| *key == name)
}

fn icon_body(name: &str) -> &'static str {
    let lookup = |wanted: &str| ICONS.iter().find(|(key, _)| *key == wanted).map(|(_, body)| *body);
    lookup(name)
        .or_else(|| lookup(FALLBACK_ICON))
        .unwrap_or_default()
}

/// Full `<svg>` markup for `name`, decorative (hidden from assistive tech).
pub fn icon_svg(name: &str) -> String {
    format!(
        r#"<svg class="icon icon-{}" xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">{}</svg>"#,
        if has_icon(name) { name } else { FALLBACK_ICON },
        icon_body(name)
    )
}

/// The `icon(name)` template function.
pub(crate) fn icon_function(name: &str) -> Value {
    Value::from_safe_string(icon_svg(name))
}
