//! Site copy: brand, navigation and the five page sections.
//!
//! Content is plain YAML. The binary ships a default document
//! ([`DEFAULT_CONTENT`]); `--content FILE` or the config's `content` key
//! replaces it wholesale.
//!
//! ```rust
//! use beacon::content::SiteContent;
//!
//! let content = SiteContent::builtin();
//! assert_eq!(content.nav.len(), 4);
//! assert!(content.validate().is_ok());
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::SiteError;
use crate::page::icons::has_icon;

/// The embedded default site copy.
pub const DEFAULT_CONTENT: &str = include_str!("assets/content.yaml");

/// Section ids, in page order. Navigation targets must be one of these.
pub const SECTION_IDS: [&str; 5] = ["hero", "features", "services", "about", "contact"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteContent {
    pub brand: Brand,
    #[serde(default)]
    pub nav: Vec<NavLink>,
    pub hero: Hero,
    pub features: FeaturesSection,
    pub services: ServicesSection,
    pub about: AboutSection,
    pub contact: ContactSection,
    #[serde(default)]
    pub footer: Footer,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brand {
    pub name: String,
    #[serde(default)]
    pub tagline: String,
}

/// A header link pointing at a section id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    pub label: String,
    pub target: String,
}

/// A labelled link. `href` is a section id, a path or a full URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    #[serde(default)]
    pub eyebrow: Option<String>,
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    pub primary_cta: Link,
    #[serde(default)]
    pub secondary_cta: Option<Link>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    pub icon: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeaturesSection {
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub items: Vec<Feature>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub icon: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServicesSection {
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub items: Vec<Service>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AboutSection {
    pub title: String,
    #[serde(default)]
    pub paragraphs: Vec<String>,
    #[serde(default)]
    pub stats: Vec<Stat>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSection {
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Footer {
    #[serde(default)]
    pub copyright: String,
    #[serde(default)]
    pub links: Vec<Link>,
}

impl SiteContent {
    /// Parses content from YAML. Does not validate; see [`validate`](Self::validate).
    pub fn from_yaml(yaml: &str) -> Result<Self, SiteError> {
        serde_yaml::from_str(yaml).map_err(|err| SiteError::yaml("site content", err))
    }

    /// Reads, parses and validates a content file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SiteError> {
        let path = path.as_ref();
        let yaml = fs::read_to_string(path).map_err(|err| SiteError::io(path, err))?;
        let content: Self = serde_yaml::from_str(&yaml)
            .map_err(|err| SiteError::yaml(path.display().to_string(), err))?;
        content.validate()?;
        tracing::debug!(path = %path.display(), "loaded site content");
        Ok(content)
    }

    /// The embedded default content.
    pub fn builtin() -> Self {
        Self::from_yaml(DEFAULT_CONTENT).expect("embedded site content is valid YAML")
    }

    /// Checks that required copy is present and every navigation target or
    /// anchor link names a real section.
    ///
    /// Unknown icon names are not errors; they render the fallback icon and
    /// are logged.
    pub fn validate(&self) -> Result<(), SiteError> {
        let mut problems = Vec::new();

        let required = [
            ("brand.name", &self.brand.name),
            ("hero.title", &self.hero.title),
            ("features.title", &self.features.title),
            ("services.title", &self.services.title),
            ("about.title", &self.about.title),
            ("contact.title", &self.contact.title),
            ("contact.email", &self.contact.email),
        ];
        for (what, value) in required {
            if value.trim().is_empty() {
                problems.push(format!("{what} must not be empty"));
            }
        }

        for link in &self.nav {
            if !SECTION_IDS.contains(&link.target.as_str()) {
                problems.push(format!(
                    "nav link '{}' targets unknown section '{}'",
                    link.label, link.target
                ));
            }
        }

        let ctas = std::iter::once(&self.hero.primary_cta).chain(self.hero.secondary_cta.as_ref());
        for cta in ctas {
            if let Some(section) = anchor_target(&cta.href) {
                if !SECTION_IDS.contains(&section) {
                    problems.push(format!(
                        "hero link '{}' points at unknown section '{}'",
                        cta.label, section
                    ));
                }
            }
        }

        let icons = self
            .features
            .items
            .iter()
            .map(|f| f.icon.as_str())
            .chain(self.services.items.iter().map(|s| s.icon.as_str()));
        for icon in icons {
            if !has_icon(icon) {
                tracing::warn!(icon, "unknown icon, using fallback");
            }
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(SiteError::InvalidContent(problems))
        }
    }
}

impl Default for SiteContent {
    fn default() -> Self {
        Self::builtin()
    }
}

/// The section id an in-page link refers to, if it is one.
///
/// `"contact"` and `"#contact"` are anchors; paths and URLs are not.
fn anchor_target(href: &str) -> Option<&str> {
    if let Some(id) = href.strip_prefix('#') {
        return Some(id);
    }
    if href.contains(':') || href.contains('/') {
        None
    } else {
        Some(href)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_content_is_valid() {
        let content = SiteContent::builtin();
        content.validate().unwrap();
        assert_eq!(content.brand.name, "Northwind Studio");
        assert_eq!(content.features.items.len(), 4);
        assert_eq!(content.services.items.len(), 3);
    }

    #[test]
    fn builtin_icons_are_known() {
        let content = SiteContent::builtin();
        for feature in &content.features.items {
            assert!(has_icon(&feature.icon), "{}", feature.icon);
        }
        for service in &content.services.items {
            assert!(has_icon(&service.icon), "{}", service.icon);
        }
    }

    #[test]
    fn nav_targets_are_sections() {
        let content = SiteContent::builtin();
        for link in &content.nav {
            assert!(SECTION_IDS.contains(&link.target.as_str()));
        }
    }

    #[test]
    fn unknown_nav_target_is_rejected() {
        let mut content = SiteContent::builtin();
        content.nav.push(NavLink {
            label: "Blog".into(),
            target: "blog".into(),
        });
        let err = content.validate().unwrap_err();
        assert!(err.to_string().contains("unknown section 'blog'"));
    }

    #[test]
    fn every_problem_is_reported() {
        let mut content = SiteContent::builtin();
        content.hero.title = "  ".into();
        content.contact.email.clear();
        content.hero.primary_cta.href = "#pricing".into();

        match content.validate() {
            Err(SiteError::InvalidContent(problems)) => assert_eq!(problems.len(), 3),
            other => panic!("expected InvalidContent, got {other:?}"),
        }
    }

    #[test]
    fn external_links_are_not_anchors() {
        assert_eq!(anchor_target("contact"), Some("contact"));
        assert_eq!(anchor_target("#about"), Some("about"));
        assert_eq!(anchor_target("/privacy"), None);
        assert_eq!(anchor_target("mailto:hi@example.com"), None);
    }

    #[test]
    fn missing_required_key_is_a_yaml_error() {
        let err = SiteContent::from_yaml("brand:\n  name: X\n").unwrap_err();
        assert!(matches!(err, SiteError::Yaml { .. }));
    }
}
