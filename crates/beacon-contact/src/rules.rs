//! Field-level rules enforced by the form before it submits.
//!
//! These are presentation checks: they produce one message per field so the
//! form can annotate its inputs. They do not replace
//! [`validate`](crate::validate), which re-checks presence on its own.
//!
//! ```rust
//! use beacon_contact::{ContactFields, Field, FieldRules};
//!
//! let rules = FieldRules::standard();
//! let errors = rules.check(&ContactFields::new().with_name("Ada").with_email("nope"));
//!
//! assert_eq!(errors.get(Field::Email), Some("Please enter a valid email address"));
//! assert_eq!(errors.get(Field::Message), Some("Message is required"));
//! assert_eq!(errors.get(Field::Name), None);
//! ```

use std::collections::BTreeMap;
use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::fields::{ContactFields, Field};

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

/// Returns `true` if `value` looks like `local@domain.tld`.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

/// Validator function type.
type RuleFn = Box<dyn Fn(&str) -> bool + Send + Sync>;

struct Rule {
    field: Field,
    check: RuleFn,
    message: String,
    skip_blank: bool,
    client: Option<ClientCheck>,
}

/// The browser-side form of a rule.
///
/// Patterns use the syntax shared by `regex` and JavaScript `RegExp`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ClientCheck {
    Required,
    MinChars { min: usize },
    Pattern { pattern: String },
}

/// A rule as the rendered page evaluates it.
///
/// Like [`FieldRules::check`], the page trims the value, skips non-required
/// checks on blank values and keeps the first failure per field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClientRule {
    pub field: Field,
    #[serde(flatten)]
    pub check: ClientCheck,
    pub message: String,
}

/// Ordered per-field rules. The first failing rule of a field wins.
pub struct FieldRules {
    rules: Vec<Rule>,
}

impl FieldRules {
    /// No rules at all.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// The rules the site's contact form uses:
    ///
    /// - every field is required;
    /// - `name` has at least 2 characters;
    /// - `email` matches `local@domain.tld`;
    /// - `message` has at least 10 characters.
    pub fn standard() -> Self {
        let mut rules = Self::new();
        for field in Field::ALL {
            rules = rules.require(field);
        }
        rules
            .min_chars(Field::Name, 2, "Name must be at least 2 characters")
            .email(Field::Email, "Please enter a valid email address")
            .min_chars(Field::Message, 10, "Message must be at least 10 characters")
    }

    /// Adds a rule for `field`.
    ///
    /// Rules run on the trimmed value and only when the field is non-empty,
    /// except for [`require`](Self::require). A custom rule only runs here;
    /// it has no [`ClientRule`].
    pub fn rule<F>(self, field: Field, check: F, message: impl Into<String>) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        self.push(field, Box::new(check), message.into(), true, None)
    }

    /// Requires `field` to be present and not blank.
    pub fn require(self, field: Field) -> Self {
        let message = format!("{} is required", field.label());
        self.push(
            field,
            Box::new(|value| !value.is_empty()),
            message,
            false,
            Some(ClientCheck::Required),
        )
    }

    /// Requires at least `min` characters in `field`.
    pub fn min_chars(self, field: Field, min: usize, message: impl Into<String>) -> Self {
        self.push(
            field,
            Box::new(move |value| value.chars().count() >= min),
            message.into(),
            true,
            Some(ClientCheck::MinChars { min }),
        )
    }

    /// Requires `field` to look like `local@domain.tld`.
    pub fn email(self, field: Field, message: impl Into<String>) -> Self {
        self.push(
            field,
            Box::new(is_valid_email),
            message.into(),
            true,
            Some(ClientCheck::Pattern {
                pattern: EMAIL_PATTERN.as_str().to_string(),
            }),
        )
    }

    fn push(
        mut self,
        field: Field,
        check: RuleFn,
        message: String,
        skip_blank: bool,
        client: Option<ClientCheck>,
    ) -> Self {
        self.rules.push(Rule {
            field,
            check,
            message,
            skip_blank,
            client,
        });
        self
    }

    /// The rules the rendered page can run, in evaluation order.
    pub fn client_rules(&self) -> Vec<ClientRule> {
        self.rules
            .iter()
            .filter_map(|rule| {
                rule.client.clone().map(|check| ClientRule {
                    field: rule.field,
                    check,
                    message: rule.message.clone(),
                })
            })
            .collect()
    }

    /// Runs every rule and collects the first failure per field.
    pub fn check(&self, fields: &ContactFields) -> FieldErrors {
        let mut errors = FieldErrors::default();
        for rule in &self.rules {
            if errors.get(rule.field).is_some() {
                continue;
            }
            let value = fields.get(rule.field).unwrap_or("").trim();
            if value.is_empty() && rule.skip_blank {
                continue;
            }
            if !(rule.check)(value) {
                errors.insert(rule.field, rule.message.clone());
            }
        }
        errors
    }
}

impl Default for FieldRules {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Debug for FieldRules {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldRules")
            .field("rules", &self.rules.len())
            .finish()
    }
}

/// Per-field error messages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: BTreeMap<Field, String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }

    /// Errors in form order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.errors.iter().map(|(field, msg)| (*field, msg.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactFields {
        ContactFields::new()
            .with_name("Ada")
            .with_email("ada@example.com")
            .with_message("I would like a quote for a new site.")
    }

    #[test]
    fn valid_form_has_no_errors() {
        assert!(FieldRules::standard().check(&filled()).is_empty());
    }

    #[test]
    fn empty_form_reports_required_for_all() {
        let errors = FieldRules::standard().check(&ContactFields::new());
        assert_eq!(errors.len(), 3);
        assert_eq!(errors.get(Field::Name), Some("Name is required"));
        assert_eq!(errors.get(Field::Email), Some("Email is required"));
        assert_eq!(errors.get(Field::Message), Some("Message is required"));
    }

    #[test]
    fn blank_counts_as_missing() {
        let errors = FieldRules::standard().check(&filled().with_name("   "));
        assert_eq!(errors.get(Field::Name), Some("Name is required"));
    }

    #[test]
    fn short_values_are_rejected() {
        let errors = FieldRules::standard().check(&filled().with_name("A").with_message("Hi"));
        assert_eq!(errors.get(Field::Name), Some("Name must be at least 2 characters"));
        assert_eq!(
            errors.get(Field::Message),
            Some("Message must be at least 10 characters")
        );
    }

    #[test]
    fn email_pattern() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last+tag@sub.example.org"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("ada@@example.com"));
    }

    #[test]
    fn custom_rule_only_runs_on_non_empty_values() {
        let rules = FieldRules::new().rule(Field::Name, |v| v.starts_with('A'), "Must start with A");
        assert!(rules.check(&ContactFields::new()).is_empty());
        assert_eq!(
            rules.check(&ContactFields::new().with_name("Bob")).get(Field::Name),
            Some("Must start with A")
        );
    }

    #[test]
    fn standard_rules_are_all_client_side() {
        let client = FieldRules::standard().client_rules();
        assert_eq!(client.len(), 6);
        assert_eq!(
            client[4],
            ClientRule {
                field: Field::Email,
                check: ClientCheck::Pattern {
                    pattern: r"^[^\s@]+@[^\s@]+\.[^\s@]+$".to_string()
                },
                message: "Please enter a valid email address".to_string(),
            }
        );
        assert!(client.contains(&ClientRule {
            field: Field::Message,
            check: ClientCheck::MinChars { min: 10 },
            message: "Message must be at least 10 characters".to_string(),
        }));
    }

    #[test]
    fn custom_rules_stay_server_side() {
        let rules = FieldRules::new()
            .require(Field::Name)
            .rule(Field::Name, |v| v.starts_with('A'), "Must start with A");
        let client = rules.client_rules();
        assert_eq!(client.len(), 1);
        assert_eq!(client[0].check, ClientCheck::Required);
    }

    #[test]
    fn client_rule_json_shape() {
        let rule = ClientRule {
            field: Field::Name,
            check: ClientCheck::MinChars { min: 2 },
            message: "Too short".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&rule).unwrap(),
            serde_json::json!({"field": "name", "kind": "min_chars", "min": 2, "message": "Too short"})
        );
    }

    #[test]
    fn iter_is_in_form_order() {
        let errors = FieldRules::standard().check(&ContactFields::new());
        let order: Vec<Field> = errors.iter().map(|(f, _)| f).collect();
        assert_eq!(order, vec![Field::Name, Field::Email, Field::Message]);
    }
}
