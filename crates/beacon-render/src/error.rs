//! Rendering errors.
//!
//! [`RenderError`] hides MiniJinja's error type from callers: the page layer
//! only needs to know whether a template is missing, broken, or fed a context
//! it cannot represent.

use std::fmt;

#[derive(Debug)]
pub enum RenderError {
    /// A template failed to parse or evaluate.
    Template {
        /// Template the failure was reported for, when known.
        name: Option<String>,
        message: String,
    },

    /// Nothing is registered under this name.
    TemplateNotFound(String),

    /// The page context could not be converted into template values.
    Context(String),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::Template {
                name: Some(name),
                message,
            } => write!(f, "error in template '{}': {}", name, message),
            RenderError::Template { name: None, message } => {
                write!(f, "template error: {}", message)
            }
            RenderError::TemplateNotFound(name) => write!(f, "no template named '{}'", name),
            RenderError::Context(msg) => write!(f, "invalid page context: {}", msg),
        }
    }
}

impl std::error::Error for RenderError {}

impl RenderError {
    /// Converts a lookup failure for `name`, which MiniJinja does not carry.
    pub(crate) fn lookup(name: &str, err: minijinja::Error) -> Self {
        match err.kind() {
            minijinja::ErrorKind::TemplateNotFound => RenderError::TemplateNotFound(name.to_string()),
            _ => err.into(),
        }
    }
}

/// Missing includes inside a template surface as [`RenderError::Template`],
/// reported against the including template.
impl From<minijinja::Error> for RenderError {
    fn from(err: minijinja::Error) -> Self {
        match err.kind() {
            minijinja::ErrorKind::BadSerialization => RenderError::Context(err.to_string()),
            _ => RenderError::Template {
                name: err.name().map(str::to_string),
                message: err.to_string(),
            },
        }
    }
}
