//! Application error type.

use std::io;
use std::path::PathBuf;

use beacon_render::RenderError;
use thiserror::Error;

/// Errors raised while loading site inputs or rendering the page.
#[derive(Debug, Error)]
pub enum SiteError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid YAML in {origin}: {source}")]
    Yaml {
        origin: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("invalid site content: {}", .0.join("; "))]
    InvalidContent(Vec<String>),

    #[error(transparent)]
    Render(#[from] RenderError),
}

impl SiteError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        SiteError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn yaml(origin: impl Into<String>, source: serde_yaml::Error) -> Self {
        SiteError::Yaml {
            origin: origin.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_names_the_path() {
        let err = SiteError::io(
            "site/content.yaml",
            io::Error::new(io::ErrorKind::NotFound, "not found"),
        );
        assert_eq!(err.to_string(), "failed to read site/content.yaml: not found");
    }

    #[test]
    fn invalid_content_lists_problems() {
        let err = SiteError::InvalidContent(vec!["a".into(), "b".into()]);
        assert_eq!(err.to_string(), "invalid site content: a; b");
    }

    #[test]
    fn render_errors_pass_through() {
        let err: SiteError = RenderError::TemplateNotFound("layout.html".into()).into();
        assert!(matches!(err, SiteError::Render(_)));
    }
}
