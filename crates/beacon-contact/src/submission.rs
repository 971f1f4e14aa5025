//! Submission types and presence validation.

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

use crate::fields::{ContactFields, Field, FieldReader};
use crate::ContactError;

/// Error text when any of the three fields is missing or empty.
pub const REQUIRED_FIELDS_ERROR: &str = "All fields are required";

/// Error text used when a failure carries no message of its own.
pub const FALLBACK_ERROR: &str = "Something went wrong. Please try again.";

/// A validated contact submission: all three fields present and non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Outcome of validating or submitting the contact form.
///
/// Serializes as `{"success": true, "data": {...}}` or
/// `{"success": false, "error": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactResult {
    Success { data: ContactSubmission },
    Failure { error: String },
}

impl ContactResult {
    /// A failure with `message`, or [`FALLBACK_ERROR`] when it is empty.
    pub fn failure(message: impl Into<String>) -> Self {
        let message = message.into();
        let error = if message.trim().is_empty() {
            FALLBACK_ERROR.to_string()
        } else {
            message
        };
        ContactResult::Failure { error }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ContactResult::Success { .. })
    }

    pub fn data(&self) -> Option<&ContactSubmission> {
        match self {
            ContactResult::Success { data } => Some(data),
            ContactResult::Failure { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ContactResult::Success { .. } => None,
            ContactResult::Failure { error } => Some(error),
        }
    }
}

impl From<ContactError> for ContactResult {
    fn from(err: ContactError) -> Self {
        ContactResult::failure(err.to_string())
    }
}

impl Serialize for ContactResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ContactResult", 2)?;
        match self {
            ContactResult::Success { data } => {
                state.serialize_field("success", &true)?;
                state.serialize_field("data", data)?;
            }
            ContactResult::Failure { error } => {
                state.serialize_field("success", &false)?;
                state.serialize_field("error", error)?;
            }
        }
        state.end()
    }
}

/// Checks that all three fields are present and non-empty.
///
/// Values are kept verbatim. A read error from `fields` becomes a failure
/// result carrying the error's message; nothing is propagated.
///
/// # Example
///
/// ```rust
/// use beacon_contact::{validate, ContactFields, REQUIRED_FIELDS_ERROR};
///
/// let fields = ContactFields::new().with_name("").with_email("a@b.com").with_message("hi");
/// assert_eq!(validate(&fields).error(), Some(REQUIRED_FIELDS_ERROR));
/// ```
pub fn validate<R: FieldReader + ?Sized>(fields: &R) -> ContactResult {
    match read_submission(fields) {
        Ok(Some(data)) => ContactResult::Success { data },
        Ok(None) => ContactResult::Failure {
            error: REQUIRED_FIELDS_ERROR.to_string(),
        },
        Err(err) => {
            tracing::warn!(error = %err, "failed to read contact fields");
            err.into()
        }
    }
}

/// [`validate`] for an in-memory field map.
pub fn validate_fields(fields: &ContactFields) -> ContactResult {
    validate(fields)
}

fn read_submission<R: FieldReader + ?Sized>(
    fields: &R,
) -> Result<Option<ContactSubmission>, ContactError> {
    let name = fields.read(Field::Name)?;
    let email = fields.read(Field::Email)?;
    let message = fields.read(Field::Message)?;

    match (present(name), present(email), present(message)) {
        (Some(name), Some(email), Some(message)) => Ok(Some(ContactSubmission {
            name,
            email,
            message,
        })),
        _ => Ok(None),
    }
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn complete() -> ContactFields {
        ContactFields::new()
            .with_name("Ada Lovelace")
            .with_email("ada@example.com")
            .with_message("Hello there")
    }

    struct BrokenReader(ContactError);

    impl FieldReader for BrokenReader {
        fn read(&self, field: Field) -> Result<Option<String>, ContactError> {
            match &self.0 {
                ContactError::Opaque => Err(ContactError::Opaque),
                _ => Err(ContactError::field_read(field.key(), "stream closed")),
            }
        }
    }

    #[test]
    fn complete_fields_pass_verbatim() {
        let result = validate(&complete());
        assert_eq!(
            result,
            ContactResult::Success {
                data: ContactSubmission {
                    name: "Ada Lovelace".into(),
                    email: "ada@example.com".into(),
                    message: "Hello there".into(),
                }
            }
        );
        assert_eq!(result.error(), None);
    }

    #[test]
    fn whitespace_is_kept_as_is() {
        let fields = complete().with_name("  Ada  ");
        assert_eq!(validate(&fields).data().unwrap().name, "  Ada  ");
    }

    #[test]
    fn empty_name_fails() {
        let fields = ContactFields::new()
            .with_name("")
            .with_email("a@b.com")
            .with_message("hi");
        let result = validate(&fields);
        assert_eq!(
            result,
            ContactResult::Failure {
                error: REQUIRED_FIELDS_ERROR.into()
            }
        );
        assert!(result.data().is_none());
    }

    #[test]
    fn read_error_is_caught() {
        let result = validate(&BrokenReader(ContactError::field_read("name", "x")));
        assert_eq!(
            result.error(),
            Some("Failed to read field 'name': stream closed")
        );
    }

    #[test]
    fn read_error_without_message_uses_fallback() {
        let result = validate(&BrokenReader(ContactError::Opaque));
        assert_eq!(result.error(), Some(FALLBACK_ERROR));
    }

    #[test]
    fn success_serializes_with_data_only() {
        let value = serde_json::to_value(validate(&complete())).unwrap();
        assert_eq!(
            value,
            json!({
                "success": true,
                "data": {
                    "name": "Ada Lovelace",
                    "email": "ada@example.com",
                    "message": "Hello there"
                }
            })
        );
    }

    #[test]
    fn failure_serializes_with_error_only() {
        let value = serde_json::to_value(validate(&ContactFields::new())).unwrap();
        assert_eq!(
            value,
            json!({"success": false, "error": "All fields are required"})
        );
    }
}
