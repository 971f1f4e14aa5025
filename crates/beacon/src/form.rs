//! Contact form view state.
//!
//! [`ContactFormView`] is what the contact section renders from: the current
//! field values, per-field messages from [`FieldRules`], and the outcome of the
//! last submission. It moves through
//!
//! ```text
//! Idle ──begin_submit──► Submitting ──finish(success)──► Succeeded
//!   ▲                        │
//!   └──── reset ◄────────────┴──finish(failure)──► Failed
//! ```
//!
//! and refuses a second submission while one is pending.

use beacon_contact::{
    ContactFields, ContactFormProcessor, ContactResult, ContactTransport, Field, FieldErrors,
    FieldRules,
};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;

/// Shown after a successful submission.
pub const SUCCESS_MESSAGE: &str = "Thanks! Your message has been sent. We will be in touch soon.";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FormStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// Why the form did not start a submission.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormRejection {
    #[error("a submission is already in progress")]
    AlreadySubmitting,
    #[error("{} field(s) need attention", .0.len())]
    Invalid(FieldErrors),
}

#[derive(Debug, Default)]
pub struct ContactFormView {
    fields: ContactFields,
    status: FormStatus,
    field_errors: FieldErrors,
    error: Option<String>,
    rules: FieldRules,
}

impl ContactFormView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rules(mut self, rules: FieldRules) -> Self {
        self.rules = rules;
        self
    }

    pub fn with_fields(mut self, fields: ContactFields) -> Self {
        self.fields = fields;
        self
    }

    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.fields.set(field, value);
    }

    pub fn status(&self) -> FormStatus {
        self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.status == FormStatus::Submitting
    }

    pub fn field_errors(&self) -> &FieldErrors {
        &self.field_errors
    }

    /// Message from the last failed submission.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Runs the field rules and enters `Submitting`.
    ///
    /// Returns the values to submit. On rule failures the messages are kept
    /// for rendering and the form goes back to `Idle`.
    pub fn begin_submit(&mut self) -> Result<ContactFields, FormRejection> {
        if self.is_submitting() {
            return Err(FormRejection::AlreadySubmitting);
        }

        self.error = None;
        self.field_errors = self.rules.check(&self.fields);
        if !self.field_errors.is_empty() {
            self.status = FormStatus::Idle;
            return Err(FormRejection::Invalid(self.field_errors.clone()));
        }

        self.status = FormStatus::Submitting;
        Ok(self.fields.clone())
    }

    /// Records the outcome of a submission started with
    /// [`begin_submit`](Self::begin_submit). Success clears the fields.
    pub fn finish(&mut self, result: &ContactResult) {
        match result {
            ContactResult::Success { .. } => {
                self.status = FormStatus::Succeeded;
                self.fields = ContactFields::new();
                self.error = None;
            }
            ContactResult::Failure { error } => {
                self.status = FormStatus::Failed;
                self.error = Some(error.clone());
            }
        }
    }

    /// `begin_submit`, then the processor, then `finish`.
    pub async fn submit<T: ContactTransport>(
        &mut self,
        processor: &ContactFormProcessor<T>,
    ) -> Result<ContactResult, FormRejection> {
        let fields = self.begin_submit()?;
        let result = processor.submit(&fields).await;
        self.finish(&result);
        Ok(result)
    }

    /// Back to an empty `Idle` form.
    pub fn reset(&mut self) {
        self.fields = ContactFields::new();
        self.status = FormStatus::Idle;
        self.field_errors = FieldErrors::default();
        self.error = None;
    }

    /// Template context for the contact section.
    pub fn context(&self) -> serde_json::Value {
        let values: serde_json::Map<String, serde_json::Value> = Field::ALL
            .iter()
            .map(|field| {
                let value = self.fields.get(*field).unwrap_or_default();
                (field.key().to_string(), json!(value))
            })
            .collect();
        let errors: serde_json::Map<String, serde_json::Value> = self
            .field_errors
            .iter()
            .map(|(field, message)| (field.key().to_string(), json!(message)))
            .collect();

        json!({
            "status": self.status,
            "submitting": self.is_submitting(),
            "values": values,
            "errors": errors,
            "error": self.error,
            "success": (self.status == FormStatus::Succeeded).then_some(SUCCESS_MESSAGE),
            "success_text": SUCCESS_MESSAGE,
            "submit_label": if self.is_submitting() { "Sending..." } else { "Send message" },
            "rules_json": json!(self.rules.client_rules()).to_string(),
        })
    }
}
