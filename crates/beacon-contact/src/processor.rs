//! Validate-then-send.

use std::time::Duration;

use crate::fields::FieldReader;
use crate::submission::{validate, ContactResult};
use crate::transport::{ContactTransport, SimulatedTransport};

/// Validates `fields` and, if valid, hands the submission to `transport`.
///
/// Invalid input resolves immediately with the validation failure and the
/// transport is never called. Valid input resolves after the transport
/// finishes, with the same success result `validate` produced. A transport
/// error is reported as a failure result.
///
/// There is no cancellation and no retry. Two calls made back to back both run
/// to completion; preventing a double submit is the form's job.
pub async fn submit<R, T>(fields: &R, transport: &T) -> ContactResult
where
    R: FieldReader + ?Sized,
    T: ContactTransport,
{
    let data = match validate(fields) {
        ContactResult::Success { data } => data,
        failure => {
            tracing::debug!(error = ?failure.error(), "contact submission rejected");
            return failure;
        }
    };

    match transport.send(&data).await {
        Ok(()) => {
            tracing::debug!(message_chars = data.message.chars().count(), "contact submission sent");
            ContactResult::Success { data }
        }
        Err(err) => {
            tracing::warn!(error = %err, "contact transport failed");
            ContactResult::from(err)
        }
    }
}

/// A transport bundled with the submit operation.
///
/// # Example
///
/// ```rust
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// use std::time::Duration;
/// use beacon_contact::{ContactFields, ContactFormProcessor};
///
/// let processor = ContactFormProcessor::simulated(Duration::from_millis(5));
/// let fields = ContactFields::new()
///     .with_name("Ada")
///     .with_email("ada@example.com")
///     .with_message("Hello!");
///
/// assert!(processor.submit(&fields).await.is_success());
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ContactFormProcessor<T = SimulatedTransport> {
    transport: T,
}

impl ContactFormProcessor<SimulatedTransport> {
    /// A processor using [`SimulatedTransport`] with `delay`.
    pub fn simulated(delay: Duration) -> Self {
        Self::new(SimulatedTransport::new(delay))
    }
}

impl Default for ContactFormProcessor<SimulatedTransport> {
    fn default() -> Self {
        Self::new(SimulatedTransport::default())
    }
}

impl<T: ContactTransport> ContactFormProcessor<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Presence validation only; see [`validate`].
    pub fn validate<R: FieldReader + ?Sized>(&self, fields: &R) -> ContactResult {
        validate(fields)
    }

    /// See [`submit`].
    pub async fn submit<R: FieldReader + ?Sized>(&self, fields: &R) -> ContactResult {
        submit(fields, &self.transport).await
    }
}
