//! Contact form processing for the Beacon site.
//!
//! `beacon-contact` validates the three contact fields (`name`, `email`,
//! `message`) and "submits" them through a [`ContactTransport`]. There is no
//! backend: the shipped [`SimulatedTransport`] waits a fixed delay and succeeds.
//!
//! # Quick Start
//!
//! ```rust
//! use beacon_contact::{validate, ContactFields, ContactResult};
//!
//! let fields = ContactFields::new()
//!     .with_name("Ada")
//!     .with_email("ada@example.com")
//!     .with_message("Hello!");
//!
//! match validate(&fields) {
//!     ContactResult::Success { data } => assert_eq!(data.name, "Ada"),
//!     ContactResult::Failure { error } => panic!("{error}"),
//! }
//! ```
//!
//! # Architecture
//!
//! ```text
//! FieldReader (ContactFields / HashMap / ArgFields)
//!     │
//!     ▼
//! validate ── missing or empty ──► Failure("All fields are required")
//!     │
//!     ▼
//! ContactTransport::send (SimulatedTransport: sleep, then Ok)
//!     │
//!     ▼
//! Success { data }
//! ```
//!
//! Failures are values, never panics or propagated errors. [`FieldRules`]
//! holds the stricter per-field checks a form runs before calling
//! [`submit`]; `validate` does not rely on them.

mod error;
mod fields;
mod processor;
pub mod rules;
mod submission;
mod transport;

pub use error::ContactError;
pub use fields::{ArgFields, ContactFields, Field, FieldReader};
pub use processor::{submit, ContactFormProcessor};
pub use rules::{is_valid_email, ClientCheck, ClientRule, FieldErrors, FieldRules};
pub use submission::{
    validate, validate_fields, ContactResult, ContactSubmission, FALLBACK_ERROR,
    REQUIRED_FIELDS_ERROR,
};
pub use transport::{ContactTransport, SimulatedTransport, DEFAULT_SUBMIT_DELAY};
