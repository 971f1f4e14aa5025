//! Raw contact fields and the sources they are read from.
//!
//! The processor never receives a typed submission directly. It reads the three
//! fields through [`FieldReader`], which lets the same validation run against a
//! form's field map, a `HashMap`, or parsed CLI arguments.

use std::collections::HashMap;
use std::fmt;

use clap::ArgMatches;
use serde::{Deserialize, Serialize};

use crate::ContactError;

/// One of the three contact form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    /// All fields, in form order.
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    /// The payload key (`name`, `email`, `message`).
    pub fn key(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        }
    }

    /// Human-readable label for form markup.
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Message => "Message",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A source of raw field values.
///
/// - `Ok(Some(value))`: the field is present (possibly empty).
/// - `Ok(None)`: the field is absent.
/// - `Err(e)`: the source failed; the processor reports it as a failure result.
pub trait FieldReader {
    fn read(&self, field: Field) -> Result<Option<String>, ContactError>;
}

impl<R: FieldReader + ?Sized> FieldReader for &R {
    fn read(&self, field: Field) -> Result<Option<String>, ContactError> {
        (**self).read(field)
    }
}

/// The contact form's field map. Absent keys are `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactFields {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

impl ContactFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, value: impl Into<String>) -> Self {
        self.name = Some(value.into());
        self
    }

    pub fn with_email(mut self, value: impl Into<String>) -> Self {
        self.email = Some(value.into());
        self
    }

    pub fn with_message(mut self, value: impl Into<String>) -> Self {
        self.message = Some(value.into());
        self
    }

    /// Builds fields from a key/value map; unknown keys are ignored.
    pub fn from_map(map: &HashMap<String, String>) -> Self {
        Self {
            name: map.get(Field::Name.key()).cloned(),
            email: map.get(Field::Email.key()).cloned(),
            message: map.get(Field::Message.key()).cloned(),
        }
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::Name => self.name.as_deref(),
            Field::Email => self.email.as_deref(),
            Field::Message => self.message.as_deref(),
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        };
        *slot = Some(value.into());
    }
}

impl FieldReader for ContactFields {
    fn read(&self, field: Field) -> Result<Option<String>, ContactError> {
        Ok(self.get(field).map(str::to_string))
    }
}

impl FieldReader for HashMap<String, String> {
    fn read(&self, field: Field) -> Result<Option<String>, ContactError> {
        Ok(self.get(field.key()).cloned())
    }
}

/// Reads fields from clap arguments named `name`, `email` and `message`.
///
/// An argument parsed into anything other than a `String` is a read error
/// rather than an absent field.
#[derive(Debug, Clone, Copy)]
pub struct ArgFields<'a> {
    matches: &'a ArgMatches,
}

impl<'a> ArgFields<'a> {
    pub fn new(matches: &'a ArgMatches) -> Self {
        Self { matches }
    }
}

impl FieldReader for ArgFields<'_> {
    fn read(&self, field: Field) -> Result<Option<String>, ContactError> {
        self.matches
            .try_get_one::<String>(field.key())
            .map(|value| value.cloned())
            .map_err(|e| ContactError::field_read(field.key(), e.to_string()))
    }
}
