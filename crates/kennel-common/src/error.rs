//! Error types for Kennel
//!
//! This module defines:
//! - `KennelError`: Application-specific error enum
//! - `FieldErrors`: Field-level validation messages returned to API callers

use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Key for validation messages that do not belong to a single field
pub const NON_FIELD_ERRORS: &str = "non_field_errors";

/// Validation messages keyed by input field name.
///
/// Serializes as a plain JSON object, e.g. `{"age": ["Ensure this value is greater than or equal to 0."]}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create errors holding a single message for one field
    pub fn single(field: &str, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.add(field, message);
        errors
    }

    /// Append a message to a field
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    /// Append several messages to a field
    pub fn extend_field<I, S>(&mut self, field: &str, messages: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for message in messages {
            self.add(field, message);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of fields with at least one message
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

}

impl Display for FieldErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (field, messages) in &self.0 {
            if !first {
                write!(f, "; ")?;
            }
            first = false;
            write!(f, "{}: {}", field, messages.join(" "))?;
        }
        Ok(())
    }
}

/// Application-specific error types
#[derive(thiserror::Error, Debug)]
pub enum KennelError {
    #[error("validation failed: {0}")]
    Validation(FieldErrors),

    #[error("{entity} '{id}' not exist")]
    NotFound { entity: &'static str, id: i32 },

    #[error("{field} references missing {entity} '{id}'")]
    RelatedNotFound {
        field: &'static str,
        entity: &'static str,
        id: i32,
    },

    #[error("integrity error: {0}")]
    IntegrityError(String),

    #[error("configuration error: {0}")]
    ConfigError(String),
}

impl KennelError {
    pub fn breed_not_found(id: i32) -> Self {
        KennelError::NotFound {
            entity: "breed",
            id,
        }
    }

    pub fn dog_not_found(id: i32) -> Self {
        KennelError::NotFound { entity: "dog", id }
    }

    /// The `breed_id` of a dog write names no stored breed
    pub fn missing_breed(id: i32) -> Self {
        KennelError::RelatedNotFound {
            field: "breed_id",
            entity: "breed",
            id,
        }
    }
}

impl From<FieldErrors> for KennelError {
    fn from(errors: FieldErrors) -> Self {
        KennelError::Validation(errors)
    }
}
