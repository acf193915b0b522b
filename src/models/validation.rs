// src/models/validation.rs

use thiserror::Error;

/// Raised when an entity is built from malformed input.
/// Carries the name of the offending field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ValidationError {
    #[error("{field} must not be empty")]
    Empty { field: &'static str },

    #[error("replies cannot be nested more than {max} levels deep")]
    ReplyTooDeep { max: u32 },
}

impl ValidationError {
    #[must_use]
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::Empty { field } => field,
            ValidationError::ReplyTooDeep { .. } => "parent_id",
        }
    }
}

/// Accepts any string except `""`.
pub fn non_empty(field: &'static str, value: impl Into<String>) -> Result<String, ValidationError> {
    let value = value.into();
    if value.is_empty() {
        return Err(ValidationError::Empty { field });
    }
    Ok(value)
}
