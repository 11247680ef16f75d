//! Error types for the seeker crate.
//!
//! The query pipeline itself never fails. The only errors live at its
//! boundary, where raw pagination input is turned into a [`Pagination`].
//!
//! [`Pagination`]: crate::Pagination

use thiserror::Error;

/// A request parameter was rejected before reaching the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid value for '{field}': {kind}")]
pub struct ValidationError {
    /// Name of the offending query parameter.
    pub field: &'static str,
    /// What was wrong with it.
    pub kind: ValidationErrorKind,
}

impl ValidationError {
    pub fn new(field: &'static str, kind: ValidationErrorKind) -> Self {
        ValidationError { field, kind }
    }

    pub fn too_small(field: &'static str, min: i64) -> Self {
        Self::new(field, ValidationErrorKind::TooSmall { min })
    }

    pub fn too_large(field: &'static str, max: i64) -> Self {
        Self::new(field, ValidationErrorKind::TooLarge { max })
    }

    pub fn not_an_integer(field: &'static str, raw: impl Into<String>) -> Self {
        Self::new(field, ValidationErrorKind::NotAnInteger { raw: raw.into() })
    }
}

/// The reason a parameter failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationErrorKind {
    /// Integer below the allowed minimum.
    #[error("must be greater than or equal to {min}")]
    TooSmall { min: i64 },

    /// Integer above the allowed maximum.
    #[error("must be less than or equal to {max}")]
    TooLarge { max: i64 },

    /// Value could not be parsed as an integer.
    #[error("not a valid integer: {raw:?}")]
    NotAnInteger { raw: String },
}

/// Result type for seeker operations.
pub type Result<T> = std::result::Result<T, ValidationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_field_and_reason() {
        let err = ValidationError::too_small("page", 1);
        assert_eq!(
            err.to_string(),
            "invalid value for 'page': must be greater than or equal to 1"
        );

        let err = ValidationError::too_large("per_page", 50);
        assert_eq!(
            err.to_string(),
            "invalid value for 'per_page': must be less than or equal to 50"
        );

        let err = ValidationError::not_an_integer("page", "two");
        assert_eq!(
            err.to_string(),
            "invalid value for 'page': not a valid integer: \"two\""
        );
    }
}
