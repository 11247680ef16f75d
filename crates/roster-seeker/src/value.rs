//! Runtime value types for field comparison.
//!
//! The [`Value`] enum represents the runtime value of a field extracted from a
//! record. Candidate records only carry text, so a value is either a borrowed
//! string or missing.

use std::cmp::Ordering;

/// Runtime value for comparison, borrowed from the source record.
///
/// # Example
///
/// ```
/// use roster_seeker::{Seekable, Value};
///
/// struct Note {
///     title: String,
///     tag: Option<String>,
/// }
///
/// impl Seekable for Note {
///     fn seeker_field_value(&self, field: &str) -> Value<'_> {
///         match field {
///             "title" => Value::String(&self.title),
///             "tag" => Value::from(self.tag.as_deref()),
///             _ => Value::None,
///         }
///     }
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Value<'a> {
    /// String value (borrowed).
    String(&'a str),
    /// Field not present, null, or unsupported.
    None,
}

impl<'a> Value<'a> {
    /// Returns `true` if this is a `None` value.
    pub fn is_none(&self) -> bool {
        matches!(self, Value::None)
    }

    /// Returns `true` if this is a `String` value.
    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    /// Extracts the string value, if present.
    pub fn as_str(&self) -> Option<&'a str> {
        match self {
            Value::String(s) => Some(*s),
            Value::None => None,
        }
    }

    /// Compares two values, optionally case-folding strings first.
    ///
    /// Missing values sort after present ones.
    pub fn compare(&self, other: &Value<'_>, fold: bool) -> Ordering {
        match (self, other) {
            (Value::String(a), Value::String(b)) if fold => {
                a.to_lowercase().cmp(&b.to_lowercase())
            }
            (Value::String(a), Value::String(b)) => a.cmp(b),
            (Value::None, Value::None) => Ordering::Equal,
            (Value::None, _) => Ordering::Greater,
            (_, Value::None) => Ordering::Less,
        }
    }
}

impl<'a> From<&'a str> for Value<'a> {
    fn from(s: &'a str) -> Self {
        Value::String(s)
    }
}

impl<'a> From<Option<&'a str>> for Value<'a> {
    fn from(s: Option<&'a str>) -> Self {
        s.map_or(Value::None, Value::String)
    }
}
