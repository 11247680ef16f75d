//! Field access for queryable records.
//!
//! This module provides the [`Seekable`] trait, the single seam between the
//! query engine and the record type it runs over.

use crate::value::Value;

/// Trait for types that can be queried.
///
/// # Example
///
/// ```
/// use roster_seeker::{Query, Seekable, Value};
///
/// struct Task {
///     title: String,
/// }
///
/// impl Seekable for Task {
///     fn seeker_field_value(&self, field: &str) -> Value<'_> {
///         match field {
///             "title" => Value::String(&self.title),
///             _ => Value::None,
///         }
///     }
/// }
///
/// let tasks = vec![
///     Task { title: "Write docs".into() },
///     Task { title: "Fix bug".into() },
/// ];
///
/// let query = Query::new().or_contains_fold("title", "DOCS").build();
/// assert_eq!(query.count(&tasks), 1);
/// ```
pub trait Seekable {
    /// Returns the value of a field for query comparison.
    ///
    /// Unknown fields return [`Value::None`].
    fn seeker_field_value(&self, field: &str) -> Value<'_>;
}
