//! Clause types for query predicates.
//!
//! A [`Clause`] represents a single filter predicate: a field name,
//! an operator, and a comparison value.

use std::collections::BTreeSet;

use crate::op::Op;
use crate::value::Value;

/// A single filter predicate.
///
/// Clause values used with a folded operator are lowercased once, when the
/// clause is built, so matching only has to fold the field side.
///
/// # Example
///
/// ```
/// use roster_seeker::{Clause, Op, Value};
///
/// let clause = Clause::new("position", Op::ContainsFold, "ENG");
/// assert!(clause.matches(&Value::String("Senior Engineer")));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clause {
    /// The field name to compare.
    pub field: String,
    /// The comparison operator.
    pub op: Op,
    /// The value to compare against.
    pub value: ClauseValue,
}

impl Clause {
    /// Creates a new clause.
    pub fn new(field: impl Into<String>, op: Op, value: impl Into<ClauseValue>) -> Self {
        let value = value.into();
        Clause {
            field: field.into(),
            op,
            value: if op.is_folded() { value.folded() } else { value },
        }
    }

    /// Evaluates this clause against a field value.
    ///
    /// A missing field never matches.
    pub fn matches(&self, field_value: &Value<'_>) -> bool {
        match (&self.value, field_value) {
            (ClauseValue::String(pattern), Value::String(s)) => self.match_string(s, pattern),
            (ClauseValue::StringSet(set), Value::String(s)) => self.match_string_set(s, set),
            (_, Value::None) => false,
        }
    }

    fn match_string(&self, field: &str, pattern: &str) -> bool {
        match self.op {
            Op::Eq => field == pattern,
            Op::ContainsFold => field.to_lowercase().contains(pattern),
            Op::InFold => field.to_lowercase() == pattern,
        }
    }

    fn match_string_set(&self, field: &str, set: &BTreeSet<String>) -> bool {
        match self.op {
            Op::InFold => set.contains(&field.to_lowercase()),
            Op::Eq => set.contains(field),
            Op::ContainsFold => {
                let field = field.to_lowercase();
                set.iter().any(|pattern| field.contains(pattern.as_str()))
            }
        }
    }
}

/// Owned value for storage in a clause.
///
/// Unlike [`Value`], which borrows from the source record, `ClauseValue`
/// owns its data so it can be stored in query definitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClauseValue {
    /// String value.
    String(String),
    /// Set of strings (for `InFold`). Duplicates collapse.
    StringSet(BTreeSet<String>),
}

impl ClauseValue {
    /// Returns a lowercased copy of this value.
    pub fn folded(self) -> Self {
        match self {
            ClauseValue::String(s) => ClauseValue::String(s.to_lowercase()),
            ClauseValue::StringSet(set) => {
                ClauseValue::StringSet(set.into_iter().map(|s| s.to_lowercase()).collect())
            }
        }
    }
}

impl From<String> for ClauseValue {
    fn from(s: String) -> Self {
        ClauseValue::String(s)
    }
}

impl From<&str> for ClauseValue {
    fn from(s: &str) -> Self {
        ClauseValue::String(s.to_string())
    }
}

impl From<Vec<String>> for ClauseValue {
    fn from(v: Vec<String>) -> Self {
        ClauseValue::StringSet(v.into_iter().collect())
    }
}

impl From<&[String]> for ClauseValue {
    fn from(v: &[String]) -> Self {
        ClauseValue::StringSet(v.iter().cloned().collect())
    }
}

impl From<BTreeSet<String>> for ClauseValue {
    fn from(set: BTreeSet<String>) -> Self {
        ClauseValue::StringSet(set)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn eq_is_case_sensitive() {
        let clause = Clause::new("job_id", Op::Eq, "JOB-1");
        assert!(clause.matches(&Value::String("JOB-1")));
        assert!(!clause.matches(&Value::String("job-1")));
        assert!(!clause.matches(&Value::String("JOB-10")));
    }

    #[test]
    fn contains_fold() {
        let clause = Clause::new("position", Op::ContainsFold, "Eng");
        assert!(clause.matches(&Value::String("Software Engineer")));
        assert!(clause.matches(&Value::String("ENGINEERING MANAGER")));
        assert!(!clause.matches(&Value::String("Designer")));
    }

    #[test]
    fn contains_fold_empty_pattern_matches_everything() {
        let clause = Clause::new("name", Op::ContainsFold, "");
        assert!(clause.matches(&Value::String("anything")));
        assert!(clause.matches(&Value::String("")));
    }

    #[test]
    fn in_fold_collapses_case_variants() {
        let clause = Clause::new("source", Op::InFold, set(&["Referral", "referral"]));
        assert_eq!(
            clause.value,
            ClauseValue::StringSet(["referral".to_string()].into_iter().collect())
        );
        assert!(clause.matches(&Value::String("REFERRAL")));
        assert!(!clause.matches(&Value::String("LinkedIn")));
    }

    #[test]
    fn in_fold_matches_empty_string_member() {
        let clause = Clause::new("application_type", Op::InFold, set(&[""]));
        assert!(clause.matches(&Value::String("")));
        assert!(!clause.matches(&Value::String("referral")));
    }

    #[test]
    fn in_fold_does_not_substring_match() {
        let clause = Clause::new("source", Op::InFold, set(&["link"]));
        assert!(!clause.matches(&Value::String("LinkedIn")));
    }

    #[test]
    fn eq_with_set_is_exact_membership() {
        let clause = Clause::new("job_id", Op::Eq, set(&["a", "b"]));
        assert!(clause.matches(&Value::String("a")));
        assert!(!clause.matches(&Value::String("A")));
    }

    #[test]
    fn none_never_matches() {
        assert!(!Clause::new("job_id", Op::Eq, "x").matches(&Value::None));
        assert!(!Clause::new("name", Op::ContainsFold, "").matches(&Value::None));
        assert!(!Clause::new("source", Op::InFold, set(&[""])).matches(&Value::None));
    }
}
