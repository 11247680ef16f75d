//! Ordering types for query result sorting.
//!
//! Provides [`Dir`] for sort direction, [`SortBy`] for the sort key and
//! [`OrderBy`] combining the two. Both enums parse from request text with a
//! total function: unrecognized input maps to the default variant instead of
//! producing an error.

use std::cmp::Ordering;

use crate::candidate::Candidate;
use crate::traits::Seekable;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Dir {
    /// Ascending order (smallest first).
    Asc,
    /// Descending order (largest first).
    #[default]
    Desc,
}

impl Dir {
    /// Parses a direction, case-insensitively.
    ///
    /// Anything other than `asc` or `desc` yields [`Dir::Desc`].
    pub fn parse(raw: &str) -> Dir {
        match raw.to_lowercase().as_str() {
            "asc" => Dir::Asc,
            "desc" => Dir::Desc,
            _ => Dir::default(),
        }
    }

    /// Returns `true` if this is ascending order.
    pub fn is_asc(self) -> bool {
        matches!(self, Dir::Asc)
    }

    /// Returns `true` if this is descending order.
    pub fn is_desc(self) -> bool {
        matches!(self, Dir::Desc)
    }

    /// Applies this direction to an ordering.
    ///
    /// For `Asc`, returns the ordering unchanged.
    /// For `Desc`, reverses the ordering.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Dir::Asc => ordering,
            Dir::Desc => ordering.reverse(),
        }
    }

    /// Returns the display name of this direction.
    pub fn as_str(self) -> &'static str {
        match self {
            Dir::Asc => "asc",
            Dir::Desc => "desc",
        }
    }
}

impl std::fmt::Display for Dir {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The key results are sorted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortBy {
    /// The raw `last_activity` ordering key.
    #[default]
    LastActivity,
    /// The candidate name, compared case-insensitively.
    Name,
}

impl SortBy {
    /// Parses a sort key, case-insensitively.
    ///
    /// Anything other than `last_activity` or `name` yields
    /// [`SortBy::LastActivity`].
    pub fn parse(raw: &str) -> SortBy {
        match raw.to_lowercase().as_str() {
            "name" => SortBy::Name,
            "last_activity" => SortBy::LastActivity,
            _ => SortBy::default(),
        }
    }

    /// The record field this key reads.
    pub fn field(self) -> &'static str {
        match self {
            SortBy::LastActivity => Candidate::LAST_ACTIVITY,
            SortBy::Name => Candidate::NAME,
        }
    }

    /// Returns `true` if values are lowercased before comparison.
    pub fn is_folded(self) -> bool {
        matches!(self, SortBy::Name)
    }

    /// Returns the display name of this key.
    pub fn as_str(self) -> &'static str {
        self.field()
    }
}

impl std::fmt::Display for SortBy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A sort key paired with a direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct OrderBy {
    /// The key to sort by.
    pub sort_by: SortBy,
    /// The sort direction.
    pub dir: Dir,
}

impl OrderBy {
    /// Creates a new ordering with the given direction.
    pub fn new(sort_by: SortBy, dir: Dir) -> Self {
        OrderBy { sort_by, dir }
    }

    /// Creates an ordering from raw request text.
    ///
    /// Missing or unrecognized input falls back to the defaults.
    pub fn parse(sort_by: Option<&str>, dir: Option<&str>) -> Self {
        OrderBy {
            sort_by: sort_by.map(SortBy::parse).unwrap_or_default(),
            dir: dir.map(Dir::parse).unwrap_or_default(),
        }
    }

    /// Compares two records according to this ordering.
    pub fn compare<T: Seekable>(&self, a: &T, b: &T) -> Ordering {
        let field = self.sort_by.field();
        let base = a
            .seeker_field_value(field)
            .compare(&b.seeker_field_value(field), self.sort_by.is_folded());
        self.dir.apply(base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dir_apply() {
        assert_eq!(Dir::Asc.apply(Ordering::Less), Ordering::Less);
        assert_eq!(Dir::Asc.apply(Ordering::Greater), Ordering::Greater);
        assert_eq!(Dir::Asc.apply(Ordering::Equal), Ordering::Equal);

        assert_eq!(Dir::Desc.apply(Ordering::Less), Ordering::Greater);
        assert_eq!(Dir::Desc.apply(Ordering::Greater), Ordering::Less);
        assert_eq!(Dir::Desc.apply(Ordering::Equal), Ordering::Equal);
    }

    #[test]
    fn dir_parse_is_total() {
        assert_eq!(Dir::parse("asc"), Dir::Asc);
        assert_eq!(Dir::parse("ASC"), Dir::Asc);
        assert_eq!(Dir::parse("desc"), Dir::Desc);
        assert_eq!(Dir::parse("sideways"), Dir::Desc);
        assert_eq!(Dir::parse(""), Dir::Desc);
        assert_eq!(Dir::parse(" asc"), Dir::Desc);
    }

    #[test]
    fn sort_by_parse_is_total() {
        assert_eq!(SortBy::parse("name"), SortBy::Name);
        assert_eq!(SortBy::parse("Name"), SortBy::Name);
        assert_eq!(SortBy::parse("last_activity"), SortBy::LastActivity);
        assert_eq!(SortBy::parse("foo"), SortBy::LastActivity);
        assert_eq!(SortBy::parse(""), SortBy::LastActivity);
    }

    #[test]
    fn display() {
        assert_eq!(Dir::Asc.to_string(), "asc");
        assert_eq!(Dir::Desc.to_string(), "desc");
        assert_eq!(SortBy::Name.to_string(), "name");
        assert_eq!(SortBy::LastActivity.to_string(), "last_activity");
    }

    #[test]
    fn order_by_parse_defaults() {
        assert_eq!(
            OrderBy::parse(None, None),
            OrderBy::new(SortBy::LastActivity, Dir::Desc)
        );
        assert_eq!(
            OrderBy::parse(Some("name"), Some("asc")),
            OrderBy::new(SortBy::Name, Dir::Asc)
        );
        assert_eq!(
            OrderBy::parse(Some("salary"), Some("up")),
            OrderBy::default()
        );
    }

    #[test]
    fn order_by_compare_folds_names() {
        let a = Candidate::new("alice", "Engineer", "Acme", "2024-01-01");
        let b = Candidate::new("Bob", "Engineer", "Acme", "2024-01-02");

        let by_name = OrderBy::new(SortBy::Name, Dir::Asc);
        assert_eq!(by_name.compare(&a, &b), Ordering::Less);

        let by_name_desc = OrderBy::new(SortBy::Name, Dir::Desc);
        assert_eq!(by_name_desc.compare(&a, &b), Ordering::Greater);
    }

    #[test]
    fn order_by_compare_raw_activity() {
        let a = Candidate::new("a", "p", "c", "2024-03-01T00:00:00Z");
        let b = Candidate::new("b", "p", "c", "2024-02-01T00:00:00Z");

        let asc = OrderBy::new(SortBy::LastActivity, Dir::Asc);
        assert_eq!(asc.compare(&a, &b), Ordering::Greater);
        assert_eq!(asc.compare(&a, &a), Ordering::Equal);
    }
}
