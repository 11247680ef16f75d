//! Comparison operators for query clauses.

/// Comparison operator for a query clause.
///
/// The folded operators compare case-insensitively: both the clause value
/// and the field value are lowercased before comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    /// Exact, case-sensitive equality.
    Eq,
    /// Case-insensitive substring match.
    ContainsFold,
    /// Case-insensitive membership in a set of strings.
    InFold,
}

impl Op {
    /// Returns `true` if this operator lowercases both sides.
    pub fn is_folded(self) -> bool {
        matches!(self, Op::ContainsFold | Op::InFold)
    }

    /// Returns `true` if this operator takes a set of values.
    pub fn is_set_op(self) -> bool {
        matches!(self, Op::InFold)
    }

    /// Returns the display name of this operator.
    pub fn as_str(self) -> &'static str {
        match self {
            Op::Eq => "eq",
            Op::ContainsFold => "icontains",
            Op::InFold => "iin",
        }
    }
}

impl std::fmt::Display for Op {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
