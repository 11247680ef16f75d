//! Query builder and executor.
//!
//! The [`Query`] struct provides a fluent builder API for constructing queries
//! and methods for executing them against collections. [`query`] is the
//! one-call entry point used by the request layers.

use crate::candidate::Candidate;
use crate::clause::{Clause, ClauseValue};
use crate::op::Op;
use crate::ordering::OrderBy;
use crate::page::{PageResult, Pagination};
use crate::params::QueryParams;
use crate::traits::Seekable;

/// A query for filtering, ordering and paging collections.
///
/// Queries consist of two clause groups:
/// - **AND**: All clauses must match
/// - **OR**: At least one clause must match (or none if empty)
///
/// The overall match logic is:
/// ```text
/// match = (all AND clauses match)
///       ∧ (at least one OR clause matches, OR no OR clauses exist)
/// ```
///
/// # Example
///
/// ```
/// use roster_seeker::{Candidate, Dir, OrderBy, Pagination, Query, SortBy};
///
/// let query = Query::new()
///     .or_contains_fold(Candidate::NAME, "ada")
///     .or_contains_fold(Candidate::COMPANY, "ada")
///     .and_in_fold(Candidate::SOURCE, ["LinkedIn"])
///     .order_by(OrderBy::new(SortBy::Name, Dir::Asc))
///     .paginate(Pagination::new(1, 10).unwrap())
///     .build();
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    and_clauses: Vec<Clause>,
    or_clauses: Vec<Clause>,
    order_by: Option<OrderBy>,
    pagination: Pagination,
}

impl Query {
    /// Creates a new empty query.
    ///
    /// An empty query matches all items, keeps their order and shows the
    /// default first page.
    pub fn new() -> Self {
        Query::default()
    }

    /// Compiles request parameters into a query.
    ///
    /// Search text becomes one OR clause per searchable field; every other
    /// filter becomes an AND clause. Empty inputs add no clause.
    pub fn from_params(params: &QueryParams) -> Self {
        let mut query = Query::new();

        if let Some(search) = params.search_text() {
            for field in [Candidate::NAME, Candidate::POSITION, Candidate::COMPANY] {
                query = query.or_contains_fold(field, search);
            }
        }
        if !params.application_type.is_empty() {
            query = query.and_in_fold(Candidate::APPLICATION_TYPE, &params.application_type);
        }
        if !params.source.is_empty() {
            query = query.and_in_fold(Candidate::SOURCE, &params.source);
        }
        if let Some(job_id) = params.job_id_filter() {
            query = query.and_eq(Candidate::JOB_ID, job_id);
        }

        query
            .order_by(params.order_by())
            .paginate(params.pagination)
            .build()
    }

    // ========================================================================
    // Clause builders
    // ========================================================================

    /// Adds an AND clause.
    ///
    /// All AND clauses must match for an item to be included.
    pub fn and(mut self, field: &str, op: Op, value: impl Into<ClauseValue>) -> Self {
        self.and_clauses.push(Clause::new(field, op, value));
        self
    }

    /// Adds an OR clause.
    ///
    /// At least one OR clause must match (unless there are no OR clauses).
    pub fn or(mut self, field: &str, op: Op, value: impl Into<ClauseValue>) -> Self {
        self.or_clauses.push(Clause::new(field, op, value));
        self
    }

    /// Adds an AND equality clause.
    pub fn and_eq(self, field: &str, value: &str) -> Self {
        self.and(field, Op::Eq, value)
    }

    /// Adds an AND case-insensitive set membership clause.
    pub fn and_in_fold<I, S>(self, field: &str, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let set: Vec<String> = values.into_iter().map(|s| s.as_ref().to_string()).collect();
        self.and(field, Op::InFold, set)
    }

    /// Adds an OR case-insensitive substring clause.
    pub fn or_contains_fold(self, field: &str, value: &str) -> Self {
        self.or(field, Op::ContainsFold, value)
    }

    // ========================================================================
    // Ordering and paging
    // ========================================================================

    /// Sets the ordering. Without one, filtered items keep input order.
    pub fn order_by(mut self, order_by: OrderBy) -> Self {
        self.order_by = Some(order_by);
        self
    }

    /// Sets the page to return from [`Query::page`] and [`Query::execute`].
    pub fn paginate(mut self, pagination: Pagination) -> Self {
        self.pagination = pagination;
        self
    }

    /// Finalizes the query.
    pub fn build(self) -> Self {
        self
    }

    // ========================================================================
    // Introspection
    // ========================================================================

    /// Returns the AND clauses.
    pub fn and_clauses(&self) -> &[Clause] {
        &self.and_clauses
    }

    /// Returns the OR clauses.
    pub fn or_clauses(&self) -> &[Clause] {
        &self.or_clauses
    }

    /// Returns the ordering, if set.
    pub fn get_order_by(&self) -> Option<OrderBy> {
        self.order_by
    }

    /// Returns the page request.
    pub fn get_pagination(&self) -> Pagination {
        self.pagination
    }

    /// Returns `true` if this query has no clauses (matches everything).
    pub fn is_empty(&self) -> bool {
        self.and_clauses.is_empty() && self.or_clauses.is_empty()
    }

    // ========================================================================
    // Execution
    // ========================================================================

    /// Tests if a single item matches this query.
    pub fn matches<T: Seekable>(&self, item: &T) -> bool {
        let and_pass = self
            .and_clauses
            .iter()
            .all(|clause| clause.matches(&item.seeker_field_value(&clause.field)));

        if !and_pass {
            return false;
        }

        self.or_clauses.is_empty()
            || self
                .or_clauses
                .iter()
                .any(|clause| clause.matches(&item.seeker_field_value(&clause.field)))
    }

    /// Filters a slice, returning references to matching items.
    ///
    /// Results are sorted according to the query's ordering. The sort is
    /// stable in both directions: equal keys keep their input order.
    /// Pagination is not applied.
    pub fn filter<'a, T: Seekable>(&self, items: &'a [T]) -> Vec<&'a T> {
        let mut results: Vec<&'a T> = items.iter().filter(|item| self.matches(*item)).collect();

        if let Some(order_by) = self.order_by {
            results.sort_by(|a, b| order_by.compare(*a, *b));
        }

        results
    }

    /// Counts the number of matching items.
    pub fn count<T: Seekable>(&self, items: &[T]) -> usize {
        items.iter().filter(|item| self.matches(*item)).count()
    }

    /// Filters, sorts and slices out the requested page, borrowing items.
    pub fn page<'a, T: Seekable>(&self, items: &'a [T]) -> PageResult<&'a T> {
        let mut results = self.filter(items);
        let total = results.len();
        let range = self.pagination.bounds(total);

        results.truncate(range.end);
        let candidates = results.split_off(range.start);

        PageResult {
            candidates,
            total,
            page: self.pagination.page(),
            per_page: self.pagination.per_page(),
            total_pages: self.pagination.total_pages(total),
        }
    }

    /// Like [`Query::page`], but clones the items on the page.
    pub fn execute<T: Seekable + Clone>(&self, items: &[T]) -> PageResult<T> {
        let page = self.page(items);
        PageResult {
            candidates: page.candidates.into_iter().cloned().collect(),
            total: page.total,
            page: page.page,
            per_page: page.per_page,
            total_pages: page.total_pages,
        }
    }
}

/// Runs the candidate pipeline: filter, sort, then paginate.
///
/// `records` is never modified; the result holds copies of the records on
/// the requested page.
pub fn query(records: &[Candidate], params: &QueryParams) -> PageResult<Candidate> {
    Query::from_params(params).execute(records)
}
