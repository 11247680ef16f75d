//! Normalized request parameters.

use crate::ordering::{Dir, OrderBy, SortBy};
use crate::page::Pagination;

/// Everything a candidate query can ask for, already normalized.
///
/// Empty `search`/`job_id` strings and empty filter sets mean "no filter".
///
/// # Example
///
/// ```
/// use roster_seeker::{Dir, QueryParams, SortBy};
///
/// let params = QueryParams::new()
///     .search("eng")
///     .application_types(["Referral", "referral"])
///     .sort_raw(Some("NAME"), Some("sideways"));
///
/// assert_eq!(params.sort_by, SortBy::Name);
/// assert_eq!(params.sort_order, Dir::Desc);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pub pagination: Pagination,
    pub search: Option<String>,
    pub sort_by: SortBy,
    pub sort_order: Dir,
    pub application_type: Vec<String>,
    pub source: Vec<String>,
    pub job_id: Option<String>,
}

impl QueryParams {
    /// Parameters with every default: first page of five, newest first.
    pub fn new() -> Self {
        QueryParams::default()
    }

    pub fn pagination(mut self, pagination: Pagination) -> Self {
        self.pagination = pagination;
        self
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn sort(mut self, sort_by: SortBy, sort_order: Dir) -> Self {
        self.sort_by = sort_by;
        self.sort_order = sort_order;
        self
    }

    /// Sets the ordering from raw request text, falling back to defaults.
    pub fn sort_raw(self, sort_by: Option<&str>, sort_order: Option<&str>) -> Self {
        let order = OrderBy::parse(sort_by, sort_order);
        self.sort(order.sort_by, order.dir)
    }

    pub fn application_types<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.application_type = values.into_iter().map(Into::into).collect();
        self
    }

    pub fn sources<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.source = values.into_iter().map(Into::into).collect();
        self
    }

    pub fn job_id(mut self, job_id: impl Into<String>) -> Self {
        self.job_id = Some(job_id.into());
        self
    }

    /// The ordering these parameters ask for.
    pub fn order_by(&self) -> OrderBy {
        OrderBy::new(self.sort_by, self.sort_order)
    }

    /// The search text, if it is non-empty.
    pub fn search_text(&self) -> Option<&str> {
        self.search.as_deref().filter(|s| !s.is_empty())
    }

    /// The job id, if it is non-empty.
    pub fn job_id_filter(&self) -> Option<&str> {
        self.job_id.as_deref().filter(|s| !s.is_empty())
    }
}
