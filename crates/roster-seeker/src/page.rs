//! Pagination input and the page-shaped result.

use serde::Serialize;

use crate::error::{Result, ValidationError};

/// Page number used when the request gives none.
pub const DEFAULT_PAGE: usize = 1;
/// Page size used when the request gives none.
pub const DEFAULT_PER_PAGE: usize = 5;
/// Largest accepted page size.
pub const MAX_PER_PAGE: usize = 50;

/// A validated page request.
///
/// Construction goes through [`Pagination::new`], so a value of this type
/// always satisfies `page >= 1` and `1 <= per_page <= 50`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pagination {
    page: usize,
    per_page: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Pagination {
            page: DEFAULT_PAGE,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

impl Pagination {
    /// Validates a page request.
    ///
    /// Accepts signed input so that negative numbers from the wire are
    /// reported as out of range rather than as parse failures.
    pub fn new(page: i64, per_page: i64) -> Result<Self> {
        if page < 1 {
            return Err(ValidationError::too_small("page", 1));
        }
        if per_page < 1 {
            return Err(ValidationError::too_small("per_page", 1));
        }
        if per_page > MAX_PER_PAGE as i64 {
            return Err(ValidationError::too_large("per_page", MAX_PER_PAGE as i64));
        }

        Ok(Pagination {
            page: usize::try_from(page).unwrap_or(usize::MAX),
            per_page: per_page as usize,
        })
    }

    /// Validates optional input, filling in the defaults.
    pub fn from_optional(page: Option<i64>, per_page: Option<i64>) -> Result<Self> {
        Self::new(
            page.unwrap_or(DEFAULT_PAGE as i64),
            per_page.unwrap_or(DEFAULT_PER_PAGE as i64),
        )
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn per_page(&self) -> usize {
        self.per_page
    }

    /// Index of the first item on this page.
    pub fn offset(&self) -> usize {
        (self.page - 1).saturating_mul(self.per_page)
    }

    /// The half-open index range of this page within `total` items.
    ///
    /// Returns an empty range when the page starts at or past the end.
    pub fn bounds(&self, total: usize) -> std::ops::Range<usize> {
        let start = self.offset();
        if total == 0 || start >= total {
            return 0..0;
        }
        start..start.saturating_add(self.per_page).min(total)
    }

    /// Number of pages needed for `total` items.
    pub fn total_pages(&self, total: usize) -> usize {
        total_pages(total, self.per_page)
    }
}

/// `ceil(total / per_page)`, or `0` when there is nothing to show.
pub fn total_pages(total: usize, per_page: usize) -> usize {
    if total == 0 || per_page == 0 {
        0
    } else {
        total.div_ceil(per_page)
    }
}

/// One page of query results plus pagination metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageResult<T> {
    /// The page slice, in sorted order.
    pub candidates: Vec<T>,
    /// Number of records that passed the filters.
    pub total: usize,
    /// The requested page, echoed back.
    pub page: usize,
    /// The requested page size, echoed back.
    pub per_page: usize,
    pub total_pages: usize,
}

impl<T> PageResult<T> {
    /// Returns true if this page holds no records.
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Returns the number of records on this page.
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// Returns true if a later page exists.
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}
