//! Seeker - filter, sort and paginate in-memory candidate collections.
//!
//! The crate holds the whole candidate query pipeline. Given the full record
//! collection and a set of request parameters it:
//!
//! 1. keeps records whose name, position or company contains the search text
//!    (case-insensitive),
//! 2. keeps records whose application type is one of the requested ones
//!    (case-insensitive),
//! 3. does the same for the record source,
//! 4. keeps records with exactly the requested job id,
//! 5. stable-sorts by last activity or by name, ascending or descending,
//! 6. cuts out the requested page and reports totals.
//!
//! Every stage is a pure function of its input. The only fallible step is
//! building a [`Pagination`] from raw numbers, which happens before the
//! pipeline runs.
//!
//! # Quick Start
//!
//! ```rust
//! use roster_seeker::{query, Candidate, Dir, Pagination, QueryParams, SortBy};
//!
//! let records = vec![
//!     Candidate::new("A", "Engineer", "Acme", "2024-01-01"),
//!     Candidate::new("B", "Designer", "Acme", "2024-03-01"),
//!     Candidate::new("C", "Engineer", "Acme", "2024-02-01"),
//! ];
//!
//! let params = QueryParams::new()
//!     .sort(SortBy::LastActivity, Dir::Asc)
//!     .pagination(Pagination::new(1, 2).unwrap());
//!
//! let page = query(&records, &params);
//! let names: Vec<_> = page.candidates.iter().map(|c| c.name.as_str()).collect();
//! assert_eq!(names, ["A", "C"]);
//! assert_eq!(page.total, 3);
//! assert_eq!(page.total_pages, 2);
//! ```
//!
//! # Query Semantics
//!
//! Filters compile into a [`Query`] with two clause groups:
//!
//! ```text
//! match = (all AND clauses match)
//!       ∧ (at least one OR clause matches, OR no OR clauses exist)
//! ```
//!
//! Search text becomes three OR clauses; every other filter is an AND clause.
//!
//! | Filter | Field(s) | Operator |
//! |--------|----------|----------|
//! | `search` | name, position, company | `ContainsFold` (OR) |
//! | `application_type` | application_type | `InFold` |
//! | `source` | source | `InFold` |
//! | `job_id` | job_id | `Eq` |

mod candidate;
mod clause;
mod error;
mod op;
mod ordering;
mod page;
mod params;
mod query;
mod traits;
mod value;

// Re-export public API
pub use candidate::Candidate;
pub use clause::{Clause, ClauseValue};
pub use error::{Result, ValidationError, ValidationErrorKind};
pub use op::Op;
pub use ordering::{Dir, OrderBy, SortBy};
pub use page::{
    total_pages, PageResult, Pagination, DEFAULT_PAGE, DEFAULT_PER_PAGE, MAX_PER_PAGE,
};
pub use params::QueryParams;
pub use query::{query, Query};
pub use traits::Seekable;
pub use value::Value;
