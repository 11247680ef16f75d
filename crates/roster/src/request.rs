//! Turning a raw URL query string into [`QueryParams`].
//!
//! `application_type` and `source` may repeat (`?source=a&source=b`); for
//! every other key the last occurrence wins. Unknown keys are ignored.

use roster_seeker::{Pagination, QueryParams, ValidationError};

/// Parses and validates the query string of a candidates request.
pub fn params_from_query(raw: Option<&str>) -> Result<QueryParams, ValidationError> {
    let mut page = None;
    let mut per_page = None;
    let mut search = None;
    let mut sort_by = None;
    let mut sort_order = None;
    let mut application_type = Vec::new();
    let mut source = Vec::new();
    let mut job_id = None;

    for (key, value) in form_urlencoded::parse(raw.unwrap_or_default().as_bytes()) {
        match key.as_ref() {
            "page" => page = Some(parse_int("page", &value)?),
            "per_page" => per_page = Some(parse_int("per_page", &value)?),
            "search" => search = Some(value.into_owned()),
            "sort_by" => sort_by = Some(value.into_owned()),
            "sort_order" => sort_order = Some(value.into_owned()),
            "application_type" => application_type.push(value.into_owned()),
            "source" => source.push(value.into_owned()),
            "job_id" => job_id = Some(value.into_owned()),
            _ => {}
        }
    }

    let mut params = QueryParams::new()
        .pagination(Pagination::from_optional(page, per_page)?)
        .sort_raw(sort_by.as_deref(), sort_order.as_deref())
        .application_types(application_type)
        .sources(source);
    params.search = search;
    params.job_id = job_id;

    Ok(params)
}

fn parse_int(field: &'static str, raw: &str) -> Result<i64, ValidationError> {
    raw.trim()
        .parse()
        .map_err(|_| ValidationError::not_an_integer(field, raw))
}
