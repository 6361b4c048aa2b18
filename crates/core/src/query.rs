// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Request bodies for the search backend.
//!
//! Every request filters on a `query_string` clause ANDed with an inclusive
//! range on [`TIMESTAMP_FIELD`]:
//!
//! ```json
//! {"bool": {"must": [
//!     {"query_string": {"query": "level:error"}},
//!     {"range": {"@timestamp": {"gte": "...", "lte": "...", "format": "strict_date_optional_time"}}}
//! ]}}
//! ```

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{json, Value};

use crate::range::TimeRange;

/// Field every document is expected to carry its event time in.
pub const TIMESTAMP_FIELD: &str = "@timestamp";

/// Order in which scrolled documents are returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Newest documents first.
    #[default]
    NewestFirst,
    /// Index order, the cheapest order for the backend to scroll.
    Unordered,
}

/// Builds the bool query shared by all requests.
pub fn filtered_query(query: &str, range: &TimeRange) -> Value {
    json!({
        "bool": {
            "must": [
                { "query_string": { "query": query } },
                {
                    "range": {
                        TIMESTAMP_FIELD: {
                            "gte": format_instant(range.start()),
                            "lte": format_instant(range.end()),
                            "format": "strict_date_optional_time",
                        }
                    }
                }
            ]
        }
    })
}

/// Body for a `_count` request.
pub fn count_body(query: &Value) -> Value {
    json!({ "query": query })
}

/// Body for a terms aggregation over `field`, returning at most `size`
/// buckets. The aggregation is named after the field.
pub fn terms_body(query: &Value, field: &str, size: usize) -> Value {
    json!({
        "size": 0,
        "query": query,
        "aggs": {
            field: { "terms": { "field": field, "size": size } }
        }
    })
}

/// Body for the first page of a scroll.
pub fn scroll_body(query: &Value, size: usize, order: SortOrder) -> Value {
    let sort = match order {
        SortOrder::NewestFirst => json!([{ TIMESTAMP_FIELD: { "order": "desc" } }]),
        SortOrder::Unordered => json!(["_doc"]),
    };
    json!({ "size": size, "query": query, "sort": sort })
}

fn format_instant(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
#[path = "query_tests.rs"]
mod tests;
