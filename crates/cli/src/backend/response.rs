// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Decoding of search engine responses.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// One bucket of a terms aggregation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bucket {
    pub key: String,
    pub doc_count: u64,
}

/// One page of a scroll: the cursor for the next page and the `_source` of
/// each hit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScrollPage {
    pub scroll_id: Option<String>,
    pub hits: Vec<Value>,
}

#[derive(Deserialize)]
struct CountResponse {
    count: u64,
}

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(rename = "_scroll_id", default)]
    scroll_id: Option<String>,
    #[serde(default)]
    hits: Option<Hits>,
    #[serde(default)]
    aggregations: Option<Map<String, Value>>,
}

#[derive(Deserialize)]
struct Hits {
    #[serde(default)]
    hits: Vec<Hit>,
}

#[derive(Deserialize)]
struct Hit {
    #[serde(rename = "_source", default)]
    source: Value,
}

#[derive(Deserialize)]
struct TermsAggregation {
    buckets: Vec<RawBucket>,
}

#[derive(Deserialize)]
struct RawBucket {
    key: Value,
    #[serde(default)]
    key_as_string: Option<String>,
    doc_count: u64,
}

impl From<RawBucket> for Bucket {
    fn from(raw: RawBucket) -> Self {
        let key = match (raw.key_as_string, raw.key) {
            (Some(formatted), _) => formatted,
            (None, Value::String(s)) => s,
            (None, other) => other.to_string(),
        };
        Bucket {
            key,
            doc_count: raw.doc_count,
        }
    }
}

/// Extracts the document count from a `_count` response.
pub(crate) fn parse_count(body: Value) -> Result<u64> {
    let response: CountResponse = serde_json::from_value(body)
        .map_err(|e| Error::UnexpectedResponse(format!("count: {e}")))?;
    Ok(response.count)
}

/// Extracts the scroll cursor and hit sources from a search response.
pub(crate) fn parse_page(body: Value) -> Result<ScrollPage> {
    let response: SearchResponse = serde_json::from_value(body)
        .map_err(|e| Error::UnexpectedResponse(format!("search: {e}")))?;
    Ok(ScrollPage {
        scroll_id: response.scroll_id,
        hits: response
            .hits
            .map(|h| h.hits.into_iter().map(|hit| hit.source).collect())
            .unwrap_or_default(),
    })
}

/// Extracts the buckets of the terms aggregation named `field`.
pub(crate) fn parse_buckets(body: Value, field: &str) -> Result<Option<Vec<Bucket>>> {
    let response: SearchResponse = serde_json::from_value(body)
        .map_err(|e| Error::UnexpectedResponse(format!("search: {e}")))?;
    let Some(aggregation) = response.aggregations.and_then(|mut aggs| aggs.remove(field)) else {
        return Ok(None);
    };
    let terms: TermsAggregation = serde_json::from_value(aggregation)
        .map_err(|e| Error::UnexpectedResponse(format!("aggregation '{field}': {e}")))?;
    Ok(Some(terms.buckets.into_iter().map(Bucket::from).collect()))
}

/// Best human-readable reason from an error response body.
///
/// Elasticsearch nests it as `error.root_cause[0].reason` or `error.reason`;
/// anything else is returned as-is.
pub(crate) fn error_reason(body: &str) -> String {
    let Ok(value) = serde_json::from_str::<Value>(body) else {
        return body.trim().to_string();
    };
    let error = &value["error"];
    let reason = [
        &error["root_cause"][0]["reason"],
        &error["reason"],
        error,
    ]
    .into_iter()
    .find_map(|v| v.as_str())
    .map(str::to_string)
    .unwrap_or_else(|| body.trim().to_string());
    reason
}

#[cfg(test)]
#[path = "response_tests.rs"]
mod tests;
