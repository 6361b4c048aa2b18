// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rendering of command results for stdout.

use serde::Serialize;
use serde_json::Value;

use crate::backend::Bucket;
use crate::error::Result;

/// Width the bucket key is right-aligned to in text output.
const BUCKET_KEY_WIDTH: usize = 50;

/// JSON output of `esq count` without `--field`.
#[derive(Debug, Serialize)]
pub struct CountJson {
    /// Number of matching documents.
    pub hits: u64,
}

/// JSON output of `esq count --field`.
#[derive(Debug, Serialize)]
pub struct BucketsJson<'a> {
    /// Field the documents were grouped by.
    pub field: &'a str,
    /// Buckets in the order the cluster returned them.
    pub buckets: &'a [Bucket],
}

/// `hits: N`
pub fn format_count(hits: u64) -> String {
    format!("hits: {hits}")
}

/// Key right-aligned to 50 columns, a space, then the document count.
///
/// Keys longer than the column are printed in full.
pub fn format_bucket_line(bucket: &Bucket) -> String {
    format!(
        "{:>width$} {}",
        bucket.key,
        bucket.doc_count,
        width = BUCKET_KEY_WIDTH
    )
}

/// One document `_source` as compact single-line JSON.
pub fn format_hit(source: &Value) -> Result<String> {
    Ok(serde_json::to_string(source)?)
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
