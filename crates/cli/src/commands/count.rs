// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::{self, Write};

use chrono::Utc;

use esq_core::query;

use crate::backend::SearchBackend;
use crate::cli::{CommonArgs, OutputFormat, QueryArgs};
use crate::config::Config;
use crate::display::{format_bucket_line, format_count, BucketsJson, CountJson};
use crate::error::{Error, Result};

use super::{connect, prepare, Invocation};

pub fn run(
    common: CommonArgs,
    query: QueryArgs,
    field: Option<String>,
    limit: usize,
    format: OutputFormat,
) -> Result<()> {
    let config = Config::load()?;
    let invocation = prepare(&common, &query, "count", &config, Utc::now())?;
    let mut backend = connect(&invocation)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_impl(
        &mut backend,
        &invocation,
        field.as_deref(),
        limit,
        format,
        &mut out,
    )
}

/// Internal implementation that accepts a backend for testing.
///
/// Without a field, prints the number of matching documents. With one,
/// prints up to `limit` buckets of a terms aggregation on it.
pub(crate) fn run_impl(
    backend: &mut impl SearchBackend,
    invocation: &Invocation,
    field: Option<&str>,
    limit: usize,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    let filtered = invocation.filtered_query();

    let Some(field) = field.filter(|f| !f.is_empty()) else {
        let body = query::count_body(&filtered);
        let hits = crate::time_phase!("count::count", {
            backend.count(&invocation.index, &body)?
        });
        match format {
            OutputFormat::Text => writeln!(out, "{}", format_count(hits))?,
            OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(&CountJson { hits })?)?,
        }
        return Ok(());
    };

    let body = query::terms_body(&filtered, field, limit);
    let buckets = crate::time_phase!("count::terms", {
        backend.terms(&invocation.index, &body, field)?
    })
    .ok_or_else(|| Error::NoBuckets {
        field: field.to_string(),
    })?;

    match format {
        OutputFormat::Text => {
            for bucket in &buckets {
                writeln!(out, "{}", format_bucket_line(bucket))?;
            }
        }
        OutputFormat::Json => {
            let json = BucketsJson {
                field,
                buckets: &buckets,
            };
            writeln!(out, "{}", serde_json::to_string(&json)?)?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "count_tests.rs"]
mod tests;
