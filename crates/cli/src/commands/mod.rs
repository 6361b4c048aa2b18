// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod count;
pub mod search;
#[cfg(test)]
#[path = "mod_tests.rs"]
pub mod testing;

use std::fs;

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::Value;
use tracing::{info, warn};
use url::Url;

use esq_core::{query, TimeRange};

use crate::backend::HttpBackend;
use crate::cli::{CommonArgs, QueryArgs};
use crate::config::Config;
use crate::error::{Error, Result};

/// Everything a query command needs once flags, config and time
/// expressions have been resolved.
#[derive(Debug, Clone)]
pub struct Invocation {
    pub url: Url,
    pub index: String,
    pub query: String,
    pub range: TimeRange,
    pub sniff: bool,
}

impl Invocation {
    /// The query string ANDed with the time window.
    pub fn filtered_query(&self) -> Value {
        query::filtered_query(&self.query, &self.range)
    }
}

/// Resolves the shared flags of a query command into an [`Invocation`].
///
/// Runs before any request is made: the query, connection and time window
/// must all be valid. `now` anchors both boundaries.
pub fn prepare(
    common: &CommonArgs,
    query: &QueryArgs,
    command: &'static str,
    config: &Config,
    now: DateTime<Utc>,
) -> Result<Invocation> {
    let query = read_query(query, command)?;
    let connection = config.connection(common.url.as_deref(), common.index.as_deref())?;
    let range = TimeRange::resolve(&common.since, &common.until, now)?;

    if range.starts_after(now) {
        warn!(
            "--since is after now: since={} now={}",
            rfc3339(range.start()),
            rfc3339(now)
        );
    }
    info!(
        "connect: {} start={} end={}",
        connection.url,
        rfc3339(range.start()),
        rfc3339(range.end())
    );

    Ok(Invocation {
        url: connection.url,
        index: connection.index,
        query,
        range,
        sniff: common.sniff,
    })
}

/// Query text from `--query-file` if given, else the positional words
/// joined by single spaces.
pub fn read_query(args: &QueryArgs, command: &'static str) -> Result<String> {
    let text = match &args.query_file {
        Some(path) => fs::read_to_string(path).map_err(|source| Error::QueryFile {
            path: path.clone(),
            source,
        })?,
        None => args.words.join(" "),
    };

    let text = text.trim();
    if text.is_empty() {
        return Err(Error::MissingQuery { command });
    }
    Ok(text.to_string())
}

/// Opens the HTTP backend described by `invocation`.
pub fn connect(invocation: &Invocation) -> Result<HttpBackend> {
    crate::time_phase!("backend::connect", {
        HttpBackend::connect(invocation.url.clone(), invocation.sniff)
    })
}

fn rfc3339(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Secs, true)
}

#[cfg(test)]
#[path = "invocation_tests.rs"]
mod tests;
