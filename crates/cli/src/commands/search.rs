// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::{self, BufWriter, ErrorKind, Write};

use chrono::Utc;
use tracing::{debug, warn};

use esq_core::{query, SortOrder};

use crate::backend::{ScrollPage, SearchBackend};
use crate::cli::{CommonArgs, QueryArgs};
use crate::config::Config;
use crate::display::format_hit;
use crate::error::{Error, Result};

use super::{connect, prepare, Invocation};

/// Paging and ordering for `esq search`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    /// Documents requested per scroll page.
    pub size: usize,
    /// Stop after this many documents; 0 means no limit.
    pub limit: usize,
    pub order: SortOrder,
}

impl SearchOptions {
    pub fn new(size: usize, limit: usize, ordered: bool) -> Self {
        SearchOptions {
            size,
            limit,
            order: if ordered {
                SortOrder::NewestFirst
            } else {
                SortOrder::Unordered
            },
        }
    }

    /// Page size actually requested: `size`, shrunk to `limit` when the
    /// limit is smaller.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSize`] when `size` is zero.
    pub fn page_size(&self) -> Result<usize> {
        if self.size == 0 {
            return Err(Error::InvalidSize);
        }
        if self.limit > 0 && self.limit < self.size {
            return Ok(self.limit);
        }
        Ok(self.size)
    }
}

pub fn run(common: CommonArgs, query: QueryArgs, options: SearchOptions) -> Result<()> {
    options.page_size()?;
    let config = Config::load()?;
    let invocation = prepare(&common, &query, "search", &config, Utc::now())?;
    let mut backend = connect(&invocation)?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let written = run_impl(&mut backend, &invocation, options, &mut out)?;
    debug!("wrote {written} document(s)");
    Ok(())
}

/// Internal implementation that accepts a backend for testing.
///
/// Streams one `_source` per line to `out` and returns how many were
/// written. The scroll cursor is cleared whether or not streaming succeeds.
pub(crate) fn run_impl(
    backend: &mut impl SearchBackend,
    invocation: &Invocation,
    options: SearchOptions,
    out: &mut impl Write,
) -> Result<usize> {
    let size = options.page_size()?;
    let body = query::scroll_body(&invocation.filtered_query(), size, options.order);

    let mut page = crate::time_phase!("search::scroll_start", {
        backend.scroll_start(&invocation.index, &body)?
    });
    let mut scroll_id = page.scroll_id.take();

    let result = drain(backend, &mut page, &mut scroll_id, options.limit, out);

    if let Some(id) = scroll_id {
        if let Err(e) = backend.clear_scroll(&id) {
            warn!("failed to clear scroll: {e}");
        }
    }
    result
}

/// Writes hits page by page until the cluster runs dry or `limit` is hit.
///
/// `scroll_id` is kept current so the caller can clear the latest cursor.
fn drain(
    backend: &mut impl SearchBackend,
    page: &mut ScrollPage,
    scroll_id: &mut Option<String>,
    limit: usize,
    out: &mut impl Write,
) -> Result<usize> {
    let mut written = 0;

    while !page.hits.is_empty() {
        for hit in &page.hits {
            if !emit(out, &format_hit(hit)?)? {
                return Ok(written);
            }
            written += 1;
            if limit > 0 && written >= limit {
                return finish(out, written);
            }
        }

        let Some(id) = scroll_id.as_deref() else {
            break;
        };
        *page = crate::time_phase!("search::scroll_next", { backend.scroll_next(id)? });
        if let Some(next) = page.scroll_id.take() {
            *scroll_id = Some(next);
        }
    }

    finish(out, written)
}

/// Writes one line. Returns `false` once the reader has gone away.
fn emit(out: &mut impl Write, line: &str) -> Result<bool> {
    match writeln!(out, "{line}") {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == ErrorKind::BrokenPipe => Ok(false),
        Err(e) => Err(e.into()),
    }
}

fn finish(out: &mut impl Write, written: usize) -> Result<usize> {
    match out.flush() {
        Ok(()) => Ok(written),
        Err(e) if e.kind() == ErrorKind::BrokenPipe => Ok(written),
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
