// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Search backend abstraction.
//!
//! Provides a trait-based seam over the search engine's HTTP API that enables:
//! - A real blocking HTTP client for production ([`HttpBackend`])
//! - In-memory backends for unit testing the commands

mod http;
mod response;
mod sniff;

pub use http::HttpBackend;
pub use response::{Bucket, ScrollPage};

use serde_json::Value;

use crate::error::Result;

/// How long the backend keeps a scroll cursor alive between pages.
pub const SCROLL_KEEP_ALIVE: &str = "1m";

/// Operations esq needs from a search engine.
///
/// Request bodies are built by [`esq_core::query`]; implementations only
/// move them over the wire and decode the answers.
pub trait SearchBackend {
    /// Number of documents in `index` matching a `_count` body.
    fn count(&mut self, index: &str, body: &Value) -> Result<u64>;

    /// Buckets of the terms aggregation named `field`.
    ///
    /// Returns `None` if the response carries no such aggregation.
    fn terms(&mut self, index: &str, body: &Value, field: &str) -> Result<Option<Vec<Bucket>>>;

    /// Opens a scroll cursor and returns the first page.
    fn scroll_start(&mut self, index: &str, body: &Value) -> Result<ScrollPage>;

    /// Fetches the page after the one that returned `scroll_id`.
    fn scroll_next(&mut self, scroll_id: &str) -> Result<ScrollPage>;

    /// Releases a scroll cursor on the server.
    fn clear_scroll(&mut self, scroll_id: &str) -> Result<()>;
}
