// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Blocking HTTP implementation of [`SearchBackend`].

use reqwest::blocking::{Client, RequestBuilder};
use reqwest::Method;
use serde_json::{json, Value};
use tracing::{debug, info, warn};
use url::Url;

use super::response::{error_reason, parse_buckets, parse_count, parse_page};
use super::sniff::node_urls;
use super::{Bucket, ScrollPage, SearchBackend, SCROLL_KEEP_ALIVE};
use crate::error::{Error, Result};

/// Talks to a search cluster over its REST API.
///
/// Requests go to the configured URL, or rotate across the nodes found by
/// [`HttpBackend::sniff`].
pub struct HttpBackend {
    client: Client,
    seed: Url,
    nodes: Vec<Url>,
    next: usize,
}

impl HttpBackend {
    /// Creates a backend for the cluster at `url`. No request is made.
    pub fn new(url: Url) -> Result<Self> {
        Ok(HttpBackend {
            client: Client::builder().build()?,
            seed: with_trailing_slash(url),
            nodes: Vec::new(),
            next: 0,
        })
    }

    /// Creates a backend and, if `sniff` is set, discovers the cluster nodes.
    pub fn connect(url: Url, sniff: bool) -> Result<Self> {
        let mut backend = Self::new(url)?;
        if sniff {
            backend.sniff()?;
        }
        Ok(backend)
    }

    /// Asks the cluster for its HTTP nodes and spreads later requests
    /// across them. Returns the number of nodes found.
    ///
    /// When the cluster reports none, requests keep going to the
    /// configured URL.
    pub fn sniff(&mut self) -> Result<usize> {
        let url = join(&self.seed, &["_nodes", "http"])?;
        let body = self.execute(self.client.get(url))?;
        let nodes = node_urls(&self.seed, body);

        if nodes.is_empty() {
            warn!("sniff found no http nodes, using {}", self.seed);
        } else {
            let names: Vec<&str> = nodes.iter().map(Url::as_str).collect();
            info!("sniffed {} node(s): {}", nodes.len(), names.join(", "));
        }
        self.nodes = nodes;
        self.next = 0;
        Ok(self.nodes.len())
    }

    /// Node that will serve the next request.
    fn node(&mut self) -> &Url {
        if self.nodes.is_empty() {
            return &self.seed;
        }
        let index = self.next % self.nodes.len();
        self.next = self.next.wrapping_add(1);
        self.nodes.get(index).unwrap_or(&self.seed)
    }

    fn endpoint(&mut self, segments: &[&str]) -> Result<Url> {
        let base = self.node().clone();
        join(&base, segments)
    }

    fn post(&self, url: Url, body: &Value) -> RequestBuilder {
        self.client.post(url).json(body)
    }

    fn execute(&self, request: RequestBuilder) -> Result<Value> {
        let request = request.build()?;
        debug!("{} {}", request.method(), request.url());

        let response = self.client.execute(request)?;
        let status = response.status();
        let text = response.text()?;
        if !status.is_success() {
            return Err(Error::Backend {
                status: status.as_u16(),
                reason: error_reason(&text),
            });
        }
        Ok(serde_json::from_str(&text)?)
    }
}

impl SearchBackend for HttpBackend {
    fn count(&mut self, index: &str, body: &Value) -> Result<u64> {
        let url = self.endpoint(&[index, "_count"])?;
        let request = self.post(url, body);
        parse_count(self.execute(request)?)
    }

    fn terms(&mut self, index: &str, body: &Value, field: &str) -> Result<Option<Vec<Bucket>>> {
        let url = self.endpoint(&[index, "_search"])?;
        let request = self.post(url, body);
        parse_buckets(self.execute(request)?, field)
    }

    fn scroll_start(&mut self, index: &str, body: &Value) -> Result<ScrollPage> {
        let mut url = self.endpoint(&[index, "_search"])?;
        url.query_pairs_mut().append_pair("scroll", SCROLL_KEEP_ALIVE);
        let request = self.post(url, body);
        parse_page(self.execute(request)?)
    }

    fn scroll_next(&mut self, scroll_id: &str) -> Result<ScrollPage> {
        let url = self.endpoint(&["_search", "scroll"])?;
        let body = json!({"scroll": SCROLL_KEEP_ALIVE, "scroll_id": scroll_id});
        let request = self.post(url, &body);
        parse_page(self.execute(request)?)
    }

    fn clear_scroll(&mut self, scroll_id: &str) -> Result<()> {
        let url = self.endpoint(&["_search", "scroll"])?;
        let request = self
            .client
            .request(Method::DELETE, url)
            .json(&json!({"scroll_id": [scroll_id]}));
        self.execute(request)?;
        Ok(())
    }
}

/// Ensures `url` has a trailing slash so that segments append to its path.
fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}

/// Appends path segments to `base`, percent-encoding each one.
///
/// Index names may contain `:` or `*`, so they are never parsed as a
/// relative URL.
fn join(base: &Url, segments: &[&str]) -> Result<Url> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|()| Error::InvalidUrl {
            url: base.to_string(),
            reason: "url cannot be a base".to_string(),
        })?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

#[cfg(test)]
#[path = "http_tests.rs"]
mod tests;
