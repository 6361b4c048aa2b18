// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Cluster node discovery from a `_nodes/http` response.

use serde::Deserialize;
use std::collections::BTreeMap;
use url::Url;

#[derive(Deserialize)]
struct NodesResponse {
    #[serde(default)]
    nodes: BTreeMap<String, Node>,
}

#[derive(Deserialize)]
struct Node {
    #[serde(default)]
    http: Option<NodeHttp>,
}

#[derive(Deserialize)]
struct NodeHttp {
    #[serde(default)]
    publish_address: Option<String>,
}

/// Base URLs of every node publishing an HTTP address.
///
/// Addresses come as `host:port` or `hostname/ip:port`; the part after the
/// slash is used. The scheme is taken from `seed`. Invalid entries are
/// skipped and the result is sorted and deduplicated.
pub(crate) fn node_urls(seed: &Url, body: serde_json::Value) -> Vec<Url> {
    let Ok(response) = serde_json::from_value::<NodesResponse>(body) else {
        return Vec::new();
    };

    let mut urls: Vec<Url> = response
        .nodes
        .into_values()
        .filter_map(|node| node.http?.publish_address)
        .filter_map(|address| {
            let address = address.rsplit('/').next().unwrap_or(&address).to_string();
            Url::parse(&format!("{}://{}/", seed.scheme(), address)).ok()
        })
        .collect();
    urls.sort();
    urls.dedup();
    urls
}

#[cfg(test)]
#[path = "sniff_tests.rs"]
mod tests;
