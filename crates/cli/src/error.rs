// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

use thiserror::Error;

/// All possible errors that can occur in the esqrs library.
///
/// Every variant renders as a single line; `main` prints it after `error: `.
#[derive(Debug, Error)]
pub enum Error {
    #[error("missing url parameter (pass --url or set 'url' in ~/.esq.toml)")]
    MissingUrl,

    #[error("missing index parameter (pass --index or set 'default-index' in ~/.esq.toml)")]
    MissingIndex,

    #[error("invalid url '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("missing query (usage: esq {command} <query> or esq {command} --query-file <path>)")]
    MissingQuery { command: &'static str },

    #[error("read query file {}: {source}", .path.display())]
    QueryFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("size must be greater than zero")]
    InvalidSize,

    #[error("no buckets for field '{field}', maybe try adding a .raw?")]
    NoBuckets { field: String },

    #[error("search backend returned {status}: {reason}")]
    Backend { status: u16, reason: String },

    #[error("unexpected response from search backend: {0}")]
    UnexpectedResponse(String),

    #[error("{0}")]
    Time(#[from] esq_core::Error),

    #[error("config error: {0}")]
    Config(String),

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for esqrs operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
