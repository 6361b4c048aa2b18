// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for esq-core operations.

use chrono::{DateTime, SecondsFormat, Utc};
use thiserror::Error;

use crate::range::Boundary;

/// All possible errors that can occur in esq-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("empty time expression")]
    EmptyExpression,

    #[error("invalid day count '{input}': {reason} (day counts look like 7d or -7d)")]
    MalformedDayCount { input: String, reason: String },

    #[error("unrecognized time expression '{input}': {reason}")]
    UnrecognizedExpression { input: String, reason: String },

    #[error("time expression '{input}' is out of range")]
    OutOfRange { input: String },

    #[error("invalid duration '{input}': {reason}")]
    InvalidDuration { input: String, reason: String },

    #[error("error parsing {boundary}: {source}")]
    Boundary {
        boundary: Boundary,
        #[source]
        source: Box<Error>,
    },

    #[error(
        "--since must be before --until, since={} until={}",
        .start.to_rfc3339_opts(SecondsFormat::Secs, true),
        .end.to_rfc3339_opts(SecondsFormat::Secs, true)
    )]
    ReversedRange {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },
}

/// A specialized Result type for esq-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
