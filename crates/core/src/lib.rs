// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! esq-core: time and query primitives for the esq search client
//!
//! This crate holds the I/O-free pieces of esq: resolving boundary
//! expressions like `15m`, `7d` or `yesterday` into instants, the time
//! window built from two boundaries, and the JSON request bodies sent to
//! the search backend.

pub mod date;
pub mod duration;
pub mod error;
pub mod query;
pub mod range;

pub use date::resolve;
pub use duration::parse_duration;
pub use error::{Error, Result};
pub use query::{SortOrder, TIMESTAMP_FIELD};
pub use range::{Boundary, TimeRange};
