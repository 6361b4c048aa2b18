// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The time window a query is scoped to.

use std::fmt;

use chrono::{DateTime, Utc};

use crate::date::resolve;
use crate::error::{Error, Result};

/// One end of a query window, named after the flag that supplies it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    Since,
    Until,
}

impl Boundary {
    /// The command-line flag that supplies this boundary.
    pub fn flag(self) -> &'static str {
        match self {
            Boundary::Since => "--since",
            Boundary::Until => "--until",
        }
    }
}

impl fmt::Display for Boundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.flag())
    }
}

/// An inclusive `[start, end]` window with `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl TimeRange {
    /// Creates a window from two instants.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ReversedRange`] if `start` is after `end`. Equal
    /// instants are allowed.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self> {
        if start > end {
            return Err(Error::ReversedRange { start, end });
        }
        Ok(TimeRange { start, end })
    }

    /// Resolves both boundary expressions against the same `now`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Boundary`] naming the boundary that failed to
    /// resolve, or [`Error::ReversedRange`] if `since` lands after `until`.
    pub fn resolve(since: &str, until: &str, now: DateTime<Utc>) -> Result<Self> {
        let start = resolve_boundary(Boundary::Since, since, now)?;
        let end = resolve_boundary(Boundary::Until, until, now)?;
        Self::new(start, end)
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Returns true if the window opens after `now`, which usually means a
    /// timestamp or phrase was mistyped.
    pub fn starts_after(&self, now: DateTime<Utc>) -> bool {
        self.start > now
    }
}

fn resolve_boundary(boundary: Boundary, expression: &str, now: DateTime<Utc>) -> Result<DateTime<Utc>> {
    resolve(expression, now).map_err(|e| Error::Boundary {
        boundary,
        source: Box::new(e),
    })
}

#[cfg(test)]
#[path = "range_tests.rs"]
mod tests;
