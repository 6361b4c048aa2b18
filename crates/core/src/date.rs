// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Resolution of time boundary expressions into absolute instants.
//!
//! An expression is tried against each grammar in order and the first one
//! that produces an instant wins:
//!
//! | Grammar          | Example                    | Result                   |
//! |------------------|----------------------------|--------------------------|
//! | day count        | `7d`, `-7d`                | `now - 7 days`           |
//! | duration         | `15m`, `-2h30m`            | `now - duration`         |
//! | RFC3339          | `2023-06-01T00:00:00Z`     | that instant             |
//! | natural language | `yesterday`, `3 days ago`  | phrase anchored at `now` |
//!
//! Relative quantities always point into the past: `15m` and `-15m` both
//! resolve to fifteen minutes before `now`. Only timestamps and phrases can
//! name a future instant.
//!
//! An expression ending in `d` belongs to the day-count grammar. If the rest
//! is not an integer the expression is rejected rather than handed to the
//! later grammars, so `abcd` is an error and not a phrase.

use chrono::{DateTime, Duration, Utc};
use chrono_english::{parse_date_string, Dialect};

use crate::duration::parse_duration;
use crate::error::{Error, Result};

/// Outcome of trying one grammar against an expression.
enum Attempt {
    /// The grammar produced an instant.
    Resolved(DateTime<Utc>),
    /// The grammar claimed the expression and rejected it; stop here.
    Rejected(Error),
    /// The grammar does not apply; try the next one.
    Skipped,
}

type Grammar = fn(&str, DateTime<Utc>) -> Attempt;

/// Grammars in priority order.
const GRAMMARS: [Grammar; 4] = [day_count, duration, timestamp, natural_language];

/// Resolve a boundary expression against the reference instant `now`.
///
/// `now` is taken as a parameter so that both ends of a query window are
/// computed against the same moment, and so tests can pin it.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use esq_core::resolve;
///
/// let now = Utc.with_ymd_and_hms(2023, 6, 15, 12, 0, 0).unwrap();
/// assert_eq!(
///     resolve("15m", now).unwrap(),
///     Utc.with_ymd_and_hms(2023, 6, 15, 11, 45, 0).unwrap()
/// );
/// assert_eq!(
///     resolve("7d", now).unwrap(),
///     Utc.with_ymd_and_hms(2023, 6, 8, 12, 0, 0).unwrap()
/// );
/// ```
///
/// # Errors
///
/// - [`Error::EmptyExpression`] for an empty or blank expression
/// - [`Error::MalformedDayCount`] when a `d`-suffixed expression is not an integer
/// - [`Error::OutOfRange`] when the offset moves outside the representable range
/// - [`Error::UnrecognizedExpression`] when no grammar accepts the expression
pub fn resolve(expression: &str, now: DateTime<Utc>) -> Result<DateTime<Utc>> {
    if expression.trim().is_empty() {
        return Err(Error::EmptyExpression);
    }

    for grammar in GRAMMARS {
        match grammar(expression, now) {
            Attempt::Resolved(instant) => return Ok(instant),
            Attempt::Rejected(err) => return Err(err),
            Attempt::Skipped => {}
        }
    }

    Err(Error::UnrecognizedExpression {
        input: expression.to_string(),
        reason: "no grammar matched".to_string(),
    })
}

/// `7d`, `-7d`, `+7d`, `0d`.
fn day_count(expression: &str, now: DateTime<Utc>) -> Attempt {
    let Some(count) = expression.strip_suffix('d') else {
        return Attempt::Skipped;
    };

    let days: i64 = match count.parse() {
        Ok(days) => days,
        Err(e) => {
            return Attempt::Rejected(Error::MalformedDayCount {
                input: expression.to_string(),
                reason: e.to_string(),
            })
        }
    };

    let days = if days > 0 { -days } else { days };
    match Duration::try_days(days) {
        Some(offset) => shift(expression, now, offset),
        None => Attempt::Rejected(out_of_range(expression)),
    }
}

/// `15m`, `-2h30m`, `0`.
fn duration(expression: &str, now: DateTime<Utc>) -> Attempt {
    match parse_duration(expression) {
        Ok(offset) => shift(expression, now, into_past(offset)),
        Err(_) => Attempt::Skipped,
    }
}

/// RFC3339 with optional fractional seconds. Taken literally.
fn timestamp(expression: &str, _now: DateTime<Utc>) -> Attempt {
    match DateTime::parse_from_rfc3339(expression) {
        Ok(instant) => Attempt::Resolved(instant.with_timezone(&Utc)),
        Err(_) => Attempt::Skipped,
    }
}

/// Phrases such as `yesterday` or `3 days ago`, anchored at `now` including
/// its time of day.
fn natural_language(expression: &str, now: DateTime<Utc>) -> Attempt {
    if expression.eq_ignore_ascii_case("now") {
        return Attempt::Resolved(now);
    }
    match parse_date_string(expression, now, Dialect::Us) {
        Ok(instant) => Attempt::Resolved(instant),
        Err(e) => Attempt::Rejected(Error::UnrecognizedExpression {
            input: expression.to_string(),
            reason: e.to_string(),
        }),
    }
}

/// Apply the "relative means ago" convention: positive offsets are negated.
fn into_past(offset: Duration) -> Duration {
    if offset > Duration::zero() {
        -offset
    } else {
        offset
    }
}

fn shift(expression: &str, now: DateTime<Utc>, offset: Duration) -> Attempt {
    match now.checked_add_signed(offset) {
        Some(instant) => Attempt::Resolved(instant),
        None => Attempt::Rejected(out_of_range(expression)),
    }
}

fn out_of_range(expression: &str) -> Error {
    Error::OutOfRange {
        input: expression.to_string(),
    }
}

#[cfg(test)]
#[path = "date_tests.rs"]
mod tests;
