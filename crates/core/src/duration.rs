// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Parser for signed duration strings.
//!
//! A duration is an optional sign followed by one or more decimal numbers,
//! each with a unit suffix: `15m`, `-2h30m`, `1.5h`, `300ms`. The bare
//! string `0` is also accepted.
//!
//! Valid units are `ns`, `us` (or `µs`), `ms`, `s`, `m` and `h`. Days are
//! deliberately absent: the `d` suffix belongs to the day-count grammar in
//! [`crate::date`].

use chrono::Duration;

use crate::error::{Error, Result};

const NANOS_PER_MICRO: u64 = 1_000;
const NANOS_PER_MILLI: u64 = 1_000_000;
const NANOS_PER_SECOND: u64 = 1_000_000_000;

/// Fraction digits beyond this cannot change a nanosecond count.
const MAX_FRACTION_DIGITS: usize = 18;

/// Parse a duration string like "15m", "2h30m" or "-1.5h".
///
/// # Examples
///
/// ```
/// use chrono::Duration;
/// use esq_core::parse_duration;
///
/// assert_eq!(parse_duration("2h30m").unwrap(), Duration::minutes(150));
/// assert_eq!(parse_duration("-15m").unwrap(), Duration::minutes(-15));
/// ```
///
/// # Errors
///
/// Returns [`Error::InvalidDuration`] when the string is empty, a number has
/// no unit, a unit is unknown, or the total overflows.
pub fn parse_duration(input: &str) -> Result<Duration> {
    let invalid = |reason: String| Error::InvalidDuration {
        input: input.to_string(),
        reason,
    };

    let (negative, mut rest) = split_sign(input);

    // Zero needs no unit
    if rest == "0" {
        return Ok(Duration::zero());
    }
    if rest.is_empty() {
        return Err(invalid("empty duration".to_string()));
    }

    let mut total: u64 = 0;
    while !rest.is_empty() {
        let (whole, fraction, after) =
            split_number(rest).ok_or_else(|| invalid(format!("expected a number at '{rest}'")))?;

        let unit_end = after
            .find(|c: char| c == '.' || c.is_ascii_digit())
            .unwrap_or(after.len());
        let unit = &after[..unit_end];
        if unit.is_empty() {
            return Err(invalid(
                "missing unit. Valid units: ns, us, ms, s, m, h".to_string(),
            ));
        }
        let scale = unit_nanos(unit).ok_or_else(|| {
            invalid(format!(
                "unknown unit '{unit}'. Valid units: ns, us, ms, s, m, h"
            ))
        })?;

        let nanos = segment_nanos(whole, fraction, scale)
            .ok_or_else(|| invalid("duration overflows".to_string()))?;
        total = total
            .checked_add(nanos)
            .ok_or_else(|| invalid("duration overflows".to_string()))?;

        rest = &after[unit_end..];
    }

    let total = i64::try_from(total).map_err(|_| invalid("duration overflows".to_string()))?;
    Ok(Duration::nanoseconds(if negative { -total } else { total }))
}

/// Strip an optional leading sign.
fn split_sign(input: &str) -> (bool, &str) {
    if let Some(rest) = input.strip_prefix('-') {
        (true, rest)
    } else if let Some(rest) = input.strip_prefix('+') {
        (false, rest)
    } else {
        (false, input)
    }
}

/// Split a leading decimal number into whole digits, fraction digits and the
/// remainder. Returns `None` if no digit is present on either side of the dot.
fn split_number(s: &str) -> Option<(&str, &str, &str)> {
    let whole_end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    let whole = &s[..whole_end];
    let rest = &s[whole_end..];

    let (fraction, rest) = match rest.strip_prefix('.') {
        Some(after_dot) => {
            let end = after_dot
                .find(|c: char| !c.is_ascii_digit())
                .unwrap_or(after_dot.len());
            (&after_dot[..end], &after_dot[end..])
        }
        None => ("", rest),
    };

    if whole.is_empty() && fraction.is_empty() {
        return None;
    }
    Some((whole, fraction, rest))
}

fn unit_nanos(unit: &str) -> Option<u64> {
    match unit {
        "ns" => Some(1),
        "us" | "µs" | "μs" => Some(NANOS_PER_MICRO),
        "ms" => Some(NANOS_PER_MILLI),
        "s" => Some(NANOS_PER_SECOND),
        "m" => Some(60 * NANOS_PER_SECOND),
        "h" => Some(60 * 60 * NANOS_PER_SECOND),
        _ => None,
    }
}

/// Nanoseconds for one `<number><unit>` segment, `None` on overflow.
fn segment_nanos(whole: &str, fraction: &str, scale: u64) -> Option<u64> {
    let whole_nanos = if whole.is_empty() {
        0
    } else {
        whole.parse::<u64>().ok()?.checked_mul(scale)?
    };

    let fraction = &fraction[..fraction.len().min(MAX_FRACTION_DIGITS)];
    if fraction.is_empty() {
        return Some(whole_nanos);
    }
    let numerator: u128 = fraction.parse().ok()?;
    let denominator = 10u128.pow(fraction.len() as u32);
    let fraction_nanos = u64::try_from(numerator * u128::from(scale) / denominator).ok()?;

    whole_nanos.checked_add(fraction_nanos)
}

#[cfg(test)]
#[path = "duration_tests.rs"]
mod tests;
