// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::panic)]

use super::*;
use chrono::{Duration, TimeZone};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2023, 6, 15, 12, 0, 0).unwrap()
}

#[test]
fn new_accepts_ordered_instants() {
    let range = TimeRange::new(now() - Duration::hours(1), now()).unwrap();
    assert_eq!(range.start(), now() - Duration::hours(1));
    assert_eq!(range.end(), now());
}

#[test]
fn new_accepts_equal_instants() {
    assert!(TimeRange::new(now(), now()).is_ok());
}

#[test]
fn new_rejects_reversed_instants() {
    let err = TimeRange::new(now(), now() - Duration::seconds(1)).unwrap_err();
    assert!(matches!(err, Error::ReversedRange { .. }));
}

#[test]
fn resolve_defaults_window() {
    let range = TimeRange::resolve("15m", "0m", now()).unwrap();
    assert_eq!(range.start(), now() - Duration::minutes(15));
    assert_eq!(range.end(), now());
}

#[test]
fn resolve_week_to_quarter_hour() {
    let range = TimeRange::resolve("7d", "15m", now()).unwrap();
    assert!(range.start() < range.end());
}

#[test]
fn resolve_reversed_boundaries() {
    let err = TimeRange::resolve("15m", "7d", now()).unwrap_err();
    match err {
        Error::ReversedRange { start, end } => {
            assert_eq!(start, now() - Duration::minutes(15));
            assert_eq!(end, now() - Duration::days(7));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn resolve_names_failing_since() {
    let err = TimeRange::resolve("abcd", "0m", now()).unwrap_err();
    match err {
        Error::Boundary { boundary, source } => {
            assert_eq!(boundary, Boundary::Since);
            assert!(matches!(*source, Error::MalformedDayCount { .. }));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn resolve_names_failing_until() {
    let err = TimeRange::resolve("15m", "", now()).unwrap_err();
    assert!(err.to_string().starts_with("error parsing --until"));
}

#[test]
fn starts_after_now() {
    let range = TimeRange::resolve("2030-01-01T00:00:00Z", "2031-01-01T00:00:00Z", now()).unwrap();
    assert!(range.starts_after(now()));

    let range = TimeRange::resolve("15m", "0m", now()).unwrap();
    assert!(!range.starts_after(now()));
}

#[test]
fn boundary_flags() {
    assert_eq!(Boundary::Since.to_string(), "--since");
    assert_eq!(Boundary::Until.flag(), "--until");
}
