// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::*;
use chrono::TimeZone;
use esq_core::Boundary;
use std::io::Write as _;
use tempfile::NamedTempFile;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2023, 6, 15, 12, 0, 0).unwrap()
}

fn common(since: &str, until: &str) -> CommonArgs {
    CommonArgs {
        url: Some("http://localhost:9200".to_string()),
        index: Some("logs-*".to_string()),
        since: since.to_string(),
        until: until.to_string(),
        sniff: false,
    }
}

fn words(words: &[&str]) -> QueryArgs {
    QueryArgs {
        words: words.iter().map(|w| w.to_string()).collect(),
        query_file: None,
    }
}

#[test]
fn prepare_resolves_default_window() {
    let inv = prepare(
        &common("15m", "0m"),
        &words(&["level:error"]),
        "search",
        &Config::default(),
        now(),
    )
    .unwrap();

    assert_eq!(inv.url.as_str(), "http://localhost:9200/");
    assert_eq!(inv.index, "logs-*");
    assert_eq!(inv.query, "level:error");
    assert_eq!(
        inv.range.start(),
        Utc.with_ymd_and_hms(2023, 6, 15, 11, 45, 0).unwrap()
    );
    assert_eq!(inv.range.end(), now());
    assert!(!inv.sniff);
}

#[test]
fn prepare_uses_config_when_flags_absent() {
    let config = Config {
        url: Some("https://es.example.com".to_string()),
        default_index: Some("metrics".to_string()),
    };
    let mut args = common("1h", "0m");
    args.url = None;
    args.index = None;
    args.sniff = true;

    let inv = prepare(&args, &words(&["*"]), "count", &config, now()).unwrap();

    assert_eq!(inv.url.host_str(), Some("es.example.com"));
    assert_eq!(inv.index, "metrics");
    assert!(inv.sniff);
}

#[test]
fn prepare_rejects_reversed_window() {
    let err = prepare(
        &common("1h", "2h"),
        &words(&["*"]),
        "search",
        &Config::default(),
        now(),
    )
    .unwrap_err();
    assert!(matches!(err, Error::Time(esq_core::Error::ReversedRange { .. })));
    assert!(err.to_string().contains("must be before"));
}

#[test]
fn prepare_names_failing_boundary() {
    let err = prepare(
        &common("0m", "not-a-real-expression-xyz"),
        &words(&["*"]),
        "search",
        &Config::default(),
        now(),
    )
    .unwrap_err();
    assert!(matches!(
        err,
        Error::Time(esq_core::Error::Boundary {
            boundary: Boundary::Until,
            ..
        })
    ));
    assert!(err.to_string().starts_with("error parsing --until"));
}

#[test]
fn prepare_allows_future_since() {
    // Warned about, not rejected
    let inv = prepare(
        &common("2023-06-15T13:00:00Z", "2023-06-15T14:00:00Z"),
        &words(&["*"]),
        "search",
        &Config::default(),
        now(),
    )
    .unwrap();
    assert!(inv.range.starts_after(now()));
}

#[test]
fn prepare_checks_query_before_connection() {
    let mut args = common("15m", "0m");
    args.url = None;
    let err = prepare(&args, &words(&[]), "count", &Config::default(), now()).unwrap_err();
    assert!(matches!(err, Error::MissingQuery { command: "count" }));
}

#[test]
fn prepare_requires_url_and_index() {
    let mut args = common("15m", "0m");
    args.url = None;
    let err = prepare(&args, &words(&["*"]), "search", &Config::default(), now()).unwrap_err();
    assert!(matches!(err, Error::MissingUrl));

    let mut args = common("15m", "0m");
    args.index = None;
    let err = prepare(&args, &words(&["*"]), "search", &Config::default(), now()).unwrap_err();
    assert!(matches!(err, Error::MissingIndex));
}

#[test]
fn read_query_joins_words() {
    let query = read_query(&words(&["level:error", "AND", "host:web-1"]), "search").unwrap();
    assert_eq!(query, "level:error AND host:web-1");
}

#[test]
fn read_query_prefers_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "status:500 AND path:/api").unwrap();
    let args = QueryArgs {
        words: vec!["ignored".to_string()],
        query_file: Some(file.path().to_path_buf()),
    };
    assert_eq!(read_query(&args, "search").unwrap(), "status:500 AND path:/api");
}

#[test]
fn read_query_empty_file_is_missing_query() {
    let file = NamedTempFile::new().unwrap();
    let args = QueryArgs {
        words: vec![],
        query_file: Some(file.path().to_path_buf()),
    };
    let err = read_query(&args, "count").unwrap_err();
    assert!(matches!(err, Error::MissingQuery { command: "count" }));
}

#[test]
fn read_query_unreadable_file() {
    let dir = tempfile::tempdir().unwrap();
    let args = QueryArgs {
        words: vec![],
        query_file: Some(dir.path().join("missing.txt")),
    };
    let err = read_query(&args, "search").unwrap_err();
    assert!(matches!(err, Error::QueryFile { .. }));
    assert!(err.to_string().contains("missing.txt"));
}

#[test]
fn read_query_blank_words_is_missing_query() {
    let err = read_query(&words(&["", " "]), "search").unwrap_err();
    assert!(matches!(err, Error::MissingQuery { command: "search" }));
}

#[test]
fn filtered_query_wraps_query_string() {
    let inv = prepare(
        &common("15m", "0m"),
        &words(&["x"]),
        "search",
        &Config::default(),
        now(),
    )
    .unwrap();
    let query = inv.filtered_query();
    assert_eq!(query["bool"]["must"][0]["query_string"]["query"], "x");
    assert_eq!(
        query["bool"]["must"][1]["range"]["@timestamp"]["lte"],
        "2023-06-15T12:00:00.000Z"
    );
}
