// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::panic)]

use super::*;
use yare::parameterized;

fn count(args: &[&str]) -> (CommonArgs, QueryArgs, Option<String>, usize, OutputFormat) {
    let mut argv = vec!["esq", "count"];
    argv.extend_from_slice(args);
    match parse(&argv).unwrap().command {
        Command::Count {
            common,
            query,
            field,
            limit,
            output,
        } => (common, query, field, limit, output),
        _ => panic!("Expected Count command"),
    }
}

#[test]
fn defaults() {
    let (common, query, field, limit, output) = count(&["status:500"]);
    assert_eq!(common.since, "15m");
    assert_eq!(common.until, "0m");
    assert_eq!(query.words, vec!["status:500"]);
    assert_eq!(field, None);
    assert_eq!(limit, 100);
    assert_eq!(output, OutputFormat::Text);
}

#[test]
fn field_and_limit() {
    let (_, _, field, limit, _) = count(&["*", "--field", "host.raw", "--limit", "5"]);
    assert_eq!(field.as_deref(), Some("host.raw"));
    assert_eq!(limit, 5);
}

#[parameterized(
    short_text = { &["*", "-o", "text"], OutputFormat::Text },
    short_json = { &["*", "-o", "json"], OutputFormat::Json },
    long_json = { &["*", "--output", "json"], OutputFormat::Json },
)]
fn output_format(args: &[&str], expected: OutputFormat) {
    let (.., output) = count(args);
    assert_eq!(output, expected);
}

#[test]
fn unknown_output_format_is_rejected() {
    assert!(parse(&["esq", "count", "*", "-o", "yaml"]).is_err());
}

#[test]
fn count_has_no_search_flags() {
    assert!(parse(&["esq", "count", "*", "--size", "10"]).is_err());
    assert!(parse(&["esq", "count", "*", "--ordered", "true"]).is_err());
}
