// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared argument structs for CLI commands.
//!
//! These structs are used with `#[command(flatten)]` so that `search` and
//! `count` accept the same connection, time and query flags.

use clap::Args;
use std::path::PathBuf;

/// Connection and time-window flags shared by query commands.
#[derive(Args, Clone, Debug)]
pub struct CommonArgs {
    /// Search engine URL (default: `url` from ~/.esq.toml)
    #[arg(long)]
    pub url: Option<String>,

    /// Index pattern (default: `default-index` from ~/.esq.toml)
    #[arg(long)]
    pub index: Option<String>,

    /// Start of the time window
    #[arg(long, default_value = "15m", allow_hyphen_values = true)]
    pub since: String,

    /// End of the time window
    #[arg(long, default_value = "0m", allow_hyphen_values = true)]
    pub until: String,

    /// Discover cluster nodes and spread requests across them
    #[arg(long)]
    pub sniff: bool,
}

/// Where the query string comes from.
#[derive(Args, Clone, Debug, Default)]
pub struct QueryArgs {
    /// Query string, words are joined with spaces
    #[arg(value_name = "QUERY")]
    pub words: Vec<String>,

    /// Read the query string from a file (takes precedence over QUERY)
    #[arg(long, value_name = "PATH")]
    pub query_file: Option<PathBuf>,
}
