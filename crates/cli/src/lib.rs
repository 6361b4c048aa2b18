// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! esqrs - query an Elasticsearch cluster over a time window.
//!
//! This crate provides the functionality behind the `esq` CLI: it resolves
//! the `--since`/`--until` expressions with [`esq_core`], merges flags over
//! the user's `~/.esq.toml`, and talks to the cluster's REST API.
//!
//! # Main Components
//!
//! - [`Cli`] / [`Command`] - Command-line surface
//! - [`Config`] - User configuration (`url`, `default-index`)
//! - [`backend`] - The [`SearchBackend`](backend::SearchBackend) seam and its HTTP implementation
//! - [`Error`] - Error types for all operations
//!
//! # Example
//!
//! ```rust,ignore
//! use clap::Parser;
//! use esqrs::Cli;
//!
//! let cli = Cli::parse_from(["esq", "count", "status:500", "--since", "1h"]);
//! esqrs::run(cli.command)?;
//! ```

pub mod backend;
mod cli;
pub mod colors;
mod commands;
pub mod config;
mod display;
pub mod env;
pub mod error;
pub mod help;
pub mod timings;

pub use cli::{Cli, Command, CommonArgs, OutputFormat, QueryArgs};
pub use commands::search::SearchOptions;
pub use config::Config;
pub use error::{Error, Result};

use clap::CommandFactory;
use clap_complete::generate;

/// Execute a CLI command. This is the main entry point for library users
/// and provides a testable way to run commands without process execution.
pub fn run(command: Command) -> Result<()> {
    match command {
        Command::Search {
            common,
            query,
            size,
            limit,
            ordered,
        } => commands::search::run(common, query, SearchOptions::new(size, limit, ordered)),
        Command::Count {
            common,
            query,
            field,
            limit,
            output,
        } => commands::count::run(common, query, field, limit, output),
        Command::Completion { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "esq", &mut std::io::stdout());
            Ok(())
        }
    }
}
