// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod args;

use crate::colors;
use crate::help;
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

pub use args::{CommonArgs, QueryArgs};

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "esq")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(disable_version_flag = true)]
#[command(about = "Query an Elasticsearch cluster over a time window")]
#[command(
    long_about = "Query an Elasticsearch cluster over a time window.\n\n\
    Counts, groups or streams the documents matching a query string whose @timestamp \
    falls between --since and --until."
)]
#[command(help_template = help::template())]
#[command(before_help = help::commands())]
#[command(after_help = help::quickstart())]
#[command(styles = help::styles())]
// Allow the unit type field pattern which is required for clap's ArgAction::Version/Help
#[allow(clippy::manual_non_exhaustive)]
pub struct Cli {
    /// Print version
    #[arg(short = 'v', short_alias = 'V', long = "version", action = ArgAction::Version)]
    version: (),

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Stream matching documents as JSON lines
    #[command(after_help = colors::examples("\
Examples:
  esq search \"level:error\"                   Errors from the last 15 minutes
  esq search \"*\" --since 2h --until 1h       A one hour window, two hours back
  esq search \"*\" --limit 50                  Only the 50 newest documents
  esq search --query-file q.txt --since 7d   Query text from a file
  esq search \"*\" --ordered false             Unsorted, fastest for full exports"))]
    Search {
        #[command(flatten)]
        common: CommonArgs,

        #[command(flatten)]
        query: QueryArgs,

        /// Documents fetched per scroll page
        #[arg(long, default_value_t = 10000)]
        size: usize,

        /// Stop after this many documents (0 is unlimited)
        #[arg(long, default_value_t = 0)]
        limit: usize,

        /// Sort by @timestamp, newest first
        #[arg(long, default_value_t = true, action = ArgAction::Set)]
        ordered: bool,
    },

    /// Count matching documents, or group them by a field
    #[command(after_help = colors::examples("\
Examples:
  esq count \"status:500\"                     Count 500s in the last 15 minutes
  esq count \"*\" --field host.raw             Documents per host
  esq count \"*\" --field user --limit 10      Top ten users
  esq count \"*\" --since yesterday -o json    Machine-readable count"))]
    Count {
        #[command(flatten)]
        common: CommonArgs,

        #[command(flatten)]
        query: QueryArgs,

        /// Group by this field with a terms aggregation
        #[arg(long)]
        field: Option<String>,

        /// Maximum number of buckets
        #[arg(long, default_value_t = 100)]
        limit: usize,

        /// Output format
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Generate shell completions
    #[command(after_help = colors::examples("\
Examples:
  . <(esq completion bash)                   Load completions in the current shell
  esq completion zsh > _esq                  Write a zsh completion file"))]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum, default_value_t = Shell::Bash)]
        shell: Shell,
    },
}

#[cfg(test)]
#[path = "../cli_tests/mod.rs"]
mod tests;
