// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Help text generation with colorization support.

use crate::colors;
use clap::builder::styling::Styles;

/// Generate clap Styles matching the help palette.
pub fn styles() -> Styles {
    if !colors::should_colorize() {
        return Styles::plain();
    }

    use anstyle::{Ansi256Color, Color, Style};

    let fg = |code: u8| Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(code))));
    let header = fg(colors::codes::HEADER);
    let context = fg(colors::codes::CONTEXT);

    Styles::styled()
        .header(header)
        .usage(header)
        .literal(fg(colors::codes::LITERAL))
        .placeholder(context)
        .valid(context)
}

/// Main help template with colorized Options header.
pub fn template() -> String {
    format!(
        "{{about-with-newline}}
{{usage-heading}} {{usage}}

{{before-help}}{}
{{options}}{{after-help}}",
        colors::header("Options:")
    )
}

/// Commands list shown before options in main help.
pub fn commands() -> String {
    format!(
        "\
{header_query}
  {search}      Stream matching documents as JSON lines
  {count}       Count matching documents, or group them by a field

{header_setup}
  {completion}  Generate shell completions
",
        header_query = colors::header("Querying:"),
        header_setup = colors::header("Setup:"),
        search = colors::literal("search"),
        count = colors::literal("count"),
        completion = colors::literal("completion"),
    )
}

/// Quickstart help shown after options in main help.
pub fn quickstart() -> String {
    colors::examples(
        "\
Get started:
  echo 'url = \"http://localhost:9200\"' >> ~/.esq.toml    Point esq at a cluster
  esq count \"*\" --index logs-*                           Count the last 15 minutes
  esq search \"level:error\" --index logs-* --since 1h     Stream the last hour of errors

Time expressions (--since, --until):
  Durations: 15m, 2h30m, 7d (always in the past)
  Timestamps: 2023-06-01T00:00:00Z
  Phrases: yesterday, 3 days ago",
    )
}

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
