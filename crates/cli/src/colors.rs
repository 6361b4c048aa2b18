// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal color utilities for help output.
//!
//! Respects environment variables:
//! - `NO_COLOR=1`: Disables colors
//! - `COLOR=1`: Forces colors even without TTY

use std::io::IsTerminal;

use crate::env;

/// ANSI 256-color codes used in help output.
pub mod codes {
    /// Section headers: steel blue
    pub const HEADER: u8 = 74;
    /// Commands and flags: light grey
    pub const LITERAL: u8 = 250;
    /// Placeholders, quoted values, defaults: medium grey
    pub const CONTEXT: u8 = 245;
}

const RESET: &str = "\x1b[0m";

/// Check if colors should be enabled based on TTY and environment variables.
pub fn should_colorize() -> bool {
    if env::no_color() {
        return false;
    }
    if env::force_color() {
        return true;
    }
    std::io::stdout().is_terminal()
}

fn paint(code: u8, text: &str) -> String {
    format!("\x1b[38;5;{code}m{text}{RESET}")
}

/// Apply header color (section titles) to text.
pub fn header(text: &str) -> String {
    paint(codes::HEADER, text)
}

/// Apply literal color (commands, options) to text.
pub fn literal(text: &str) -> String {
    paint(codes::LITERAL, text)
}

/// Apply context color (placeholders, quoted values) to text.
pub fn context(text: &str) -> String {
    paint(codes::CONTEXT, text)
}

/// Colorize an examples help block.
///
/// Expects format like:
/// ```text
/// Examples:
///   esq count "status:500" --since 1h    Count errors in the last hour
/// ```
///
/// Lines ending with `:` become headers. On example lines the command (text
/// before the first run of two spaces) is colored word by word and the
/// description is left alone. Returns the text untouched when colors are off.
pub fn examples(text: &str) -> String {
    if !should_colorize() {
        return text.to_string();
    }

    text.lines()
        .map(|line| {
            let trimmed = line.trim_start();
            let indent = &line[..line.len() - trimmed.len()];

            if trimmed.ends_with(':') && !trimmed.contains("  ") {
                return format!("{indent}{}", header(trimmed));
            }
            match trimmed.find("  ") {
                Some(end) => {
                    let (cmd, desc) = trimmed.split_at(end);
                    format!("{indent}{}{desc}", colorize_command(cmd))
                }
                None => line.to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Colorize one example command.
///
/// Quoted strings and `<placeholders>` are context, as is the value that
/// follows a `--flag`. Everything else is literal.
pub fn colorize_command(cmd: &str) -> String {
    let mut out = String::with_capacity(cmd.len() + 64);
    let mut after_flag = false;

    for (i, word) in split_words(cmd).into_iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let is_value = word.starts_with('"') || word.starts_with('\'') || word.starts_with('<');
        if is_value || after_flag {
            out.push_str(&context(word));
            after_flag = false;
        } else {
            out.push_str(&literal(word));
            after_flag = word.starts_with('-') && !word.contains('=');
        }
    }
    out
}

/// Split on single spaces, keeping quoted runs together.
fn split_words(cmd: &str) -> Vec<&str> {
    let mut words = Vec::new();
    let mut start = 0;
    let mut quote: Option<char> = None;

    for (i, c) in cmd.char_indices() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (None, '"' | '\'') => quote = Some(c),
            (None, ' ') => {
                words.push(&cmd[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    words.push(&cmd[start..]);
    words
}

#[cfg(test)]
#[path = "colors_tests.rs"]
mod tests;
