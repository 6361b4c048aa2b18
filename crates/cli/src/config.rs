// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! User configuration.
//!
//! Configuration is stored in `~/.esq.toml` (or the file named by
//! `ESQ_CONFIG`) and supplies defaults for flags:
//! - `url`: Base URL of the search engine (e.g., `http://localhost:9200`)
//! - `default-index`: Index pattern used when `--index` is not given
//!
//! A missing file is the same as an empty one. Flags always win over the
//! file.

use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use url::Url;

use crate::env;
use crate::error::{Error, Result};

const CONFIG_FILE_NAME: &str = ".esq.toml";

/// User configuration stored in `~/.esq.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    /// Base URL of the search engine.
    #[serde(default)]
    pub url: Option<String>,
    /// Index pattern used when `--index` is not given.
    #[serde(default)]
    pub default_index: Option<String>,
}

/// Where to send requests, after merging flags over the config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connection {
    pub url: Url,
    pub index: String,
}

impl Config {
    /// Path of the config file: `ESQ_CONFIG` if set, else `~/.esq.toml`.
    pub fn path() -> Option<PathBuf> {
        env::config_path().or_else(|| dirs::home_dir().map(|home| home.join(CONFIG_FILE_NAME)))
    }

    /// Loads the user configuration, or an empty one if there is none.
    pub fn load() -> Result<Self> {
        match Self::path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Config::default()),
        }
    }

    /// Loads configuration from `path`. A missing file yields an empty config.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Config::default()),
            Err(e) => {
                return Err(Error::Config(format!(
                    "failed to read {}: {}",
                    path.display(),
                    e
                )))
            }
        };
        toml::from_str(&content).map_err(|e| {
            Error::Config(format!(
                "failed to parse {}: {}",
                path.display(),
                e.message()
            ))
        })
    }

    /// Merges command-line values over this config.
    ///
    /// Empty strings count as unset, on either side.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingUrl`] or [`Error::MissingIndex`] when neither
    /// source supplies a value, and [`Error::InvalidUrl`] for a URL that is
    /// not http(s).
    pub fn connection(&self, url: Option<&str>, index: Option<&str>) -> Result<Connection> {
        let url = pick(url, self.url.as_deref()).ok_or(Error::MissingUrl)?;
        let index = pick(index, self.default_index.as_deref()).ok_or(Error::MissingIndex)?;
        Ok(Connection {
            url: parse_url(url)?,
            index: index.to_string(),
        })
    }
}

fn pick<'a>(flag: Option<&'a str>, file: Option<&'a str>) -> Option<&'a str> {
    flag.filter(|v| !v.is_empty())
        .or_else(|| file.filter(|v| !v.is_empty()))
}

/// Parses a base URL, accepting only http and https.
pub fn parse_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw).map_err(|e| Error::InvalidUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(Error::InvalidUrl {
            url: raw.to_string(),
            reason: format!("unsupported scheme '{other}', expected http or https"),
        }),
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
