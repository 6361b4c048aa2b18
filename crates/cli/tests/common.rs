// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]
#![allow(clippy::unwrap_used)]

use std::io::{BufRead, BufReader, Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

pub use predicates::prelude::*;
pub use serde_json::{json, Value};
pub use tempfile::TempDir;

/// `esq` isolated from the user's config file and environment.
///
/// `ESQ_CONFIG` points at a path inside `home` that does not exist until a
/// test writes it.
pub fn esq(home: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("esq");
    cmd.env("ESQ_CONFIG", config_path(home))
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env_remove("ESQ_TIMINGS");
    cmd
}

pub fn config_path(home: &TempDir) -> std::path::PathBuf {
    home.path().join("esq.toml")
}

pub fn write_config(home: &TempDir, content: &str) {
    std::fs::write(config_path(home), content).unwrap();
}

/// One HTTP request received by [`FakeCluster`].
#[derive(Debug, Clone)]
pub struct Request {
    pub method: String,
    /// Path including the query string, e.g. `/logs/_search?scroll=1m`.
    pub path: String,
    /// Value of the `Host` header.
    pub host: String,
    pub body: String,
}

impl Request {
    pub fn json(&self) -> Value {
        serde_json::from_str(&self.body).unwrap()
    }
}

type Handler = dyn Fn(&Request) -> (u16, Value) + Send + Sync;

/// Minimal HTTP/1.1 server standing in for a search cluster.
///
/// Each connection serves one request and is closed. Every request is
/// recorded so tests can assert on what the client sent.
pub struct FakeCluster {
    pub url: String,
    requests: Arc<Mutex<Vec<Request>>>,
}

impl FakeCluster {
    pub fn start(handler: impl Fn(&Request) -> (u16, Value) + Send + Sync + 'static) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}", listener.local_addr().unwrap());
        let requests = Arc::new(Mutex::new(Vec::new()));

        let handler: Arc<Handler> = Arc::new(handler);
        let recorded = Arc::clone(&requests);
        thread::spawn(move || {
            for stream in listener.incoming() {
                let Ok(stream) = stream else { break };
                serve(stream, handler.as_ref(), &recorded);
            }
        });

        FakeCluster { url, requests }
    }

    pub fn requests(&self) -> Vec<Request> {
        self.requests.lock().unwrap().clone()
    }

    /// Recorded requests as `METHOD /path` strings.
    pub fn routes(&self) -> Vec<String> {
        self.requests()
            .iter()
            .map(|r| format!("{} {}", r.method, r.path))
            .collect()
    }
}

fn serve(stream: TcpStream, handler: &Handler, recorded: &Mutex<Vec<Request>>) {
    let Some(request) = read_request(&stream) else {
        return;
    };
    recorded.lock().unwrap().push(request.clone());

    let (status, body) = handler(&request);
    let body = body.to_string();
    let response = format!(
        "HTTP/1.1 {status} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        if status < 400 { "OK" } else { "Error" },
        body.len()
    );
    let mut stream = stream;
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.flush();
}

fn read_request(stream: &TcpStream) -> Option<Request> {
    let mut reader = BufReader::new(stream);

    let mut line = String::new();
    reader.read_line(&mut line).ok()?;
    let mut parts = line.split_whitespace();
    let method = parts.next()?.to_string();
    let path = parts.next()?.to_string();

    let mut host = String::new();
    let mut length = 0;
    loop {
        let mut header = String::new();
        reader.read_line(&mut header).ok()?;
        let header = header.trim_end();
        if header.is_empty() {
            break;
        }
        let (name, value) = header.split_once(':')?;
        match name.to_ascii_lowercase().as_str() {
            "content-length" => length = value.trim().parse().ok()?,
            "host" => host = value.trim().to_string(),
            _ => {}
        }
    }

    let mut body = vec![0; length];
    reader.read_exact(&mut body).ok()?;
    Some(Request {
        method,
        path,
        host,
        body: String::from_utf8(body).ok()?,
    })
}

/// A search response page holding `{"n": i}` documents for `range`.
pub fn page(scroll_id: &str, range: std::ops::Range<u64>) -> Value {
    let hits: Vec<Value> = range
        .map(|i| json!({"_id": i.to_string(), "_source": {"n": i}}))
        .collect();
    json!({"_scroll_id": scroll_id, "hits": {"hits": hits}})
}
